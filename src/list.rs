//! Domain list parsing.
//!
//! List format: one domain per line, `#` starts a comment, blank lines are
//! skipped. A `file: /path/to/list.txt` line pulls in another list.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::syntax::check_domain;

/// Maximum nesting depth for `file:` include directives.
const MAX_INCLUDE_DEPTH: usize = 10;

/// Parse a domain list from text.
///
/// Entries are lowercased and de-duplicated, keeping first-seen order. Each
/// entry must be a well-formed domain part.
pub fn parse_domain_list(text: &str) -> Result<Vec<String>> {
    let mut builder = ListBuilder::default();
    builder.parse(text, 0)?;
    Ok(builder.finish())
}

/// Parse a domain list from a file.
pub fn parse_domain_list_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut builder = ListBuilder::default();
    builder.parse_file(path.as_ref(), 0)?;
    Ok(builder.finish())
}

#[derive(Default)]
struct ListBuilder {
    domains: Vec<String>,
    seen: HashSet<String>,
}

impl ListBuilder {
    fn parse(&mut self, text: &str, depth: usize) -> Result<()> {
        if depth > MAX_INCLUDE_DEPTH {
            return Err(Error::IncludeDepth(MAX_INCLUDE_DEPTH));
        }

        for (line_num, line) in text.lines().enumerate() {
            let line_num = line_num + 1;

            let line = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            };
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if let Some(path) = line.strip_prefix("file:") {
                self.parse_file(Path::new(path.trim()), depth + 1)?;
                continue;
            }

            let domain = line.to_ascii_lowercase();
            if check_domain(&domain).is_err() {
                return Err(Error::InvalidDomain {
                    line: line_num,
                    domain: line.to_string(),
                });
            }

            if self.seen.insert(domain.clone()) {
                self.domains.push(domain);
            } else {
                warn!("skipping duplicate domain {:?} at line {}", domain, line_num);
            }
        }

        Ok(())
    }

    fn parse_file(&mut self, path: &Path, depth: usize) -> Result<()> {
        if depth > MAX_INCLUDE_DEPTH {
            return Err(Error::IncludeDepth(MAX_INCLUDE_DEPTH));
        }
        debug!("loading domain list from {}", path.display());
        let text = fs::read_to_string(path)?;
        self.parse(&text, depth)
    }

    fn finish(self) -> Vec<String> {
        debug!("loaded {} domains", self.domains.len());
        self.domains
    }
}
