/// Label-aware domain matcher.
///
/// Entries are kept in a HashSet; a lookup walks up the domain hierarchy of
/// the input with one O(1) probe per level.
use std::collections::HashSet;

use super::SuffixMatcher;

/// Boundary matcher - an entry matches the domain itself and its subdomains.
///
/// `"mailinator.com"` matches `"mailinator.com"` and `"x.mailinator.com"`
/// but not `"evilmailinator.com"`.
#[derive(Debug, Clone, Default)]
pub struct BoundaryMatcher {
    domains: HashSet<String>,
}

impl BoundaryMatcher {
    /// Create a matcher from domain entries.
    ///
    /// Entries are ASCII-lowercased like the input; a leading dot is ignored so `".example.com"`
    /// and `"example.com"` are the same entry.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| {
                let d = d.as_ref();
                d.strip_prefix('.').unwrap_or(d).to_ascii_lowercase()
            })
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }

    /// Check if the given domain (no `@`) matches any entry.
    /// Assumes `domain` is already lowercased.
    pub fn matches_domain(&self, domain: &str) -> bool {
        if domain.is_empty() {
            return false;
        }

        if self.domains.contains(domain) {
            return true;
        }

        let mut pos = 0;
        while let Some(dot_pos) = domain[pos..].find('.') {
            let parent = &domain[pos + dot_pos + 1..];
            if self.domains.contains(parent) {
                return true;
            }
            pos += dot_pos + 1;
        }

        false
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Check if the matcher has no entries
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl SuffixMatcher for BoundaryMatcher {
    /// Matches on the text after the last `@`, or the whole input if there
    /// is none.
    fn matches(&self, input: &str) -> bool {
        let domain = input.rsplit_once('@').map_or(input, |(_, d)| d);
        if domain.bytes().any(|b| b.is_ascii_uppercase()) {
            self.matches_domain(&domain.to_ascii_lowercase())
        } else {
            self.matches_domain(domain)
        }
    }
}
