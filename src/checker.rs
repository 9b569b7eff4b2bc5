//! Configurable checker.
//!
//! Bundles the structural validator with a disposable-domain matcher built
//! from the embedded list, extra domains, or a list file.

use std::path::Path;

use log::debug;

use crate::disposable::default_domains;
use crate::error::{Result, ValidationError};
use crate::list::parse_domain_list_from_file;
use crate::matcher::{MatchMode, Matcher, SuffixMatcher};
use crate::syntax;
use crate::types::{EmailAddress, Verdict};

/// Checker builder options.
#[derive(Debug, Clone)]
pub struct CheckerOptions {
    /// How list entries are compared against an address
    pub mode: MatchMode,
    /// Include the embedded disposable-domain list
    pub include_defaults: bool,
    /// Additional domains to treat as disposable
    pub extra_domains: Vec<String>,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            mode: MatchMode::Plain,
            include_defaults: true,
            extra_domains: Vec::new(),
        }
    }
}

impl CheckerOptions {
    /// Create new checker options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set match mode.
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Include or leave out the embedded list.
    pub fn with_defaults(mut self, include: bool) -> Self {
        self.include_defaults = include;
        self
    }

    /// Add extra disposable domains.
    ///
    /// In [`MatchMode::Plain`] entries are matched byte for byte, case
    /// included; [`MatchMode::Boundary`] ASCII-lowercases both sides.
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_domains.extend(domains.into_iter().map(Into::into));
        self
    }
}

/// Immutable email checker, safe to share across threads.
#[derive(Debug, Clone)]
pub struct Checker {
    matcher: Matcher,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(CheckerOptions::default())
    }
}

impl Checker {
    /// Create a checker from options.
    pub fn new(options: CheckerOptions) -> Self {
        Self::build(options, Vec::new())
    }

    /// Create a checker whose list also includes the domains in `path`.
    pub fn from_file(path: impl AsRef<Path>, options: CheckerOptions) -> Result<Self> {
        let domains = parse_domain_list_from_file(path)?;
        Ok(Self::build(options, domains))
    }

    fn build(options: CheckerOptions, loaded: Vec<String>) -> Self {
        let defaults: &[&str] = if options.include_defaults {
            default_domains()
        } else {
            &[]
        };

        let domains = defaults
            .iter()
            .map(|d| d.to_string())
            .chain(options.extra_domains)
            .chain(loaded);
        let matcher = Matcher::new(options.mode, domains);

        debug!(
            "built {:?} checker with {} domains",
            matcher.mode(),
            matcher.len()
        );
        Self { matcher }
    }

    /// Check if `email` is on the configured disposable list.
    pub fn is_disposable(&self, email: &str) -> bool {
        self.matcher.matches(email)
    }

    /// Check if `email` is structurally valid.
    pub fn is_valid(&self, email: &str) -> bool {
        syntax::is_valid(email)
    }

    /// Validate `email`, reporting the first broken rule.
    pub fn check<'a>(
        &self,
        email: &'a str,
    ) -> std::result::Result<EmailAddress<'a>, ValidationError> {
        syntax::check(email)
    }

    /// Run both checks.
    pub fn classify(&self, email: &str) -> Verdict {
        Verdict {
            valid: self.is_valid(email),
            disposable: self.is_disposable(email),
        }
    }

    /// Match mode in use
    pub fn mode(&self) -> MatchMode {
        self.matcher.mode()
    }

    /// Number of distinct disposable domains
    pub fn domain_count(&self) -> usize {
        self.matcher.len()
    }
}
