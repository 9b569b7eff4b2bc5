mod boundary;
mod plain;

pub use boundary::BoundaryMatcher;
pub use plain::PlainSuffixMatcher;

/// Trait for disposable-domain matchers
pub trait SuffixMatcher: Send + Sync {
    /// Check if the input (an address or a bare domain) matches
    fn matches(&self, input: &str) -> bool;
}

/// Domain matching mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Plain suffix: "mailinator.com" matches anything ending in it,
    /// including "evilmailinator.com"
    #[default]
    Plain,
    /// Label boundary: "mailinator.com" matches "mailinator.com" and
    /// "x.mailinator.com" only
    Boundary,
}

/// Enum wrapper for all matcher types
#[derive(Debug, Clone)]
pub enum Matcher {
    Plain(PlainSuffixMatcher),
    Boundary(BoundaryMatcher),
}

impl Matcher {
    /// Build a matcher of the given mode over `domains`
    pub fn new<I, S>(mode: MatchMode, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match mode {
            MatchMode::Plain => Matcher::Plain(PlainSuffixMatcher::new(domains)),
            MatchMode::Boundary => Matcher::Boundary(BoundaryMatcher::new(domains)),
        }
    }

    pub fn mode(&self) -> MatchMode {
        match self {
            Matcher::Plain(_) => MatchMode::Plain,
            Matcher::Boundary(_) => MatchMode::Boundary,
        }
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        match self {
            Matcher::Plain(m) => m.len(),
            Matcher::Boundary(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SuffixMatcher for Matcher {
    fn matches(&self, input: &str) -> bool {
        match self {
            Matcher::Plain(m) => m.matches(input),
            Matcher::Boundary(m) => m.matches(input),
        }
    }
}
