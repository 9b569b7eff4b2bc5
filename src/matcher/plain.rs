use std::collections::HashSet;

use super::SuffixMatcher;

/// Plain suffix matcher - any input ending with an entry matches.
///
/// `"evilmailinator.com"` matches the entry `"mailinator.com"`. Entries and
/// input are compared byte for byte, with no case folding on either side.
#[derive(Debug, Clone, Default)]
pub struct PlainSuffixMatcher {
    suffixes: Vec<String>,
}

impl PlainSuffixMatcher {
    /// Create a matcher from suffix entries, dropping empties and duplicates.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let suffixes = suffixes
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .filter(|s| !s.is_empty() && seen.insert(s.clone()))
            .collect();
        Self { suffixes }
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Check if the matcher has no entries
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

impl SuffixMatcher for PlainSuffixMatcher {
    fn matches(&self, input: &str) -> bool {
        self.suffixes.iter().any(|suffix| input.ends_with(suffix.as_str()))
    }
}
