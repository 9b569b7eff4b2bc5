use std::fmt;

/// Which half of an address a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Local,
    Domain,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Local => f.write_str("local"),
            Part::Domain => f.write_str("domain"),
        }
    }
}

/// An address split at its last `@`.
///
/// Both halves borrow from the input and are not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailAddress<'a> {
    /// Everything before the last `@`
    pub local: &'a str,
    /// Everything after the last `@`
    pub domain: &'a str,
}

impl<'a> EmailAddress<'a> {
    /// Split `email` at the last `@`. Returns `None` when there is no `@`.
    ///
    /// Earlier `@` characters stay in the local part, so a quoted local part
    /// such as `"a@b"` survives the split.
    pub fn split(email: &'a str) -> Option<Self> {
        email
            .rsplit_once('@')
            .map(|(local, domain)| Self { local, domain })
    }
}

impl fmt::Display for EmailAddress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

/// Combined outcome of both checks for one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verdict {
    /// Passed structural validation
    pub valid: bool,
    /// Domain is on the disposable list
    pub disposable: bool,
}

impl Verdict {
    /// Valid and not disposable.
    pub fn is_acceptable(&self) -> bool {
        self.valid && !self.disposable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_last_at() {
        let addr = EmailAddress::split("\"a@b\"@example.com").unwrap();
        assert_eq!(addr.local, "\"a@b\"");
        assert_eq!(addr.domain, "example.com");
    }

    #[test]
    fn test_split_edges() {
        assert!(EmailAddress::split("no-at-sign").is_none());
        assert!(EmailAddress::split("").is_none());

        let addr = EmailAddress::split("@").unwrap();
        assert_eq!(addr.local, "");
        assert_eq!(addr.domain, "");
    }

    #[test]
    fn test_display_round_trip() {
        let addr = EmailAddress::split("user@example.com").unwrap();
        assert_eq!(addr.to_string(), "user@example.com");
    }

    #[test]
    fn test_verdict_acceptable() {
        assert!(Verdict { valid: true, disposable: false }.is_acceptable());
        assert!(!Verdict { valid: true, disposable: true }.is_acceptable());
        assert!(!Verdict::default().is_acceptable());
    }
}
