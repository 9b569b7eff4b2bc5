//! Structural email validation.
//!
//! A practical approximation of the RFC 5321/5322 local-part and domain
//! grammar. Checks run in a fixed order and stop at the first failure:
//!
//! 1. split at the last `@`
//! 2. length limits (local 1..=64, domain 1..=255, in bytes)
//! 3. no leading or trailing `.` in either part
//! 4. no `..` in either part
//! 5. domain restricted to `[A-Za-z0-9.-]`
//! 6. local part, after dropping escaped backslashes, is an atom or a
//!    quoted string
//!
//! Comments, folding whitespace, IDNA and display names are not supported.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::{EmailAddress, Part};

/// Maximum local-part length in bytes
pub const MAX_LOCAL_LEN: usize = 64;

/// Maximum domain-part length in bytes
pub const MAX_DOMAIN_LEN: usize = 255;

static DOTS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\.").expect("DOTS_PATTERN: hardcoded regex is invalid"));

static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\-\.]+$").expect("DOMAIN_PATTERN: hardcoded regex is invalid")
});

/// Unquoted local part: escaped characters or atom text, dots included
static LOCAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\\.|[A-Za-z0-9!#%&`_=/$'*+\-?^{}|~.])+$"#)
        .expect("LOCAL_PATTERN: hardcoded regex is invalid")
});

/// Quoted local part: anything but a bare quote between the outer quotes
static QUOTED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^"(\\"|[^"])+"$"#).expect("QUOTED_PATTERN: hardcoded regex is invalid")
});

/// Check whether `email` is a structurally plausible address.
pub fn is_valid(email: &str) -> bool {
    check(email).is_ok()
}

/// Validate `email` and return its split parts, or the first rule it breaks.
pub fn check(email: &str) -> Result<EmailAddress<'_>, ValidationError> {
    let addr = EmailAddress::split(email).ok_or(ValidationError::MissingAt)?;
    let result = check_parts(&addr);
    if let Err(ref err) = result {
        trace!("rejected {}-byte address: {}", email.len(), err);
    }
    result.map(|()| addr)
}

fn check_parts(addr: &EmailAddress<'_>) -> Result<(), ValidationError> {
    let (local, domain) = (addr.local, addr.domain);

    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return Err(ValidationError::LocalLength(local.len()));
    }
    check_domain_length(domain)?;

    if has_dot_boundary(local) {
        return Err(ValidationError::DotBoundary(Part::Local));
    }
    check_domain_boundary(domain)?;

    if DOTS_PATTERN.is_match(local) {
        return Err(ValidationError::ConsecutiveDots(Part::Local));
    }
    check_domain_dots(domain)?;

    check_domain_charset(domain)?;

    if !is_valid_local(local) {
        return Err(ValidationError::LocalSyntax);
    }

    Ok(())
}

/// Run only the domain-part rules, in the same order `check` applies them.
///
/// Used to vet entries of externally loaded domain lists.
pub(crate) fn check_domain(domain: &str) -> Result<(), ValidationError> {
    check_domain_length(domain)?;
    check_domain_boundary(domain)?;
    check_domain_dots(domain)?;
    check_domain_charset(domain)
}

fn check_domain_length(domain: &str) -> Result<(), ValidationError> {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return Err(ValidationError::DomainLength(domain.len()));
    }
    Ok(())
}

fn check_domain_boundary(domain: &str) -> Result<(), ValidationError> {
    if has_dot_boundary(domain) {
        return Err(ValidationError::DotBoundary(Part::Domain));
    }
    Ok(())
}

fn check_domain_dots(domain: &str) -> Result<(), ValidationError> {
    if DOTS_PATTERN.is_match(domain) {
        return Err(ValidationError::ConsecutiveDots(Part::Domain));
    }
    Ok(())
}

fn check_domain_charset(domain: &str) -> Result<(), ValidationError> {
    if !DOMAIN_PATTERN.is_match(domain) {
        return Err(ValidationError::DomainCharset);
    }
    Ok(())
}

fn has_dot_boundary(s: &str) -> bool {
    s.starts_with('.') || s.ends_with('.')
}

/// Escaped backslashes are dropped first so `\\` pairs never pair up with
/// the character that follows them.
fn is_valid_local(local: &str) -> bool {
    let local = local.replace("\\\\", "");
    LOCAL_PATTERN.is_match(&local) || QUOTED_PATTERN.is_match(&local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_patterns_compile() {
        // Forces Lazy evaluation of every static pattern.
        assert!(DOTS_PATTERN.is_match("a..b"));
        assert!(DOMAIN_PATTERN.is_match("example.com"));
        assert!(LOCAL_PATTERN.is_match("user"));
        assert!(QUOTED_PATTERN.is_match("\"user\""));
    }

    #[test]
    fn test_minimal_valid() {
        assert!(is_valid("a@b.com"));
        assert!(is_valid("a@b"));
    }

    #[test]
    fn test_empty_and_no_at() {
        assert!(!is_valid(""));
        assert!(!is_valid("plainaddress"));
        assert_eq!(check(""), Err(ValidationError::MissingAt));
    }

    #[test]
    fn test_at_on_edges() {
        assert_eq!(check("@example.com"), Err(ValidationError::LocalLength(0)));
        assert_eq!(check("user@"), Err(ValidationError::DomainLength(0)));
        assert_eq!(check("@"), Err(ValidationError::LocalLength(0)));
    }

    #[test]
    fn test_length_limits() {
        let local = "a".repeat(MAX_LOCAL_LEN);
        assert!(is_valid(&format!("{}@example.com", local)));

        let local = "a".repeat(MAX_LOCAL_LEN + 1);
        assert_eq!(
            check(&format!("{}@example.com", local)),
            Err(ValidationError::LocalLength(65))
        );

        let domain = format!("{}.com", "d".repeat(MAX_DOMAIN_LEN - 4));
        assert_eq!(domain.len(), MAX_DOMAIN_LEN);
        assert!(is_valid(&format!("a@{}", domain)));

        let domain = format!("{}.com", "d".repeat(MAX_DOMAIN_LEN - 3));
        assert_eq!(
            check(&format!("a@{}", domain)),
            Err(ValidationError::DomainLength(256))
        );
    }

    #[test]
    fn test_length_counts_bytes() {
        // 'é' is two bytes: 33 chars, 66 bytes
        let local = "é".repeat(33);
        assert_eq!(
            check(&format!("{}@example.com", local)),
            Err(ValidationError::LocalLength(66))
        );
    }

    #[test]
    fn test_dot_boundaries() {
        assert_eq!(
            check(".a@example.com"),
            Err(ValidationError::DotBoundary(Part::Local))
        );
        assert_eq!(
            check("a.@example.com"),
            Err(ValidationError::DotBoundary(Part::Local))
        );
        assert_eq!(
            check("a@.example.com"),
            Err(ValidationError::DotBoundary(Part::Domain))
        );
        assert_eq!(
            check("a@example.com."),
            Err(ValidationError::DotBoundary(Part::Domain))
        );
    }

    #[test]
    fn test_consecutive_dots() {
        assert_eq!(
            check("a..b@example.com"),
            Err(ValidationError::ConsecutiveDots(Part::Local))
        );
        assert_eq!(
            check("ab@example..com"),
            Err(ValidationError::ConsecutiveDots(Part::Domain))
        );
        // Quoting does not exempt the local part
        assert_eq!(
            check("\"a..b\"@example.com"),
            Err(ValidationError::ConsecutiveDots(Part::Local))
        );
    }

    #[test]
    fn test_domain_charset() {
        assert_eq!(check("user@exämple.com"), Err(ValidationError::DomainCharset));
        assert_eq!(check("user@ex_mple.com"), Err(ValidationError::DomainCharset));
        assert_eq!(check("user@exa mple.com"), Err(ValidationError::DomainCharset));
        assert!(is_valid("user@sub-domain.Example.COM"));
        assert!(is_valid("user@127.0.0.1"));
    }

    #[test]
    fn test_local_atom_characters() {
        assert!(is_valid("!#$%&'*+-/=?^_`{|}~@example.com"));
        assert!(is_valid("first.last+tag@example.com"));
        assert_eq!(check("a,b@example.com"), Err(ValidationError::LocalSyntax));
        assert_eq!(check("a b@example.com"), Err(ValidationError::LocalSyntax));
        assert_eq!(check("a<b>@example.com"), Err(ValidationError::LocalSyntax));
    }

    #[test]
    fn test_earlier_at_requires_quotes() {
        assert_eq!(check("a@b@example.com"), Err(ValidationError::LocalSyntax));
        assert!(is_valid("\"a@b\"@example.com"));
    }

    #[test]
    fn test_escaped_characters() {
        assert!(is_valid("a\\@b@example.com"));
        assert!(is_valid("a\\ b@example.com"));
        assert!(is_valid("a\\\\b@example.com"));
        // A lone escaped backslash normalizes to nothing
        assert_eq!(check("\\\\@example.com"), Err(ValidationError::LocalSyntax));
    }

    #[test]
    fn test_quoted_local() {
        assert!(is_valid("\"with space\"@example.com"));
        assert!(is_valid("\"escaped\\\"quote\"@example.com"));
        assert!(!is_valid("\"\"@example.com"));
        assert!(!is_valid("\"unclosed@example.com"));
        assert!(!is_valid("un\"quoted@example.com"));
    }

    #[test]
    fn test_check_returns_raw_parts() {
        let addr = check("a\\\\b@Example.com").unwrap();
        assert_eq!(addr.local, "a\\\\b");
        assert_eq!(addr.domain, "Example.com");
    }

    #[test]
    fn test_check_domain_only() {
        assert!(check_domain("mailinator.com").is_ok());
        assert_eq!(check_domain(""), Err(ValidationError::DomainLength(0)));
        assert_eq!(
            check_domain("a..b"),
            Err(ValidationError::ConsecutiveDots(Part::Domain))
        );
        assert_eq!(check_domain("bad domain"), Err(ValidationError::DomainCharset));
    }

    struct CaptureLogger(Mutex<Vec<String>>);

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.0.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger(Mutex::new(Vec::new()));

    #[test]
    fn test_rejection_log_omits_address() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        let email = format!("secret.user@{}", "x_".repeat(500));
        assert_eq!(check(&email), Err(ValidationError::DomainLength(1000)));

        let messages = LOGGER.0.lock().unwrap();
        let expected = format!("rejected {}-byte address", email.len());
        assert!(messages.iter().any(|m| m.contains(&expected)), "got: {:?}", messages);
        assert!(messages.iter().all(|m| !m.contains("secret.user")));
    }

    #[test]
    fn test_garbage_input_does_not_panic() {
        for input in ["\0@\0", "@@@@", "\u{FFFD}@\u{FFFD}", "\"@\"", "\\@\\"] {
            let _ = is_valid(input);
        }
        assert!(!is_valid(&"@".repeat(10_000)));
    }
}
