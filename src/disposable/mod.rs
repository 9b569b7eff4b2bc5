//! Disposable-domain detection against the embedded list.

mod domains;

pub use domains::{DISPOSABLE_DOMAINS, DISPOSABLE_DOMAIN_COUNT};

/// Check whether `email` ends with any known disposable domain.
///
/// This is a plain byte-suffix test over the whole input, not a domain-label
/// match: `"evilmailinator.com"` is reported because it ends with
/// `"mailinator.com"`. The input is not case-folded. Any string is accepted,
/// valid address or not.
///
/// Use [`BoundaryMatcher`](crate::matcher::BoundaryMatcher) for a
/// label-aware lookup.
pub fn is_disposable(email: &str) -> bool {
    DISPOSABLE_DOMAINS
        .iter()
        .any(|suffix| email.ends_with(suffix))
}

/// The embedded disposable-domain list, in source order.
pub fn default_domains() -> &'static [&'static str] {
    &DISPOSABLE_DOMAINS
}
