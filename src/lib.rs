//! Email Validator - fast, local email address checks for Rust
//!
//! This library provides two independent, allocation-light checks:
//! - Structural validation against a practical subset of the RFC 5321/5322
//!   local-part and domain grammar
//! - Disposable-domain detection against an embedded list of throwaway
//!   mail providers
//!
//! Nothing here touches the network: there are no MX/DNS lookups and no SMTP
//! probing.
//!
//! # Example
//!
//! ```rust
//! use email_validator_r::{is_disposable, is_valid};
//!
//! assert!(is_valid("user@example.com"));
//! assert!(!is_valid("user..name@example.com"));
//!
//! assert!(is_disposable("user@mailinator.com"));
//! assert!(!is_disposable("user@gmail.com"));
//! ```
//!
//! # Configured checker
//!
//! ```rust
//! use email_validator_r::{Checker, CheckerOptions, MatchMode};
//!
//! let options = CheckerOptions::new()
//!     .with_mode(MatchMode::Boundary)
//!     .with_domains(["burner.example"]);
//! let checker = Checker::new(options);
//!
//! let verdict = checker.classify("someone@burner.example");
//! assert!(verdict.valid);
//! assert!(verdict.disposable);
//!
//! // Boundary mode only matches whole labels
//! assert!(!checker.is_disposable("user@evilmailinator.com"));
//! ```
//!
//! # Validation Rules
//!
//! The address is split at its **last** `@`, then checked in order:
//!
//! | Rule | Local part | Domain part |
//! |------|------------|-------------|
//! | Length (bytes) | 1..=64 | 1..=255 |
//! | Leading/trailing `.` | rejected | rejected |
//! | `..` anywhere | rejected | rejected |
//! | Characters | atom text, `\x` escapes, or `"quoted"` | `[A-Za-z0-9.-]` |

pub mod checker;
pub mod disposable;
pub mod error;
pub mod list;
pub mod matcher;
pub mod syntax;
pub mod types;

// Re-export commonly used items
pub use checker::{Checker, CheckerOptions};
pub use disposable::{default_domains, is_disposable, DISPOSABLE_DOMAINS};
pub use error::{Error, Result, ValidationError};
pub use list::{parse_domain_list, parse_domain_list_from_file};
pub use matcher::{BoundaryMatcher, MatchMode, Matcher, PlainSuffixMatcher, SuffixMatcher};
pub use syntax::{check, is_valid, MAX_DOMAIN_LEN, MAX_LOCAL_LEN};
pub use types::{EmailAddress, Part, Verdict};
