use thiserror::Error;

use crate::types::Part;

/// Reason an address failed structural validation.
///
/// Variants are listed in the order the checks run; `check` reports the
/// first one that fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing '@' separator")]
    MissingAt,

    #[error("local part length {0} outside 1..=64")]
    LocalLength(usize),

    #[error("domain part length {0} outside 1..=255")]
    DomainLength(usize),

    #[error("{0} part starts or ends with '.'")]
    DotBoundary(Part),

    #[error("{0} part contains consecutive dots")]
    ConsecutiveDots(Part),

    #[error("domain contains characters outside [A-Za-z0-9.-]")]
    DomainCharset,

    #[error("local part is neither a valid atom nor a quoted string")]
    LocalSyntax,
}

impl ValidationError {
    /// The address part the failure refers to, if it is tied to one.
    pub fn part(&self) -> Option<Part> {
        match self {
            ValidationError::MissingAt => None,
            ValidationError::LocalLength(_) | ValidationError::LocalSyntax => Some(Part::Local),
            ValidationError::DomainLength(_) | ValidationError::DomainCharset => {
                Some(Part::Domain)
            }
            ValidationError::DotBoundary(part) | ValidationError::ConsecutiveDots(part) => {
                Some(*part)
            }
        }
    }
}

/// Errors raised while loading domain lists or building a checker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid domain at line {line}: {domain:?}")]
    InvalidDomain { line: usize, domain: String },

    #[error("file include depth exceeds maximum ({0}), possible circular include")]
    IncludeDepth(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
