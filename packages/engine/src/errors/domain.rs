//! Domain-level error type shared by all engine entry points.
//!
//! This error type is UI- and storage-agnostic. Expected rule
//! violations come back as `Err(DomainError::Validation(..))` with a
//! human-readable detail the caller may surface verbatim; `Contract`
//! marks caller bugs (e.g. calling bluff with no active claim) that
//! should abort the current request rather than be re-prompted.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds for expected rule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Claim is not in the legal option set for the current state.
    IllegalClaim,
    /// 41 claimed without actually holding a roll of 41.
    SocialWithoutRoll,
    /// Transition attempted after the match finished.
    GameFinished,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation.
    Validation(ValidationKind, String),
    /// Caller-contract violation; fatal to the request, not re-promptable.
    Contract(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Contract(d) => write!(f, "contract violation: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn contract(detail: impl Into<String>) -> Self {
        Self::Contract(detail.into())
    }

    /// The human-readable reason, as shown to the user.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) => d,
            DomainError::Contract(d) => d,
        }
    }
}
