pub mod mapping;

use std::fmt;

use strum::IntoEnumIterator;

use crate::error::Error;
use crate::reason::TransactionFailureReason;

/// Read-only lookups over the compiled-in failure reason table.
///
/// Inputs are `i64` so that values received from untyped sources (negative,
/// above `u8::MAX`) are rejected instead of truncated.
pub struct FailureReasonCatalog;

impl FailureReasonCatalog {
    /// Canonical description for `code`, or `UnknownFailureReason`.
    pub fn describe(code: i64) -> Result<&'static str, Error> {
        TransactionFailureReason::try_from(code).map(TransactionFailureReason::description)
    }

    /// Whether `code` is one of the declared reasons.
    pub fn is_known(code: i64) -> bool {
        u8::try_from(code)
            .ok()
            .and_then(TransactionFailureReason::from_code)
            .is_some()
    }

    /// All declared codes in declaration order: 1..=26, then 255.
    pub fn all_codes() -> impl Iterator<Item = u8> {
        TransactionFailureReason::iter().map(TransactionFailureReason::code)
    }
}

/// A failure code as received from a node, which may be newer than this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportedFailureReason {
    Known(TransactionFailureReason),
    Unrecognized(u8),
}

impl ReportedFailureReason {
    /// Raw wire code, known or not.
    pub fn code(self) -> u8 {
        match self {
            Self::Known(reason) => reason.code(),
            Self::Unrecognized(code) => code,
        }
    }

    /// The typed reason, if this table knows the code.
    pub fn known(self) -> Option<TransactionFailureReason> {
        match self {
            Self::Known(reason) => Some(reason),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<u8> for ReportedFailureReason {
    fn from(code: u8) -> Self {
        match TransactionFailureReason::from_code(code) {
            Some(reason) => Self::Known(reason),
            None => Self::Unrecognized(code),
        }
    }
}

impl From<TransactionFailureReason> for ReportedFailureReason {
    fn from(reason: TransactionFailureReason) -> Self {
        Self::Known(reason)
    }
}

impl fmt::Display for ReportedFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(reason) => f.write_str(reason.description()),
            Self::Unrecognized(code) => write!(f, "unrecognized failure reason code {code}"),
        }
    }
}
