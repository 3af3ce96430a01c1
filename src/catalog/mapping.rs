use std::borrow::Cow;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::catalog::FailureReasonCatalog;
use crate::error::Error;
use crate::reason::TransactionFailureReason;

/// One row of the catalog, as exported for documentation and fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: u8,
    pub name: &'static str,
    pub description: &'static str,
}

impl From<TransactionFailureReason> for CatalogEntry {
    fn from(reason: TransactionFailureReason) -> Self {
        Self {
            code: reason.code(),
            name: reason.name(),
            description: reason.description(),
        }
    }
}

/// Caller-facing text for any integer: the canonical description when known,
/// otherwise `"unrecognized failure reason code N"`.
pub fn describe_or_unrecognized(code: i64) -> Cow<'static, str> {
    match FailureReasonCatalog::describe(code) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(format!("unrecognized failure reason code {code}")),
    }
}

/// All catalog rows in declaration order.
pub fn catalog_entries() -> Vec<CatalogEntry> {
    TransactionFailureReason::iter()
        .map(CatalogEntry::from)
        .collect()
}

pub fn catalog_json() -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&catalog_entries())?)
}
