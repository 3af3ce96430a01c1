#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod catalog;
pub mod error;
pub mod reason;
pub mod transaction;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use catalog::mapping::{
    CatalogEntry, catalog_entries, catalog_json, describe_or_unrecognized,
};
pub use catalog::{FailureReasonCatalog, ReportedFailureReason};
pub use error::Error;
pub use reason::TransactionFailureReason;
pub use transaction::{AcceptanceOutcome, TransactionState};
pub use types::TransactionMetadata;
