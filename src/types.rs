use std::borrow::Cow;

use crate::catalog::ReportedFailureReason;
use crate::catalog::mapping::describe_or_unrecognized;
use crate::error::Error;
use crate::reason::TransactionFailureReason;
use crate::transaction::{AcceptanceOutcome, TransactionState};

/// Transaction metadata as returned by a node's core API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMetadata {
    /// Transaction id (hex).
    pub transaction_id: String,
    /// Current state of the transaction.
    pub transaction_state: TransactionState,
    /// Raw failure code. Kept untyped so codes from newer nodes still decode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_failure_reason: Option<u8>,
}

impl TransactionMetadata {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let metadata: Self = serde_json::from_str(json)?;
        tracing::debug!(
            transaction_id = %metadata.transaction_id,
            state = %metadata.transaction_state,
            failure_reason = ?metadata.transaction_failure_reason,
            "decoded transaction metadata"
        );
        Ok(metadata)
    }

    /// Typed failure reason. Fails on codes this table does not know.
    pub fn failure_reason(&self) -> Result<Option<TransactionFailureReason>, Error> {
        self.transaction_failure_reason
            .map(TransactionFailureReason::try_from)
            .transpose()
    }

    /// Text suitable for showing to a user, never blank for a failed transaction.
    pub fn failure_description(&self) -> Option<Cow<'static, str>> {
        self.reported_reason()
            .map(|reason| describe_or_unrecognized(i64::from(reason.code())))
    }

    pub fn acceptance(&self) -> AcceptanceOutcome {
        match self.transaction_state {
            s if s.is_accepted() => AcceptanceOutcome::Accepted,
            TransactionState::Failed => AcceptanceOutcome::Failed {
                reason: self.reported_reason().unwrap_or(CATCH_ALL),
            },
            _ => AcceptanceOutcome::Pending,
        }
    }

    /// The reported code, or the catch-all reason for a failure without one.
    fn reported_reason(&self) -> Option<ReportedFailureReason> {
        let Some(code) = self.transaction_failure_reason else {
            return (self.transaction_state == TransactionState::Failed).then_some(CATCH_ALL);
        };
        let reason = ReportedFailureReason::from(code);
        if reason.known().is_none() {
            warn_unrecognized(&self.transaction_id, code);
        }
        Some(reason)
    }
}

const CATCH_ALL: ReportedFailureReason =
    ReportedFailureReason::Known(TransactionFailureReason::SemanticValidationFailed);

fn warn_unrecognized(transaction_id: &str, code: u8) {
    tracing::warn!(
        transaction_id,
        code,
        "node reported a failure reason code missing from the catalog"
    );
}
