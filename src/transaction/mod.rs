use serde::{Deserialize, Serialize};

use crate::catalog::ReportedFailureReason;
use crate::error::Error;

/// State of a transaction as reported by a node.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionState {
    Pending,
    Accepted,
    Committed,
    Finalized,
    Failed,
}

impl TransactionState {
    /// Parse a lowercase state name as sent by the node.
    pub fn parse(s: &str) -> Result<Self, Error> {
        s.parse::<Self>().map_err(|_| Error::Parse {
            reason: format!("unknown transaction state: {s}"),
        })
    }

    /// Accepted, committed and finalized transactions all count as accepted.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted | Self::Committed | Self::Finalized)
    }

    /// No further state change is expected.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finalized | Self::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptanceOutcome {
    Accepted,
    Pending,
    Failed { reason: ReportedFailureReason },
}

impl AcceptanceOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{AcceptanceOutcome, TransactionState};
    use crate::catalog::ReportedFailureReason;
    use crate::error::Error;

    #[test]
    fn state_roundtrip() {
        for state in TransactionState::iter() {
            assert_eq!(TransactionState::parse(state.as_ref()).ok(), Some(state));
        }
        assert_eq!(TransactionState::Committed.to_string(), "committed");
        assert!(matches!(
            TransactionState::parse("Confirmed"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn accepted_states() {
        let accepted: Vec<TransactionState> = TransactionState::iter()
            .filter(|s| s.is_accepted())
            .collect();
        assert_eq!(
            accepted,
            vec![
                TransactionState::Accepted,
                TransactionState::Committed,
                TransactionState::Finalized
            ]
        );
    }

    #[test]
    fn terminal_states() {
        assert!(TransactionState::Failed.is_terminal());
        assert!(TransactionState::Finalized.is_terminal());
        assert!(!TransactionState::Pending.is_terminal());
        assert!(!TransactionState::Accepted.is_terminal());
        assert!(!TransactionState::Committed.is_terminal());
    }

    #[test]
    fn state_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionState::Finalized).ok(),
            Some("\"finalized\"".to_string())
        );
        assert!(serde_json::from_str::<TransactionState>("\"Finalized\"").is_err());
    }

    #[test]
    fn only_failed_outcome_is_failed() {
        assert!(!AcceptanceOutcome::Accepted.is_failed());
        assert!(!AcceptanceOutcome::Pending.is_failed());
        assert!(
            AcceptanceOutcome::Failed {
                reason: ReportedFailureReason::Unrecognized(99)
            }
            .is_failed()
        );
    }
}
