use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::IntoEnumIterator;

use crate::error::Error;

/// Reason a transaction failed semantic validation on a ledger node.
///
/// The discriminants are the wire codes reported by the node and must not be
/// renumbered. Codes 27..=254 are unassigned and treated as unknown.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
#[repr(u8)]
pub enum TransactionFailureReason {
    InputUtxoAlreadySpent = 1,
    ConflictingWithAnotherTx = 2,
    InvalidReferencedUtxo = 3,
    InvalidTransaction = 4,
    SumInputsOutputsAmountMismatch = 5,
    InvalidUnlockBlockSignature = 6,
    TimelockNotExpired = 7,
    InvalidNativeTokens = 8,
    ReturnAmountNotFulfilled = 9,
    InvalidInputUnlock = 10,
    SenderNotUnlocked = 11,
    InvalidChainStateTransition = 12,
    InvalidTransactionIssuingTime = 13,
    InvalidManaAmount = 14,
    InvalidBlockIssuanceCreditsAmount = 15,
    InvalidRewardContextInput = 16,
    InvalidCommitmentContextInput = 17,
    MissingStakingFeature = 18,
    FailedToClaimStakingReward = 19,
    FailedToClaimDelegationReward = 20,
    TransactionCapabilityNativeTokenBurningNotAllowed = 21,
    TransactionCapabilityManaBurningNotAllowed = 22,
    TransactionCapabilityAccountDestructionNotAllowed = 23,
    TransactionCapabilityAnchorDestructionNotAllowed = 24,
    TransactionCapabilityFoundryDestructionNotAllowed = 25,
    TransactionCapabilityNftDestructionNotAllowed = 26,
    SemanticValidationFailed = 255,
}

impl TransactionFailureReason {
    /// Numeric wire code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Canonical description text. Downstream tooling compares against it verbatim.
    pub fn description(self) -> &'static str {
        match self {
            Self::InputUtxoAlreadySpent => "The referenced UTXO was already spent.",
            Self::ConflictingWithAnotherTx => {
                "The transaction is conflicting with another transaction. Conflicting specifically means a double spend situation that both transaction pass all validation rules, eventually losing one(s) should have this reason."
            }
            Self::InvalidReferencedUtxo => "The referenced UTXO is invalid.",
            Self::InvalidTransaction => "The transaction is invalid.",
            Self::SumInputsOutputsAmountMismatch => {
                "The sum of the inputs and output base token amount does not match."
            }
            Self::InvalidUnlockBlockSignature => "The unlock block signature is invalid.",
            Self::TimelockNotExpired => "The configured timelock is not yet expired.",
            Self::InvalidNativeTokens => "The given native tokens are invalid.",
            Self::ReturnAmountNotFulfilled => {
                "The return amount in a transaction is not fulfilled by the output side."
            }
            Self::InvalidInputUnlock => "An input unlock was invalid.",
            Self::SenderNotUnlocked => {
                "The output contains a Sender with an ident (address) which is not unlocked."
            }
            Self::InvalidChainStateTransition => "The chain state transition is invalid.",
            Self::InvalidTransactionIssuingTime => {
                "The referenced input is created after transaction issuing time."
            }
            Self::InvalidManaAmount => "The mana amount is invalid.",
            Self::InvalidBlockIssuanceCreditsAmount => {
                "The Block Issuance Credits amount is invalid."
            }
            Self::InvalidRewardContextInput => "Reward Context Input is invalid.",
            Self::InvalidCommitmentContextInput => "Commitment Context Input is invalid.",
            Self::MissingStakingFeature => {
                "Staking Feature is not provided in account output when claiming rewards."
            }
            Self::FailedToClaimStakingReward => "Failed to claim staking reward.",
            Self::FailedToClaimDelegationReward => "Failed to claim delegation reward.",
            Self::TransactionCapabilityNativeTokenBurningNotAllowed => {
                "Burning of native tokens is not allowed in the transaction capabilities."
            }
            Self::TransactionCapabilityManaBurningNotAllowed => {
                "Burning of mana is not allowed in the transaction capabilities."
            }
            Self::TransactionCapabilityAccountDestructionNotAllowed => {
                "Destruction of accounts is not allowed in the transaction capabilities."
            }
            Self::TransactionCapabilityAnchorDestructionNotAllowed => {
                "Destruction of anchors is not allowed in the transaction capabilities."
            }
            Self::TransactionCapabilityFoundryDestructionNotAllowed => {
                "Destruction of foundries is not allowed in the transaction capabilities."
            }
            Self::TransactionCapabilityNftDestructionNotAllowed => {
                "Destruction of nfts is not allowed in the transaction capabilities."
            }
            Self::SemanticValidationFailed => {
                "The semantic validation failed for a reason not covered by the previous variants."
            }
        }
    }

    /// camelCase variant name, e.g. `"inputUtxoAlreadySpent"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Reason for a wire code, `None` for unassigned codes.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::iter().find(|reason| reason.code() == code)
    }

    /// Parse a camelCase variant name.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        name.parse::<Self>().map_err(|_| Error::UnknownReasonName {
            name: name.to_string(),
        })
    }
}

impl fmt::Display for TransactionFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl TryFrom<u8> for TransactionFailureReason {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(Error::UnknownFailureReason {
            code: i64::from(code),
        })
    }
}

impl TryFrom<i64> for TransactionFailureReason {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        u8::try_from(code)
            .ok()
            .and_then(Self::from_code)
            .ok_or(Error::UnknownFailureReason { code })
    }
}

impl From<TransactionFailureReason> for u8 {
    fn from(reason: TransactionFailureReason) -> Self {
        reason.code()
    }
}

// On the wire the reason is its numeric code, not its name.
impl Serialize for TransactionFailureReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for TransactionFailureReason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Self::try_from(code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use std::collections::HashSet;

    use strum::{EnumCount, IntoEnumIterator};

    use super::TransactionFailureReason;
    use crate::error::Error;

    #[test]
    fn discriminants_match_wire_codes() {
        assert_eq!(TransactionFailureReason::InputUtxoAlreadySpent.code(), 1);
        assert_eq!(TransactionFailureReason::ReturnAmountNotFulfilled.code(), 9);
        assert_eq!(
            TransactionFailureReason::TransactionCapabilityNftDestructionNotAllowed.code(),
            26
        );
        assert_eq!(
            TransactionFailureReason::SemanticValidationFailed.code(),
            255
        );
        assert_eq!(TransactionFailureReason::COUNT, 27);
    }

    #[test]
    fn descriptions_are_non_empty_and_distinct() {
        let mut seen = HashSet::new();
        for reason in TransactionFailureReason::iter() {
            let text = reason.description();
            assert!(!text.is_empty(), "{reason:?} has empty description");
            assert!(seen.insert(text), "{reason:?} duplicates another description");
        }
        assert_eq!(seen.len(), TransactionFailureReason::COUNT);
    }

    #[test]
    fn names_are_camel_case_and_parse_back() {
        assert_eq!(
            TransactionFailureReason::InputUtxoAlreadySpent.name(),
            "inputUtxoAlreadySpent"
        );
        assert_eq!(
            TransactionFailureReason::InvalidBlockIssuanceCreditsAmount.as_ref(),
            "invalidBlockIssuanceCreditsAmount"
        );
        for reason in TransactionFailureReason::iter() {
            assert_eq!(
                TransactionFailureReason::from_name(reason.name()).unwrap(),
                reason
            );
        }
        assert!(matches!(
            TransactionFailureReason::from_name("InputUtxoAlreadySpent"),
            Err(Error::UnknownReasonName { .. })
        ));
    }

    #[test]
    fn display_writes_description() {
        assert_eq!(
            TransactionFailureReason::TimelockNotExpired.to_string(),
            "The configured timelock is not yet expired."
        );
    }

    #[test]
    fn try_from_rejects_unassigned_codes() {
        assert_eq!(
            TransactionFailureReason::try_from(7u8).unwrap(),
            TransactionFailureReason::TimelockNotExpired
        );
        assert!(matches!(
            TransactionFailureReason::try_from(0u8),
            Err(Error::UnknownFailureReason { code: 0 })
        ));
        assert!(matches!(
            TransactionFailureReason::try_from(27u8),
            Err(Error::UnknownFailureReason { code: 27 })
        ));
        assert!(matches!(
            TransactionFailureReason::try_from(-1i64),
            Err(Error::UnknownFailureReason { code: -1 })
        ));
        assert!(matches!(
            TransactionFailureReason::try_from(511i64),
            Err(Error::UnknownFailureReason { code: 511 })
        ));
    }

    #[test]
    fn serde_uses_numeric_code() {
        let json =
            serde_json::to_string(&TransactionFailureReason::InvalidManaAmount).unwrap();
        assert_eq!(json, "14");
        let back: TransactionFailureReason = serde_json::from_str("255").unwrap();
        assert_eq!(back, TransactionFailureReason::SemanticValidationFailed);
        assert!(serde_json::from_str::<TransactionFailureReason>("42").is_err());
        assert!(serde_json::from_str::<TransactionFailureReason>("\"invalidManaAmount\"").is_err());
    }
}
