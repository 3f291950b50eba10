use thiserror::Error;

use crate::phase::GamePhase;

/// Error taxonomy for engine operations.
///
/// Every variant is local and recoverable: a rejected operation leaves state
/// unchanged and the caller decides whether to retry, surface the failure, or
/// abort the round through the explicit error phase.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("invalid phase transition: {from:?} -> {to:?}")]
    InvalidTransition { from: GamePhase, to: GamePhase },
    #[error("illegal action {action}: {reason}")]
    IllegalAction { action: String, reason: String },
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u32, available: u32 },
    #[error("invalid bet amount {amount}: table limits are {min}..={max}")]
    InvalidBet { amount: u32, min: u32, max: u32 },
    #[error("shoe exhausted")]
    ShoeExhausted,
    #[error("unknown rule variant: {0}")]
    UnknownVariant(String),
    #[error("no active hand")]
    NoActiveHand,
}
