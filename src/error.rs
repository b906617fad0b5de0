// 2.0: one error enum for every ledger. the display strings are the wire-level
// reason strings clients match on, so they stay short and fixed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum LedgerError {
    #[error("Not owner")]
    NotOwner,

    #[error("Not authorized")]
    NotAuthorized,

    #[error("Position exists")]
    PositionExists,

    #[error("No position")]
    NoPosition,

    #[error("Insufficient collateral")]
    InsufficientCollateral,

    #[error("Insufficient fund")]
    InsufficientFund,

    #[error("Invalid leverage")]
    InvalidLeverage,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Margin too low")]
    MarginTooLow,

    #[error("Trading paused")]
    Paused,
}

// 2.1: coarse classification for callers that branch on failure class rather
// than on the specific variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // caller identity does not match the registered owner/authorized caller
    Authorization,
    // a state-machine precondition failed
    State,
    // a requested debit exceeds the available balance
    InsufficientFunds,
    // an input failed a configured bound
    Validation,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::NotOwner | LedgerError::NotAuthorized => ErrorKind::Authorization,
            LedgerError::PositionExists | LedgerError::NoPosition | LedgerError::Paused => {
                ErrorKind::State
            }
            LedgerError::InsufficientCollateral | LedgerError::InsufficientFund => {
                ErrorKind::InsufficientFunds
            }
            LedgerError::InvalidLeverage
            | LedgerError::InvalidAmount
            | LedgerError::MarginTooLow => ErrorKind::Validation,
        }
    }
}
