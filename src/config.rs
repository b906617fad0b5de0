// 11.0: all settings in one place. identities, position limits, event log bounds.

use crate::types::{Address, Amount};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

// 11.1: bounds applied when a position is opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionLimits {
    // inclusive leverage band, integer multiples only
    pub min_leverage: u32,
    pub max_leverage: u32,
    // smallest margin accepted for a new position
    pub min_margin: Amount,
}

impl PositionLimits {
    pub fn leverage_in_band(&self, leverage: u32) -> bool {
        leverage >= self.min_leverage && leverage <= self.max_leverage
    }
}

impl Default for PositionLimits {
    fn default() -> Self {
        Self {
            min_leverage: 1,
            max_leverage: 10,
            min_margin: Amount::new(dec!(1)),
        }
    }
}

// 11.2: the full exchange configuration. operator owns every satellite ledger
// and administers the manager; the manager address is the identity the vault
// recognizes as its authorized caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    pub operator: Address,
    pub manager_address: Address,
    pub initial_price: Amount,
    pub limits: PositionLimits,
    // cap on the in-memory audit log; oldest entries drop first
    pub max_events: usize,
    // echo every event to stdout as it is emitted
    pub verbose: bool,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            operator: Address(1),
            manager_address: Address(2),
            initial_price: Amount::new(dec!(1234)),
            limits: PositionLimits::default(),
            max_events: 10_000,
            verbose: false,
        }
    }
}
