// 13.0: every state change produces an event. used for audit trails, state
// reconstruction, and notifying operator tooling. the EventPayload enum lists
// all event types.

use crate::types::{Address, Amount, ParamKey, Side, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub timestamp: Timestamp,
    pub payload: EventPayload,
}

impl Event {
    pub fn new(id: EventId, timestamp: Timestamp, payload: EventPayload) -> Self {
        Self {
            id,
            timestamp,
            payload,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventPayload {
    // collateral events
    Deposit(DepositEvent),
    Withdrawal(WithdrawalEvent),
    WithdrawalRejected(WithdrawalRejectedEvent),

    // position events
    PositionOpened(PositionOpenedEvent),
    PositionClosed(PositionClosedEvent),
    PositionLiquidated(PositionLiquidatedEvent),

    // satellite ledger events
    PriceUpdated(PriceUpdatedEvent),
    FeeCollected(FeeCollectedEvent),
    FundingAccrued(FundingAccruedEvent),
    InsuranceDeposit(InsuranceDepositEvent),
    BadDebtCovered(BadDebtCoveredEvent),
    ParameterSet(ParameterSetEvent),

    // admin events
    TradingPaused(TradingPausedEvent),
    TradingResumed(TradingResumedEvent),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositEvent {
    pub account: Address,
    pub amount: Amount,
    pub new_balance: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalEvent {
    pub account: Address,
    pub amount: Amount,
    pub new_balance: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRejectedEvent {
    pub account: Address,
    pub amount: Amount,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionOpenedEvent {
    pub account: Address,
    pub side: Side,
    pub margin: Amount,
    pub size: Amount,
    pub leverage: u32,
    pub entry_price: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionClosedEvent {
    pub account: Address,
    pub margin: Amount,
    pub size: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionLiquidatedEvent {
    pub account: Address,
    pub size: Amount,
    pub collateral_seized: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceUpdatedEvent {
    pub price: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeCollectedEvent {
    pub payer: Address,
    pub amount: Amount,
    pub total_collected: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingAccruedEvent {
    pub account: Address,
    pub payment_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceDepositEvent {
    pub amount: Amount,
    pub new_balance: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadDebtCoveredEvent {
    pub beneficiary: Address,
    pub amount: Amount,
    pub new_balance: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSetEvent {
    pub key: ParamKey,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingPausedEvent {
    pub by: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingResumedEvent {
    pub by: Address,
}
