// 14.0 engine/core.rs: the exchange aggregate. owns every ledger, the logical
// clock, and the audit log. all writes flow through &mut self, which is the
// single ordering point: a host that needs concurrent callers puts the whole
// Exchange behind one mutex.

use crate::config::ExchangeConfig;
use crate::error::LedgerError;
use crate::events::{
    DepositEvent, Event, EventId, EventPayload, WithdrawalEvent, WithdrawalRejectedEvent,
};
use crate::fees::FeeManager;
use crate::funding::FundingRate;
use crate::governance::Governance;
use crate::insurance::InsuranceFund;
use crate::manager::{ManagerParams, PerpetualManager};
use crate::oracle::PriceOracle;
use crate::position::Position;
use crate::types::{Address, Amount, Timestamp};
use crate::vault::Vault;

#[derive(Debug)]
pub struct Exchange {
    pub(super) config: ExchangeConfig,
    pub(super) oracle: PriceOracle,
    pub(super) fees: FeeManager,
    pub(super) funding: FundingRate,
    pub(super) insurance: InsuranceFund,
    pub(super) governance: Governance,
    pub(super) manager: PerpetualManager,
    pub(super) events: Vec<Event>,
    pub(super) next_event_id: u64,
    pub(super) current_time: Timestamp,
}

impl Exchange {
    // wires the whole system: satellites owned by the operator, vault linked to
    // the manager before the value is ever visible to a caller.
    pub fn new(config: ExchangeConfig) -> Self {
        let now = Timestamp::from_millis(0);
        let oracle = PriceOracle::new(config.operator, config.initial_price, now);
        let fees = FeeManager::new(config.operator);
        let funding = FundingRate::new(config.operator);
        let insurance = InsuranceFund::new(config.operator);
        let governance = Governance::new(config.operator);

        let vault = Vault::new(config.operator);
        let manager = PerpetualManager::link(
            vault,
            ManagerParams {
                admin: config.operator,
                address: config.manager_address,
                limits: config.limits.clone(),
            },
        );

        Self {
            config,
            oracle,
            fees,
            funding,
            insurance,
            governance,
            manager,
            events: Vec::new(),
            next_event_id: 1,
            current_time: now,
        }
    }

    pub fn set_time(&mut self, timestamp: Timestamp) {
        self.current_time = timestamp;
    }

    pub fn advance_time(&mut self, millis: i64) {
        self.current_time = Timestamp::from_millis(self.current_time.as_millis() + millis);
    }

    pub fn time(&self) -> Timestamp {
        self.current_time
    }

    // collateral pass-throughs. the manager is the vault's authorized caller,
    // so these are the only funded paths into the vault.
    pub fn deposit(&mut self, account: Address, amount: Amount) -> Result<(), LedgerError> {
        self.manager.deposit(account, amount)?;
        let new_balance = self.manager.collateral(account);
        self.emit_event(EventPayload::Deposit(DepositEvent {
            account,
            amount,
            new_balance,
        }));
        Ok(())
    }

    pub fn withdraw(&mut self, account: Address, amount: Amount) -> Result<(), LedgerError> {
        if let Err(e) = self.manager.withdraw(account, amount) {
            // rejections go on the audit log too
            self.emit_event(EventPayload::WithdrawalRejected(WithdrawalRejectedEvent {
                account,
                amount,
                reason: e.to_string(),
            }));
            return Err(e);
        }
        let new_balance = self.manager.collateral(account);
        self.emit_event(EventPayload::Withdrawal(WithdrawalEvent {
            account,
            amount,
            new_balance,
        }));
        Ok(())
    }

    pub fn collateral(&self, account: Address) -> Amount {
        self.manager.collateral(account)
    }

    pub fn position(&self, account: Address) -> Position {
        self.manager.position(account)
    }

    // read-only views of the individual ledgers
    pub fn oracle(&self) -> &PriceOracle {
        &self.oracle
    }

    pub fn fee_manager(&self) -> &FeeManager {
        &self.fees
    }

    pub fn funding_rate(&self) -> &FundingRate {
        &self.funding
    }

    pub fn insurance_fund(&self) -> &InsuranceFund {
        &self.insurance
    }

    pub fn governance(&self) -> &Governance {
        &self.governance
    }

    pub fn manager(&self) -> &PerpetualManager {
        &self.manager
    }

    pub fn operator(&self) -> Address {
        self.config.operator
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn recent_events(&self, count: usize) -> &[Event] {
        let start = self.events.len().saturating_sub(count);
        &self.events[start..]
    }

    pub(super) fn emit_event(&mut self, payload: EventPayload) {
        let event = Event::new(EventId(self.next_event_id), self.current_time, payload);
        self.next_event_id += 1;

        if self.config.verbose {
            println!("[Event {}] {:?}", event.id.0, event.payload);
        }

        self.events.push(event);

        if self.events.len() > self.config.max_events {
            let drain_count = self.events.len() - self.config.max_events;
            self.events.drain(0..drain_count);
        }
    }
}
