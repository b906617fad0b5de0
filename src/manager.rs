// 12.0: position manager. owns the one-position-per-account state machine and,
// after linking, the vault it moves collateral through. every vault call passes
// the manager's own address as the caller identity, so the vault's gate stays
// live on the internal path too.

use crate::config::PositionLimits;
use crate::error::LedgerError;
use crate::position::Position;
use crate::types::{Address, Amount, Leverage, Side, Timestamp};
use crate::vault::Vault;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// 12.1: construction parameters for the link step.
#[derive(Debug, Clone)]
pub struct ManagerParams {
    // may pause trading and trigger liquidations
    pub admin: Address,
    // identity the vault will recognize as its authorized caller
    pub address: Address,
    pub limits: PositionLimits,
}

// aggregate exposure across all open positions, in notional quote units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposureStats {
    pub total_long_size: Amount,
    pub total_short_size: Amount,
    pub total_volume: Amount,
}

impl ExposureStats {
    fn new() -> Self {
        Self {
            total_long_size: Amount::zero(),
            total_short_size: Amount::zero(),
            total_volume: Amount::zero(),
        }
    }

    fn record_open(&mut self, position: &Position) {
        if position.is_long {
            self.total_long_size = self.total_long_size.add(position.size);
        } else {
            self.total_short_size = self.total_short_size.add(position.size);
        }
        self.total_volume = self.total_volume.add(position.size);
    }

    fn record_close(&mut self, position: &Position) {
        if position.is_long {
            self.total_long_size = self.total_long_size.sub(position.size);
        } else {
            self.total_short_size = self.total_short_size.sub(position.size);
        }
        self.total_volume = self.total_volume.add(position.size);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerpetualManager {
    admin: Address,
    address: Address,
    vault: Vault,
    positions: HashMap<Address, Position>,
    paused: bool,
    limits: PositionLimits,
    stats: ExposureStats,
}

impl PerpetualManager {
    // 12.2: the link step. consumes the vault and repoints its authorized caller
    // at the manager's address in the same move, so there is no state in which
    // one side of the relationship is set and the other is not.
    pub fn link(mut vault: Vault, params: ManagerParams) -> Self {
        vault.set_authorized_caller(params.address);
        Self {
            admin: params.admin,
            address: params.address,
            vault,
            positions: HashMap::new(),
            paused: false,
            limits: params.limits,
            stats: ExposureStats::new(),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn stats(&self) -> &ExposureStats {
        &self.stats
    }

    // 12.3: open. margin is assumed already custodied via deposit; this call
    // moves no funds and keeps no claim on the vault balance.
    pub fn open_position(
        &mut self,
        account: Address,
        side: Side,
        margin: Amount,
        leverage: u32,
        mark: Amount,
        now: Timestamp,
    ) -> Result<Position, LedgerError> {
        if self.paused {
            return Err(LedgerError::Paused);
        }
        if self.positions.contains_key(&account) {
            return Err(LedgerError::PositionExists);
        }
        let leverage = Leverage::new(leverage)
            .filter(|l| self.limits.leverage_in_band(l.get()))
            .ok_or(LedgerError::InvalidLeverage)?;
        if margin < self.limits.min_margin {
            return Err(LedgerError::MarginTooLow);
        }

        let position = Position::open(side, margin, leverage, mark, now);
        self.stats.record_open(&position);
        self.positions.insert(account, position.clone());
        Ok(position)
    }

    // 12.4: close clears the record outright. the margin field was only ever a
    // book entry on the position, never a debit against the vault, so nothing
    // is credited back.
    pub fn close_position(&mut self, account: Address) -> Result<Position, LedgerError> {
        if self.paused {
            return Err(LedgerError::Paused);
        }
        let position = self
            .positions
            .remove(&account)
            .ok_or(LedgerError::NoPosition)?;
        self.stats.record_close(&position);
        Ok(position)
    }

    // 12.5: operator-triggered liquidation. no margin-ratio rule is evaluated
    // here; the admin decides. clears the position and seizes the account's
    // entire vault balance.
    pub fn liquidate(
        &mut self,
        caller: Address,
        account: Address,
    ) -> Result<(Position, Amount), LedgerError> {
        if caller != self.admin {
            return Err(LedgerError::NotOwner);
        }
        let position = self
            .positions
            .remove(&account)
            .ok_or(LedgerError::NoPosition)?;
        self.stats.record_close(&position);
        let seized = self.vault.liquidate(self.address, account)?;
        Ok((position, seized))
    }

    // collateral pass-throughs. the vault checks the manager's identity on
    // every call even though the manager owns it.
    pub fn deposit(&mut self, account: Address, amount: Amount) -> Result<(), LedgerError> {
        self.vault.deposit(self.address, account, amount)
    }

    pub fn withdraw(&mut self, account: Address, amount: Amount) -> Result<(), LedgerError> {
        self.vault.withdraw(self.address, account, amount)
    }

    pub fn collateral(&self, account: Address) -> Amount {
        self.vault.collateral(account)
    }

    // zero-valued record for accounts with nothing open.
    pub fn position(&self, account: Address) -> Position {
        self.positions
            .get(&account)
            .cloned()
            .unwrap_or_else(Position::empty)
    }

    pub fn has_position(&self, account: Address) -> bool {
        self.positions.contains_key(&account)
    }

    pub fn open_position_count(&self) -> usize {
        self.positions.len()
    }

    pub fn pause(&mut self, caller: Address) -> Result<(), LedgerError> {
        if caller != self.admin {
            return Err(LedgerError::NotOwner);
        }
        self.paused = true;
        Ok(())
    }

    pub fn resume(&mut self, caller: Address) -> Result<(), LedgerError> {
        if caller != self.admin {
            return Err(LedgerError::NotOwner);
        }
        self.paused = false;
        Ok(())
    }
}
