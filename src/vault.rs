// 9.0: collateral custody. per-account balances that only the single registered
// authorized caller may move. side effects are confined to one account's entry
// per call; the aggregate total tracks the sum of all entries.

use crate::auth::AuthorizedCaller;
use crate::error::LedgerError;
use crate::types::{Address, Amount};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vault {
    authorized: AuthorizedCaller,
    balances: HashMap<Address, Amount>,
    total_balance: Amount,
}

impl Vault {
    pub fn new(authorized_caller: Address) -> Self {
        Self {
            authorized: AuthorizedCaller::new(authorized_caller),
            balances: HashMap::new(),
            total_balance: Amount::zero(),
        }
    }

    pub fn authorized_caller(&self) -> Address {
        self.authorized.get()
    }

    // repoints the single caller allowed to move funds. intentionally ungated:
    // the source system shipped it that way and existing operator tooling relies
    // on it. the safe path is the manager's link step, which repoints while
    // taking ownership of the vault in the same move.
    pub fn set_authorized_caller(&mut self, caller: Address) {
        self.authorized.repoint(caller);
    }

    pub fn deposit(
        &mut self,
        caller: Address,
        account: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.authorized.require(caller)?;
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount);
        }
        let balance = self.balances.entry(account).or_insert(Amount::ZERO);
        *balance = balance.add(amount);
        self.total_balance = self.total_balance.add(amount);
        Ok(())
    }

    pub fn withdraw(
        &mut self,
        caller: Address,
        account: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.authorized.require(caller)?;
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount);
        }
        let balance = self.balances.entry(account).or_insert(Amount::ZERO);
        if amount > *balance {
            return Err(LedgerError::InsufficientCollateral);
        }
        *balance = balance.sub(amount);
        self.total_balance = self.total_balance.sub(amount);
        Ok(())
    }

    // zeroes the account's balance unconditionally. no partial liquidation.
    pub fn liquidate(&mut self, caller: Address, account: Address) -> Result<Amount, LedgerError> {
        self.authorized.require(caller)?;
        let seized = self
            .balances
            .insert(account, Amount::ZERO)
            .unwrap_or(Amount::ZERO);
        self.total_balance = self.total_balance.sub(seized);
        Ok(seized)
    }

    pub fn collateral(&self, account: Address) -> Amount {
        self.balances.get(&account).copied().unwrap_or(Amount::ZERO)
    }

    pub fn total_balance(&self) -> Amount {
        self.total_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const MANAGER: Address = Address(100);
    const TRADER: Address = Address(7);

    fn vault() -> Vault {
        Vault::new(MANAGER)
    }

    #[test]
    fn deposit_and_withdraw_round_trip() {
        let mut vault = vault();

        vault
            .deposit(MANAGER, TRADER, Amount::new(dec!(1000)))
            .unwrap();
        assert_eq!(vault.collateral(TRADER).value(), dec!(1000));

        vault
            .withdraw(MANAGER, TRADER, Amount::new(dec!(500)))
            .unwrap();
        assert_eq!(vault.collateral(TRADER).value(), dec!(500));
        assert_eq!(vault.total_balance().value(), dec!(500));
    }

    #[test]
    fn overdraw_rejected_and_balance_unchanged() {
        let mut vault = vault();
        vault
            .deposit(MANAGER, TRADER, Amount::new(dec!(100)))
            .unwrap();

        let err = vault
            .withdraw(MANAGER, TRADER, Amount::new(dec!(200)))
            .unwrap_err();
        assert_eq!(err, LedgerError::InsufficientCollateral);
        assert_eq!(err.to_string(), "Insufficient collateral");
        assert_eq!(vault.collateral(TRADER).value(), dec!(100));
    }

    #[test]
    fn unauthorized_callers_rejected() {
        let mut vault = vault();
        let stranger = Address(2);

        assert_eq!(
            vault.deposit(stranger, TRADER, Amount::new(dec!(100))),
            Err(LedgerError::NotAuthorized)
        );
        assert_eq!(
            vault.withdraw(stranger, TRADER, Amount::new(dec!(100))),
            Err(LedgerError::NotAuthorized)
        );
        assert_eq!(vault.liquidate(stranger, TRADER), Err(LedgerError::NotAuthorized));
        assert_eq!(vault.collateral(TRADER).value(), dec!(0));
    }

    #[test]
    fn liquidate_zeroes_the_account() {
        let mut vault = vault();
        vault
            .deposit(MANAGER, TRADER, Amount::new(dec!(100)))
            .unwrap();

        let seized = vault.liquidate(MANAGER, TRADER).unwrap();
        assert_eq!(seized.value(), dec!(100));
        assert_eq!(vault.collateral(TRADER).value(), dec!(0));
        assert_eq!(vault.total_balance().value(), dec!(0));

        // liquidating an empty account seizes nothing
        let seized = vault.liquidate(MANAGER, TRADER).unwrap();
        assert_eq!(seized.value(), dec!(0));
    }

    #[test]
    fn repoint_authorized_caller() {
        let mut vault = vault();
        vault.set_authorized_caller(Address(200));

        assert_eq!(
            vault.deposit(MANAGER, TRADER, Amount::new(dec!(1))),
            Err(LedgerError::NotAuthorized)
        );
        assert!(vault
            .deposit(Address(200), TRADER, Amount::new(dec!(1)))
            .is_ok());
    }

    #[test]
    fn unknown_account_reads_zero() {
        let vault = vault();
        assert_eq!(vault.collateral(Address(42)).value(), dec!(0));
    }

    #[test]
    fn negative_amounts_rejected() {
        let mut vault = vault();
        vault
            .deposit(MANAGER, TRADER, Amount::new(dec!(100)))
            .unwrap();

        assert_eq!(
            vault.deposit(MANAGER, TRADER, Amount::new(dec!(-5))),
            Err(LedgerError::InvalidAmount)
        );
        assert_eq!(
            vault.withdraw(MANAGER, TRADER, Amount::new(dec!(-5))),
            Err(LedgerError::InvalidAmount)
        );
        assert_eq!(vault.collateral(TRADER).value(), dec!(100));
    }
}
