// 7.0: loss-absorption reserve. deposits grow it, bad-debt coverage draws it down.
// a cover request larger than the reserve is rejected outright rather than paid
// partially, so the balance can never go negative.

use crate::auth::AuthorizationContext;
use crate::error::LedgerError;
use crate::types::{Address, Amount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceFund {
    auth: AuthorizationContext,
    balance: Amount,
    total_deposits: Amount,
    total_payouts: Amount,
}

impl InsuranceFund {
    pub fn new(owner: Address) -> Self {
        Self {
            auth: AuthorizationContext::new(owner),
            balance: Amount::zero(),
            total_deposits: Amount::zero(),
            total_payouts: Amount::zero(),
        }
    }

    pub fn owner(&self) -> Address {
        self.auth.owner()
    }

    pub fn deposit(&mut self, caller: Address, amount: Amount) -> Result<(), LedgerError> {
        self.auth.require_owner(caller)?;
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount);
        }
        self.balance = self.balance.add(amount);
        self.total_deposits = self.total_deposits.add(amount);
        Ok(())
    }

    // beneficiary is a routing/attribution target for the books; the reserve is
    // the only balance this ledger mutates.
    pub fn cover_bad_debt(
        &mut self,
        caller: Address,
        _beneficiary: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.auth.require_owner(caller)?;
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFund);
        }
        self.balance = self.balance.sub(amount);
        self.total_payouts = self.total_payouts.add(amount);
        Ok(())
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn can_cover(&self, amount: Amount) -> bool {
        amount <= self.balance
    }

    pub fn total_deposits(&self) -> Amount {
        self.total_deposits
    }

    pub fn total_payouts(&self) -> Amount {
        self.total_payouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deposit_then_cover() {
        let mut fund = InsuranceFund::new(Address(1));

        fund.deposit(Address(1), Amount::new(dec!(1000))).unwrap();
        assert_eq!(fund.balance().value(), dec!(1000));

        fund.cover_bad_debt(Address(1), Address(9), Amount::new(dec!(500)))
            .unwrap();
        assert_eq!(fund.balance().value(), dec!(500));
        assert_eq!(fund.total_payouts().value(), dec!(500));
    }

    #[test]
    fn cover_beyond_balance_rejected() {
        let mut fund = InsuranceFund::new(Address(1));
        fund.deposit(Address(1), Amount::new(dec!(100))).unwrap();

        let err = fund
            .cover_bad_debt(Address(1), Address(9), Amount::new(dec!(200)))
            .unwrap_err();
        assert_eq!(err, LedgerError::InsufficientFund);
        assert_eq!(err.to_string(), "Insufficient fund");
        // rejection is all-or-nothing
        assert_eq!(fund.balance().value(), dec!(100));
        assert_eq!(fund.total_payouts().value(), dec!(0));
    }

    #[test]
    fn non_owner_rejected() {
        let mut fund = InsuranceFund::new(Address(1));

        assert_eq!(
            fund.deposit(Address(2), Amount::new(dec!(100))),
            Err(LedgerError::NotOwner)
        );
        assert_eq!(
            fund.cover_bad_debt(Address(2), Address(9), Amount::new(dec!(1))),
            Err(LedgerError::NotOwner)
        );
        assert_eq!(fund.balance().value(), dec!(0));
    }

    #[test]
    fn can_cover_tracks_balance() {
        let mut fund = InsuranceFund::new(Address(1));
        fund.deposit(Address(1), Amount::new(dec!(50))).unwrap();

        assert!(fund.can_cover(Amount::new(dec!(50))));
        assert!(!fund.can_cover(Amount::new(dec!(51))));
    }
}
