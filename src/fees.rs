// 5.0: fee revenue ledger. a monotone accumulator plus per-payer attribution.
// the payer is recorded for the books, not debited: whatever moved the funds
// happened elsewhere, this ledger only tallies.

use crate::auth::AuthorizationContext;
use crate::error::LedgerError;
use crate::types::{Address, Amount};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeManager {
    auth: AuthorizationContext,
    collected: Amount,
    by_payer: HashMap<Address, Amount>,
}

impl FeeManager {
    pub fn new(owner: Address) -> Self {
        Self {
            auth: AuthorizationContext::new(owner),
            collected: Amount::zero(),
            by_payer: HashMap::new(),
        }
    }

    pub fn owner(&self) -> Address {
        self.auth.owner()
    }

    pub fn collect_fee(
        &mut self,
        caller: Address,
        payer: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.auth.require_owner(caller)?;
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount);
        }
        self.collected = self.collected.add(amount);
        let entry = self.by_payer.entry(payer).or_insert(Amount::ZERO);
        *entry = entry.add(amount);
        Ok(())
    }

    pub fn collected_fees(&self) -> Amount {
        self.collected
    }

    pub fn fees_paid_by(&self, payer: Address) -> Amount {
        self.by_payer.get(&payer).copied().unwrap_or(Amount::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accumulates_and_attributes() {
        let mut fees = FeeManager::new(Address(1));

        fees.collect_fee(Address(1), Address(7), Amount::new(dec!(100)))
            .unwrap();
        fees.collect_fee(Address(1), Address(7), Amount::new(dec!(25)))
            .unwrap();
        fees.collect_fee(Address(1), Address(8), Amount::new(dec!(50)))
            .unwrap();

        assert_eq!(fees.collected_fees().value(), dec!(175));
        assert_eq!(fees.fees_paid_by(Address(7)).value(), dec!(125));
        assert_eq!(fees.fees_paid_by(Address(8)).value(), dec!(50));
        assert_eq!(fees.fees_paid_by(Address(9)).value(), dec!(0));
    }

    #[test]
    fn non_owner_rejected() {
        let mut fees = FeeManager::new(Address(1));
        let err = fees
            .collect_fee(Address(2), Address(2), Amount::new(dec!(50)))
            .unwrap_err();
        assert_eq!(err.to_string(), "Not owner");
        assert_eq!(fees.collected_fees().value(), dec!(0));
    }
}
