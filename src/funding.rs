// 6.0: funding accrual ledger. deliberately minimal: each owner call bumps the
// caller's own payment counter by exactly one unit. not a rate * notional * time
// settlement, just the book of record for how many accrual ticks each address
// has been charged.

use crate::auth::AuthorizationContext;
use crate::error::LedgerError;
use crate::types::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingRate {
    auth: AuthorizationContext,
    payments: HashMap<Address, u64>,
}

impl FundingRate {
    pub fn new(owner: Address) -> Self {
        Self {
            auth: AuthorizationContext::new(owner),
            payments: HashMap::new(),
        }
    }

    pub fn owner(&self) -> Address {
        self.auth.owner()
    }

    // increments the caller's own counter. the caller must be the owner, so in
    // practice this accrues against the operator address driving the ledger.
    pub fn update_funding(&mut self, caller: Address) -> Result<u64, LedgerError> {
        self.auth.require_owner(caller)?;
        let counter = self.payments.entry(caller).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }

    pub fn funding_payment(&self, account: Address) -> u64 {
        self.payments.get(&account).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_callers_counter() {
        let mut funding = FundingRate::new(Address(1));

        assert_eq!(funding.update_funding(Address(1)).unwrap(), 1);
        assert_eq!(funding.update_funding(Address(1)).unwrap(), 2);
        assert_eq!(funding.funding_payment(Address(1)), 2);
    }

    #[test]
    fn unknown_account_defaults_to_zero() {
        let mut funding = FundingRate::new(Address(1));
        funding.update_funding(Address(1)).unwrap();

        assert_eq!(funding.funding_payment(Address(1)), 1);
        assert_eq!(funding.funding_payment(Address(2)), 0);
    }

    #[test]
    fn non_owner_rejected() {
        let mut funding = FundingRate::new(Address(1));
        let err = funding.update_funding(Address(2)).unwrap_err();
        assert_eq!(err.to_string(), "Not owner");
        assert_eq!(funding.funding_payment(Address(2)), 0);
    }
}
