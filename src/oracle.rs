// 4.0: reference price ledger. one scalar mark price, owner-writable, read by anyone.
// no plausibility or monotonicity checks here; whatever the owner posts is the price.

use crate::auth::AuthorizationContext;
use crate::error::LedgerError;
use crate::types::{Address, Amount, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceOracle {
    auth: AuthorizationContext,
    price: Amount,
    last_update: Timestamp,
}

impl PriceOracle {
    pub fn new(owner: Address, initial_price: Amount, now: Timestamp) -> Self {
        Self {
            auth: AuthorizationContext::new(owner),
            price: initial_price,
            last_update: now,
        }
    }

    pub fn owner(&self) -> Address {
        self.auth.owner()
    }

    pub fn set_price(
        &mut self,
        caller: Address,
        value: Amount,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        self.auth.require_owner(caller)?;
        self.price = value;
        self.last_update = now;
        Ok(())
    }

    pub fn price(&self) -> Amount {
        self.price
    }

    pub fn last_update(&self) -> Timestamp {
        self.last_update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn oracle() -> PriceOracle {
        PriceOracle::new(Address(1), Amount::new(dec!(1234)), Timestamp::from_millis(0))
    }

    #[test]
    fn initial_price_and_owner() {
        let oracle = oracle();
        assert_eq!(oracle.price().value(), dec!(1234));
        assert_eq!(oracle.owner(), Address(1));
    }

    #[test]
    fn owner_overwrites_price() {
        let mut oracle = oracle();
        oracle
            .set_price(Address(1), Amount::new(dec!(4321)), Timestamp::from_millis(5))
            .unwrap();
        assert_eq!(oracle.price().value(), dec!(4321));
        assert_eq!(oracle.last_update(), Timestamp::from_millis(5));
    }

    #[test]
    fn non_owner_rejected() {
        let mut oracle = oracle();
        let err = oracle
            .set_price(Address(2), Amount::new(dec!(1111)), Timestamp::from_millis(5))
            .unwrap_err();
        assert_eq!(err, LedgerError::NotOwner);
        assert_eq!(err.to_string(), "Not owner");
        // failed call left the price untouched
        assert_eq!(oracle.price().value(), dec!(1234));
    }
}
