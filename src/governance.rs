// 8.0: named tunable parameters. a plain key -> integer store with upsert-only
// semantics; unset keys read as zero so callers never branch on presence.

use crate::auth::AuthorizationContext;
use crate::error::LedgerError;
use crate::types::{Address, ParamKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Governance {
    auth: AuthorizationContext,
    params: HashMap<ParamKey, i64>,
}

impl Governance {
    pub fn new(owner: Address) -> Self {
        Self {
            auth: AuthorizationContext::new(owner),
            params: HashMap::new(),
        }
    }

    pub fn owner(&self) -> Address {
        self.auth.owner()
    }

    pub fn set_parameter(
        &mut self,
        caller: Address,
        key: ParamKey,
        value: i64,
    ) -> Result<(), LedgerError> {
        self.auth.require_owner(caller)?;
        self.params.insert(key, value);
        Ok(())
    }

    pub fn parameter(&self, key: &ParamKey) -> i64 {
        self.params.get(key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_read_back() {
        let mut gov = Governance::new(Address(1));
        let key = ParamKey::new("feeRate");

        gov.set_parameter(Address(1), key.clone(), 42).unwrap();
        assert_eq!(gov.parameter(&key), 42);

        // upsert overwrites
        gov.set_parameter(Address(1), key.clone(), 43).unwrap();
        assert_eq!(gov.parameter(&key), 43);
    }

    #[test]
    fn unset_key_reads_zero() {
        let gov = Governance::new(Address(1));
        assert_eq!(gov.parameter(&ParamKey::new("maxLeverage")), 0);
    }

    #[test]
    fn non_owner_rejected() {
        let mut gov = Governance::new(Address(1));
        let key = ParamKey::new("feeRate");

        let err = gov.set_parameter(Address(2), key.clone(), 100).unwrap_err();
        assert_eq!(err.to_string(), "Not owner");
        assert_eq!(gov.parameter(&key), 0);
    }
}
