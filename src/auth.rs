// 3.0: access-control primitives. owner identity is explicit state passed in at
// construction, never ambient; every mutating call hands over the caller's address
// and gets it checked here before anything else happens.

use crate::error::LedgerError;
use crate::types::Address;
use serde::{Deserialize, Serialize};

// 3.1: single-owner gate. each satellite ledger holds one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationContext {
    owner: Address,
}

impl AuthorizationContext {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn require_owner(&self, caller: Address) -> Result<(), LedgerError> {
        if caller != self.owner {
            return Err(LedgerError::NotOwner);
        }
        Ok(())
    }
}

// 3.2: single-authorized-caller gate for the vault. unlike the owner gate the
// registered address is repointable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedCaller {
    caller: Address,
}

impl AuthorizedCaller {
    pub fn new(caller: Address) -> Self {
        Self { caller }
    }

    pub fn get(&self) -> Address {
        self.caller
    }

    pub fn repoint(&mut self, caller: Address) {
        self.caller = caller;
    }

    pub fn require(&self, caller: Address) -> Result<(), LedgerError> {
        if caller != self.caller {
            return Err(LedgerError::NotAuthorized);
        }
        Ok(())
    }
}
