// perp-ledger: leveraged perpetuals accounting ledger.
// custody-first architecture: collateral safety and access control take priority.
// all computation is deterministic with no external I/O.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: Address, Amount, Leverage, Side, ParamKey
//   2.x  error.rs: the crate-wide error enum with fixed reason strings
//   3.x  auth.rs: owner gate and single-authorized-caller gate
//   4.x  oracle.rs: reference price, owner-writable
//   5.x  fees.rs: fee revenue accumulator with payer attribution
//   6.x  funding.rs: per-account funding accrual counter
//   7.x  insurance.rs: loss-absorption reserve
//   8.x  governance.rs: key -> integer parameter store
//   9.x  vault.rs: collateral custody behind one authorized caller
//   10.x position.rs: leveraged position record + pnl helper
//   11.x config.rs: identities, position limits, log bounds
//   12.x manager.rs: position state machine, vault ownership, link step
//   13.x events.rs: state transition events for audit
//   14.x engine/: exchange aggregate: core, trading path, operator surface

// ledgers
pub mod fees;
pub mod funding;
pub mod governance;
pub mod insurance;
pub mod manager;
pub mod oracle;
pub mod position;
pub mod vault;

// shared machinery
pub mod auth;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod types;

// re exports for convenience
pub use auth::{AuthorizationContext, AuthorizedCaller};
pub use config::{ExchangeConfig, PositionLimits};
pub use engine::Exchange;
pub use error::{ErrorKind, LedgerError};
pub use events::{Event, EventId, EventPayload};
pub use fees::FeeManager;
pub use funding::FundingRate;
pub use governance::Governance;
pub use insurance::InsuranceFund;
pub use manager::{ExposureStats, ManagerParams, PerpetualManager};
pub use oracle::PriceOracle;
pub use position::Position;
pub use types::{Address, Amount, Leverage, ParamKey, Side, Timestamp};
pub use vault::Vault;
