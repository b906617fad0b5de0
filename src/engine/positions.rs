// 14.1 engine/positions.rs: the trading path. open/close/liquidate against the
// manager, with the oracle supplying the entry mark and every transition landing
// on the audit log.

use super::core::Exchange;
use crate::error::LedgerError;
use crate::events::{
    EventPayload, PositionClosedEvent, PositionLiquidatedEvent, PositionOpenedEvent,
};
use crate::position::Position;
use crate::types::{Address, Amount, Side};

impl Exchange {
    pub fn open_position(
        &mut self,
        account: Address,
        side: Side,
        margin: Amount,
        leverage: u32,
    ) -> Result<Position, LedgerError> {
        let mark = self.oracle.price();
        let now = self.current_time;
        let position = self
            .manager
            .open_position(account, side, margin, leverage, mark, now)?;

        self.emit_event(EventPayload::PositionOpened(PositionOpenedEvent {
            account,
            side,
            margin: position.margin,
            size: position.size,
            leverage: position.leverage,
            entry_price: position.entry_price,
        }));
        Ok(position)
    }

    pub fn close_position(&mut self, account: Address) -> Result<Position, LedgerError> {
        let position = self.manager.close_position(account)?;

        self.emit_event(EventPayload::PositionClosed(PositionClosedEvent {
            account,
            margin: position.margin,
            size: position.size,
        }));
        Ok(position)
    }

    // operator-triggered. clears the position and seizes the account's entire
    // vault balance.
    pub fn liquidate(&mut self, caller: Address, account: Address) -> Result<Amount, LedgerError> {
        let (position, seized) = self.manager.liquidate(caller, account)?;

        self.emit_event(EventPayload::PositionLiquidated(PositionLiquidatedEvent {
            account,
            size: position.size,
            collateral_seized: seized,
        }));
        Ok(seized)
    }
}
