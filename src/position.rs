// 10.0: leveraged position record. size = margin * leverage at creation, fixed
// for the life of the position. a zero-valued record doubles as "no position"
// on the read path.

use crate::types::{Amount, Leverage, Side, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub margin: Amount,
    pub size: Amount,
    pub is_long: bool,
    pub entry_price: Amount,
    pub leverage: u32,
    pub opened_at: Timestamp,
}

impl Position {
    pub fn open(
        side: Side,
        margin: Amount,
        leverage: Leverage,
        entry_price: Amount,
        now: Timestamp,
    ) -> Self {
        Self {
            margin,
            size: margin.mul(leverage.as_decimal()),
            is_long: side.is_long(),
            entry_price,
            leverage: leverage.get(),
            opened_at: now,
        }
    }

    // the all-zero record returned for accounts with nothing open.
    pub fn empty() -> Self {
        Self {
            margin: Amount::zero(),
            size: Amount::zero(),
            is_long: false,
            entry_price: Amount::zero(),
            leverage: 0,
            opened_at: Timestamp::from_millis(0),
        }
    }

    pub fn side(&self) -> Side {
        if self.is_long {
            Side::Long
        } else {
            Side::Short
        }
    }

    // 10.1: paper gains/losses at a given mark. size here is notional in quote
    // currency, so the pnl is size * (mark - entry) / entry, signed by direction.
    // zero entry (position opened against an unwired oracle) reads as zero pnl.
    pub fn unrealized_pnl(&self, mark: Amount) -> Amount {
        if self.entry_price.is_zero() {
            return Amount::zero();
        }
        let move_fraction = (mark.value() - self.entry_price.value()) / self.entry_price.value();
        self.size.mul(move_fraction * self.side().sign())
    }

    // margin plus paper pnl. what the account would keep if marked right now.
    pub fn margin_value(&self, mark: Amount) -> Amount {
        self.margin.add(self.unrealized_pnl(mark))
    }

    pub fn notional(&self) -> Decimal {
        self.size.value()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}
