// 14.2 engine/admin.rs: the operator surface. each call forwards the caller's
// identity to the target ledger, which enforces its own owner gate; the
// aggregate only adds audit events on success.

use super::core::Exchange;
use crate::error::LedgerError;
use crate::events::{
    BadDebtCoveredEvent, EventPayload, FeeCollectedEvent, FundingAccruedEvent,
    InsuranceDepositEvent, ParameterSetEvent, PriceUpdatedEvent, TradingPausedEvent,
    TradingResumedEvent,
};
use crate::types::{Address, Amount, ParamKey};

impl Exchange {
    pub fn set_price(&mut self, caller: Address, value: Amount) -> Result<(), LedgerError> {
        let now = self.current_time;
        self.oracle.set_price(caller, value, now)?;
        self.emit_event(EventPayload::PriceUpdated(PriceUpdatedEvent { price: value }));
        Ok(())
    }

    pub fn collect_fee(
        &mut self,
        caller: Address,
        payer: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.fees.collect_fee(caller, payer, amount)?;
        let total_collected = self.fees.collected_fees();
        self.emit_event(EventPayload::FeeCollected(FeeCollectedEvent {
            payer,
            amount,
            total_collected,
        }));
        Ok(())
    }

    pub fn update_funding(&mut self, caller: Address) -> Result<u64, LedgerError> {
        let payment_count = self.funding.update_funding(caller)?;
        self.emit_event(EventPayload::FundingAccrued(FundingAccruedEvent {
            account: caller,
            payment_count,
        }));
        Ok(payment_count)
    }

    pub fn fund_insurance(&mut self, caller: Address, amount: Amount) -> Result<(), LedgerError> {
        self.insurance.deposit(caller, amount)?;
        let new_balance = self.insurance.balance();
        self.emit_event(EventPayload::InsuranceDeposit(InsuranceDepositEvent {
            amount,
            new_balance,
        }));
        Ok(())
    }

    pub fn cover_bad_debt(
        &mut self,
        caller: Address,
        beneficiary: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.insurance.cover_bad_debt(caller, beneficiary, amount)?;
        let new_balance = self.insurance.balance();
        self.emit_event(EventPayload::BadDebtCovered(BadDebtCoveredEvent {
            beneficiary,
            amount,
            new_balance,
        }));
        Ok(())
    }

    pub fn set_parameter(
        &mut self,
        caller: Address,
        key: ParamKey,
        value: i64,
    ) -> Result<(), LedgerError> {
        self.governance.set_parameter(caller, key.clone(), value)?;
        self.emit_event(EventPayload::ParameterSet(ParameterSetEvent { key, value }));
        Ok(())
    }

    pub fn pause_trading(&mut self, caller: Address) -> Result<(), LedgerError> {
        self.manager.pause(caller)?;
        self.emit_event(EventPayload::TradingPaused(TradingPausedEvent { by: caller }));
        Ok(())
    }

    pub fn resume_trading(&mut self, caller: Address) -> Result<(), LedgerError> {
        self.manager.resume(caller)?;
        self.emit_event(EventPayload::TradingResumed(TradingResumedEvent {
            by: caller,
        }));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ExchangeConfig;
    use crate::engine::Exchange;
    use crate::error::LedgerError;
    use crate::types::{Address, Amount, ParamKey};
    use rust_decimal_macros::dec;

    fn exchange() -> Exchange {
        Exchange::new(ExchangeConfig::default())
    }

    #[test]
    fn operator_drives_every_satellite() {
        let mut exchange = exchange();
        let operator = exchange.operator();

        exchange
            .set_price(operator, Amount::new(dec!(4321)))
            .unwrap();
        assert_eq!(exchange.oracle().price().value(), dec!(4321));

        exchange
            .collect_fee(operator, Address(7), Amount::new(dec!(100)))
            .unwrap();
        assert_eq!(exchange.fee_manager().collected_fees().value(), dec!(100));

        exchange.update_funding(operator).unwrap();
        assert_eq!(exchange.funding_rate().funding_payment(operator), 1);

        exchange
            .fund_insurance(operator, Amount::new(dec!(1000)))
            .unwrap();
        exchange
            .cover_bad_debt(operator, Address(7), Amount::new(dec!(400)))
            .unwrap();
        assert_eq!(exchange.insurance_fund().balance().value(), dec!(600));

        exchange
            .set_parameter(operator, ParamKey::new("feeRate"), 42)
            .unwrap();
        assert_eq!(exchange.governance().parameter(&ParamKey::new("feeRate")), 42);
    }

    #[test]
    fn stranger_is_rejected_everywhere() {
        let mut exchange = exchange();
        let stranger = Address(99);

        assert_eq!(
            exchange.set_price(stranger, Amount::new(dec!(1))),
            Err(LedgerError::NotOwner)
        );
        assert_eq!(
            exchange.collect_fee(stranger, stranger, Amount::new(dec!(1))),
            Err(LedgerError::NotOwner)
        );
        assert_eq!(exchange.update_funding(stranger), Err(LedgerError::NotOwner));
        assert_eq!(
            exchange.fund_insurance(stranger, Amount::new(dec!(1))),
            Err(LedgerError::NotOwner)
        );
        assert_eq!(
            exchange.set_parameter(stranger, ParamKey::new("x"), 1),
            Err(LedgerError::NotOwner)
        );
        assert_eq!(exchange.pause_trading(stranger), Err(LedgerError::NotOwner));

        // nothing was logged for the failed calls
        assert!(exchange.events().is_empty());
    }

    #[test]
    fn pause_and_resume_round_trip() {
        let mut exchange = exchange();
        let operator = exchange.operator();

        exchange.pause_trading(operator).unwrap();
        assert!(exchange.manager().is_paused());

        let err = exchange
            .open_position(Address(7), crate::types::Side::Long, Amount::new(dec!(1000)), 5)
            .unwrap_err();
        assert_eq!(err, LedgerError::Paused);

        exchange.resume_trading(operator).unwrap();
        assert!(!exchange.manager().is_paused());
    }
}
