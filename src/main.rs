//! Perpetuals Accounting Ledger Simulation.
//!
//! Walks the full ledger lifecycle: collateral custody, position open/close,
//! access-control rejections, funding accrual, and insurance coverage.

use perp_ledger::*;
use rust_decimal_macros::dec;

fn main() {
    println!("Perpetuals Accounting Ledger Simulation");
    println!("Single Authorized Caller, One Position Per Account\n");

    scenario_1_custody();
    scenario_2_position_lifecycle();
    scenario_3_access_control();
    scenario_4_operator_books();
    scenario_5_liquidation();

    println!("\nAll simulations completed successfully.");
}

/// Deposit and withdraw through the linked manager.
fn scenario_1_custody() {
    println!("Scenario 1: Collateral Custody\n");

    let mut exchange = Exchange::new(ExchangeConfig::default());
    let alice = Address(7);

    exchange.deposit(alice, Amount::new(dec!(1000))).unwrap();
    println!("  Alice deposits 1000, balance: {}", exchange.collateral(alice));

    exchange.withdraw(alice, Amount::new(dec!(500))).unwrap();
    println!("  Alice withdraws 500, balance: {}", exchange.collateral(alice));

    let err = exchange.withdraw(alice, Amount::new(dec!(9999))).unwrap_err();
    println!("  Overdraw rejected: {}\n", err);
}

/// Open, inspect, close.
fn scenario_2_position_lifecycle() {
    println!("Scenario 2: Position Lifecycle\n");

    let mut exchange = Exchange::new(ExchangeConfig::default());
    let operator = exchange.operator();
    let bob = Address(8);

    exchange.set_price(operator, Amount::new(dec!(50000))).unwrap();
    exchange.deposit(bob, Amount::new(dec!(1000))).unwrap();

    let pos = exchange
        .open_position(bob, Side::Long, Amount::new(dec!(1000)), 5)
        .unwrap();
    println!(
        "  Bob opens {}x {} @ {} (margin {}, size {})",
        pos.leverage, pos.side(), pos.entry_price, pos.margin, pos.size
    );

    exchange.set_price(operator, Amount::new(dec!(52000))).unwrap();
    let pnl = exchange.position(bob).unrealized_pnl(exchange.oracle().price());
    println!("  Mark moves to 52000, paper pnl: {}", pnl);

    let err = exchange
        .open_position(bob, Side::Short, Amount::new(dec!(500)), 2)
        .unwrap_err();
    println!("  Second open rejected: {}", err);

    exchange.close_position(bob).unwrap();
    println!("  Closed, margin now: {}\n", exchange.position(bob).margin);
}

/// Every gate in one pass.
fn scenario_3_access_control() {
    println!("Scenario 3: Access Control\n");

    let mut exchange = Exchange::new(ExchangeConfig::default());
    let stranger = Address(99);

    let err = exchange.set_price(stranger, Amount::new(dec!(1))).unwrap_err();
    println!("  Stranger sets price: {}", err);

    let err = exchange.update_funding(stranger).unwrap_err();
    println!("  Stranger accrues funding: {}", err);

    // a vault on its own rejects anyone but its registered caller
    let mut vault = Vault::new(Address(100));
    let err = vault
        .deposit(stranger, Address(7), Amount::new(dec!(100)))
        .unwrap_err();
    println!("  Stranger moves vault funds: {}\n", err);
}

/// The satellite books an operator drives directly.
fn scenario_4_operator_books() {
    println!("Scenario 4: Operator Books\n");

    let mut exchange = Exchange::new(ExchangeConfig::default());
    let operator = exchange.operator();
    let carol = Address(9);

    exchange
        .collect_fee(operator, carol, Amount::new(dec!(25)))
        .unwrap();
    println!("  Fees collected: {}", exchange.fee_manager().collected_fees());

    for _ in 0..3 {
        exchange.update_funding(operator).unwrap();
    }
    println!(
        "  Funding ticks against operator: {}",
        exchange.funding_rate().funding_payment(operator)
    );

    exchange.fund_insurance(operator, Amount::new(dec!(1000))).unwrap();
    exchange
        .cover_bad_debt(operator, carol, Amount::new(dec!(500)))
        .unwrap();
    println!(
        "  Insurance after covering 500: {}",
        exchange.insurance_fund().balance()
    );

    let err = exchange
        .cover_bad_debt(operator, carol, Amount::new(dec!(1000)))
        .unwrap_err();
    println!("  Over-cover rejected: {}", err);

    exchange
        .set_parameter(operator, ParamKey::new("feeRate"), 42)
        .unwrap();
    println!(
        "  feeRate parameter: {}\n",
        exchange.governance().parameter(&ParamKey::new("feeRate"))
    );
}

/// Operator-triggered liquidation seizes the whole balance.
fn scenario_5_liquidation() {
    println!("Scenario 5: Liquidation\n");

    let mut exchange = Exchange::new(ExchangeConfig::default());
    let operator = exchange.operator();
    let dave = Address(10);

    exchange.deposit(dave, Amount::new(dec!(2000))).unwrap();
    exchange
        .open_position(dave, Side::Short, Amount::new(dec!(1000)), 3)
        .unwrap();
    println!("  Dave: collateral 2000, short 3000 notional");

    let seized = exchange.liquidate(operator, dave).unwrap();
    println!("  Liquidated, seized: {}", seized);
    println!("  Collateral now: {}", exchange.collateral(dave));
    println!("  Events logged: {}", exchange.events().len());
}
