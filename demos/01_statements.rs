/// statements - interest over several periods with mid-period activity
use line_of_credit_rs::{LedgerError, LineOfCredit, Money, Rate};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    println!("=== statement cycles ===\n");

    let mut loc = LineOfCredit::new(Money::from_major(1_000), Rate::from_percentage(35))?;

    loc.withdraw(Money::from_major(500), 0)?;
    loc.pay(Money::from_major(200), 15)?;
    loc.withdraw(Money::from_major(100), 25)?;

    for close_day in [30, 60, 90] {
        let summary = loc.close_statement(close_day)?;
        println!(
            "days {:>3}-{:<3} charged {:>6}  balance {:>7}  interest owed {:>6}",
            summary.open_day,
            summary.close_day,
            summary.interest_charged,
            summary.closing_balance,
            summary.interest_total,
        );
        for accrual in &summary.accruals {
            println!(
                "    {:>3} days on {:>7} -> {}",
                accrual.days(),
                accrual.principal_base,
                accrual.interest_amount
            );
        }
    }

    // backdated entries are refused
    match loc.withdraw(Money::from_major(10), 45) {
        Err(LedgerError::Continuity { current_day, requested_day }) => {
            println!("\nrefused day {requested_day}: ledger is already at day {current_day}");
        }
        other => println!("\nunexpected: {other:?}"),
    }

    let payoff = loc.payoff_quote();
    let application = loc.pay(payoff, 90)?;
    println!(
        "paid off {payoff}: {} to interest, {} to principal",
        application.to_interest, application.to_principal
    );

    Ok(())
}
