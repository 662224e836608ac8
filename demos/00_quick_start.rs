/// quick start - minimal example to get started
use line_of_credit_rs::{LineOfCredit, Money, Rate};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    // a $1,000 line at 35% apr
    let mut loc = LineOfCredit::builder()
        .credit_limit(Money::from_major(1_000))
        .apr(Rate::from_percentage(35))
        .build()?;

    // draw on day 0, close the first statement on day 30
    loc.withdraw(Money::from_major(500), 0)?;
    loc.close_statement(30)?;

    // pay interest and some principal
    loc.pay(Money::from_major(100), 35)?;

    println!("{}", loc.json());

    Ok(())
}
