/// json state - journals, persistence and snapshots
use line_of_credit_rs::{LedgerConfig, LedgerOperation, LineOfCredit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json state ===\n");

    let config = LedgerConfig::from_json(r#"{"credit_limit": "1000", "apr": "0.35"}"#)?;
    let journal = LedgerOperation::journal_from_json(
        r#"[
            {"op": "withdraw", "amount": "500", "day": 0},
            {"op": "close_statement", "day": 30},
            {"op": "pay", "amount": "50", "day": 40}
        ]"#,
    )?;

    let loc = LineOfCredit::replay(config, &journal)?;
    println!("snapshot after replay:");
    println!("----------------------");
    println!("{}\n", loc.json());

    let stored = loc.to_json()?;
    println!("stored ledger:");
    println!("--------------");
    println!("{stored}\n");

    let mut restored = LineOfCredit::from_json(&stored)?;
    restored.close_statement(60)?;
    println!("restored and closed on day 60:");
    println!("------------------------------");
    println!("{}", restored.json());

    Ok(())
}
