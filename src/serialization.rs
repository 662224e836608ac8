/// serialization support for ledgers
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::events::EventStore;
use crate::ledger::LineOfCredit;
use crate::statement::StatementSummary;
use crate::transaction::{fold_log, Transaction};
use crate::types::{Day, LedgerId};
use crate::view::View;

/// serializable view of a ledger's current state
#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub id: LedgerId,
    pub credit_limit: Money,
    pub apr: Rate,
    pub balance: Money,
    pub interest_total: Money,
    pub payoff_quote: Money,
    pub available_credit: Money,
    pub current_day: Day,
    pub statement_open_day: Day,
    pub transaction_count: usize,
    pub statements_closed: usize,
}

impl LedgerSnapshot {
    pub fn from_ledger(ledger: &LineOfCredit) -> Self {
        let view = ledger.view();
        LedgerSnapshot {
            id: ledger.id(),
            credit_limit: ledger.credit_limit(),
            apr: ledger.apr(),
            balance: view.balance(),
            interest_total: view.interest(),
            payoff_quote: view.payoff(),
            available_credit: ledger.credit_limit() - view.balance(),
            current_day: view.day(),
            statement_open_day: ledger.statement_open_day(),
            transaction_count: ledger.transaction_count(),
            statements_closed: ledger.statements().len(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// everything needed to restore a ledger; the statement-open view is re-derived
#[derive(Debug, Serialize, Deserialize)]
struct LedgerRecord {
    id: LedgerId,
    credit_limit: Money,
    apr: Rate,
    transactions: Vec<Transaction>,
    statement_open_index: usize,
    #[serde(default)]
    statements: Vec<StatementSummary>,
}

impl LineOfCredit {
    /// pretty json snapshot for debugging and monitoring
    pub fn json(&self) -> String {
        LedgerSnapshot::from_ledger(self)
            .to_json_pretty()
            .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }

    /// serialize the full ledger, log included
    pub fn to_json(&self) -> Result<String> {
        let record = LedgerRecord {
            id: self.id,
            credit_limit: self.credit_limit,
            apr: self.apr,
            transactions: self.transactions.clone(),
            statement_open_index: self.statement_open_index,
            statements: self.statements.clone(),
        };
        Ok(serde_json::to_string(&record)?)
    }

    /// restore a ledger written by `to_json`, checking the log's invariants
    pub fn from_json(json: &str) -> Result<Self> {
        let record: LedgerRecord = serde_json::from_str(json)?;
        crate::config::LedgerConfig::new(record.credit_limit, record.apr).validate()?;
        verify_log(&record.transactions, record.credit_limit, record.statement_open_index)?;

        let statement_open_view =
            fold_log(&record.transactions[..=record.statement_open_index], View::ZERO);

        Ok(Self {
            id: record.id,
            credit_limit: record.credit_limit,
            apr: record.apr,
            transactions: record.transactions,
            statement_open_index: record.statement_open_index,
            statement_open_view,
            statements: record.statements,
            events: EventStore::new(),
        })
    }
}

fn invalid(message: impl Into<String>) -> LedgerError {
    LedgerError::InvalidArgument {
        message: message.into(),
    }
}

fn verify_log(transactions: &[Transaction], credit_limit: Money, statement_open_index: usize) -> Result<()> {
    match transactions.first() {
        Some(seed) if *seed == Transaction::balance(Money::ZERO, 0) => {}
        Some(_) => return Err(invalid("log must start with the zero seed entry")),
        None => return Err(invalid("log is empty")),
    }

    match transactions.get(statement_open_index) {
        Some(Transaction::Interest { .. }) => {}
        Some(Transaction::Balance { .. }) if statement_open_index == 0 => {}
        Some(_) => return Err(invalid("statement must open on a statement close")),
        None => return Err(invalid(format!("statement index {statement_open_index} out of range"))),
    }

    let mut view = View::ZERO;
    for (index, transaction) in transactions.iter().enumerate() {
        if transaction.day() < view.day() {
            return Err(LedgerError::Continuity {
                current_day: view.day(),
                requested_day: transaction.day(),
            });
        }
        view = transaction.fold(view);
        if view.balance().is_negative() || view.balance() > credit_limit {
            return Err(invalid(format!("balance {} out of bounds at entry {index}", view.balance())));
        }
    }

    Ok(())
}
