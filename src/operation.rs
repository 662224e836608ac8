use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::Day;

/// a client request against a ledger, as recorded in a journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LedgerOperation {
    Withdraw { amount: Money, day: Day },
    Pay { amount: Money, day: Day },
    CloseStatement { day: Day },
}

impl LedgerOperation {
    pub fn day(&self) -> Day {
        match *self {
            LedgerOperation::Withdraw { day, .. }
            | LedgerOperation::Pay { day, .. }
            | LedgerOperation::CloseStatement { day } => day,
        }
    }

    /// parse a json array of operations
    pub fn journal_from_json(json: &str) -> crate::errors::Result<Vec<LedgerOperation>> {
        Ok(serde_json::from_str(json)?)
    }
}
