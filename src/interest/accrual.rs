use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::transaction::Transaction;
use crate::types::Day;
use crate::view::View;

/// simple daily interest on a balance between two days, rounded to cents.
///
/// The day count is signed: a `to` before `from` yields negative interest,
/// which the ledger never produces because it refuses backdated entries.
/// Amounts too large to represent are reported as invalid arguments.
pub fn simple_interest(balance: Money, apr: Rate, from: Day, to: Day) -> Result<Money> {
    let days = i64::from(to) - i64::from(from);
    Ok(balance.apply_rate(apr, days)?.round_cents())
}

/// fold transactions onto `start`, accruing interest on the balance carried
/// across every gap between consecutive days
pub fn accrue_log<'a, I>(transactions: I, start: View, apr: Rate) -> Result<View>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .try_fold(start, |view, transaction| transaction.accrue_interest(view, apr))
}

/// breakdown of one accrual step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestCalculation {
    pub principal_base: Money,
    pub from_day: Day,
    pub to_day: Day,
    pub interest_amount: Money,
}

impl InterestCalculation {
    pub fn between(balance: Money, apr: Rate, from: Day, to: Day) -> Result<Self> {
        Ok(Self {
            principal_base: balance,
            from_day: from,
            to_day: to,
            interest_amount: simple_interest(balance, apr, from, to)?,
        })
    }

    pub fn days(&self) -> i64 {
        i64::from(self.to_day) - i64::from(self.from_day)
    }
}
