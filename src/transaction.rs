use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::interest::InterestCalculation;
use crate::types::{Day, TransactionKind};
use crate::view::View;

/// A dated line item in the ledger's log.
///
/// `Balance` entries move principal (withdrawals are positive, principal
/// payments negative). `Interest` entries move the interest total (statement
/// charges are positive, interest payments negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transaction {
    Balance { amount: Money, day: Day },
    Interest { amount: Money, day: Day },
}

impl Transaction {
    pub fn balance(amount: Money, day: Day) -> Self {
        Transaction::Balance { amount, day }
    }

    pub fn interest(amount: Money, day: Day) -> Self {
        Transaction::Interest { amount, day }
    }

    pub fn amount(&self) -> Money {
        match *self {
            Transaction::Balance { amount, .. } | Transaction::Interest { amount, .. } => amount,
        }
    }

    pub fn day(&self) -> Day {
        match *self {
            Transaction::Balance { day, .. } | Transaction::Interest { day, .. } => day,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Balance { .. } => TransactionKind::Balance,
            Transaction::Interest { .. } => TransactionKind::Interest,
        }
    }

    /// apply this entry to a view, moving it to this entry's day
    pub fn fold(&self, view: View) -> View {
        match *self {
            Transaction::Balance { amount, day } => {
                View::new(view.balance() + amount, view.interest(), day)
            }
            Transaction::Interest { amount, day } => {
                View::new(view.balance(), view.interest() + amount, day)
            }
        }
    }

    /// fold, and also charge interest on the balance held before this entry
    pub fn accrue_interest(&self, view: View, apr: Rate) -> Result<View> {
        Ok(self.accrue_interest_detailed(view, apr)?.0)
    }

    /// like `accrue_interest`, also returning the charge for the gap
    pub fn accrue_interest_detailed(&self, view: View, apr: Rate) -> Result<(View, InterestCalculation)> {
        let calculation = InterestCalculation::between(view.balance(), apr, view.day(), self.day())?;
        let next = self.fold(view);
        let interest = next
            .interest()
            .checked_add(calculation.interest_amount)
            .ok_or_else(|| LedgerError::InvalidArgument {
                message: format!("accrued interest overflows on day {}", self.day()),
            })?;

        Ok((View::new(next.balance(), interest, next.day()), calculation))
    }
}

/// fold transactions onto `start` without accruing interest
pub fn fold_log<'a, I>(transactions: I, start: View) -> View
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(start, |view, transaction| transaction.fold(view))
}
