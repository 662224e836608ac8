use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::Day;

/// Running totals of the transaction log as of some day.
///
/// Views are plain values: folding a transaction produces a new view and never
/// touches the one it started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct View {
    balance: Money,
    interest: Money,
    day: Day,
}

impl View {
    /// the view of an empty log at account opening
    pub const ZERO: View = View {
        balance: Money::ZERO,
        interest: Money::ZERO,
        day: 0,
    };

    pub fn new(balance: Money, interest: Money, day: Day) -> Self {
        Self { balance, interest, day }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn interest(&self) -> Money {
        self.interest
    }

    pub fn day(&self) -> Day {
        self.day
    }

    /// balance plus interest not yet paid, clamped at the largest amount
    pub fn payoff(&self) -> Money {
        self.balance.saturating_add(self.interest)
    }
}
