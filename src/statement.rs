use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::interest::InterestCalculation;
use crate::types::Day;

/// record of one closed statement period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub open_day: Day,
    pub close_day: Day,
    /// interest crystallized by this close
    pub interest_charged: Money,
    pub closing_balance: Money,
    /// cumulative interest outstanding after the close
    pub interest_total: Money,
    /// one entry per gap between transactions in the period, plus the tail gap
    pub accruals: Vec<InterestCalculation>,
    pub closed_at: DateTime<Utc>,
}

impl StatementSummary {
    /// zero when the close day does not come after the open day
    pub fn days_in_period(&self) -> Day {
        self.close_day.saturating_sub(self.open_day)
    }

    pub fn payoff(&self) -> Money {
        self.closing_balance.saturating_add(self.interest_total)
    }
}
