use std::sync::Arc;

use parking_lot::Mutex;

use crate::decimal::Money;
use crate::errors::Result;
use crate::ledger::LineOfCredit;
use crate::statement::StatementSummary;
use crate::types::{Day, PaymentApplication};
use crate::view::View;

/// Cloneable handle to a ledger shared between threads.
///
/// Each operation holds the lock across its checks and its append, so two
/// withdrawals can never both pass the credit check against the same balance.
#[derive(Debug, Clone)]
pub struct SharedLineOfCredit {
    inner: Arc<Mutex<LineOfCredit>>,
}

impl SharedLineOfCredit {
    pub fn new(ledger: LineOfCredit) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn withdraw(&self, amount: Money, day: Day) -> Result<()> {
        self.inner.lock().withdraw(amount, day)
    }

    pub fn pay(&self, amount: Money, day: Day) -> Result<PaymentApplication> {
        self.inner.lock().pay(amount, day)
    }

    pub fn close_statement(&self, day: Day) -> Result<StatementSummary> {
        self.inner.lock().close_statement(day)
    }

    pub fn view(&self) -> View {
        self.inner.lock().view()
    }

    /// run a read-only closure against the ledger under the lock
    pub fn with<R>(&self, f: impl FnOnce(&LineOfCredit) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }
}
