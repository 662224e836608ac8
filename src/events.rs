use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{Day, LedgerId};

/// all events that can be emitted by a ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    LedgerOpened {
        ledger_id: LedgerId,
        credit_limit: Money,
        apr: Rate,
        timestamp: DateTime<Utc>,
    },
    FundsWithdrawn {
        ledger_id: LedgerId,
        amount: Money,
        day: Day,
        new_balance: Money,
        available_credit: Money,
        timestamp: DateTime<Utc>,
    },
    PaymentReceived {
        ledger_id: LedgerId,
        amount: Money,
        day: Day,
        applied_to_interest: Money,
        applied_to_principal: Money,
        timestamp: DateTime<Utc>,
    },
    StatementClosed {
        ledger_id: LedgerId,
        open_day: Day,
        close_day: Day,
        interest_charged: Money,
        interest_total: Money,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
