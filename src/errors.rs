use thiserror::Error;

use crate::decimal::Money;
use crate::types::Day;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("invalid argument: {message}")]
    InvalidArgument {
        message: String,
    },

    #[error("insufficient credit: available {available}, requested {requested}")]
    InsufficientCredit {
        available: Money,
        requested: Money,
    },

    #[error("insufficient balance: payoff {payoff}, requested {requested}")]
    InsufficientBalance {
        payoff: Money,
        requested: Money,
    },

    #[error("continuity violation: day {requested_day} precedes current day {current_day}")]
    Continuity {
        current_day: Day,
        requested_day: Day,
    },

    #[error("serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
