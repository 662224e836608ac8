use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::ledger::LineOfCredit;

/// fixed terms of a line of credit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub credit_limit: Money,
    pub apr: Rate,
}

impl LedgerConfig {
    pub fn new(credit_limit: Money, apr: Rate) -> Self {
        Self { credit_limit, apr }
    }

    /// parse terms from json, e.g. `{"credit_limit": "1000", "apr": "0.35"}`.
    ///
    /// Malformed numbers are reported as invalid arguments, not serialization
    /// failures, since they are bad terms rather than a broken document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LedgerConfig =
            serde_json::from_str(json).map_err(|e| LedgerError::InvalidArgument {
                message: format!("malformed ledger config: {e}"),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.credit_limit.is_negative() {
            return Err(LedgerError::InvalidArgument {
                message: format!("credit_limit must be positive, got {}", self.credit_limit),
            });
        }
        if self.apr.is_negative() {
            return Err(LedgerError::InvalidArgument {
                message: format!("apr must be positive, got {}", self.apr.as_decimal()),
            });
        }
        Ok(())
    }
}

/// builder for creating lines of credit
#[derive(Debug, Default)]
pub struct LineOfCreditBuilder {
    credit_limit: Option<Money>,
    apr: Option<Rate>,
}

impl LineOfCreditBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credit_limit(mut self, limit: Money) -> Self {
        self.credit_limit = Some(limit);
        self
    }

    pub fn apr(mut self, apr: Rate) -> Self {
        self.apr = Some(apr);
        self
    }

    pub fn config(&self) -> Result<LedgerConfig> {
        let credit_limit = self.credit_limit.ok_or_else(|| LedgerError::InvalidArgument {
            message: "credit_limit is required".to_string(),
        })?;
        let apr = self.apr.ok_or_else(|| LedgerError::InvalidArgument {
            message: "apr is required".to_string(),
        })?;

        let config = LedgerConfig::new(credit_limit, apr);
        config.validate()?;
        Ok(config)
    }

    pub fn build(self) -> Result<LineOfCredit> {
        Ok(LineOfCredit::from_config(self.config()?))
    }
}
