pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod ledger;
pub mod operation;
pub mod serialization;
pub mod shared;
pub mod statement;
pub mod transaction;
pub mod types;
pub mod view;

// re-export key types
pub use config::{LedgerConfig, LineOfCreditBuilder};
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use events::{Event, EventStore};
pub use interest::{accrue_log, simple_interest, InterestCalculation};
pub use ledger::LineOfCredit;
pub use operation::LedgerOperation;
pub use serialization::LedgerSnapshot;
pub use shared::SharedLineOfCredit;
pub use statement::StatementSummary;
pub use transaction::{fold_log, Transaction};
pub use types::{Day, LedgerId, PaymentApplication, TransactionKind};
pub use view::View;

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
