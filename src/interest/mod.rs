pub mod accrual;

pub use accrual::{accrue_log, simple_interest, InterestCalculation};
