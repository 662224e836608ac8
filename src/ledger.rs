use chrono::Utc;
use uuid::Uuid;

use crate::config::{LedgerConfig, LineOfCreditBuilder};
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::events::{Event, EventStore};
use crate::operation::LedgerOperation;
use crate::statement::StatementSummary;
use crate::transaction::{fold_log, Transaction};
use crate::types::{Day, LedgerId, PaymentApplication};
use crate::view::View;

/// A line of credit backed by an append-only transaction log.
///
/// Assumptions:
/// * transactions arrive in day order; anything dated before the current day is refused
/// * days are counts from account opening, not calendar dates
/// * statements close only when asked to
/// * apr and credit limit are fixed for the life of the ledger
/// * payments clear interest before any principal
#[derive(Debug, Clone)]
pub struct LineOfCredit {
    pub(crate) id: LedgerId,
    pub(crate) credit_limit: Money,
    pub(crate) apr: Rate,
    pub(crate) transactions: Vec<Transaction>,
    /// first transaction of the open statement period
    pub(crate) statement_open_index: usize,
    /// view of the log up to and including `statement_open_index`
    pub(crate) statement_open_view: View,
    pub(crate) statements: Vec<StatementSummary>,
    pub(crate) events: EventStore,
}

impl LineOfCredit {
    /// open a ledger, rejecting a negative credit limit or apr
    pub fn new(credit_limit: Money, apr: Rate) -> Result<Self> {
        let config = LedgerConfig::new(credit_limit, apr);
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// open a ledger from float terms, rejecting NaN and infinities as well
    pub fn from_f64(credit_limit: f64, apr: f64) -> Result<Self> {
        Self::new(Money::try_from_f64(credit_limit)?, Rate::try_from_f64(apr)?)
    }

    pub fn builder() -> LineOfCreditBuilder {
        LineOfCreditBuilder::new()
    }

    /// open a ledger from already validated terms
    pub(crate) fn from_config(config: LedgerConfig) -> Self {
        let id = Uuid::new_v4();
        let mut events = EventStore::new();
        events.emit(Event::LedgerOpened {
            ledger_id: id,
            credit_limit: config.credit_limit,
            apr: config.apr,
            timestamp: Utc::now(),
        });

        tracing::debug!(ledger_id = %id, credit_limit = %config.credit_limit, apr = %config.apr, "ledger opened");

        Self {
            id,
            credit_limit: config.credit_limit,
            apr: config.apr,
            // the seed entry means every fold has a prior view to start from
            transactions: vec![Transaction::balance(Money::ZERO, 0)],
            statement_open_index: 0,
            statement_open_view: View::ZERO,
            statements: Vec::new(),
            events,
        }
    }

    /// rebuild a ledger by running a journal of operations against fresh terms
    pub fn replay<'a, I>(config: LedgerConfig, operations: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a LedgerOperation>,
    {
        config.validate()?;
        let mut ledger = Self::from_config(config);
        for operation in operations {
            ledger.apply(operation)?;
        }
        Ok(ledger)
    }

    /// run a single journal operation
    pub fn apply(&mut self, operation: &LedgerOperation) -> Result<()> {
        match *operation {
            LedgerOperation::Withdraw { amount, day } => self.withdraw(amount, day),
            LedgerOperation::Pay { amount, day } => self.pay(amount, day).map(|_| ()),
            LedgerOperation::CloseStatement { day } => self.close_statement(day).map(|_| ()),
        }
    }

    pub fn id(&self) -> LedgerId {
        self.id
    }

    pub fn config(&self) -> LedgerConfig {
        LedgerConfig::new(self.credit_limit, self.apr)
    }

    pub fn apr(&self) -> Rate {
        self.apr
    }

    pub fn credit_limit(&self) -> Money {
        self.credit_limit
    }

    /// the whole log, seed entry included
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// closed statements, oldest first
    pub fn statements(&self) -> &[StatementSummary] {
        &self.statements
    }

    /// current running totals, folded from the whole log
    pub fn view(&self) -> View {
        fold_log(&self.transactions, View::ZERO)
    }

    pub fn balance(&self) -> Money {
        self.view().balance()
    }

    pub fn current_day(&self) -> Day {
        self.view().day()
    }

    pub fn interest_total(&self) -> Money {
        self.view().interest()
    }

    /// payoff for the current day, not counting interest accruing in the open period
    pub fn payoff_quote(&self) -> Money {
        self.view().payoff()
    }

    pub fn available_credit(&self) -> Money {
        self.credit_limit - self.balance()
    }

    pub fn statement_open_day(&self) -> Day {
        self.transactions[self.statement_open_index].day()
    }

    pub fn withdraw(&mut self, amount: Money, day: Day) -> Result<()> {
        if amount.is_negative() {
            return Err(self.reject("withdraw", LedgerError::InvalidArgument {
                message: "cannot withdraw negative amounts".to_string(),
            }));
        }

        let view = self.view();
        let new_balance = match view.balance().checked_add(amount) {
            Some(new_balance) if new_balance <= self.credit_limit => new_balance,
            _ => {
                return Err(self.reject("withdraw", LedgerError::InsufficientCredit {
                    available: self.credit_limit - view.balance(),
                    requested: amount,
                }));
            }
        };
        self.check_continuity("withdraw", view.day(), day)?;

        self.append(Transaction::balance(amount, day));

        self.events.emit(Event::FundsWithdrawn {
            ledger_id: self.id,
            amount,
            day,
            new_balance,
            available_credit: self.credit_limit - new_balance,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// pay down the ledger, interest first, then principal
    pub fn pay(&mut self, amount: Money, day: Day) -> Result<PaymentApplication> {
        if amount.is_negative() {
            return Err(self.reject("pay", LedgerError::InvalidArgument {
                message: "cannot pay negative amounts".to_string(),
            }));
        }

        let view = self.view();
        if amount > view.payoff() {
            return Err(self.reject("pay", LedgerError::InsufficientBalance {
                payoff: view.payoff(),
                requested: amount,
            }));
        }
        self.check_continuity("pay", view.day(), day)?;

        let interest_owed = view.interest().is_positive();
        let to_interest = if interest_owed {
            amount.min(view.interest())
        } else {
            Money::ZERO
        };
        let application = PaymentApplication {
            to_interest,
            to_principal: amount - to_interest,
        };

        // any payment made while interest is owed books an interest entry, even a zero one
        if interest_owed {
            self.append(Transaction::interest(Money::ZERO - application.to_interest, day));
        }
        if application.to_principal.is_positive() {
            self.append(Transaction::balance(-application.to_principal, day));
        }

        self.events.emit(Event::PaymentReceived {
            ledger_id: self.id,
            amount,
            day,
            applied_to_interest: application.to_interest,
            applied_to_principal: application.to_principal,
            timestamp: Utc::now(),
        });

        Ok(application)
    }

    /// Close the open statement period on `day`.
    ///
    /// Interest is accrued over every transaction since the period opened, plus
    /// the gap from the last of them up to `day`, and booked as one interest
    /// entry. Only the transactions of the open period are walked. Interest too
    /// large to represent fails with `InvalidArgument` and leaves the log as is.
    pub fn close_statement(&mut self, day: Day) -> Result<StatementSummary> {
        let current = self.view();
        self.check_continuity("close_statement", current.day(), day)?;

        let open_day = self.statement_open_day();
        let mut accruals = Vec::new();
        let mut accrued = self.statement_open_view;
        for transaction in &self.transactions[self.statement_open_index + 1..] {
            let (next, calculation) = transaction
                .accrue_interest_detailed(accrued, self.apr)
                .map_err(|err| self.reject("close_statement", err))?;
            if calculation.days() > 0 {
                accruals.push(calculation);
            }
            accrued = next;
        }

        // zero-amount entry on the close day picks up the tail of the period
        let (accrued, tail) = Transaction::balance(Money::ZERO, day)
            .accrue_interest_detailed(accrued, self.apr)
            .map_err(|err| self.reject("close_statement", err))?;
        if tail.days() > 0 {
            accruals.push(tail);
        }

        let charge = Transaction::interest(accrued.interest() - current.interest(), day);
        self.append(charge);

        self.statement_open_view = charge.fold(current);
        self.statement_open_index = self.transactions.len() - 1;

        let summary = StatementSummary {
            open_day,
            close_day: day,
            interest_charged: charge.amount(),
            closing_balance: self.statement_open_view.balance(),
            interest_total: self.statement_open_view.interest(),
            accruals,
            closed_at: Utc::now(),
        };

        tracing::info!(
            ledger_id = %self.id,
            open_day,
            close_day = day,
            interest_charged = %summary.interest_charged,
            interest_total = %summary.interest_total,
            "statement closed"
        );

        self.events.emit(Event::StatementClosed {
            ledger_id: self.id,
            open_day,
            close_day: day,
            interest_charged: summary.interest_charged,
            interest_total: summary.interest_total,
            timestamp: summary.closed_at,
        });
        self.statements.push(summary.clone());

        Ok(summary)
    }

    /// events emitted since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    fn append(&mut self, transaction: Transaction) {
        tracing::debug!(
            ledger_id = %self.id,
            kind = ?transaction.kind(),
            amount = %transaction.amount(),
            day = transaction.day(),
            "transaction appended"
        );
        self.transactions.push(transaction);
    }

    fn check_continuity(&self, operation: &str, current_day: Day, day: Day) -> Result<()> {
        if day < current_day {
            return Err(self.reject(operation, LedgerError::Continuity {
                current_day,
                requested_day: day,
            }));
        }
        Ok(())
    }

    fn reject(&self, operation: &str, err: LedgerError) -> LedgerError {
        tracing::warn!(ledger_id = %self.id, operation, error = %err, "operation rejected");
        err
    }
}

impl PartialEq for LineOfCredit {
    /// ledgers are equal when their terms and logs match; ids and events are ignored
    fn eq(&self, other: &Self) -> bool {
        self.credit_limit == other.credit_limit
            && self.apr == other.apr
            && self.transactions == other.transactions
            && self.statement_open_index == other.statement_open_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn loc() -> LineOfCredit {
        LineOfCredit::new(Money::from_major(1000), Rate::from_decimal(dec!(0.35))).unwrap()
    }

    fn cents(d: rust_decimal::Decimal) -> Money {
        Money::from_decimal(d)
    }

    #[test]
    fn test_attributes() {
        let loc = LineOfCredit::new(Money::from_major(1000), Rate::from_decimal(dec!(0.5))).unwrap();

        assert_eq!(loc.apr(), Rate::from_decimal(dec!(0.5)));
        assert_eq!(loc.credit_limit(), Money::from_major(1000));
        assert_eq!(loc.interest_total(), Money::ZERO);
        assert_eq!(loc.balance(), Money::ZERO);
    }

    #[test]
    fn test_fresh_ledger() {
        let loc = loc();

        assert_eq!(loc.balance(), Money::ZERO);
        assert_eq!(loc.interest_total(), Money::ZERO);
        assert_eq!(loc.current_day(), 0);
        assert_eq!(loc.transaction_count(), 1);
        assert_eq!(loc.statement_open_day(), 0);
        assert_eq!(loc.view(), View::ZERO);
    }

    #[test]
    fn test_sanity_checks() {
        let err = LineOfCredit::new(Money::from_major(-1000), Rate::from_decimal(dec!(0.5))).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidArgument { .. }));

        let err = LineOfCredit::new(Money::from_major(1000), Rate::from_decimal(dec!(-10.0))).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidArgument { .. }));

        let err = LineOfCredit::from_f64(1000.0, f64::NAN).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidArgument { .. }));

        let err = LineOfCredit::from_f64(f64::INFINITY, 0.35).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidArgument { .. }));

        // zero terms are allowed
        assert!(LineOfCredit::new(Money::ZERO, Rate::ZERO).is_ok());
    }

    #[test]
    fn test_transaction_count() {
        let mut loc = loc();
        assert_eq!(loc.transaction_count(), 1);

        loc.withdraw(Money::from_major(500), 0).unwrap();
        assert_eq!(loc.transaction_count(), 2);

        loc.pay(Money::from_major(200), 0).unwrap();
        assert_eq!(loc.transaction_count(), 3);

        let mut loc = self::loc();
        loc.close_statement(30).unwrap();
        assert_eq!(loc.transaction_count(), 2);
    }

    #[test]
    fn test_current_day() {
        let mut loc = loc();
        assert_eq!(loc.current_day(), 0);

        loc.withdraw(Money::from_major(500), 5).unwrap();
        assert_eq!(loc.current_day(), 5);

        loc.pay(Money::from_major(200), 10).unwrap();
        assert_eq!(loc.current_day(), 10);
    }

    #[test]
    fn test_statement_open_day() {
        let mut loc = loc();
        assert_eq!(loc.statement_open_day(), 0);

        loc.withdraw(Money::from_major(500), 15).unwrap();
        assert_eq!(loc.statement_open_day(), 0);

        loc.close_statement(30).unwrap();
        assert_eq!(loc.statement_open_day(), 30);
    }

    #[test]
    fn test_close_statement_adds_interest() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();

        let summary = loc.close_statement(30).unwrap();

        assert_eq!(loc.interest_total(), cents(dec!(14.38)));
        assert_eq!(summary.interest_charged, cents(dec!(14.38)));
        assert_eq!(summary.open_day, 0);
        assert_eq!(summary.close_day, 30);
        assert_eq!(summary.days_in_period(), 30);
        assert_eq!(summary.closing_balance, Money::from_major(500));
        assert_eq!(loc.balance(), Money::from_major(500));
    }

    #[test]
    fn test_close_statement_multiple_times() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();

        loc.close_statement(30).unwrap();
        assert_eq!(loc.interest_total(), cents(dec!(14.38)));

        loc.close_statement(60).unwrap();
        let expected = cents(dec!(14.38)) + cents(dec!(14.38));
        assert!((loc.interest_total() - expected).abs() <= cents(dec!(0.01)));
        assert_eq!(loc.statements().len(), 2);
    }

    #[test]
    fn test_close_statement_in_the_past() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 35).unwrap();

        let err = loc.close_statement(30).unwrap_err();
        assert_eq!(err, LedgerError::Continuity { current_day: 35, requested_day: 30 });
        assert_eq!(loc.transaction_count(), 2);
    }

    #[test]
    fn test_close_statement_with_activity_mid_period() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();
        loc.pay(Money::from_major(200), 15).unwrap();
        loc.withdraw(Money::from_major(100), 25).unwrap();

        let summary = loc.close_statement(30).unwrap();

        assert_eq!(loc.interest_total(), cents(dec!(11.99)));
        assert_eq!(summary.accruals.len(), 3);
        let summed = summary
            .accruals
            .iter()
            .fold(Money::ZERO, |acc, calc| acc + calc.interest_amount);
        assert_eq!(summed, summary.interest_charged);
    }

    #[test]
    fn test_close_statement_ignores_prior_periods() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();
        loc.close_statement(30).unwrap();

        // pay off the first statement's interest and some principal
        let application = loc.pay(Money::from_major(100), 30).unwrap();
        assert_eq!(application.to_interest, cents(dec!(14.38)));
        assert_eq!(application.to_principal, cents(dec!(85.62)));

        loc.close_statement(60).unwrap();

        // 414.38 * 0.35 / 365 * 30 = 11.92
        assert_eq!(loc.interest_total(), cents(dec!(11.92)));
        assert_eq!(loc.balance(), cents(dec!(414.38)));
    }

    #[test]
    fn test_withdraw_updates_balance() {
        let mut loc = loc();
        assert_eq!(loc.balance(), Money::ZERO);

        loc.withdraw(Money::from_major(500), 0).unwrap();
        assert_eq!(loc.balance(), Money::from_major(500));

        loc.withdraw(Money::from_major(250), 0).unwrap();
        assert_eq!(loc.balance(), Money::from_major(750));
        assert_eq!(loc.available_credit(), Money::from_major(250));
    }

    #[test]
    fn test_withdraw_over_credit_limit() {
        let mut loc = loc();
        let err = loc.withdraw(Money::from_major(5_000_000), 0).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientCredit { .. }));

        loc.withdraw(Money::from_major(500), 0).unwrap();
        let err = loc.withdraw(Money::from_major(550), 0).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientCredit {
            available: Money::from_major(500),
            requested: Money::from_major(550),
        });
        assert_eq!(loc.balance(), Money::from_major(500));

        // exactly up to the limit is fine
        loc.withdraw(Money::from_major(500), 0).unwrap();
        assert_eq!(loc.available_credit(), Money::ZERO);
    }

    #[test]
    fn test_withdraw_beyond_representable_amounts() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(1), 0).unwrap();

        let huge = Money::from_str_exact("79228162514264337593543950335").unwrap();
        let err = loc.withdraw(huge, 0).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientCredit {
            available: Money::from_major(999),
            requested: huge,
        });
        assert_eq!(loc.transaction_count(), 2);
        assert_eq!(loc.balance(), Money::from_major(1));
    }

    #[test]
    fn test_close_statement_with_overflowing_interest() {
        let huge = Money::from_str_exact("79228162514264337593543950335").unwrap();
        let mut loc = LineOfCredit::new(huge, Rate::from_decimal(dec!(0.35))).unwrap();
        loc.withdraw(huge, 0).unwrap();

        let err = loc.close_statement(4_000_000_000).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidArgument { .. }));
        assert_eq!(loc.transaction_count(), 2);
        assert_eq!(loc.interest_total(), Money::ZERO);
        assert_eq!(loc.statement_open_day(), 0);
        assert!(loc.statements().is_empty());
    }

    #[test]
    fn test_withdraw_negative() {
        let mut loc = loc();
        let err = loc.withdraw(Money::from_major(-500), 0).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidArgument { .. }));
    }

    #[test]
    fn test_withdraw_from_the_past() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 10).unwrap();

        let err = loc.withdraw(Money::from_major(100), 5).unwrap_err();
        assert!(matches!(err, LedgerError::Continuity { .. }));
        assert_eq!(loc.transaction_count(), 2);
    }

    #[test]
    fn test_credit_check_precedes_continuity_check() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 10).unwrap();

        let err = loc.withdraw(Money::from_major(900), 5).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientCredit { .. }));
    }

    #[test]
    fn test_pay_down_balance() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();

        let application = loc.pay(Money::from_major(400), 0).unwrap();

        assert_eq!(loc.balance(), Money::from_major(100));
        assert_eq!(application.to_interest, Money::ZERO);
        assert_eq!(application.to_principal, Money::from_major(400));
        assert_eq!(application.total_applied(), Money::from_major(400));
    }

    #[test]
    fn test_pay_more_than_payoff() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();

        let err = loc.pay(Money::from_major(600), 0).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientBalance {
            payoff: Money::from_major(500),
            requested: Money::from_major(600),
        });
    }

    #[test]
    fn test_pay_negative() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();

        let err = loc.pay(Money::from_major(-500), 0).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidArgument { .. }));
    }

    #[test]
    fn test_pay_from_the_past() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();
        loc.withdraw(Money::from_major(100), 10).unwrap();

        let err = loc.pay(Money::from_major(100), 5).unwrap_err();
        assert!(matches!(err, LedgerError::Continuity { .. }));
    }

    #[test]
    fn test_pay_interest_before_principal() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();
        loc.close_statement(30).unwrap();

        // smaller than the interest owed: principal untouched
        let application = loc.pay(Money::from_major(10), 31).unwrap();
        assert_eq!(application.to_interest, Money::from_major(10));
        assert_eq!(application.to_principal, Money::ZERO);
        assert_eq!(loc.interest_total(), cents(dec!(4.38)));
        assert_eq!(loc.balance(), Money::from_major(500));
        assert_eq!(loc.transaction_count(), 4);

        // the full payoff clears both
        let payoff = loc.payoff_quote();
        assert_eq!(payoff, cents(dec!(504.38)));
        loc.pay(payoff, 31).unwrap();
        assert_eq!(loc.interest_total(), Money::ZERO);
        assert_eq!(loc.balance(), Money::ZERO);
        assert_eq!(loc.transaction_count(), 6);
    }

    #[test]
    fn test_zero_payment_with_interest_owed() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();
        loc.close_statement(30).unwrap();
        assert_eq!(loc.transaction_count(), 3);

        let application = loc.pay(Money::ZERO, 45).unwrap();

        assert_eq!(application.total_applied(), Money::ZERO);
        assert_eq!(loc.transaction_count(), 4);
        assert_eq!(loc.current_day(), 45);
        assert_eq!(loc.transactions()[3], Transaction::interest(Money::ZERO, 45));
        assert_eq!(loc.interest_total(), cents(dec!(14.38)));
        assert_eq!(loc.balance(), Money::from_major(500));
    }

    #[test]
    fn test_zero_payment_without_interest_owed() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();

        loc.pay(Money::ZERO, 10).unwrap();

        assert_eq!(loc.transaction_count(), 2);
        assert_eq!(loc.current_day(), 0);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 3).unwrap();
        loc.close_statement(30).unwrap();

        let first = (loc.balance(), loc.interest_total(), loc.current_day());
        let second = (loc.balance(), loc.interest_total(), loc.current_day());
        assert_eq!(first, second);
    }

    #[test]
    fn test_events_emitted() {
        let mut loc = loc();
        loc.withdraw(Money::from_major(500), 0).unwrap();
        loc.pay(Money::from_major(100), 10).unwrap();
        loc.close_statement(30).unwrap();

        let events = loc.take_events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], Event::LedgerOpened { .. }));
        assert!(matches!(events[1], Event::FundsWithdrawn { .. }));
        assert!(matches!(events[2], Event::PaymentReceived { .. }));
        assert!(matches!(events[3], Event::StatementClosed { .. }));
        assert!(loc.events().is_empty());

        // rejected operations emit nothing
        let _ = loc.withdraw(Money::from_major(-1), 30);
        assert!(loc.events().is_empty());
    }

    #[test]
    fn test_replay_matches_original() {
        let operations = vec![
            LedgerOperation::Withdraw { amount: Money::from_major(500), day: 0 },
            LedgerOperation::Pay { amount: Money::from_major(200), day: 15 },
            LedgerOperation::Withdraw { amount: Money::from_major(100), day: 25 },
            LedgerOperation::CloseStatement { day: 30 },
        ];

        let config = LedgerConfig::new(Money::from_major(1000), Rate::from_decimal(dec!(0.35)));
        let first = LineOfCredit::replay(config, &operations).unwrap();
        let second = LineOfCredit::replay(config, &operations).unwrap();

        assert_eq!(first, second);
        assert_ne!(first.id(), second.id());
        assert_eq!(first.interest_total(), cents(dec!(11.99)));
    }

    #[test]
    fn test_replay_stops_on_first_failure() {
        let operations = vec![
            LedgerOperation::Withdraw { amount: Money::from_major(500), day: 10 },
            LedgerOperation::Withdraw { amount: Money::from_major(100), day: 5 },
        ];

        let config = LedgerConfig::new(Money::from_major(1000), Rate::from_decimal(dec!(0.35)));
        let err = LineOfCredit::replay(config, &operations).unwrap_err();
        assert!(matches!(err, LedgerError::Continuity { .. }));
    }
}
