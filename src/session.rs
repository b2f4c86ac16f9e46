//! Session state
//!
//! A `Session` owns everything the user has entered during one run: the
//! recorded expenses, the budget, the large-expense warning from the last
//! accepted entry, and the last assistant reply. Nothing is persisted.
//! Derived values come from `state()`, which recomputes them on every call.

use tracing::{debug, info};

use crate::models::{Expense, Money};
use crate::reports::BudgetState;
use crate::services::{
    respond, submission_warning, validate_expense, AssistantTopic, ExpenseForm, Rejection,
};

/// Result of submitting an entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The expense was appended
    Recorded {
        /// Whether the large-expense warning is now raised
        warned: bool,
    },
    /// The entry was dropped and the session left unchanged
    Rejected(Rejection),
}

impl SubmitOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    expenses: Vec<Expense>,
    budget: Money,
    warning: Option<&'static str>,
    assistant_reply: Option<AssistantTopic>,
}

impl Session {
    pub fn new(budget: Money) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budget(&self) -> Money {
        self.budget
    }

    /// Warning raised by the last accepted entry, if any
    pub fn warning(&self) -> Option<&'static str> {
        self.warning
    }

    /// Reply currently shown by the assistant, if any
    pub fn assistant_reply(&self) -> Option<&'static str> {
        self.assistant_reply.map(AssistantTopic::reply)
    }

    pub fn set_budget(&mut self, budget: Money) {
        info!(budget = %budget, "budget set");
        self.budget = budget;
    }

    /// Validate and record an entry
    ///
    /// Rejected entries change nothing, not even the warning. For accepted
    /// entries the warning is evaluated against the entry amount alone,
    /// before the expense is appended, and is cleared when the amount is at
    /// or below half of the budget.
    pub fn submit(&mut self, form: &ExpenseForm) -> SubmitOutcome {
        let expense = match validate_expense(form) {
            Ok(expense) => expense,
            Err(rejection) => {
                debug!(%rejection, "expense entry dropped");
                return SubmitOutcome::Rejected(rejection);
            }
        };

        self.warning = submission_warning(expense.amount, self.budget);
        info!(
            amount = %expense.amount,
            category = expense.category_name(),
            date = %expense.date,
            warned = self.warning.is_some(),
            "expense recorded"
        );
        self.expenses.push(expense);

        SubmitOutcome::Recorded {
            warned: self.warning.is_some(),
        }
    }

    /// Ask the assistant; empty questions leave the previous reply in place
    pub fn ask(&mut self, question: &str) -> Option<&'static str> {
        let topic = respond(question)?;
        self.assistant_reply = Some(topic);
        Some(topic.reply())
    }

    /// Recompute the derived view
    pub fn state(&self) -> BudgetState {
        BudgetState::compute(&self.expenses, self.budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryChoice, FixedCategory};
    use crate::services::{BudgetTier, LARGE_EXPENSE_WARNING};

    fn food(amount: &str) -> ExpenseForm {
        ExpenseForm::new(amount, "2025-05-01", CategoryChoice::Fixed(FixedCategory::Food), "")
    }

    fn dollars(d: i64) -> Money {
        Money::from_cents(d * 100)
    }

    #[test]
    fn test_rejected_entry_leaves_collection_unchanged() {
        let mut session = Session::new(dollars(1000));
        session.submit(&food("10"));

        let outcome = session.submit(&food(""));
        assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::MissingAmount));
        assert_eq!(session.expenses().len(), 1);
    }

    #[test]
    fn test_custom_category_entry() {
        let mut session = Session::new(dollars(1000));
        let outcome = session.submit(&ExpenseForm::new(
            "42.5",
            "2025-05-01",
            CategoryChoice::Others,
            "Gym",
        ));

        assert!(outcome.is_recorded());
        assert_eq!(session.expenses()[0].category_name(), "Gym");
        assert_eq!(session.state().category_totals.get("Gym"), Some(Money::from_cents(4250)));
    }

    #[test]
    fn test_warning_is_single_shot() {
        let mut session = Session::new(dollars(1000));

        assert_eq!(session.submit(&food("600")), SubmitOutcome::Recorded { warned: true });
        assert_eq!(session.warning(), Some(LARGE_EXPENSE_WARNING));

        // a rejected entry keeps the warning
        session.submit(&food("abc"));
        assert_eq!(session.warning(), Some(LARGE_EXPENSE_WARNING));

        assert_eq!(session.submit(&food("10")), SubmitOutcome::Recorded { warned: false });
        assert_eq!(session.warning(), None);
    }

    #[test]
    fn test_warning_and_tier_are_independent() {
        let mut session = Session::new(dollars(1000));
        session.submit(&food("501"));

        assert!(session.warning().is_some());
        assert_eq!(session.state().status.tier, BudgetTier::Managing);

        let mut session = Session::new(dollars(1000));
        for _ in 0..9 {
            session.submit(&food("100"));
        }
        assert!(session.warning().is_none());
        assert_eq!(session.state().status.tier, BudgetTier::NearLimit);
    }

    #[test]
    fn test_zero_budget_warns_on_any_positive_entry() {
        let mut session = Session::default();
        session.submit(&food("0.01"));
        assert!(session.warning().is_some());
        assert_eq!(session.state().status.tier, BudgetTier::OverBudget);
    }

    #[test]
    fn test_state_follows_budget_changes() {
        let mut session = Session::new(dollars(1000));
        session.submit(&food("600"));
        assert_eq!(session.state().status.tier, BudgetTier::Managing);

        session.set_budget(dollars(500));
        assert_eq!(session.state().status.tier, BudgetTier::OverBudget);
        assert_eq!(session.budget(), dollars(500));
    }

    #[test]
    fn test_largest_amounts_total_without_overflow() {
        let largest = "79228162514264337593543950335";
        let mut session = Session::new(dollars(1000));
        assert!(session.submit(&food(largest)).is_recorded());
        assert!(session.submit(&food(largest)).is_recorded());
        assert!(session.submit(&food("90000000000000000")).is_recorded());

        let state = session.state();
        assert_eq!(state.total_spent, Money::parse(largest).unwrap());
        assert_eq!(state.category_totals.total(), state.total_spent);
        assert_eq!(state.status.tier, BudgetTier::OverBudget);
        assert!(state.balance.is_in_debt());
    }

    #[test]
    fn test_sub_cent_digits_count_toward_thresholds() {
        let mut session = Session::new(dollars(100));
        assert_eq!(session.submit(&food("50.009")), SubmitOutcome::Recorded { warned: true });
        assert_eq!(session.state().status.tier, BudgetTier::Managing);

        let mut session = Session::new(dollars(100));
        assert_eq!(session.submit(&food("50.000")), SubmitOutcome::Recorded { warned: false });
        assert_eq!(session.state().status.tier, BudgetTier::WellWithin);

        session.submit(&food("30.0001"));
        assert_eq!(session.state().status.tier, BudgetTier::NearLimit);
    }

    #[test]
    fn test_exponent_amount_is_recorded() {
        let mut session = Session::new(dollars(5000));
        assert!(session.submit(&food("1e3")).is_recorded());
        assert_eq!(session.expenses()[0].amount, dollars(1000));
    }

    #[test]
    fn test_ask_keeps_previous_reply_on_empty_input() {
        let mut session = Session::default();
        assert_eq!(
            session.ask("Any budget tips?"),
            Some("Make sure your expenses don't exceed your budget!")
        );

        assert_eq!(session.ask("   "), None);
        assert_eq!(
            session.assistant_reply(),
            Some("Make sure your expenses don't exceed your budget!")
        );

        session.ask("help");
        assert_eq!(
            session.assistant_reply(),
            Some("How can I assist you with your budgeting?")
        );
    }
}
