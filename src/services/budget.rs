//! Budget advice
//!
//! Classifies cumulative spending against the budget into four advisory
//! tiers, and flags single expenses that take more than half of the budget.
//! The two signals are independent: a large expense can raise the warning
//! while the cumulative tier still reads "well within".

use serde::Serialize;
use std::fmt;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

/// Text of the single-shot warning raised for a large expense
pub const LARGE_EXPENSE_WARNING: &str = "Warning: This expense is over 50% of your budget!";

/// Parse budget text; empty text means a budget of zero
pub fn parse_budget(text: &str) -> TrackerResult<Money> {
    if text.trim().is_empty() {
        return Ok(Money::zero());
    }
    Money::parse(text).map_err(|_| TrackerError::invalid_value("Budget", text.trim()))
}

/// Advisory tier for total spending relative to the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BudgetTier {
    OverBudget,
    NearLimit,
    Managing,
    WellWithin,
}

/// How good a tier is, used by renderers to pick a colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Bad,
    Caution,
    Good,
    VeryGood,
}

impl BudgetTier {
    /// Classify total spending, first matching rule wins
    ///
    /// | rule                  | tier       |
    /// |-----------------------|------------|
    /// | total > budget        | OverBudget |
    /// | total > 0.8 x budget  | NearLimit  |
    /// | total > 0.5 x budget  | Managing   |
    /// | otherwise             | WellWithin |
    ///
    /// With a zero budget any positive total is over budget.
    pub fn classify(total_spent: Money, budget: Money) -> Self {
        if total_spent > budget {
            Self::OverBudget
        } else if total_spent.exceeds_fraction_of(budget, 4, 5) {
            Self::NearLimit
        } else if total_spent.exceeds_fraction_of(budget, 1, 2) {
            Self::Managing
        } else {
            Self::WellWithin
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Self::OverBudget => "You're over budget! Consider cutting back on expenses.",
            Self::NearLimit => "You're close to your budget limit, keep an eye on your spending!",
            Self::Managing => "You're managing your budget well!",
            Self::WellWithin => "Great job! You're well within your budget!",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::OverBudget => Severity::Bad,
            Self::NearLimit => Severity::Caution,
            Self::Managing => Severity::Good,
            Self::WellWithin => Severity::VeryGood,
        }
    }

    /// Short label for tables and status lines
    pub fn label(self) -> &'static str {
        match self {
            Self::OverBudget => "Over budget",
            Self::NearLimit => "Near limit",
            Self::Managing => "Managing",
            Self::WellWithin => "Well within",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tier together with its advisory text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    pub tier: BudgetTier,
    pub advice: &'static str,
    pub severity: Severity,
}

impl BudgetStatus {
    pub fn evaluate(total_spent: Money, budget: Money) -> Self {
        let tier = BudgetTier::classify(total_spent, budget);
        Self {
            tier,
            advice: tier.advice(),
            severity: tier.severity(),
        }
    }
}

/// Money left in the budget, or how far past it spending has gone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum BudgetBalance {
    Remaining(Money),
    InDebt(Money),
}

impl BudgetBalance {
    pub fn compute(total_spent: Money, budget: Money) -> Self {
        if total_spent > budget {
            Self::InDebt(total_spent - budget)
        } else {
            Self::Remaining(budget - total_spent)
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Remaining(amount) | Self::InDebt(amount) => *amount,
        }
    }

    pub fn is_in_debt(&self) -> bool {
        matches!(self, Self::InDebt(_))
    }

    /// "Remaining: $x" or "In Debt: $x" with the given currency symbol
    pub fn describe(&self, symbol: &str) -> String {
        match self {
            Self::Remaining(amount) => format!("Remaining: {}", amount.format_with_symbol(symbol)),
            Self::InDebt(amount) => format!("In Debt: {}", amount.format_with_symbol(symbol)),
        }
    }
}

/// Warning for a single candidate expense above half of the budget
pub fn submission_warning(amount: Money, budget: Money) -> Option<&'static str> {
    amount
        .exceeds_fraction_of(budget, 1, 2)
        .then_some(LARGE_EXPENSE_WARNING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_cents(d * 100)
    }

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("1000").unwrap(), dollars(1000));
        assert_eq!(parse_budget(" 2.5e2 ").unwrap(), dollars(250));
        assert_eq!(parse_budget("").unwrap(), Money::zero());
        assert_eq!(parse_budget("   ").unwrap(), Money::zero());
        assert!(parse_budget("lots").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_reference_tiers() {
        let budget = dollars(1000);
        assert_eq!(BudgetTier::classify(dollars(0), budget), BudgetTier::WellWithin);
        assert_eq!(BudgetTier::classify(dollars(600), budget), BudgetTier::Managing);
        assert_eq!(BudgetTier::classify(dollars(850), budget), BudgetTier::NearLimit);
        assert_eq!(BudgetTier::classify(dollars(1200), budget), BudgetTier::OverBudget);
    }

    #[test]
    fn test_boundaries_are_strict() {
        let budget = dollars(1000);
        assert_eq!(BudgetTier::classify(dollars(500), budget), BudgetTier::WellWithin);
        assert_eq!(BudgetTier::classify(dollars(800), budget), BudgetTier::Managing);
        assert_eq!(BudgetTier::classify(dollars(1000), budget), BudgetTier::NearLimit);
        assert_eq!(
            BudgetTier::classify(Money::from_cents(100001), budget),
            BudgetTier::OverBudget
        );
    }

    #[test]
    fn test_zero_budget_degenerates() {
        assert_eq!(BudgetTier::classify(dollars(1), Money::zero()), BudgetTier::OverBudget);
        assert_eq!(
            BudgetTier::classify(Money::from_cents(1), Money::zero()),
            BudgetTier::OverBudget
        );
        assert_eq!(BudgetTier::classify(Money::zero(), Money::zero()), BudgetTier::WellWithin);
    }

    #[test]
    fn test_exactly_one_tier_applies() {
        let budget = dollars(200);
        for cents in (-5000..30000).step_by(37) {
            let total = Money::from_cents(cents);
            let tier = BudgetTier::classify(total, budget);
            let matches = [
                total > budget,
                total.exceeds_fraction_of(budget, 4, 5) && total <= budget,
                total.exceeds_fraction_of(budget, 1, 2) && !total.exceeds_fraction_of(budget, 4, 5),
                !total.exceeds_fraction_of(budget, 1, 2),
            ];
            assert_eq!(matches.iter().filter(|m| **m).count(), 1, "total {}", total);
            let expected = match matches.iter().position(|m| *m) {
                Some(0) => BudgetTier::OverBudget,
                Some(1) => BudgetTier::NearLimit,
                Some(2) => BudgetTier::Managing,
                _ => BudgetTier::WellWithin,
            };
            assert_eq!(tier, expected);
        }
    }

    #[test]
    fn test_status_carries_advice() {
        let status = BudgetStatus::evaluate(dollars(1200), dollars(1000));
        assert_eq!(status.tier, BudgetTier::OverBudget);
        assert_eq!(
            status.advice,
            "You're over budget! Consider cutting back on expenses."
        );
        assert_eq!(status.severity, Severity::Bad);
    }

    #[test]
    fn test_balance() {
        let remaining = BudgetBalance::compute(dollars(300), dollars(1000));
        assert_eq!(remaining, BudgetBalance::Remaining(dollars(700)));
        assert_eq!(remaining.describe("$"), "Remaining: $700.00");

        let debt = BudgetBalance::compute(dollars(1200), dollars(1000));
        assert!(debt.is_in_debt());
        assert_eq!(debt.describe("$"), "In Debt: $200.00");
    }

    #[test]
    fn test_submission_warning() {
        let budget = dollars(1000);
        assert_eq!(submission_warning(dollars(501), budget), Some(LARGE_EXPENSE_WARNING));
        assert_eq!(submission_warning(dollars(500), budget), None);
        assert_eq!(
            submission_warning(Money::from_cents(1), Money::zero()),
            Some(LARGE_EXPENSE_WARNING)
        );
        assert_eq!(submission_warning(Money::zero(), Money::zero()), None);
    }
}
