//! Category totals across a sequence of expense periods

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseCategory, ExpensePeriod, Money};

/// Per-category sums plus a grand total
///
/// `total` is accumulated in the same pass as the category sums, so it always
/// equals their sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTotals {
    pub education: Money,
    pub health: Money,
    pub clothing: Money,
    pub activities: Money,
    pub other: Money,
    /// Grand total across all categories
    pub total: Money,
    /// Number of periods that were summed
    #[serde(default)]
    pub period_count: usize,
}

impl AggregateTotals {
    /// All-zero totals
    pub fn zero() -> Self {
        Self::default()
    }

    /// Totals for input that may not have loaded yet
    ///
    /// `None` yields all-zero totals.
    pub fn from_optional(periods: Option<&[ExpensePeriod]>) -> Self {
        match periods {
            Some(periods) => compute_totals(periods),
            None => Self::zero(),
        }
    }

    /// Sum for a single category
    pub fn get(&self, category: ExpenseCategory) -> Money {
        match category {
            ExpenseCategory::Education => self.education,
            ExpenseCategory::Health => self.health,
            ExpenseCategory::Clothing => self.clothing,
            ExpenseCategory::Activities => self.activities,
            ExpenseCategory::Other => self.other,
        }
    }

    /// Category sums in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, Money)> + '_ {
        ExpenseCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Check whether nothing was spent at all
    pub fn is_zero(&self) -> bool {
        self.total.is_zero()
    }

    fn slot_mut(&mut self, category: ExpenseCategory) -> &mut Money {
        match category {
            ExpenseCategory::Education => &mut self.education,
            ExpenseCategory::Health => &mut self.health,
            ExpenseCategory::Clothing => &mut self.clothing,
            ExpenseCategory::Activities => &mut self.activities,
            ExpenseCategory::Other => &mut self.other,
        }
    }
}

/// Sum every category across `periods`
///
/// Input order does not matter and an empty slice gives all-zero totals.
pub fn compute_totals(periods: &[ExpensePeriod]) -> AggregateTotals {
    let mut totals = AggregateTotals::zero();

    for period in periods {
        for category in ExpenseCategory::ALL {
            let amount = period.amount(category);
            *totals.slot_mut(category) += amount;
            totals.total += amount;
        }
        totals.period_count += 1;
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::testing::{periods_strategy, scenario_periods};
    use proptest::prelude::*;
    use proptest::test_runner::Config;

    #[test]
    fn test_empty_input_is_all_zero() {
        let totals = compute_totals(&[]);
        assert_eq!(totals, AggregateTotals::zero());
        for (_, amount) in totals.iter() {
            assert_eq!(amount.cents(), 0);
        }
        assert_eq!(totals.total.cents(), 0);
        assert_eq!(totals.period_count, 0);
    }

    #[test]
    fn test_absent_input_is_all_zero() {
        assert_eq!(AggregateTotals::from_optional(None), AggregateTotals::zero());

        let periods = scenario_periods();
        assert_eq!(
            AggregateTotals::from_optional(Some(&periods)),
            compute_totals(&periods)
        );
    }

    #[test]
    fn test_concrete_scenario() {
        let totals = compute_totals(&scenario_periods());

        assert_eq!(totals.education, Money::from_units(470));
        assert_eq!(totals.health, Money::from_units(270));
        assert_eq!(totals.clothing, Money::from_units(140));
        assert_eq!(totals.activities, Money::from_units(330));
        assert_eq!(totals.other, Money::from_units(90));
        assert_eq!(totals.total, Money::from_units(1300));
        assert_eq!(totals.period_count, 2);
    }

    proptest! {
        #![proptest_config(Config::with_cases(128))]

        #[test]
        fn total_matches_category_sums(periods in periods_strategy()) {
            let totals = compute_totals(&periods);

            let category_sum: Money = totals.iter().map(|(_, amount)| amount).sum();
            prop_assert_eq!(totals.total, category_sum);
            prop_assert_eq!(totals.period_count, periods.len());

            for category in ExpenseCategory::ALL {
                let expected: Money = periods.iter().map(|p| p.amount(category)).sum();
                prop_assert_eq!(totals.get(category), expected);
            }
        }

        #[test]
        fn order_does_not_matter(periods in periods_strategy(), shift in 0_usize..24) {
            let mut reversed = periods.clone();
            reversed.reverse();
            let mut rotated = periods.clone();
            if !rotated.is_empty() {
                let len = rotated.len();
                rotated.rotate_left(shift % len);
            }

            let totals = compute_totals(&periods);
            prop_assert_eq!(totals, compute_totals(&reversed));
            prop_assert_eq!(totals, compute_totals(&rotated));
        }

        #[test]
        fn repeated_calls_are_identical(periods in periods_strategy()) {
            prop_assert_eq!(compute_totals(&periods), compute_totals(&periods));
        }
    }

    #[test]
    fn test_all_zero_period_is_valid() {
        let periods = vec![ExpensePeriod::new("Mar"), ExpensePeriod::new("Apr")];
        let totals = compute_totals(&periods);
        assert!(totals.is_zero());
        assert_eq!(totals.period_count, 2);
    }
}
