//! Percentage share of the grand total per category

use serde::{Deserialize, Serialize};

use super::AggregateTotals;
use crate::models::{ExpenseCategory, Money};

/// A category's slice of total spending
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    /// Category sum the share was computed from
    pub amount: Money,
    /// Percentage of the grand total (0-100)
    pub percentage: f64,
}

/// Share of `part` in `whole` as a percentage, 0 when `whole` is not positive
pub fn percent_of(part: Money, whole: Money) -> f64 {
    if whole.is_positive() {
        (part.cents() as f64 / whole.cents() as f64) * 100.0
    } else {
        0.0
    }
}

/// One share per category in canonical order
///
/// When the grand total is zero every share is exactly 0.
pub fn compute_shares(totals: &AggregateTotals) -> Vec<CategoryShare> {
    totals
        .iter()
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            percentage: percent_of(amount, totals.total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::compute_totals;
    use crate::aggregator::testing::{periods_strategy, scenario_periods};
    use proptest::prelude::*;
    use proptest::test_runner::Config;

    #[test]
    fn test_scenario_shares() {
        let shares = compute_shares(&compute_totals(&scenario_periods()));

        assert_eq!(shares.len(), 5);
        assert_eq!(shares[0].category, ExpenseCategory::Education);
        assert!((shares[0].percentage - 36.153846).abs() < 1e-4);
        assert!((shares[1].percentage - 20.769230).abs() < 1e-4);
        assert_eq!(shares[0].amount, Money::from_units(470));
    }

    proptest! {
        #![proptest_config(Config::with_cases(128))]

        #[test]
        fn shares_sum_to_one_hundred(periods in periods_strategy()) {
            let totals = compute_totals(&periods);
            let shares = compute_shares(&totals);
            let sum: f64 = shares.iter().map(|s| s.percentage).sum();

            if totals.is_zero() {
                prop_assert!(shares.iter().all(|s| s.percentage == 0.0));
            } else {
                prop_assert!((sum - 100.0).abs() < 1e-6, "shares summed to {}", sum);
            }
            prop_assert!(shares.iter().all(|s| (0.0..=100.0).contains(&s.percentage)));
        }
    }

    #[test]
    fn test_oversized_feed_amounts_keep_shares_at_one_hundred() {
        let periods = crate::import::parse_json(
            r#"[{"period": "Jan", "education": 100000000000000000, "health": 100000000000000000, "other": 50}]"#,
        )
        .unwrap();
        let totals = compute_totals(&periods);
        let shares = compute_shares(&totals);

        assert_eq!(totals.total, Money::from_units(50));
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-6, "shares summed to {}", sum);
        assert_eq!(shares[4].percentage, 100.0);
    }

    #[test]
    fn test_zero_total_gives_zero_shares() {
        let shares = compute_shares(&AggregateTotals::zero());
        assert_eq!(shares.len(), 5);
        for share in shares {
            assert!(!share.percentage.is_nan());
            assert_eq!(share.percentage, 0.0);
        }
    }

    #[test]
    fn test_single_category_takes_everything() {
        let totals = AggregateTotals {
            health: Money::from_units(80),
            total: Money::from_units(80),
            period_count: 1,
            ..Default::default()
        };
        let shares = compute_shares(&totals);
        assert_eq!(shares[1].percentage, 100.0);
        assert_eq!(shares[0].percentage, 0.0);
    }

    #[test]
    fn test_percent_of_guards_zero() {
        assert_eq!(percent_of(Money::from_units(5), Money::zero()), 0.0);
        assert_eq!(percent_of(Money::from_units(1), Money::from_units(4)), 25.0);
    }
}
