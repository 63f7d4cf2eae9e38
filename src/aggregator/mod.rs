//! Expense aggregator
//!
//! Turns a sequence of [`ExpensePeriod`](crate::models::ExpensePeriod)
//! records into the three derived views shown on the expense dashboard:
//!
//! - [`AggregateTotals`]: per-category sums and a grand total
//! - [`CategoryShare`]: each category's percentage of the grand total
//! - [`TrendDelta`]: signed percentage change against a baseline
//!
//! Everything here is pure and total: no I/O, no shared state, and every
//! division is guarded so degenerate input (empty feeds, zero totals, zero
//! baselines) produces zeros rather than NaN or infinity.

pub mod baseline;
pub mod shares;
pub mod totals;
pub mod trend;

pub use baseline::split_baseline;
pub use shares::{compute_shares, percent_of, CategoryShare};
pub use totals::{compute_totals, AggregateTotals};
pub use trend::{compute_trend, percent_change, TrendDelta, TrendDirection};

#[cfg(test)]
pub(crate) mod testing {
    use proptest::prelude::*;

    use crate::models::{ExpenseCategory, ExpensePeriod, Money};

    /// The two-month example used throughout the dashboard docs
    pub fn scenario_periods() -> Vec<ExpensePeriod> {
        vec![
            period("Jan", [250, 120, 80, 150, 50]),
            period("Feb", [220, 150, 60, 180, 40]),
        ]
    }

    pub fn period(label: &str, units: [i64; 5]) -> ExpensePeriod {
        ExpenseCategory::ALL
            .into_iter()
            .zip(units)
            .fold(ExpensePeriod::new(label), |p, (category, amount)| {
                p.with(category, Money::from_units(amount))
            })
    }

    /// Feeds of up to 24 periods, each amount between $0.00 and $5,000.00
    pub fn periods_strategy() -> impl Strategy<Value = Vec<ExpensePeriod>> {
        prop::collection::vec(prop::array::uniform5(0_u32..=500_000_u32), 0..24).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, cents)| {
                    ExpenseCategory::ALL.into_iter().zip(cents).fold(
                        ExpensePeriod::new(format!("P{}", i)),
                        |p, (category, amount)| p.with(category, Money::from_cents(i64::from(amount))),
                    )
                })
                .collect()
        })
    }
}
