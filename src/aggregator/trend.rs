//! Period-over-period change per category

use serde::{Deserialize, Serialize};

use super::AggregateTotals;
use crate::models::{ExpenseCategory, Money};

/// Which way spending moved against the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increase,
    Decrease,
    Unchanged,
}

impl TrendDirection {
    /// Lowercase name used in exports
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Unchanged => "unchanged",
        }
    }

    fn from_percentage(percentage: f64) -> Self {
        if percentage > 0.0 {
            Self::Increase
        } else if percentage < 0.0 {
            Self::Decrease
        } else {
            Self::Unchanged
        }
    }
}

/// Change of one category's spending relative to a baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendDelta {
    pub category: ExpenseCategory,
    pub current: Money,
    pub baseline: Money,
    /// Signed percentage change; positive means spending went up
    pub percentage: f64,
    pub direction: TrendDirection,
}

/// Percentage change from `baseline` to `current`, 0 when the baseline is not positive
pub fn percent_change(current: Money, baseline: Money) -> f64 {
    if baseline.is_positive() {
        (current.cents().saturating_sub(baseline.cents()) as f64 / baseline.cents() as f64) * 100.0
    } else {
        0.0
    }
}

/// One delta per category in canonical order
pub fn compute_trend(current: &AggregateTotals, baseline: &AggregateTotals) -> Vec<TrendDelta> {
    ExpenseCategory::ALL
        .into_iter()
        .map(|category| {
            let now = current.get(category);
            let before = baseline.get(category);
            let percentage = percent_change(now, before);
            TrendDelta {
                category,
                current: now,
                baseline: before,
                percentage,
                direction: TrendDirection::from_percentage(percentage),
            }
        })
        .collect()
}
