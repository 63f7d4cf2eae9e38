//! Expense categories
//!
//! The shared-expense feed tracks a fixed set of five child-related
//! categories. Their order here is the canonical order used by every report
//! and export.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed expense buckets in an [`ExpensePeriod`](super::ExpensePeriod)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Education,
    Health,
    Clothing,
    Activities,
    Other,
}

impl ExpenseCategory {
    /// All categories in canonical order
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Education,
        ExpenseCategory::Health,
        ExpenseCategory::Clothing,
        ExpenseCategory::Activities,
        ExpenseCategory::Other,
    ];

    /// Field name used by feeds and exports
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Health => "health",
            Self::Clothing => "clothing",
            Self::Activities => "activities",
            Self::Other => "other",
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Health => "Health",
            Self::Clothing => "Clothing",
            Self::Activities => "Activities",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.key() == needle)
            .ok_or_else(|| format!("Unknown expense category: {}", s))
    }
}
