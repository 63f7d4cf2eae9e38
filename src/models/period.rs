//! Expense period model
//!
//! An `ExpensePeriod` is one time bucket (usually a month) of shared child
//! spending, split across the five fixed categories. Periods arrive from an
//! external feed, so deserialization is forgiving: a missing, null,
//! non-numeric, negative or implausibly large amount becomes zero instead of
//! rejecting the whole record.
//!
//! Amounts are only reachable through [`ExpensePeriod::amount`] and
//! [`ExpensePeriod::with`], so every stored amount lies in
//! `0..=MAX_AMOUNT`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::{ExpenseCategory, Money};

/// One bucket of spending with a label and five category amounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpensePeriod {
    /// Period label, e.g. "Jan" or "2025-01"
    #[serde(default, deserialize_with = "lenient_label")]
    pub period: String,

    #[serde(default, deserialize_with = "lenient_amount")]
    education: Money,

    #[serde(default, deserialize_with = "lenient_amount")]
    health: Money,

    #[serde(default, deserialize_with = "lenient_amount")]
    clothing: Money,

    #[serde(default, deserialize_with = "lenient_amount")]
    activities: Money,

    #[serde(default, deserialize_with = "lenient_amount")]
    other: Money,
}

/// Largest accepted single amount: $10,000,000,000.00
///
/// Keeps category sums far from the `i64` cent range even over a million
/// periods, so totals never saturate.
pub const MAX_AMOUNT: Money = Money::from_units(10_000_000_000);

/// Map an amount outside `0..=MAX_AMOUNT` to zero
fn in_range(amount: Money) -> Money {
    if amount.is_negative() || amount > MAX_AMOUNT {
        Money::zero()
    } else {
        amount
    }
}

impl ExpensePeriod {
    /// Create an empty (all-zero) period with the given label
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            ..Default::default()
        }
    }

    /// Return a copy of this period with one category amount replaced
    ///
    /// Negative amounts and amounts above [`MAX_AMOUNT`] are stored as zero.
    pub fn with(mut self, category: ExpenseCategory, amount: Money) -> Self {
        *self.slot_mut(category) = in_range(amount);
        self
    }

    /// Amount spent in a category
    pub fn amount(&self, category: ExpenseCategory) -> Money {
        match category {
            ExpenseCategory::Education => self.education,
            ExpenseCategory::Health => self.health,
            ExpenseCategory::Clothing => self.clothing,
            ExpenseCategory::Activities => self.activities,
            ExpenseCategory::Other => self.other,
        }
    }

    /// Sum of all five categories
    pub fn total(&self) -> Money {
        ExpenseCategory::ALL.iter().map(|c| self.amount(*c)).sum()
    }

    /// Check whether nothing was spent in this period
    pub fn is_empty(&self) -> bool {
        self.total().is_zero()
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

/// Interpret an arbitrary feed value as an amount
///
/// Numbers are taken as major units, strings go through [`amount_from_str`].
/// Everything else, and anything negative, unparseable or above
/// [`MAX_AMOUNT`], is zero.
pub fn amount_from_value(value: &Value) -> Money {
    let parsed = match value {
        Value::Number(n) => match n.as_i64() {
            Some(units) => Some(Money::from_units(units)),
            None => n.as_f64().and_then(Money::from_major),
        },
        Value::String(s) => return amount_from_str(s).unwrap_or_default(),
        _ => None,
    };

    match parsed {
        Some(amount) => checked_amount(amount, value),
        None => {
            if value.is_number() {
                warn!(%value, "Amount out of range; counting as zero");
            }
            Money::zero()
        }
    }
}

/// Interpret a text cell as an amount
///
/// Returns `None` when the text is not a number. Negative or oversized
/// numbers come back as zero.
pub fn amount_from_str(s: &str) -> Option<Money> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Money::parse(s)
        .ok()
        .or_else(|| s.parse::<f64>().ok().and_then(Money::from_major))
        .map(|amount| checked_amount(amount, s))
}

fn checked_amount(amount: Money, raw: impl std::fmt::Display) -> Money {
    if amount > MAX_AMOUNT {
        warn!(%raw, "Amount exceeds {}; counting as zero", MAX_AMOUNT);
    }
    in_range(amount)
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(amount_from_value(&value))
}

fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}
