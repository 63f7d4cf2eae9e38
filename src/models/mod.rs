//! Core data models for childshare
//!
//! This module contains the data structures fed into the aggregator:
//! monetary amounts, the fixed expense categories, and expense periods.

pub mod category;
pub mod money;
pub mod period;

pub use category::ExpenseCategory;
pub use money::{Money, MoneyParseError};
pub use period::{amount_from_str, amount_from_value, ExpensePeriod, MAX_AMOUNT};
