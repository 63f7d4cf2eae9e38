//! Display formatting for terminal output
//!
//! Provides table formatting and text helpers for the expense views.

pub mod report;
pub mod tables;
pub mod trend;

pub use report::{format_bar, format_percentage, format_period_range, separator};
pub use tables::{shares_table, totals_table, trend_table};
pub use trend::{format_trend_badge, format_trend_badge_colored, TrendTone};
