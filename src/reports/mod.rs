//! Reports module for childshare
//!
//! Combines the aggregate views into reports for display and export.

pub mod summary;

pub use summary::{BaselineSource, ExpenseSummary};
