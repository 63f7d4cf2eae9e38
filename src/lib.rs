//! childshare - shared child expense aggregation
//!
//! This library computes the derived views behind a co-parenting expense
//! dashboard: per-category totals, each category's percentage share, and
//! period-over-period trend deltas. The computations are pure and total;
//! empty feeds, zero totals and zero baselines all produce zeros.
//!
//! # Architecture
//!
//! - `models`: money, expense categories and expense periods
//! - `aggregator`: totals, shares, trend and baseline selection
//! - `import`: lenient JSON/YAML/CSV feed parsing
//! - `reports`: the combined expense summary
//! - `display`: terminal tables and trend badges
//! - `export`: JSON/YAML/CSV summary exports
//! - `config`: settings and path management
//! - `cli`: command handlers for the `childshare` binary
//! - `error`: custom error types
//!
//! # Example
//!
//! ```
//! use childshare::aggregator::{compute_shares, compute_totals};
//! use childshare::import::parse_json;
//!
//! let periods = parse_json(r#"[
//!     {"period": "Jan", "education": 250, "health": 120, "clothing": 80, "activities": 150, "other": 50},
//!     {"period": "Feb", "education": 220, "health": 150, "clothing": 60, "activities": 180, "other": 40}
//! ]"#).unwrap();
//!
//! let totals = compute_totals(&periods);
//! assert_eq!(totals.total.units(), 1300);
//!
//! let shares = compute_shares(&totals);
//! assert!((shares[0].percentage - 36.15).abs() < 0.01);
//! ```

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;

pub use error::{ChildshareError, ChildshareResult};
