//! Export module for childshare
//!
//! Provides summary export in multiple formats:
//! - CSV: one row per category (spreadsheet-compatible)
//! - JSON: machine-readable full summary
//! - YAML: human-readable full summary

pub mod csv;
pub mod json;
pub mod yaml;

use clap::ValueEnum;

pub use self::csv::export_summary_csv;
pub use json::{export_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per category)
    Csv,
    /// JSON format (full summary)
    Json,
    /// YAML format (full summary, human-readable)
    Yaml,
}
