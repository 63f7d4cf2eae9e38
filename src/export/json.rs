//! JSON Export functionality
//!
//! Exports an expense summary to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::aggregator::{AggregateTotals, CategoryShare, TrendDelta};
use crate::error::{ChildshareError, ChildshareResult};
use crate::reports::{BaselineSource, ExpenseSummary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Serializable form of an [`ExpenseSummary`]
#[derive(Debug, Clone, Serialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub currency_symbol: String,

    /// Periods per trend window
    pub window: usize,

    pub baseline_source: BaselineSource,

    pub periods: Vec<String>,
    pub current_periods: Vec<String>,
    pub baseline_periods: Vec<String>,

    pub totals: AggregateTotals,
    pub current_totals: AggregateTotals,
    pub baseline_totals: AggregateTotals,

    pub shares: Vec<CategoryShare>,
    pub trend: Vec<TrendDelta>,
}

impl SummaryExport {
    /// Snapshot a summary for export
    pub fn from_summary(summary: &ExpenseSummary, currency_symbol: &str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_symbol: currency_symbol.to_string(),
            window: summary.window,
            baseline_source: summary.baseline_source,
            periods: summary.periods.clone(),
            current_periods: summary.current_periods.clone(),
            baseline_periods: summary.baseline_periods.clone(),
            totals: summary.totals,
            current_totals: summary.current_totals,
            baseline_totals: summary.baseline_totals,
            shares: summary.shares.clone(),
            trend: summary.trend.clone(),
        }
    }
}

/// Export a summary to JSON
pub fn export_summary_json<W: Write>(
    summary: &ExpenseSummary,
    currency_symbol: &str,
    writer: &mut W,
    pretty: bool,
) -> ChildshareResult<()> {
    let export = SummaryExport::from_summary(summary, currency_symbol);

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| ChildshareError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ChildshareError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::testing::scenario_periods;
    use serde_json::Value;

    #[test]
    fn test_json_export() {
        let summary = ExpenseSummary::generate(&scenario_periods(), None, 1);
        let mut buffer = Vec::new();
        export_summary_json(&summary, "$", &mut buffer, true).unwrap();

        let value: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["totals"]["education"], 470.0);
        assert_eq!(value["totals"]["total"], 1300.0);
        assert_eq!(value["baseline_source"], "window");
        assert_eq!(value["shares"].as_array().unwrap().len(), 5);
        assert_eq!(value["shares"][0]["category"], "education");
        assert_eq!(value["trend"][1]["direction"], "increase");
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let summary = ExpenseSummary::generate(&[], None, 1);
        let mut buffer = Vec::new();
        export_summary_json(&summary, "$", &mut buffer, false).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.trim_end().lines().count(), 1);
        assert!(!text.contains("NaN"));
        assert!(!text.contains("null"));
    }
}
