//! YAML Export functionality
//!
//! Exports an expense summary to YAML for human-readable sharing.

use std::io::Write;

use crate::error::{ChildshareError, ChildshareResult};
use crate::export::json::SummaryExport;
use crate::reports::ExpenseSummary;

/// Export a summary to YAML format
pub fn export_summary_yaml<W: Write>(
    summary: &ExpenseSummary,
    currency_symbol: &str,
    writer: &mut W,
) -> ChildshareResult<()> {
    let export = SummaryExport::from_summary(summary, currency_symbol);

    writeln!(writer, "# childshare expense summary")
        .map_err(|e| ChildshareError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ChildshareError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| ChildshareError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ChildshareError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ChildshareError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::testing::scenario_periods;

    #[test]
    fn test_yaml_export() {
        let summary = ExpenseSummary::generate(&scenario_periods(), None, 1);
        let mut buffer = Vec::new();
        export_summary_yaml(&summary, "$", &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# childshare expense summary"));

        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value["schema_version"].as_str(), Some("1.0.0"));
        assert_eq!(value["totals"]["total"].as_f64(), Some(1300.0));
        assert_eq!(value["current_periods"][0].as_str(), Some("Feb"));
    }
}
