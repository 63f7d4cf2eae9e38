//! CSV Export functionality
//!
//! Writes one row per category with its current-window amount, baseline
//! amount, share of the feed total and trend, followed by a TOTAL row.

use std::io::Write;

use crate::aggregator::percent_change;
use crate::error::{ChildshareError, ChildshareResult};
use crate::models::Money;
use crate::reports::ExpenseSummary;

const HEADER: [&str; 7] = [
    "Category",
    "Total",
    "Share",
    "Current",
    "Baseline",
    "Change",
    "Direction",
];

fn amount(value: Money) -> String {
    format!("{:.2}", value.to_major())
}

fn percentage(value: f64) -> String {
    format!("{:.2}", value)
}

/// Export a summary to CSV
pub fn export_summary_csv<W: Write>(summary: &ExpenseSummary, writer: &mut W) -> ChildshareResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER)?;

    for (share, delta) in summary.shares.iter().zip(&summary.trend) {
        csv_writer.write_record([
            share.category.key().to_string(),
            amount(share.amount),
            percentage(share.percentage),
            amount(delta.current),
            amount(delta.baseline),
            percentage(delta.percentage),
            delta.direction.key().to_string(),
        ])?;
    }

    let total_change = percent_change(summary.current_totals.total, summary.baseline_totals.total);
    let total_share = if summary.totals.is_zero() { 0.0 } else { 100.0 };
    csv_writer.write_record([
        "TOTAL".to_string(),
        amount(summary.totals.total),
        percentage(total_share),
        amount(summary.current_totals.total),
        amount(summary.baseline_totals.total),
        percentage(total_change),
        String::new(),
    ])?;

    csv_writer
        .flush()
        .map_err(|e| ChildshareError::Export(e.to_string()))?;

    Ok(())
}
