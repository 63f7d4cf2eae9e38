//! Expense Summary
//!
//! Composes the three aggregate views for one feed: totals and shares over
//! every period, and a trend comparing the most recent window against the
//! window before it (or against an explicitly supplied baseline feed).

use serde::Serialize;
use tracing::debug;

use crate::aggregator::{
    compute_shares, compute_totals, compute_trend, split_baseline, AggregateTotals, CategoryShare,
    TrendDelta,
};
use crate::display::report::{double_separator, format_period_range, separator};
use crate::display::{
    format_percentage, format_trend_badge, shares_table, totals_table, trend_table,
};
use crate::models::{ExpenseCategory, ExpensePeriod};

const REPORT_WIDTH: usize = 72;

/// Where the trend baseline came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineSource {
    /// The periods preceding the current window in the same feed
    Window,
    /// A separate baseline feed
    Explicit,
}

/// Derived expense views for one feed
#[derive(Debug, Clone)]
pub struct ExpenseSummary {
    /// Periods per trend window
    pub window: usize,
    pub baseline_source: BaselineSource,
    /// Labels of every period in the feed
    pub periods: Vec<String>,
    /// Labels of the periods in the current trend window
    pub current_periods: Vec<String>,
    /// Labels of the baseline periods
    pub baseline_periods: Vec<String>,
    /// Totals over every period in the feed
    pub totals: AggregateTotals,
    /// Totals over the current trend window
    pub current_totals: AggregateTotals,
    /// Totals over the baseline
    pub baseline_totals: AggregateTotals,
    /// Shares of `totals`
    pub shares: Vec<CategoryShare>,
    /// Current window against the baseline
    pub trend: Vec<TrendDelta>,
}

fn labels(periods: &[ExpensePeriod]) -> Vec<String> {
    periods.iter().map(|p| p.period.clone()).collect()
}

impl ExpenseSummary {
    /// Build a summary for `periods`
    ///
    /// With an explicit `baseline`, the whole feed is the current window.
    /// Otherwise the last `window` periods are compared with the `window`
    /// periods before them.
    pub fn generate(
        periods: &[ExpensePeriod],
        baseline: Option<&[ExpensePeriod]>,
        window: usize,
    ) -> Self {
        let window = window.max(1);

        let (current, baseline, baseline_source) = match baseline {
            Some(explicit) => (periods, explicit, BaselineSource::Explicit),
            None => {
                let (current, previous) = split_baseline(periods, window);
                (current, previous, BaselineSource::Window)
            }
        };

        debug!(
            current = current.len(),
            baseline = baseline.len(),
            source = ?baseline_source,
            "Selected trend windows"
        );

        let totals = compute_totals(periods);
        let current_totals = compute_totals(current);
        let baseline_totals = compute_totals(baseline);

        Self {
            window,
            baseline_source,
            periods: labels(periods),
            current_periods: labels(current),
            baseline_periods: labels(baseline),
            shares: compute_shares(&totals),
            trend: compute_trend(&current_totals, &baseline_totals),
            totals,
            current_totals,
            baseline_totals,
        }
    }

    /// Check whether the trend has a baseline to compare against
    pub fn has_baseline(&self) -> bool {
        !self.baseline_periods.is_empty()
    }

    /// Share for one category
    pub fn share_for(&self, category: ExpenseCategory) -> Option<&CategoryShare> {
        self.shares.iter().find(|s| s.category == category)
    }

    /// Trend delta for one category
    pub fn trend_for(&self, category: ExpenseCategory) -> Option<&TrendDelta> {
        self.trend.iter().find(|d| d.category == category)
    }

    /// Categories with the most spending, largest first
    ///
    /// Categories with no spending are left out; ties keep canonical order.
    pub fn top_categories(&self, limit: usize) -> Vec<&CategoryShare> {
        let mut ranked: Vec<_> = self.shares.iter().filter(|s| s.amount.is_positive()).collect();
        ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
        ranked.into_iter().take(limit).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str, top: usize, colored: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Expense Summary: {} ({} period{})\n",
            format_period_range(&self.periods),
            self.periods.len(),
            if self.periods.len() == 1 { "" } else { "s" }
        ));
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Total Spending: {}\n\n",
            self.totals.total.format_with_symbol(currency_symbol)
        ));

        output.push_str("Totals by Category\n");
        output.push_str(&totals_table(&self.totals, currency_symbol));
        output.push_str("\n\n");

        output.push_str("Share of Spending\n");
        output.push_str(&shares_table(&self.shares, currency_symbol));
        output.push_str("\n\n");

        let top_categories = self.top_categories(top);
        if !top_categories.is_empty() {
            output.push_str(&format!(
                "Top {} Categories ({})\n",
                top_categories.len(),
                format_period_range(&self.periods)
            ));
            let baseline_range = format_period_range(&self.baseline_periods);
            for (rank, share) in top_categories.iter().enumerate() {
                // amounts span the whole feed, the badge only the current window
                let badge = match self.trend_for(share.category) {
                    Some(delta) if self.has_baseline() => format!(
                        "{} {} vs {}",
                        format_trend_badge(delta),
                        format_period_range(&self.current_periods),
                        baseline_range
                    ),
                    _ => String::new(),
                };
                output.push_str(&format!(
                    "  {}. {:<12} {:>12} {:>7}  {}\n",
                    rank + 1,
                    share.category.label(),
                    share.amount.format_with_symbol(currency_symbol),
                    format_percentage(share.percentage),
                    badge
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "Trend: {} vs {}\n",
            format_period_range(&self.current_periods),
            format_period_range(&self.baseline_periods)
        ));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        if self.has_baseline() {
            output.push_str(&trend_table(&self.trend, currency_symbol, colored));
            output.push('\n');
        } else {
            output.push_str("No baseline periods; trend changes are reported as 0.\n");
        }

        output
    }
}
