//! Table rendering for the three aggregate views

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::aggregator::{AggregateTotals, CategoryShare, TrendDelta};

use super::report::{format_bar, format_percentage};
use super::trend::{format_trend_badge, format_trend_badge_colored, TrendTone};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Baseline")]
    baseline: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Tone")]
    tone: String,
}

fn render<R: Tabled>(rows: Vec<R>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    table.to_string()
}

/// Category totals with a grand-total row
pub fn totals_table(totals: &AggregateTotals, currency_symbol: &str) -> String {
    let mut rows: Vec<TotalRow> = totals
        .iter()
        .map(|(category, amount)| TotalRow {
            category: category.label().to_string(),
            amount: amount.format_with_symbol(currency_symbol),
        })
        .collect();

    rows.push(TotalRow {
        category: "TOTAL".to_string(),
        amount: totals.total.format_with_symbol(currency_symbol),
    });

    render(rows)
}

/// Percentage shares with a proportional bar
pub fn shares_table(shares: &[CategoryShare], currency_symbol: &str) -> String {
    let rows: Vec<ShareRow> = shares
        .iter()
        .map(|share| ShareRow {
            category: share.category.label().to_string(),
            amount: share.amount.format_with_symbol(currency_symbol),
            share: format_percentage(share.percentage),
            bar: format_bar(share.percentage, 100.0, BAR_WIDTH),
        })
        .collect();

    render(rows)
}

/// Baseline vs current with trend badges
pub fn trend_table(trend: &[TrendDelta], currency_symbol: &str, colored: bool) -> String {
    let rows: Vec<TrendRow> = trend
        .iter()
        .map(|delta| TrendRow {
            category: delta.category.label().to_string(),
            baseline: delta.baseline.format_with_symbol(currency_symbol),
            current: delta.current.format_with_symbol(currency_symbol),
            change: if colored {
                format_trend_badge_colored(delta)
            } else {
                format_trend_badge(delta)
            },
            tone: TrendTone::from_direction(delta.direction).label().to_string(),
        })
        .collect();

    render(rows)
}
