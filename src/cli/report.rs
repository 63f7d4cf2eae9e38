//! CLI commands for reports
//!
//! Reads an expense feed and prints or exports the aggregate views.

use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use tracing::info;

use crate::config::Settings;
use crate::display::{separator, shares_table, totals_table, trend_table};
use crate::display::report::format_period_range;
use crate::error::{ChildshareError, ChildshareResult};
use crate::export::{export_summary_csv, export_summary_json, export_summary_yaml, ExportFormat};
use crate::import::{read_periods, InputFormat};
use crate::models::ExpensePeriod;
use crate::reports::ExpenseSummary;

/// Where to read the expense feed from
#[derive(Args, Debug, Clone)]
pub struct FeedArgs {
    /// Expense feed file (JSON, YAML or CSV); reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Feed format (defaults to the file extension, then JSON)
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,
}

impl FeedArgs {
    fn load(&self) -> ChildshareResult<Vec<ExpensePeriod>> {
        read_periods(self.input.as_deref(), self.format)
    }
}

/// Trend comparison options
#[derive(Args, Debug, Clone)]
pub struct TrendArgs {
    /// Periods per trend window (defaults to the configured window)
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Separate baseline feed to compare the whole input against
    #[arg(short, long)]
    pub baseline: Option<PathBuf>,
}

impl TrendArgs {
    fn window(&self, settings: &Settings) -> ChildshareResult<usize> {
        match self.window {
            Some(0) => Err(ChildshareError::Validation(
                "Trend window must be at least 1 period".into(),
            )),
            Some(window) => Ok(window),
            None => Ok(settings.trend_window.max(1)),
        }
    }

    fn load_baseline(&self) -> ChildshareResult<Option<Vec<ExpensePeriod>>> {
        self.baseline
            .as_deref()
            .map(|path| read_periods(Some(path), None))
            .transpose()
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Full summary: totals, shares, top categories and trend
    Summary {
        #[command(flatten)]
        feed: FeedArgs,

        #[command(flatten)]
        trend: TrendArgs,

        /// Highlight the top N categories
        #[arg(long)]
        top: Option<usize>,

        /// Write an export file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format (defaults to the output extension, then JSON)
        #[arg(short, long, value_enum)]
        export: Option<ExportFormat>,

        /// Pretty-print JSON exports
        #[arg(long)]
        pretty: bool,
    },

    /// Category totals and grand total
    Totals {
        #[command(flatten)]
        feed: FeedArgs,
    },

    /// Percentage share of each category
    Shares {
        #[command(flatten)]
        feed: FeedArgs,
    },

    /// Change of each category against the baseline
    Trend {
        #[command(flatten)]
        feed: FeedArgs,

        #[command(flatten)]
        trend: TrendArgs,
    },
}

/// Handle report commands
pub fn handle_report_command(settings: &Settings, cmd: ReportCommands) -> ChildshareResult<()> {
    match cmd {
        ReportCommands::Summary {
            feed,
            trend,
            top,
            output,
            export,
            pretty,
        } => handle_summary(settings, &feed, &trend, top, output, export, pretty),
        ReportCommands::Totals { feed } => handle_totals(settings, &feed),
        ReportCommands::Shares { feed } => handle_shares(settings, &feed),
        ReportCommands::Trend { feed, trend } => handle_trend(settings, &feed, &trend),
    }
}

fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn build_summary(
    settings: &Settings,
    feed: &FeedArgs,
    trend: &TrendArgs,
) -> ChildshareResult<ExpenseSummary> {
    let window = trend.window(settings)?;
    let periods = feed.load()?;
    let baseline = trend.load_baseline()?;
    Ok(ExpenseSummary::generate(&periods, baseline.as_deref(), window))
}

fn export_format_for(path: Option<&Path>, explicit: Option<ExportFormat>) -> ExportFormat {
    explicit
        .or_else(|| {
            let ext = path?.extension()?.to_str()?.to_ascii_lowercase();
            match ext.as_str() {
                "csv" => Some(ExportFormat::Csv),
                "yaml" | "yml" => Some(ExportFormat::Yaml),
                "json" => Some(ExportFormat::Json),
                _ => None,
            }
        })
        .unwrap_or(ExportFormat::Json)
}

fn write_export<W: Write>(
    summary: &ExpenseSummary,
    settings: &Settings,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> ChildshareResult<()> {
    match format {
        ExportFormat::Json => {
            export_summary_json(summary, &settings.currency_symbol, writer, pretty)
        }
        ExportFormat::Yaml => export_summary_yaml(summary, &settings.currency_symbol, writer),
        ExportFormat::Csv => export_summary_csv(summary, writer),
    }
}

/// Handle the summary report
fn handle_summary(
    settings: &Settings,
    feed: &FeedArgs,
    trend: &TrendArgs,
    top: Option<usize>,
    output: Option<PathBuf>,
    export: Option<ExportFormat>,
    pretty: bool,
) -> ChildshareResult<()> {
    let summary = build_summary(settings, feed, trend)?;

    if let Some(path) = output {
        let format = export_format_for(Some(path.as_path()), export);
        let file = File::create(&path).map_err(|e| {
            ChildshareError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        write_export(&summary, settings, format, pretty, &mut writer)?;
        writer
            .flush()
            .map_err(|e| ChildshareError::Export(e.to_string()))?;
        info!(path = %path.display(), ?format, "Wrote summary export");
        println!("Summary exported to: {}", path.display());
    } else if let Some(format) = export {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        write_export(&summary, settings, format, pretty, &mut writer)?;
    } else {
        let top = top.unwrap_or(settings.default_top);
        print!(
            "{}",
            summary.format_terminal(&settings.currency_symbol, top, use_color())
        );
    }

    Ok(())
}

/// Handle the totals report
fn handle_totals(settings: &Settings, feed: &FeedArgs) -> ChildshareResult<()> {
    let summary = ExpenseSummary::generate(&feed.load()?, None, 1);

    println!(
        "Totals: {} ({} periods)",
        format_period_range(&summary.periods),
        summary.totals.period_count
    );
    println!("{}", totals_table(&summary.totals, &settings.currency_symbol));
    Ok(())
}

/// Handle the shares report
fn handle_shares(settings: &Settings, feed: &FeedArgs) -> ChildshareResult<()> {
    let summary = ExpenseSummary::generate(&feed.load()?, None, 1);

    println!(
        "Share of Spending: {} (total {})",
        format_period_range(&summary.periods),
        summary.totals.total.format_with_symbol(&settings.currency_symbol)
    );
    println!("{}", shares_table(&summary.shares, &settings.currency_symbol));
    Ok(())
}

/// Handle the trend report
fn handle_trend(settings: &Settings, feed: &FeedArgs, trend: &TrendArgs) -> ChildshareResult<()> {
    let summary = build_summary(settings, feed, trend)?;

    println!(
        "Trend: {} vs {}",
        format_period_range(&summary.current_periods),
        format_period_range(&summary.baseline_periods)
    );
    println!("{}", separator(60));
    if !summary.has_baseline() {
        println!("No baseline periods; trend changes are reported as 0.");
    }
    println!(
        "{}",
        trend_table(&summary.trend, &settings.currency_symbol, use_color())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_for() {
        assert_eq!(
            export_format_for(Some(Path::new("out.csv")), None),
            ExportFormat::Csv
        );
        assert_eq!(
            export_format_for(Some(Path::new("out.yml")), None),
            ExportFormat::Yaml
        );
        assert_eq!(
            export_format_for(Some(Path::new("out.csv")), Some(ExportFormat::Json)),
            ExportFormat::Json
        );
        assert_eq!(export_format_for(None, None), ExportFormat::Json);
        assert_eq!(
            export_format_for(Some(Path::new("out")), None),
            ExportFormat::Json
        );
    }

    #[test]
    fn test_window_validation() {
        let settings = Settings::default();
        let zero = TrendArgs {
            window: Some(0),
            baseline: None,
        };
        assert!(zero.window(&settings).unwrap_err().is_validation());

        let unset = TrendArgs {
            window: None,
            baseline: None,
        };
        assert_eq!(unset.window(&settings).unwrap(), 1);
    }
}
