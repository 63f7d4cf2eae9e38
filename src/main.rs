use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use childshare::cli::{handle_config_command, handle_report_command, ConfigCommands, ReportCommands};
use childshare::config::{ChildsharePaths, Settings};

#[derive(Parser)]
#[command(
    name = "childshare",
    version,
    about = "Shared child expense totals, shares and trends",
    long_about = "childshare reads a feed of monthly shared child expenses \
                  (education, health, clothing, activities, other) and reports \
                  category totals, each category's share of spending, and how \
                  spending moved against the previous period."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Settings management
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let paths = ChildsharePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Report(cmd) => handle_report_command(&settings, cmd)?,
        Commands::Config(cmd) => handle_config_command(&paths, &mut settings, cmd)?,
    }

    Ok(())
}
