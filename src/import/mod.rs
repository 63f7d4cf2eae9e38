//! Feed import for childshare
//!
//! Reads expense periods from the external data source. The canonical feed
//! is a JSON array of period records; YAML and CSV renditions of the same
//! shape are accepted too:
//! - JSON: `[{"period": "Jan", "education": 250, ...}]`
//! - YAML: the same records as a YAML sequence
//! - CSV: header `period,education,health,clothing,activities,other`

pub mod csv;
pub mod json;

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use tracing::{debug, info};

use crate::error::{ChildshareError, ChildshareResult};
use crate::models::ExpensePeriod;

pub use self::csv::parse_csv;
pub use self::json::{parse_json, parse_yaml, periods_from_value};

/// Feed document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON array of period records
    Json,
    /// YAML sequence of period records
    Yaml,
    /// CSV with a header row
    Csv,
}

impl InputFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Parse a feed document in this format
    pub fn parse(&self, input: &str) -> ChildshareResult<Vec<ExpensePeriod>> {
        match self {
            Self::Json => parse_json(input),
            Self::Yaml => parse_yaml(input),
            Self::Csv => parse_csv(input),
        }
    }
}

/// Read a feed from a file, or from stdin when `path` is `None` or `-`
///
/// An explicit `format` wins; otherwise it is inferred from the extension,
/// falling back to JSON.
pub fn read_periods(
    path: Option<&Path>,
    format: Option<InputFormat>,
) -> ChildshareResult<Vec<ExpensePeriod>> {
    let path = path.filter(|p| p.as_os_str() != "-");

    let format = format
        .or_else(|| path.and_then(InputFormat::from_path))
        .unwrap_or(InputFormat::Json);

    let contents = match path {
        Some(path) => {
            debug!(path = %path.display(), ?format, "Reading expense feed");
            std::fs::read_to_string(path).map_err(|e| {
                ChildshareError::Io(format!("Failed to read {}: {}", path.display(), e))
            })?
        }
        None => {
            debug!(?format, "Reading expense feed from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ChildshareError::Io(format!("Failed to read stdin: {}", e)))?;
            buffer
        }
    };

    let periods = format.parse(&contents)?;
    info!(count = periods.len(), "Loaded expense periods");
    Ok(periods)
}
