//! JSON and YAML feed parsing
//!
//! Both formats are read into a `serde_json::Value` first so the same
//! forgiving walk applies: a null or non-array document is an empty feed, an
//! API envelope (`{"periods": [...]}`, or `data` / `expenses`) is unwrapped, and elements that are
//! not objects are skipped.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ChildshareError, ChildshareResult};
use crate::models::ExpensePeriod;

/// Envelope fields that may wrap the period array
const ENVELOPE_KEYS: [&str; 3] = ["periods", "data", "expenses"];

/// Parse a JSON feed
pub fn parse_json(input: &str) -> ChildshareResult<Vec<ExpensePeriod>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(input)
        .map_err(|e| ChildshareError::Import(format!("Invalid JSON feed: {}", e)))?;

    Ok(periods_from_value(value))
}

/// Parse a YAML feed
pub fn parse_yaml(input: &str) -> ChildshareResult<Vec<ExpensePeriod>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_yaml::from_str(input)
        .map_err(|e| ChildshareError::Import(format!("Invalid YAML feed: {}", e)))?;

    Ok(periods_from_value(value))
}

/// Walk an already-parsed feed document into periods
///
/// Never fails: anything that isn't a list of records becomes an empty feed.
pub fn periods_from_value(value: Value) -> Vec<ExpensePeriod> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let wrapped = ENVELOPE_KEYS.iter().find_map(|key| match map.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            });
            match wrapped {
                Some(items) => items,
                None => {
                    warn!("Feed object has no period array; treating as empty");
                    Vec::new()
                }
            }
        }
        Value::Null => {
            debug!("Feed is null; treating as empty");
            Vec::new()
        }
        other => {
            warn!(kind = value_kind(&other), "Feed is not an array; treating as empty");
            Vec::new()
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Object(_) => match serde_json::from_value::<ExpensePeriod>(item) {
                Ok(period) => Some(period),
                Err(e) => {
                    warn!(index, error = %e, "Skipping unreadable expense record");
                    None
                }
            },
            other => {
                warn!(index, kind = value_kind(&other), "Skipping non-object expense record");
                None
            }
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
