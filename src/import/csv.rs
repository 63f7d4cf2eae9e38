//! CSV feed parsing
//!
//! Expects a header row naming the columns. The label column may be called
//! `period`, `month` or `label`; category columns use the category keys.
//! Column order is free and unknown columns are ignored.

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::warn;

use crate::error::{ChildshareError, ChildshareResult};
use crate::models::{amount_from_str, ExpenseCategory, ExpensePeriod};

const LABEL_HEADERS: [&str; 3] = ["period", "month", "label"];

/// Header positions resolved from the first row
#[derive(Debug, Clone, Default)]
struct ColumnMapping {
    label: Option<usize>,
    categories: Vec<(ExpenseCategory, usize)>,
}

impl ColumnMapping {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut mapping = Self::default();

        for (index, header) in headers.iter().enumerate() {
            let header = header.trim().to_ascii_lowercase();
            if mapping.label.is_none() && LABEL_HEADERS.contains(&header.as_str()) {
                mapping.label = Some(index);
            } else if let Ok(category) = header.parse::<ExpenseCategory>() {
                if !mapping.categories.iter().any(|(c, _)| *c == category) {
                    mapping.categories.push((category, index));
                }
            }
        }

        mapping
    }

    fn period_from_record(&self, record: &StringRecord) -> ExpensePeriod {
        let label = self
            .label
            .and_then(|i| record.get(i))
            .unwrap_or_default()
            .to_string();

        self.categories
            .iter()
            .fold(ExpensePeriod::new(label), |period, (category, index)| {
                let amount = record
                    .get(*index)
                    .and_then(amount_from_str)
                    .unwrap_or_default();
                period.with(*category, amount)
            })
    }
}

/// Parse a CSV feed with a header row
pub fn parse_csv(input: &str) -> ChildshareResult<Vec<ExpensePeriod>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ChildshareError::Import(format!("Invalid CSV header: {}", e)))?
        .clone();
    let mapping = ColumnMapping::from_headers(&headers);

    if mapping.categories.is_empty() {
        warn!("CSV feed has no category columns; all amounts will be zero");
    }

    let mut periods = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            ChildshareError::Import(format!("Invalid CSV record on row {}: {}", line + 2, e))
        })?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        periods.push(mapping.period_from_record(&record));
    }

    Ok(periods)
}
