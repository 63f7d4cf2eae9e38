//! Report formatting utilities for terminal output

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if !pct.is_finite() {
        return "0.0%".to_string();
    }
    let magnitude = pct.abs();
    if magnitude > 0.0 && magnitude < 0.1 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 || !value.is_finite() || !max_value.is_finite() {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Join period labels into a short range description
pub fn format_period_range(labels: &[String]) -> String {
    match labels {
        [] => "(none)".to_string(),
        [only] => display_label(only),
        [first, .., last] => format!("{} – {}", display_label(first), display_label(last)),
    }
}

fn display_label(label: &str) -> String {
    if label.is_empty() {
        "(unlabelled)".to_string()
    } else {
        label.to_string()
    }
}
