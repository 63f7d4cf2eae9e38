//! Trend badge rendering
//!
//! Rising expenses are bad news, so an increase renders as a warning and a
//! decrease as favorable. The aggregator only reports the sign; the tone is
//! decided here.

use crate::aggregator::{TrendDelta, TrendDirection};

use super::report::format_percentage;

/// Visual treatment for a trend badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendTone {
    Warning,
    Favorable,
    Neutral,
}

impl TrendTone {
    pub fn from_direction(direction: TrendDirection) -> Self {
        match direction {
            TrendDirection::Increase => Self::Warning,
            TrendDirection::Decrease => Self::Favorable,
            TrendDirection::Unchanged => Self::Neutral,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Favorable => "favorable",
            Self::Neutral => "neutral",
        }
    }

    fn ansi_code(&self) -> Option<&'static str> {
        match self {
            Self::Warning => Some("31"),
            Self::Favorable => Some("32"),
            Self::Neutral => None,
        }
    }
}

/// Badge text such as `▲ 25.0%`, `▼ 12.0%` or `– 0.0%`
pub fn format_trend_badge(delta: &TrendDelta) -> String {
    let arrow = match delta.direction {
        TrendDirection::Increase => "▲",
        TrendDirection::Decrease => "▼",
        TrendDirection::Unchanged => "–",
    };
    format!("{} {}", arrow, format_percentage(delta.percentage.abs()))
}

/// Badge with ANSI color hints (red for warning, green for favorable)
pub fn format_trend_badge_colored(delta: &TrendDelta) -> String {
    let badge = format_trend_badge(delta);
    match TrendTone::from_direction(delta.direction).ansi_code() {
        Some(code) => format!("\x1b[{}m{}\x1b[0m", code, badge),
        None => badge,
    }
}
