//! Selecting the "previous period" baseline for trend comparison

use crate::models::ExpensePeriod;

/// Split a feed into `(current, baseline)` windows
///
/// `current` is the last `window` periods in feed order and `baseline` is up
/// to `window` periods immediately before them. A window of 0 is treated as 1.
/// When the feed is shorter than the window, everything is current and the
/// baseline is empty.
pub fn split_baseline(periods: &[ExpensePeriod], window: usize) -> (&[ExpensePeriod], &[ExpensePeriod]) {
    let window = window.max(1);
    let len = periods.len();

    if len <= window {
        return (periods, &periods[..0]);
    }

    let current_start = len - window;
    let baseline_start = current_start.saturating_sub(window);

    (&periods[current_start..], &periods[baseline_start..current_start])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(labels: &[&str]) -> Vec<ExpensePeriod> {
        labels.iter().map(|l| ExpensePeriod::new(*l)).collect()
    }

    fn labels(periods: &[ExpensePeriod]) -> Vec<&str> {
        periods.iter().map(|p| p.period.as_str()).collect()
    }

    #[test]
    fn test_single_period_window() {
        let periods = labelled(&["Jan", "Feb", "Mar"]);
        let (current, baseline) = split_baseline(&periods, 1);
        assert_eq!(labels(current), ["Mar"]);
        assert_eq!(labels(baseline), ["Feb"]);
    }

    #[test]
    fn test_wider_window() {
        let periods = labelled(&["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        let (current, baseline) = split_baseline(&periods, 3);
        assert_eq!(labels(current), ["Apr", "May", "Jun"]);
        assert_eq!(labels(baseline), ["Jan", "Feb", "Mar"]);
    }

    #[test]
    fn test_partial_baseline() {
        let periods = labelled(&["Jan", "Feb", "Mar", "Apr"]);
        let (current, baseline) = split_baseline(&periods, 3);
        assert_eq!(labels(current), ["Feb", "Mar", "Apr"]);
        assert_eq!(labels(baseline), ["Jan"]);
    }

    #[test]
    fn test_short_feed_has_empty_baseline() {
        let periods = labelled(&["Jan", "Feb"]);
        let (current, baseline) = split_baseline(&periods, 2);
        assert_eq!(current.len(), 2);
        assert!(baseline.is_empty());

        let (current, baseline) = split_baseline(&[], 1);
        assert!(current.is_empty());
        assert!(baseline.is_empty());
    }

    #[test]
    fn test_zero_window_acts_as_one() {
        let periods = labelled(&["Jan", "Feb"]);
        let (current, baseline) = split_baseline(&periods, 0);
        assert_eq!(labels(current), ["Feb"]);
        assert_eq!(labels(baseline), ["Jan"]);
    }
}
