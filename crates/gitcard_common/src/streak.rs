//! Streak computation over a daily activity sequence.
//!
//! Operates on the flattened, date-ascending sequence produced by
//! [`flatten_calendar`](crate::activity::flatten_calendar). A qualifying
//! day has a non-zero count. The current streak is measured backward from
//! the most recent qualifying day, so trailing zero days do not break a
//! streak that ran through yesterday.

use crate::activity::DailyActivity;
use serde::{Deserialize, Serialize};

/// One streak: length plus the date range it covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    /// Number of consecutive qualifying days.
    pub length: u32,
    /// First date of the run; `None` when `length == 0`.
    pub start: Option<String>,
    /// Last date of the run; `None` when `length == 0`.
    pub end: Option<String>,
}

/// Current and longest streak for one activity sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakReport {
    pub current: StreakResult,
    pub longest: StreakResult,
}

/// Compute the current and longest streak, each in a single linear pass.
pub fn compute_streaks(days: &[DailyActivity]) -> StreakReport {
    StreakReport {
        current: current_streak(days),
        longest: longest_streak(days),
    }
}

/// Run of qualifying days ending at the most recent qualifying day.
fn current_streak(days: &[DailyActivity]) -> StreakResult {
    // Skip backward over the non-qualifying tail; these are not breaks.
    let mut end_idx = days.len();
    while end_idx > 0 && days[end_idx - 1].count == 0 {
        end_idx -= 1;
    }
    if end_idx == 0 {
        return StreakResult::default();
    }

    // Walk backward while days qualify.
    let mut start_idx = end_idx - 1;
    while start_idx > 0 && days[start_idx - 1].count > 0 {
        start_idx -= 1;
    }

    StreakResult {
        length: (end_idx - start_idx) as u32,
        start: Some(days[start_idx].date.clone()),
        end: Some(days[end_idx - 1].date.clone()),
    }
}

/// Maximum-length run of qualifying days; the earliest such run wins ties.
fn longest_streak(days: &[DailyActivity]) -> StreakResult {
    let mut best = StreakResult::default();
    let mut run_len: u32 = 0;
    let mut run_start: Option<&str> = None;

    for day in days {
        if day.count > 0 {
            if run_len == 0 {
                run_start = Some(&day.date);
            }
            run_len += 1;
            // Strictly greater keeps the earliest run on ties.
            if run_len > best.length {
                best.length = run_len;
                best.start = run_start.map(str::to_owned);
                best.end = Some(day.date.clone());
            }
        } else {
            run_len = 0;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(entries: &[(&str, u32)]) -> Vec<DailyActivity> {
        entries
            .iter()
            .map(|(date, count)| DailyActivity {
                date: date.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_empty_sequence_yields_zero_report() {
        let report = compute_streaks(&[]);
        assert_eq!(report.current.length, 0);
        assert_eq!(report.longest.length, 0);
        assert!(report.current.start.is_none());
        assert!(report.current.end.is_none());
        assert!(report.longest.start.is_none());
        assert!(report.longest.end.is_none());
    }

    #[test]
    fn test_all_zero_sequence_yields_zero_report() {
        let report = compute_streaks(&days(&[("2024-01-01", 0), ("2024-01-02", 0)]));
        assert_eq!(report.current.length, 0);
        assert_eq!(report.longest.length, 0);
    }

    #[test]
    fn test_broken_run_then_single_active_day() {
        // Current streak is the lone trailing day; longest is the earlier
        // two-day run.
        let report = compute_streaks(&days(&[
            ("2024-01-01", 1),
            ("2024-01-02", 1),
            ("2024-01-03", 0),
            ("2024-01-04", 1),
        ]));

        assert_eq!(report.current.length, 1);
        assert_eq!(report.current.start.as_deref(), Some("2024-01-04"));
        assert_eq!(report.current.end.as_deref(), Some("2024-01-04"));

        assert_eq!(report.longest.length, 2);
        assert_eq!(report.longest.start.as_deref(), Some("2024-01-01"));
        assert_eq!(report.longest.end.as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn test_trailing_zero_day_does_not_break_current_streak() {
        // No activity yet today, but the run through yesterday still counts.
        let report = compute_streaks(&days(&[
            ("2024-02-28", 0),
            ("2024-03-01", 1),
            ("2024-03-02", 1),
            ("2024-03-03", 1),
            ("2024-03-04", 0),
        ]));

        assert_eq!(report.current.length, 3);
        assert_eq!(report.current.start.as_deref(), Some("2024-03-01"));
        assert_eq!(report.current.end.as_deref(), Some("2024-03-03"));
    }

    #[test]
    fn test_all_qualifying_sequence_is_one_run() {
        let report = compute_streaks(&days(&[
            ("2024-01-01", 2),
            ("2024-01-02", 1),
            ("2024-01-03", 5),
        ]));

        assert_eq!(report.current.length, 3);
        assert_eq!(report.longest.length, 3);
        assert_eq!(report.longest.start.as_deref(), Some("2024-01-01"));
        assert_eq!(report.longest.end.as_deref(), Some("2024-01-03"));
        assert_eq!(report.current, report.longest);
    }

    #[test]
    fn test_tie_reports_earliest_run() {
        // Two runs of length 3; the earlier one must win.
        let report = compute_streaks(&days(&[
            ("2024-01-01", 1),
            ("2024-01-02", 1),
            ("2024-01-03", 1),
            ("2024-01-04", 0),
            ("2024-01-05", 1),
            ("2024-01-06", 1),
            ("2024-01-07", 1),
        ]));

        assert_eq!(report.longest.length, 3);
        assert_eq!(report.longest.start.as_deref(), Some("2024-01-01"));
        assert_eq!(report.longest.end.as_deref(), Some("2024-01-03"));
    }

    #[test]
    fn test_later_longer_run_replaces_best() {
        let report = compute_streaks(&days(&[
            ("2024-01-01", 1),
            ("2024-01-02", 0),
            ("2024-01-03", 1),
            ("2024-01-04", 1),
        ]));

        assert_eq!(report.longest.length, 2);
        assert_eq!(report.longest.start.as_deref(), Some("2024-01-03"));
        assert_eq!(report.longest.end.as_deref(), Some("2024-01-04"));
    }

    #[test]
    fn test_single_qualifying_day() {
        let report = compute_streaks(&days(&[("2024-06-15", 9)]));
        assert_eq!(report.current.length, 1);
        assert_eq!(report.current.start.as_deref(), Some("2024-06-15"));
        assert_eq!(report.current.end.as_deref(), Some("2024-06-15"));
        assert_eq!(report.longest, report.current);
    }

    #[test]
    fn test_current_streak_stops_at_sequence_start() {
        // The backward walk must not underflow when the run reaches index 0.
        let report = compute_streaks(&days(&[
            ("2024-01-01", 1),
            ("2024-01-02", 1),
            ("2024-01-03", 0),
        ]));

        assert_eq!(report.current.length, 2);
        assert_eq!(report.current.start.as_deref(), Some("2024-01-01"));
        assert_eq!(report.current.end.as_deref(), Some("2024-01-02"));
    }
}
