//! Contribution calendar models and normalization.
//!
//! The GraphQL contribution calendar arrives as weeks of days. Everything
//! downstream (the streak engine, the renderer) wants one flat sequence of
//! days sorted ascending by date, which is what [`flatten_calendar`]
//! produces.

use serde::{Deserialize, Serialize};

/// One calendar day's activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// ISO 8601 date, `YYYY-MM-DD`.
    pub date: String,
    /// Number of contribution events on that date.
    pub count: u32,
}

/// Contribution calendar as returned by the GraphQL API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionCalendar {
    #[serde(default)]
    pub weeks: Vec<ContributionWeek>,
}

/// One week of the calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    #[serde(default)]
    pub contribution_days: Vec<ContributionDay>,
}

/// One day entry inside a week. Both fields are optional on the wire; a
/// day without a date is unusable and gets skipped during normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub contribution_count: Option<u32>,
}

/// Flatten a weekly calendar into one date-ascending day sequence.
///
/// Weeks and days are not assumed to arrive sorted. ISO dates sort
/// lexically, so the stable sort compares the raw date strings and never
/// parses them. Days with a missing or empty date are skipped; a missing
/// count is treated as zero. Missing dates are never fabricated.
pub fn flatten_calendar(calendar: &ContributionCalendar) -> Vec<DailyActivity> {
    let mut days: Vec<DailyActivity> = calendar
        .weeks
        .iter()
        .flat_map(|week| week.contribution_days.iter())
        .filter_map(|day| {
            let date = day.date.clone()?;
            if date.is_empty() {
                return None;
            }
            Some(DailyActivity {
                date,
                count: day.contribution_count.unwrap_or(0),
            })
        })
        .collect();

    days.sort_by(|a, b| a.date.cmp(&b.date));
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, count: u32) -> ContributionDay {
        ContributionDay {
            date: Some(date.to_string()),
            contribution_count: Some(count),
        }
    }

    fn week(days: Vec<ContributionDay>) -> ContributionWeek {
        ContributionWeek {
            contribution_days: days,
        }
    }

    #[test]
    fn test_empty_calendar_yields_empty_sequence() {
        let flat = flatten_calendar(&ContributionCalendar::default());
        assert!(flat.is_empty());
    }

    #[test]
    fn test_weeks_in_reverse_order_come_out_ascending() {
        let calendar = ContributionCalendar {
            weeks: vec![
                week(vec![day("2024-01-08", 2), day("2024-01-09", 0)]),
                week(vec![day("2024-01-01", 1), day("2024-01-02", 3)]),
            ],
        };

        let flat = flatten_calendar(&calendar);
        let dates: Vec<&str> = flat.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2024-01-01", "2024-01-02", "2024-01-08", "2024-01-09"]
        );
    }

    #[test]
    fn test_missing_count_becomes_zero() {
        let calendar = ContributionCalendar {
            weeks: vec![week(vec![ContributionDay {
                date: Some("2024-02-01".to_string()),
                contribution_count: None,
            }])],
        };

        let flat = flatten_calendar(&calendar);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].count, 0);
    }

    #[test]
    fn test_malformed_days_are_skipped() {
        let calendar = ContributionCalendar {
            weeks: vec![week(vec![
                ContributionDay {
                    date: None,
                    contribution_count: Some(5),
                },
                ContributionDay {
                    date: Some(String::new()),
                    contribution_count: Some(5),
                },
                day("2024-02-01", 1),
            ])],
        };

        let flat = flatten_calendar(&calendar);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].date, "2024-02-01");
    }

    #[test]
    fn test_duplicate_dates_keep_input_order() {
        // Duplicates are a precondition violation; the stable sort keeps
        // their relative order instead of guessing a de-dup policy.
        let calendar = ContributionCalendar {
            weeks: vec![week(vec![
                day("2024-03-01", 1),
                day("2024-03-01", 7),
            ])],
        };

        let flat = flatten_calendar(&calendar);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].count, 1);
        assert_eq!(flat[1].count, 7);
    }

    #[test]
    fn test_wire_format_decodes() {
        let json = r#"{
            "weeks": [
                {"contributionDays": [
                    {"date": "2024-01-01", "contributionCount": 4},
                    {"date": "2024-01-02"}
                ]}
            ]
        }"#;

        let calendar: ContributionCalendar = serde_json::from_str(json).unwrap();
        let flat = flatten_calendar(&calendar);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].count, 4);
        assert_eq!(flat[1].count, 0);
    }
}
