//! Property-based streak tests.
//!
//! Verifies streak invariants across randomized activity sequences.
//! Uses standard library test generation rather than external crates
//! to minimize dependencies.
//!
//! ## Invariants Tested
//!
//! - longest.length >= current.length for every sequence
//! - current.end is the most recent qualifying date
//! - recomputation over the same sequence is idempotent
//! - normalization output is independent of input week order

use chrono::{Days, NaiveDate};
use gitcard_common::activity::{
    flatten_calendar, ContributionCalendar, ContributionDay, ContributionWeek, DailyActivity,
};
use gitcard_common::streak::compute_streaks;

/// Simple pseudo-random number generator for test inputs
/// Uses xorshift64 algorithm
struct TestRng {
    state: u64,
}

impl TestRng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        min + (self.next_u64() % (max - min))
    }
}

/// Sequential calendar days starting 2024-01-01 with random counts,
/// roughly half of them zero.
fn random_days(rng: &mut TestRng, len: usize) -> Vec<DailyActivity> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..len)
        .map(|i| {
            let date = base + Days::new(i as u64);
            let count = match rng.next_range(0, 4) {
                0 | 1 => 0,
                n => n as u32,
            };
            DailyActivity {
                date: date.format("%Y-%m-%d").to_string(),
                count,
            }
        })
        .collect()
}

fn into_weeks(days: &[DailyActivity]) -> Vec<ContributionWeek> {
    days.chunks(7)
        .map(|chunk| ContributionWeek {
            contribution_days: chunk
                .iter()
                .map(|d| ContributionDay {
                    date: Some(d.date.clone()),
                    contribution_count: Some(d.count),
                })
                .collect(),
        })
        .collect()
}

#[test]
fn test_prop_longest_at_least_current() {
    let mut rng = TestRng::new(42);

    for _ in 0..300 {
        let len = rng.next_range(0, 120) as usize;
        let days = random_days(&mut rng, len);
        let report = compute_streaks(&days);
        assert!(
            report.longest.length >= report.current.length,
            "longest {} < current {} for {:?}",
            report.longest.length,
            report.current.length,
            days
        );
    }
}

#[test]
fn test_prop_current_end_is_most_recent_qualifying_day() {
    let mut rng = TestRng::new(7);

    for _ in 0..300 {
        let len = rng.next_range(1, 90) as usize;
        let days = random_days(&mut rng, len);
        let report = compute_streaks(&days);

        let expected_end = days.iter().rev().find(|d| d.count > 0).map(|d| d.date.clone());
        assert_eq!(report.current.end, expected_end);

        if expected_end.is_some() {
            assert!(report.current.length >= 1);
        } else {
            assert_eq!(report.current.length, 0);
            assert_eq!(report.longest.length, 0);
            assert!(report.current.start.is_none());
        }
    }
}

#[test]
fn test_prop_recomputation_is_idempotent() {
    let mut rng = TestRng::new(1234);

    for _ in 0..100 {
        let len = rng.next_range(0, 200) as usize;
        let days = random_days(&mut rng, len);
        let first = compute_streaks(&days);
        let second = compute_streaks(&days);
        assert_eq!(first, second);
    }
}

#[test]
fn test_prop_normalization_is_input_order_invariant() {
    let mut rng = TestRng::new(99);

    for _ in 0..100 {
        let len = rng.next_range(1, 140) as usize;
        let days = random_days(&mut rng, len);

        let forward = ContributionCalendar {
            weeks: into_weeks(&days),
        };
        let mut reversed_weeks = into_weeks(&days);
        reversed_weeks.reverse();
        let reversed = ContributionCalendar {
            weeks: reversed_weeks,
        };

        let flat_forward = flatten_calendar(&forward);
        let flat_reversed = flatten_calendar(&reversed);
        assert_eq!(flat_forward, flat_reversed);
        assert_eq!(compute_streaks(&flat_forward), compute_streaks(&flat_reversed));
    }
}

#[test]
fn test_prop_streak_never_exceeds_sequence_length() {
    let mut rng = TestRng::new(5);

    for _ in 0..200 {
        let len = rng.next_range(0, 60) as usize;
        let days = random_days(&mut rng, len);
        let report = compute_streaks(&days);
        assert!(report.longest.length as usize <= len);
        assert!(report.current.length as usize <= len);
    }
}
