//! GitCard Common - shared types and logic for the stats card service.
//!
//! Holds the contribution-calendar normalizer, the streak engine, the
//! GitHub API client and the SVG/PNG card rendering used by both the
//! daemon and the CLI.

pub mod activity;
pub mod card;
pub mod error;
pub mod github;
pub mod grade;
pub mod raster;
pub mod stats;
pub mod streak;

pub use activity::{flatten_calendar, ContributionCalendar, ContributionDay, ContributionWeek, DailyActivity};
pub use card::{error_card, format_streak, render_card, CardOptions};
pub use error::CardError;
pub use github::{GitHubClient, UserProfile};
pub use grade::Grade;
pub use stats::UserStats;
pub use streak::{compute_streaks, StreakReport, StreakResult};
