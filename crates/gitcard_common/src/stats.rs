//! Aggregated account statistics handed to the renderer.

use crate::grade::Grade;
use crate::streak::StreakReport;
use serde::{Deserialize, Serialize};

/// Everything the card renderer needs for one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub login: String,
    pub name: String,
    /// Avatar as an embeddable data URI; `None` when the fetch failed.
    pub avatar_data_uri: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub total_stars: u64,
    pub total_prs: u64,
    pub total_issues: u64,
    pub merged_prs: u64,
    pub grade: Grade,
    pub streaks: StreakReport,
}
