//! GitHub API client.
//!
//! Talks to the REST API for profile, repository and search data, and to
//! the GraphQL API for the contribution calendar. Search totals are trusted
//! verbatim; the upstream search API may cap or approximate them.

use crate::activity::{flatten_calendar, ContributionCalendar};
use crate::error::CardError;
use crate::grade::{score, Grade};
use crate::stats::UserStats;
use crate::streak::compute_streaks;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const REST_API: &str = "https://api.github.com";
const GRAPHQL_API: &str = "https://api.github.com/graphql";

/// Only the first page of repositories is fetched for the star sum.
const REPOS_PER_PAGE: u32 = 100;

const CALENDAR_QUERY: &str = r#"
query($login: String!) {
  user(login: $login) {
    contributionsCollection {
      contributionCalendar {
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}"#;

/// GitHub API client with optional bearer authentication.
pub struct GitHubClient {
    http: reqwest::Client,
    token: Option<String>,
}

/// Profile fields used by the card.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub login: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
}

/// REST `/users/{login}` payload. GitHub reports lookup failures in-band
/// through the `message` field rather than an error body shape.
#[derive(Debug, Deserialize)]
struct ApiUser {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    login: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    followers: u64,
    #[serde(default)]
    following: u64,
    #[serde(default)]
    public_repos: u64,
}

#[derive(Debug, Deserialize)]
struct ApiRepo {
    #[serde(default)]
    stargazers_count: u64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total_count: u64,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<GraphQlData>,
}

#[derive(Debug, Deserialize)]
struct GraphQlData {
    #[serde(default)]
    user: Option<GraphQlUser>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GraphQlUser {
    #[serde(default)]
    contributions_collection: GraphQlContributions,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GraphQlContributions {
    #[serde(default)]
    contribution_calendar: ContributionCalendar,
}

impl GitHubClient {
    /// Create a client with the given timeout and optional bearer token.
    pub fn new(token: Option<String>, timeout: Duration) -> Result<Self, CardError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gitcard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CardError::Upstream(e.to_string()))?;

        Ok(Self { http, token })
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Fetch profile fields for an account.
    pub async fn fetch_user(&self, login: &str) -> Result<UserProfile, CardError> {
        let url = format!("{}/users/{}", REST_API, login);
        debug!("Fetching profile: {}", url);

        let user: ApiUser = self
            .get(&url)
            .send()
            .await
            .map_err(|e| CardError::Upstream(e.to_string()))?
            .json()
            .await
            .map_err(|e| CardError::Upstream(e.to_string()))?;

        if user.message.is_some() || user.login.is_none() {
            return Err(CardError::UserNotFound(login.to_string()));
        }

        Ok(UserProfile {
            login: user.login.unwrap_or_else(|| login.to_string()),
            name: user
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| login.to_string()),
            avatar_url: user.avatar_url,
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
        })
    }

    /// Sum stars over one page of the account's repositories.
    pub async fn fetch_total_stars(&self, login: &str) -> Result<u64, CardError> {
        let url = format!(
            "{}/users/{}/repos?per_page={}",
            REST_API, login, REPOS_PER_PAGE
        );
        debug!("Fetching repositories: {}", url);

        let payload: serde_json::Value = self
            .get(&url)
            .send()
            .await
            .map_err(|e| CardError::Upstream(e.to_string()))?
            .json()
            .await
            .map_err(|e| CardError::Upstream(e.to_string()))?;

        Ok(sum_stars(payload))
    }

    /// Total result count for a search query, trusted verbatim.
    pub async fn search_count(&self, query: &str) -> Result<u64, CardError> {
        debug!("Search count: {}", query);

        let resp: SearchResponse = self
            .get(&format!("{}/search/issues", REST_API))
            .query(&[("q", query), ("per_page", "1")])
            .send()
            .await
            .map_err(|e| CardError::Upstream(e.to_string()))?
            .json()
            .await
            .map_err(|e| CardError::Upstream(e.to_string()))?;

        Ok(resp.total_count)
    }

    /// Fetch the contribution calendar via the GraphQL API.
    ///
    /// The GraphQL endpoint rejects unauthenticated requests, so a missing
    /// token fails fast instead of producing an opaque upstream error.
    pub async fn fetch_calendar(&self, login: &str) -> Result<ContributionCalendar, CardError> {
        let token = self.token.as_ref().ok_or(CardError::MissingToken)?;

        let body = serde_json::json!({
            "query": CALENDAR_QUERY,
            "variables": { "login": login },
        });

        let resp: GraphQlResponse = self
            .http
            .post(GRAPHQL_API)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| CardError::Upstream(e.to_string()))?
            .json()
            .await
            .map_err(|e| CardError::Upstream(e.to_string()))?;

        Ok(resp
            .data
            .and_then(|d| d.user)
            .map(|u| u.contributions_collection.contribution_calendar)
            .unwrap_or_default())
    }

    /// Fetch the avatar and encode it as an embeddable data URI.
    pub async fn fetch_avatar_data_uri(&self, url: &str) -> Result<String, CardError> {
        let bytes = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CardError::Upstream(e.to_string()))?
            .bytes()
            .await
            .map_err(|e| CardError::Upstream(e.to_string()))?;

        Ok(format!("data:image/png;base64,{}", BASE64.encode(&bytes)))
    }

    /// Aggregate everything the card needs for one account.
    pub async fn aggregate(&self, login: &str) -> Result<UserStats, CardError> {
        let profile = self.fetch_user(login).await?;

        let avatar_data_uri = match &profile.avatar_url {
            Some(url) => match self.fetch_avatar_data_uri(url).await {
                Ok(uri) => Some(uri),
                Err(e) => {
                    warn!("Avatar fetch failed for {}: {}", login, e);
                    None
                }
            },
            None => None,
        };

        let total_stars = self.fetch_total_stars(login).await?;
        let total_prs = self
            .search_count(&format!("type:pr author:{}", login))
            .await?;
        let total_issues = self
            .search_count(&format!("type:issue author:{}", login))
            .await?;
        let merged_prs = self
            .search_count(&format!("type:pr author:{} is:merged", login))
            .await?;

        let calendar = match self.fetch_calendar(login).await {
            Ok(calendar) => calendar,
            Err(CardError::MissingToken) => {
                warn!("No token configured, contribution streaks for {} will be empty", login);
                ContributionCalendar::default()
            }
            Err(e) => return Err(e),
        };
        let days = flatten_calendar(&calendar);
        let streaks = compute_streaks(&days);

        let grade = Grade::from_score(score(total_stars, total_prs, merged_prs));

        Ok(UserStats {
            login: profile.login,
            name: profile.name,
            avatar_data_uri,
            followers: profile.followers,
            following: profile.following,
            public_repos: profile.public_repos,
            total_stars,
            total_prs,
            total_issues,
            merged_prs,
            grade,
            streaks,
        })
    }
}

/// Sum `stargazers_count` over a repository list payload.
///
/// Upstream errors arrive as a JSON object instead of an array; those sum
/// to zero, matching how the card treats a failed repository listing.
fn sum_stars(payload: serde_json::Value) -> u64 {
    let repos: Vec<ApiRepo> = match serde_json::from_value(payload) {
        Ok(repos) => repos,
        Err(_) => {
            warn!("Repository list was not an array, counting zero stars");
            Vec::new()
        }
    };
    repos.iter().map(|r| r.stargazers_count).sum()
}
