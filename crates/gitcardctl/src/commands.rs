//! Command handlers for gitcardctl.

use anyhow::{Context, Result};
use gitcard_common::{format_streak, raster, render_card, CardOptions, GitHubClient, UserStats};
use owo_colors::OwoColorize;
use std::path::Path;
use std::time::Duration;

/// Client timeout for one-shot CLI use
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn resolve_token(flag: Option<String>) -> Option<String> {
    flag.or_else(|| std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()))
}

async fn fetch_stats(user: &str, token: Option<String>) -> Result<UserStats> {
    let client = GitHubClient::new(resolve_token(token), REQUEST_TIMEOUT)?;
    Ok(client.aggregate(user).await?)
}

/// Handle render command
pub async fn render(user: &str, out: &Path, png: bool, token: Option<String>) -> Result<()> {
    let stats = fetch_stats(user, token).await?;
    let svg = render_card(&stats, &CardOptions::default());

    if png {
        let bytes = raster::render_png(&svg)?;
        std::fs::write(out, bytes)
            .with_context(|| format!("Failed to write {}", out.display()))?;
    } else {
        std::fs::write(out, svg)
            .with_context(|| format!("Failed to write {}", out.display()))?;
    }

    println!(
        "{} card for {} written to {}",
        "ok:".green().bold(),
        user,
        out.display()
    );
    Ok(())
}

/// Handle stats command
pub async fn stats(user: &str, token: Option<String>) -> Result<()> {
    let stats = fetch_stats(user, token).await?;

    println!();
    println!("{}", format!("{} (@{})", stats.name, stats.login).bold());
    println!();
    print_kv("followers", &stats.followers.to_string());
    print_kv("following", &stats.following.to_string());
    print_kv("public repos", &stats.public_repos.to_string());
    println!();
    print_kv("total stars", &stats.total_stars.to_string());
    print_kv("total PRs", &stats.total_prs.to_string());
    print_kv("total issues", &stats.total_issues.to_string());
    print_kv("merged PRs", &stats.merged_prs.to_string());
    print_kv("grade", stats.grade.as_str());
    println!();
    print_kv("current streak", &format_streak(&stats.streaks.current));
    print_kv("longest streak", &format_streak(&stats.streaks.longest));
    println!();

    Ok(())
}

fn print_kv(key: &str, value: &str) {
    println!("{:>16}  {}", key.dimmed(), value);
}
