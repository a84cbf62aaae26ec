//! GitCard Daemon - GitHub stats card service
//!
//! Aggregates profile, star, search and contribution-calendar data for an
//! account and serves the rendered card as SVG or PNG.

use anyhow::Result;
use gitcardd::config::Config;
use gitcardd::server::{self, AppState};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("GitCard Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    if config.github.effective_token().is_none() {
        info!("No GitHub token configured, contribution streaks will be empty");
    }

    let state = AppState::new(config)?;
    server::run(state).await
}
