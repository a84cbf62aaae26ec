//! HTTP server for gitcardd

use crate::config::Config;
use crate::routes;
use anyhow::Result;
use axum::Router;
use gitcard_common::GitHubClient;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub github: GitHubClient,
    pub config: Config,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let github = GitHubClient::new(
            config.github.effective_token(),
            Duration::from_secs(config.github.request_timeout_secs),
        )?;

        Ok(Self {
            github,
            config,
            start_time: Instant::now(),
        })
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::card_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(state: AppState) -> Result<()> {
    let addr = state.config.server.bind_addr.clone();
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
