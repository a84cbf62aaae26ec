//! API routes for gitcardd

use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use gitcard_common::{error_card, raster, render_card};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

type AppStateArc = Arc<AppState>;

/// Cache policy for the card endpoints
const SVG_CACHE_CONTROL: &str =
    "public, max-age=1800, s-maxage=1800, stale-while-revalidate=3600";
const PNG_CACHE_CONTROL: &str = "public, max-age=1800, s-maxage=1800";

// ============================================================================
// Card Routes
// ============================================================================

pub fn card_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/card", get(card_svg))
        .route("/v1/card/png", get(card_png))
}

#[derive(Debug, Deserialize)]
struct CardQuery {
    /// Account to render; falls back to the configured default
    user: Option<String>,
}

async fn card_svg(
    State(state): State<AppStateArc>,
    Query(query): Query<CardQuery>,
) -> Response {
    let svg = fetch_card_svg(&state, query.user).await;

    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, SVG_CACHE_CONTROL),
        ],
        svg,
    )
        .into_response()
}

async fn card_png(
    State(state): State<AppStateArc>,
    Query(query): Query<CardQuery>,
) -> Response {
    let svg = fetch_card_svg(&state, query.user).await;

    match raster::render_png(&svg) {
        Ok(png) => (
            [
                (header::CONTENT_TYPE, "image/png"),
                (header::CACHE_CONTROL, PNG_CACHE_CONTROL),
            ],
            png,
        )
            .into_response(),
        Err(e) => {
            warn!("  PNG rasterization failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "rasterization failed").into_response()
        }
    }
}

/// Aggregate and render; domain failures become the fallback error card so
/// the response is always a displayable image.
async fn fetch_card_svg(state: &AppState, user: Option<String>) -> String {
    let login = user.unwrap_or_else(|| state.config.github.default_user.clone());
    info!("  Rendering card for {}", login);

    match state.github.aggregate(&login).await {
        Ok(stats) => render_card(&stats, &state.config.card),
        Err(e) => {
            warn!("  Card aggregation failed for {}: {}", login, e);
            error_card(&e.display_message(), &state.config.card)
        }
    }
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
