//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::Utc;
use tower_http::services::ServeDir;
use tracing::{debug, error};

use crate::board::ParkBoard;
use crate::queue_times::ParkFeed;

use super::dto::BoardResponse;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<F: ParkFeed>(state: AppState<F>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_page::<F>))
        .route("/health", get(health))
        .route("/api/rides", get(rides_json::<F>))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Build the board from (possibly cached) park data.
///
/// Never fails: upstream errors yield an empty board.
async fn current_board<F: ParkFeed>(state: &AppState<F>) -> ParkBoard {
    let park = state.feed.fetch_or_empty().await;
    let board = ParkBoard::build(&park, &state.categories, Utc::now());
    debug!(
        rides = board.ride_count(),
        freshness = %board.freshness,
        "built ride board"
    );
    board
}

/// Wait-time board page.
async fn index_page<F: ParkFeed>(State(state): State<AppState<F>>) -> Html<String> {
    let board = current_board(&state).await;

    Html(IndexTemplate::from_board(&board).render().unwrap_or_else(|e| {
        error!(error = %e, "failed to render index page");
        format!("Template error: {}", e)
    }))
}

/// The same board as JSON.
async fn rides_json<F: ParkFeed>(State(state): State<AppState<F>>) -> impl IntoResponse {
    let board = current_board(&state).await;
    Json(BoardResponse::from_board(&board))
}
