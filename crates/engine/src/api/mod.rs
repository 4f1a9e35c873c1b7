//! API layer - routes and the HTTP error boundary.

use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;

use crate::render;
use crate::state::AppState;

pub mod error;
pub mod forms;
pub mod game_state_routes;
pub mod player_routes;

pub use error::ApiError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(dashboard))
        .route("/api/health", get(health))
        .merge(player_routes::routes())
        .merge(game_state_routes::routes())
}

async fn health() -> &'static str {
    "OK"
}

async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let players = state.players.load().await?;
    let game_state = state.game_state.load().await?;
    Ok(Html(render::page(&players, &game_state)))
}
