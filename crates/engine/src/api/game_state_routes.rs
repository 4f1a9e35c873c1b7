//! Session routes: scene fields, doom clock, GM dice.

use axum::{
    extract::{Path, State},
    response::Html,
    routing::post,
    Form, Router,
};
use std::sync::Arc;

use mesa_domain::{Die, DoomAction, SceneUpdate};

use super::error::ApiError;
use crate::render;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/gamestate/update", post(update_scene))
        .route("/gamestate/doom/{action}", post(update_doom))
        .route("/gamestate/roll_dm/{die}", post(roll_dm_die))
}

/// Fields absent from the form stay unchanged; the caller's input
/// already shows the new value, so the body is empty.
async fn update_scene(
    State(state): State<Arc<AppState>>,
    Form(update): Form<SceneUpdate>,
) -> Result<(), ApiError> {
    let mut game_state = state.game_state.load().await?;
    game_state.apply_scene(update);
    state.game_state.save(&game_state).await?;
    Ok(())
}

async fn update_doom(
    State(state): State<Arc<AppState>>,
    Path(action): Path<String>,
) -> Result<Html<String>, ApiError> {
    let mut game_state = state.game_state.load().await?;
    // Unrecognized action falls through as a no-op.
    if let Ok(action) = action.parse::<DoomAction>() {
        game_state.adjust_doom(action);
        tracing::info!(doom_clock = game_state.doom_clock, "Doom clock moved");
    }
    state.game_state.save(&game_state).await?;
    Ok(Html(render::doom_clock(&game_state)))
}

async fn roll_dm_die(
    State(state): State<Arc<AppState>>,
    Path(die): Path<String>,
) -> Result<Html<String>, ApiError> {
    let die = Die::parse_gm(&die)?;
    let mut game_state = state.game_state.load().await?;
    let value = die.roll(&mut rand::thread_rng());
    tracing::debug!(die = %die, value, "GM roll");
    game_state.record_dm_roll(die, value);
    state.game_state.save(&game_state).await?;
    Ok(Html(render::dm_dice(&game_state)))
}
