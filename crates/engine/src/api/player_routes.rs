//! Player lifecycle, pools, inventory, and dice routes.
//!
//! Every mutating handler runs the same cycle: load the full player
//! document, mutate in memory, save, re-render the card. An unknown
//! player or item id is a silent no-op answering an empty 200 so the
//! HTMX front end never breaks on a stale card.

use axum::{
    extract::{Path, RawForm, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, post},
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use mesa_domain::{Die, DomainError, ItemId, MoveDirection, Player, PlayerId, Pool, StepAction};

use super::error::ApiError;
use super::forms::CreatePlayerForm;
use crate::infrastructure::persistence::PlayerRepository;
use crate::render;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add", post(create_player))
        .route("/delete/{player_id}", delete(delete_player))
        .route("/update_stat/{player_id}/{stat}/{action}", post(update_stat))
        .route("/level/{player_id}/{action}", post(update_level))
        .route("/inventory/add/{player_id}", post(add_item))
        .route(
            "/inventory/update/{player_id}/{item_id}/{action}",
            post(update_item),
        )
        .route(
            "/inventory/delete/{player_id}/{item_id}",
            delete(delete_item),
        )
        .route(
            "/inventory/reorder/{player_id}/{item_id}/{direction}",
            post(reorder_item),
        )
        .route("/roll/{player_id}/{die}", post(roll_die))
}

/// Load, mutate one player, save, and answer the re-rendered card.
/// Unknown ids skip the whole cycle and answer an empty 200.
async fn with_player<F>(state: &AppState, player_id: Uuid, mutate: F) -> Result<Response, ApiError>
where
    F: FnOnce(&mut Player) -> Result<(), DomainError>,
{
    let mut players = state.players.load().await?;
    let id = PlayerId::from_uuid(player_id);
    let Some(player) = PlayerRepository::find_mut(&mut players, id) else {
        tracing::debug!(player_id = %id, "Player not found, no-op");
        return Ok(StatusCode::OK.into_response());
    };
    mutate(player)?;
    let card = render::player_card(player);
    state.players.save(&players).await?;
    Ok(Html(card).into_response())
}

async fn create_player(
    State(state): State<Arc<AppState>>,
    RawForm(body): RawForm,
) -> Result<Redirect, ApiError> {
    let form = CreatePlayerForm::parse(&body)?;
    let player = Player::create(&form.name, &form.age, form.attributes, form.specs)?;
    let mut players = state.players.load().await?;
    tracing::info!(player_id = %player.id, name = %player.name, "Created player");
    players.push(player);
    state.players.save(&players).await?;
    Ok(Redirect::to("/"))
}

async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
) -> Result<(), ApiError> {
    let id = PlayerId::from_uuid(player_id);
    let mut players = state.players.load().await?;
    if PlayerRepository::find(&players, id).is_some() {
        tracing::info!(player_id = %id, "Deleting player");
    }
    players.retain(|p| p.id != id);
    state.players.save(&players).await?;
    Ok(())
}

async fn update_stat(
    State(state): State<Arc<AppState>>,
    Path((player_id, stat, action)): Path<(Uuid, String, String)>,
) -> Result<Response, ApiError> {
    let pool: Pool = stat
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Unknown stat: {stat}")))?;
    with_player(&state, player_id, |player| {
        // Unrecognized action falls through as a no-op.
        if let Ok(action) = action.parse::<StepAction>() {
            player.adjust_pool(pool, action);
        }
        Ok(())
    })
    .await
}

async fn update_level(
    State(state): State<Arc<AppState>>,
    Path((player_id, action)): Path<(Uuid, String)>,
) -> Result<Response, ApiError> {
    with_player(&state, player_id, |player| {
        if let Ok(action) = action.parse::<StepAction>() {
            player.adjust_level(action);
        }
        Ok(())
    })
    .await
}

#[derive(Debug, Deserialize)]
struct AddItemForm {
    item_name: Option<String>,
}

async fn add_item(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
    Form(form): Form<AddItemForm>,
) -> Result<Response, ApiError> {
    let item_name = form.item_name.unwrap_or_default();
    if item_name.trim().is_empty() {
        return Err(ApiError::BadRequest("Item name cannot be empty".into()));
    }
    with_player(&state, player_id, |player| {
        let item = player.add_item(&item_name)?;
        tracing::debug!(item_id = %item.id, name = %item.name, "Added item");
        Ok(())
    })
    .await
}

async fn update_item(
    State(state): State<Arc<AppState>>,
    Path((player_id, item_id, action)): Path<(Uuid, Uuid, String)>,
) -> Result<Response, ApiError> {
    with_player(&state, player_id, |player| {
        if let Ok(action) = action.parse::<StepAction>() {
            player.adjust_item_qty(ItemId::from_uuid(item_id), action);
        }
        Ok(())
    })
    .await
}

async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path((player_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, ApiError> {
    with_player(&state, player_id, |player| {
        player.remove_item(ItemId::from_uuid(item_id));
        Ok(())
    })
    .await
}

async fn reorder_item(
    State(state): State<Arc<AppState>>,
    Path((player_id, item_id, direction)): Path<(Uuid, Uuid, String)>,
) -> Result<Response, ApiError> {
    with_player(&state, player_id, |player| {
        if let Ok(direction) = direction.parse::<MoveDirection>() {
            player.reorder_item(ItemId::from_uuid(item_id), direction);
        }
        Ok(())
    })
    .await
}

async fn roll_die(
    State(state): State<Arc<AppState>>,
    Path((player_id, die)): Path<(Uuid, String)>,
) -> Result<Response, ApiError> {
    let die = Die::parse_player(&die)?;
    with_player(&state, player_id, |player| {
        let value = die.roll(&mut rand::thread_rng());
        tracing::debug!(player_id = %player.id, die = %die, value, "Player roll");
        player.record_roll(die, value);
        Ok(())
    })
    .await
}
