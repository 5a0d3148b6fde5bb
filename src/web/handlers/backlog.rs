//! `/api/games` and `/api/media` routes.
//!
//! Both lists share these handlers; the route decides the [`BacklogKind`].

use super::Success;
use crate::{
    core::backlog::{self, BacklogItem, BacklogItemInput, BacklogKind},
    errors::Result,
    web::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};

async fn list(state: &AppState, kind: BacklogKind) -> Result<Json<Vec<BacklogItem>>> {
    Ok(Json(backlog::list_items(&state.database, kind).await?))
}

async fn create(
    state: &AppState,
    kind: BacklogKind,
    input: BacklogItemInput,
) -> Result<Json<Vec<BacklogItem>>> {
    backlog::create_item(&state.database, kind, input).await?;
    list(state, kind).await
}

async fn delete(state: &AppState, kind: BacklogKind, item_id: i64) -> Result<Json<Success>> {
    backlog::delete_item(&state.database, kind, item_id).await?;
    Ok(Json(Success::OK))
}

/// `GET /api/games`
pub async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<BacklogItem>>> {
    list(&state, BacklogKind::Games).await
}

/// `POST /api/games` - answers with the full list.
pub async fn create_game(
    State(state): State<AppState>,
    Json(input): Json<BacklogItemInput>,
) -> Result<Json<Vec<BacklogItem>>> {
    create(&state, BacklogKind::Games, input).await
}

/// `DELETE /api/games/:id`
pub async fn delete_game(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<Success>> {
    delete(&state, BacklogKind::Games, item_id).await
}

/// `GET /api/media`
pub async fn list_media(State(state): State<AppState>) -> Result<Json<Vec<BacklogItem>>> {
    list(&state, BacklogKind::Media).await
}

/// `POST /api/media` - answers with the full list.
pub async fn create_media(
    State(state): State<AppState>,
    Json(input): Json<BacklogItemInput>,
) -> Result<Json<Vec<BacklogItem>>> {
    create(&state, BacklogKind::Media, input).await
}

/// `DELETE /api/media/:id`
pub async fn delete_media(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<Success>> {
    delete(&state, BacklogKind::Media, item_id).await
}
