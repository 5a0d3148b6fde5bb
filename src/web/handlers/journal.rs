//! `/api/weed` routes.

use super::{Success, today};
use crate::{
    core::journal::{self, JournalEntryInput, JournalStats},
    entities::journal_entry,
    errors::Result,
    web::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// `GET /api/weed`
pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<journal_entry::Model>>> {
    Ok(Json(journal::list_entries(&state.database).await?))
}

/// `POST /api/weed` - creates the entry and answers with the full list.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(input): Json<JournalEntryInput>,
) -> Result<Json<Vec<journal_entry::Model>>> {
    journal::create_entry(&state.database, input, today()).await?;
    list_entries(State(state)).await
}

/// `PUT /api/weed/{id}`
pub async fn update_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
    Json(input): Json<JournalEntryInput>,
) -> Result<Json<Success>> {
    journal::update_entry(&state.database, entry_id, input, today()).await?;
    Ok(Json(Success::OK))
}

/// `DELETE /api/weed/{id}`
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
) -> Result<Json<Success>> {
    journal::delete_entry(&state.database, entry_id).await?;
    Ok(Json(Success::OK))
}

/// `GET /api/weed/stats`
pub async fn stats(State(state): State<AppState>) -> Result<Json<JournalStats>> {
    Ok(Json(journal::get_stats(&state.database).await?))
}
