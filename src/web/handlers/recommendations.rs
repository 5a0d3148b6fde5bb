//! `/api/recommendations` routes.

use super::Success;
use crate::{
    core::recommendation::{self, RecommendationInput},
    entities::recommendation as entity,
    errors::Result,
    web::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// `GET /api/recommendations`, newest first.
pub async fn list_recommendations(
    State(state): State<AppState>,
) -> Result<Json<Vec<entity::Model>>> {
    Ok(Json(recommendation::list_recommendations(&state.database).await?))
}

/// Creates the recommendation and answers with the full list.
pub async fn create_recommendation(
    State(state): State<AppState>,
    Json(input): Json<RecommendationInput>,
) -> Result<Json<Vec<entity::Model>>> {
    recommendation::create_recommendation(&state.database, input).await?;
    list_recommendations(State(state)).await
}

/// `DELETE /api/recommendations/:id`
pub async fn delete_recommendation(
    State(state): State<AppState>,
    Path(recommendation_id): Path<i64>,
) -> Result<Json<Success>> {
    recommendation::delete_recommendation(&state.database, recommendation_id).await?;
    Ok(Json(Success::OK))
}
