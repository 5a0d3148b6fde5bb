//! Recommendation business logic - create, list and delete free-form suggestions.

use crate::{
    core::trimmed,
    entities::{Recommendation, recommendation},
    errors::Result,
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use serde::Deserialize;
use tracing::instrument;

/// Recommendation payload. The seed document may also give a bare string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecommendationInput {
    /// Recommendation text; missing becomes empty
    pub content: Option<String>,
}

impl From<&str> for RecommendationInput {
    fn from(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }
}

/// Retrieves all recommendations, newest first.
pub async fn list_recommendations<C>(db: &C) -> Result<Vec<recommendation::Model>>
where
    C: ConnectionTrait,
{
    Recommendation::find()
        .order_by_desc(recommendation::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Counts stored recommendations. The bootstrap seeder gates on this value.
pub async fn count_recommendations<C>(db: &C) -> Result<u64>
where
    C: ConnectionTrait,
{
    Recommendation::find().count(db).await.map_err(Into::into)
}

/// Stores a recommendation with its content trimmed.
#[instrument(skip(db))]
pub async fn create_recommendation<C>(
    db: &C,
    input: RecommendationInput,
) -> Result<recommendation::Model>
where
    C: ConnectionTrait,
{
    recommendation::ActiveModel {
        content: Set(trimmed(input.content)),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Deletes a recommendation by id. A missing id is not an error.
#[instrument(skip(db))]
pub async fn delete_recommendation<C>(db: &C, recommendation_id: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = Recommendation::delete_by_id(recommendation_id)
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
