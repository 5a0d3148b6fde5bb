//! Recommendation entity - A free-form suggestion worth remembering.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recommendation database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recommendations")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Recommendation text
    pub content: String,
}

/// Recommendations have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
