//! Media entity - One item in the media backlog (docs, films, series...).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Media backlog database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "media")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Title of the documentary, film or show
    pub title: String,
    /// Backlog bucket (e.g. "docs")
    pub category: String,
}

/// No relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
