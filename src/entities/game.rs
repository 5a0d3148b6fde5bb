//! Game entity - One item in the games backlog.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Games backlog database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Game title
    pub title: String,
    /// Backlog bucket (e.g. "Finish", "Start")
    pub category: String,
}

/// No relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
