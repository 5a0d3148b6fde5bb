//! Hardware profile entity - The single PC setup record.
//!
//! The table holds at most one row, always with id [`PROFILE_ID`]. The schema
//! initializer adds a `CHECK (id = 1)` constraint so the store enforces it too.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fixed identity of the singleton row
pub const PROFILE_ID: i64 = 1;

/// Hardware profile database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pc_setup")]
pub struct Model {
    /// Always [`PROFILE_ID`]
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Processor
    pub cpu: String,
    /// Graphics card
    pub gpu: String,
    /// Monitor list, usually `;`-separated
    pub monitors: String,
    /// Power supply
    pub psu: String,
    /// Drives
    pub storage: String,
}

/// The hardware profile has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
