//! Journal entry entity - One cannabis-use log record.
//!
//! Each entry has a calendar date, the strain smoked, optional potency and rating,
//! and free-text notes. Entries are listed newest date first.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Journal entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weed_entries")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day the entry refers to, stored as ISO `YYYY-MM-DD`
    pub date: Date,
    /// Strain name, never stored with surrounding whitespace
    pub strain_name: String,
    /// THC percentage if known
    pub thc_percent: Option<f64>,
    /// Indica / sativa / hybrid, free text
    pub strain_type: String,
    /// Terpene notes
    pub terpenes: String,
    /// Free-text notes
    pub notes: String,
    /// Personal rating if given
    pub rating: Option<i32>,
}

/// Journal entries have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
