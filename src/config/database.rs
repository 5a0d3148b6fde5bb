//! Database configuration module for homebase.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, always as `CREATE TABLE IF NOT EXISTS`, so
//! [`create_tables`] can run on every process start. Existing tables are never
//! altered.

use crate::entities::{
    Game, HardwareProfile, JournalEntry, MediaItem, Recommendation, hardware_profile,
};
use crate::errors::Result;
use sea_orm::sea_query::{Expr, TableCreateStatement};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default store location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/app.db?mode=rwc";

/// Establishes a pooled connection to the store at `database_url`.
///
/// For file-backed `SQLite` URLs the parent directory is created first, so the
/// store file can be created on first run.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    if let Some(path) = sqlite_file_path(database_url) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            debug!("Ensuring data directory {:?} exists", parent);
            std::fs::create_dir_all(parent)?;
        }
    }

    Database::connect(database_url).await.map_err(Into::into)
}

/// Extracts the file path of a `sqlite://` URL, or `None` for in-memory stores
/// and other backends.
#[must_use]
pub fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(Path::new(path))
    }
}

/// Creates all five tables if they do not exist yet.
///
/// Idempotent: running it against an initialized store is a no-op. No rows are
/// written here; the hardware-profile default belongs to the bootstrap seeder.
#[instrument(skip(db))]
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut profile_table = schema.create_table_from_entity(HardwareProfile);
    profile_table.check(Expr::col(hardware_profile::Column::Id).eq(hardware_profile::PROFILE_ID));

    let tables: [TableCreateStatement; 5] = [
        schema.create_table_from_entity(JournalEntry),
        schema.create_table_from_entity(Recommendation),
        profile_table,
        schema.create_table_from_entity(Game),
        schema.create_table_from_entity(MediaItem),
    ];

    for mut table in tables {
        table.if_not_exists();
        db.execute(builder.build(&table)).await?;
    }

    info!("Database tables ensured.");
    Ok(())
}
