//! Seed status routes.

use crate::{
    config::database::sqlite_file_path, core::journal, core::seeding::SeedStatus,
    errors::Result, web::AppState,
};
use axum::{Json, extract::State};
use serde::Serialize;
use std::path::Path;

/// `GET /api/seed-status` - whether this process seeded anything at boot.
pub async fn seed_status(State(state): State<AppState>) -> Json<SeedStatus> {
    Json(state.seed_status)
}

/// Store and seed-file details for troubleshooting a fresh install.
#[derive(Debug, Clone, Serialize)]
pub struct SeedDiagnostics {
    /// Absolute store file path, or the URL for non-file stores
    pub db_path: String,
    /// Absolute seed document path
    pub seed_path: String,
    /// Whether the seed document exists right now
    pub seed_exists: bool,
    /// Current number of journal entries
    pub weed_entries_count: u64,
}

fn display_absolute(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// `GET /api/debug/seed_status`
pub async fn seed_diagnostics(State(state): State<AppState>) -> Result<Json<SeedDiagnostics>> {
    let db_path = sqlite_file_path(&state.config.database_url)
        .map_or_else(|| state.config.database_url.clone(), display_absolute);

    Ok(Json(SeedDiagnostics {
        db_path,
        seed_path: display_absolute(&state.config.seed_path),
        seed_exists: state.config.seed_path.exists(),
        weed_entries_count: journal::count_entries(&state.database).await?,
    }))
}
