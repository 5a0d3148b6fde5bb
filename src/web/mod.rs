//! HTTP layer - the JSON API and the HTML page.
//!
//! The router holds an [`AppState`] built by the composition root after the
//! bootstrap has finished. Each handler borrows the pooled store handle for one
//! short read or write; connections return to the pool on every exit path.

mod error;
/// Route handlers grouped by collection
pub mod handlers;

use crate::{
    config::AppConfig,
    core::seeding::SeedStatus,
    errors::{Error, Result},
};
use axum::{
    Router,
    routing::{delete, get, put},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared data available to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Pooled store handle
    pub database: DatabaseConnection,
    /// Outcome of this process's bootstrap
    pub seed_status: SeedStatus,
    /// Resolved settings, used by the diagnostics route
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Creates the state handed to [`router`].
    #[must_use]
    pub const fn new(
        database: DatabaseConnection,
        seed_status: SeedStatus,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            database,
            seed_status,
            config,
        }
    }
}

/// Builds the full route table.
#[must_use]
pub fn router(state: AppState) -> Router {
    use handlers::{backlog, hardware, journal, page, recommendations, status};

    Router::new()
        .route("/", get(page::index))
        .route(
            "/api/weed",
            get(journal::list_entries).post(journal::create_entry),
        )
        .route("/api/weed/stats", get(journal::stats))
        .route(
            "/api/weed/:id",
            put(journal::update_entry).delete(journal::delete_entry),
        )
        .route(
            "/api/recommendations",
            get(recommendations::list_recommendations)
                .post(recommendations::create_recommendation),
        )
        .route(
            "/api/recommendations/:id",
            delete(recommendations::delete_recommendation),
        )
        .route(
            "/api/pc",
            get(hardware::get_profile).put(hardware::update_profile),
        )
        .route(
            "/api/games",
            get(backlog::list_games).post(backlog::create_game),
        )
        .route("/api/games/:id", delete(backlog::delete_game))
        .route(
            "/api/media",
            get(backlog::list_media).post(backlog::create_media),
        )
        .route("/api/media/:id", delete(backlog::delete_media))
        .route("/api/seed-status", get(status::seed_status))
        .route("/api/debug/seed_status", get(status::seed_diagnostics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(state: AppState) -> Result<()> {
    let address = state.config.bind_address.clone();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| Error::Server {
            message: format!("Failed to bind {address}: {e}"),
        })?;
    info!("Listening on {}", address);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
