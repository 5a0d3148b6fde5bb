use chrono::Local;
use dotenvy::dotenv;
use homebase::{
    config::{self, database, seed},
    core::seeding::{self, SeedStatus},
    errors::Result,
    web::{self, AppState},
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Resolve settings
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Open the store and ensure the schema
    let db = database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to open database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Seed empty collections; a failure here aborts startup
    info!(
        seed_path = ?app_config.seed_path,
        seed_exists = app_config.seed_path.exists(),
        "Loading seed document"
    );
    let seed_document = seed::load_seed_document(&app_config.seed_path);
    let report = seeding::run_bootstrap(&db, seed_document.as_ref(), Local::now().date_naive())
        .await
        .inspect_err(|e| error!("Failed to seed database: {}", e))?;

    // 6. Serve
    let state = AppState::new(db, SeedStatus::from(&report), Arc::new(app_config));
    web::serve(state).await
}
