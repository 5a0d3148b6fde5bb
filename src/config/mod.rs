/// Database connection and schema initialization
pub mod database;

/// Seed document loading from seed/seed_data.json
pub mod seed;

/// Application settings from defaults, config.toml and the environment
pub mod settings;

pub use settings::{AppConfig, load_app_configuration};
