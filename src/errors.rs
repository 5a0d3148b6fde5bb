//! Unified error type for homebase.
//!
//! Every fallible operation in the crate returns [`Result`]. Store errors from
//! `SeaORM` convert automatically through `?`.

use thiserror::Error;

/// All errors that can occur while booting or serving homebase.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Any failure reported by the store
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The seed document exists but could not be read or parsed
    #[error("Seed document error: {message}")]
    Seed {
        /// Human-readable description of the problem
        message: String,
    },

    /// I/O failure outside of the store (data directory, listener)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP server could not be started
    #[error("Server error: {message}")]
    Server {
        /// Human-readable description of the problem
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
