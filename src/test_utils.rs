//! Shared test utilities for homebase.
//!
//! This module provides common helper functions for setting up test databases
//! and building inputs with sensible defaults.

#![allow(clippy::panic)]

use crate::{
    core::{backlog::BacklogItemInput, journal::JournalEntryInput},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all store-backed tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Parses an ISO date, panicking on bad test input.
pub fn test_date(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap_or_else(|e| panic!("bad test date {iso}: {e}"))
}

/// Journal input with only a strain name and an optional date.
pub fn journal_input(strain_name: &str, date: Option<&str>) -> JournalEntryInput {
    JournalEntryInput {
        date: date.map(test_date),
        strain_name: Some(strain_name.to_string()),
        ..Default::default()
    }
}

/// Backlog input with a title and an optional category.
pub fn backlog_input(title: &str, category: Option<&str>) -> BacklogItemInput {
    BacklogItemInput {
        title: Some(title.to_string()),
        category: category.map(ToString::to_string),
    }
}
