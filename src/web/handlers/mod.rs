//! Route handlers, one module per collection.

/// Games and media backlogs
pub mod backlog;
/// PC profile
pub mod hardware;
/// Journal entries and stats
pub mod journal;
/// HTML page
pub mod page;
/// Recommendations
pub mod recommendations;
/// Seed status and diagnostics
pub mod status;

use chrono::NaiveDate;
use serde::Serialize;

/// Body returned by update and delete routes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Success {
    /// Always `true`; failures answer with an error body instead
    pub success: bool,
}

impl Success {
    /// `{"success": true}`
    pub const OK: Self = Self { success: true };
}

/// Local calendar date used for entries written without one.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
