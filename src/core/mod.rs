//! Core business logic - framework-agnostic operations on every collection,
//! plus the bootstrap seeder that runs before the HTTP layer starts.

/// Games and media backlog lists
pub mod backlog;
/// Hardware profile singleton
pub mod hardware;
/// Journal entries and statistics
pub mod journal;
/// Free-form recommendations
pub mod recommendation;
/// Idempotent bootstrap seeding
pub mod seeding;

/// Trims a string field, treating a missing value as empty.
pub(crate) fn trimmed(value: Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}
