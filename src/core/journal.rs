//! Journal business logic - Handles all journal-entry operations.
//!
//! Provides functions for listing, creating, updating, deleting and summarising
//! journal entries. Write helpers are generic over [`ConnectionTrait`] so the
//! bootstrap seeder can run them inside its transaction.

use crate::{
    core::trimmed,
    entities::{JournalEntry, journal_entry},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{
    FromQueryResult, PaginatorTrait, QueryOrder, QuerySelect, Set, prelude::*, sea_query::Expr,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, instrument};

/// Number of entries returned in the "recent" part of [`JournalStats`].
pub const RECENT_ENTRY_LIMIT: u64 = 2;

/// Partial journal entry as received from the API or the seed document.
///
/// Every field is optional. Missing strings become empty, a missing or empty
/// date becomes "today" at write time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JournalEntryInput {
    /// ISO calendar date; `None` means "today"
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub date: Option<NaiveDate>,
    /// Strain consumed
    pub strain_name: Option<String>,
    /// THC content in percent
    pub thc_percent: Option<f64>,
    /// Indica, sativa, hybrid or free text
    pub strain_type: Option<String>,
    /// Free-text terpene list
    pub terpenes: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Personal rating
    pub rating: Option<i32>,
}

impl JournalEntryInput {
    /// Builds an active model with every column set, trimming strings and
    /// defaulting the date to `today`.
    fn into_active_model(self, today: NaiveDate) -> journal_entry::ActiveModel {
        journal_entry::ActiveModel {
            date: Set(self.date.unwrap_or(today)),
            strain_name: Set(trimmed(self.strain_name)),
            thc_percent: Set(self.thc_percent),
            strain_type: Set(trimmed(self.strain_type)),
            terpenes: Set(trimmed(self.terpenes)),
            notes: Set(trimmed(self.notes)),
            rating: Set(self.rating),
            ..Default::default()
        }
    }
}

/// Accepts a missing value, `null`, `""` or an ISO date string.
fn deserialize_optional_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// How often a strain appears in the journal.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct StrainCount {
    /// Strain name as stored
    pub strain_name: String,
    /// Number of entries with this strain
    pub count: i64,
}

/// Summary returned by `/api/weed/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalStats {
    /// The most recent entries, newest first
    pub recent: Vec<journal_entry::Model>,
    /// Per-strain frequencies, most frequent first
    pub counts: Vec<StrainCount>,
}

/// Retrieves all journal entries, newest date first (ties broken by newest id).
pub async fn list_entries<C>(db: &C) -> Result<Vec<journal_entry::Model>>
where
    C: ConnectionTrait,
{
    JournalEntry::find()
        .order_by_desc(journal_entry::Column::Date)
        .order_by_desc(journal_entry::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Counts stored journal entries. The bootstrap seeder gates on this value.
pub async fn count_entries<C>(db: &C) -> Result<u64>
where
    C: ConnectionTrait,
{
    JournalEntry::find().count(db).await.map_err(Into::into)
}

/// Inserts a new journal entry and returns it with its assigned id.
#[instrument(skip(db))]
pub async fn create_entry<C>(
    db: &C,
    input: JournalEntryInput,
    today: NaiveDate,
) -> Result<journal_entry::Model>
where
    C: ConnectionTrait,
{
    let entry = input.into_active_model(today).insert(db).await?;
    debug!(id = entry.id, "Created journal entry");
    Ok(entry)
}

/// Overwrites every field of the entry with the given id.
///
/// Updating an id that does not exist is not an error; nothing changes.
/// Returns the number of rows touched (0 or 1).
#[instrument(skip(db))]
pub async fn update_entry<C>(
    db: &C,
    entry_id: i64,
    input: JournalEntryInput,
    today: NaiveDate,
) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = JournalEntry::update_many()
        .set(input.into_active_model(today))
        .filter(journal_entry::Column::Id.eq(entry_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Deletes the entry with the given id. Deleting a missing id succeeds.
#[instrument(skip(db))]
pub async fn delete_entry<C>(db: &C, entry_id: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = JournalEntry::delete_by_id(entry_id).exec(db).await?;
    Ok(result.rows_affected)
}

/// Returns the two most recent entries and how often each strain was logged.
pub async fn get_stats<C>(db: &C) -> Result<JournalStats>
where
    C: ConnectionTrait,
{
    let recent = JournalEntry::find()
        .order_by_desc(journal_entry::Column::Date)
        .order_by_desc(journal_entry::Column::Id)
        .limit(RECENT_ENTRY_LIMIT)
        .all(db)
        .await?;

    let counts = JournalEntry::find()
        .select_only()
        .column(journal_entry::Column::StrainName)
        .column_as(Expr::col(journal_entry::Column::Id).count(), "count")
        .group_by(journal_entry::Column::StrainName)
        .order_by_desc(Expr::cust("count"))
        .order_by_asc(journal_entry::Column::StrainName)
        .into_model::<StrainCount>()
        .all(db)
        .await?;

    Ok(JournalStats { recent, counts })
}
