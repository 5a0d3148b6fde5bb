//! Seed document loading from `seed/seed_data.json`
//!
//! The seed document provides optional starter records that the bootstrap
//! seeder writes into empty collections. A missing file is normal; a file that
//! cannot be read or parsed is logged and treated as if it were missing.
//! Individual elements of the wrong shape are logged and skipped without
//! affecting the rest of the document.

use crate::core::{
    backlog::BacklogItemInput, hardware::HardwareProfileInput, journal::JournalEntryInput,
    recommendation::RecommendationInput,
};
use crate::errors::{Error, Result};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

/// Default seed document location, relative to the working directory.
pub const DEFAULT_SEED_PATH: &str = "seed/seed_data.json";

/// Starter records for every collection. All keys are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedDocument {
    /// Journal entries to insert when the journal is empty
    pub weed_entries: Vec<JournalEntryInput>,
    /// Recommendations, either plain strings or `{"content": ...}` objects
    pub recommendations: Vec<SeedRecommendation>,
    /// Games backlog items
    pub games: Vec<BacklogItemInput>,
    /// Media backlog items
    pub media: Vec<BacklogItemInput>,
    /// Hardware profile used instead of the built-in default
    pub pc_setup: Option<HardwareProfileInput>,
    /// Number of elements dropped because they had the wrong shape
    pub skipped: usize,
}

/// A recommendation as written in the seed document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SeedRecommendation {
    /// A bare string
    Text(String),
    /// An object with a `content` key
    Object(RecommendationInput),
}

impl From<SeedRecommendation> for RecommendationInput {
    fn from(value: SeedRecommendation) -> Self {
        match value {
            SeedRecommendation::Text(content) => Self {
                content: Some(content),
            },
            SeedRecommendation::Object(input) => input,
        }
    }
}

impl SeedDocument {
    /// Builds the document from the top-level object, one key at a time.
    fn from_fields(mut fields: Map<String, Value>) -> Self {
        let mut skipped = 0;
        Self {
            weed_entries: take_list("weed_entries", fields.remove("weed_entries"), &mut skipped),
            recommendations: take_list(
                "recommendations",
                fields.remove("recommendations"),
                &mut skipped,
            ),
            games: take_list("games", fields.remove("games"), &mut skipped),
            media: take_list("media", fields.remove("media"), &mut skipped),
            pc_setup: take_value("pc_setup", fields.remove("pc_setup"), &mut skipped),
            skipped,
        }
    }

    /// A bare array of journal entries.
    fn from_entries(items: Vec<Value>) -> Self {
        let mut skipped = 0;
        Self {
            weed_entries: take_list("weed_entries", Some(Value::Array(items)), &mut skipped),
            skipped,
            ..Self::default()
        }
    }
}

/// Converts a list value, dropping elements that do not match `T`.
/// A missing key or `null` reads as an empty list.
fn take_list<T: DeserializeOwned>(key: &str, value: Option<Value>, skipped: &mut usize) -> Vec<T> {
    let items = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            warn!(key, "Seed key is not a list, ignoring it");
            *skipped += 1;
            return Vec::new();
        }
    };

    let mut kept = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        match serde_json::from_value(item) {
            Ok(value) => kept.push(value),
            Err(e) => {
                warn!(key, position, "Skipping seed element: {}", e);
                *skipped += 1;
            }
        }
    }
    kept
}

/// Converts a single optional value; a wrongly shaped one reads as `None`.
fn take_value<T: DeserializeOwned>(key: &str, value: Option<Value>, skipped: &mut usize) -> Option<T> {
    match value {
        None | Some(Value::Null) => None,
        Some(value) => serde_json::from_value(value)
            .inspect_err(|e| {
                warn!(key, "Ignoring seed value: {}", e);
                *skipped += 1;
            })
            .ok(),
    }
}

/// Parses seed document text.
///
/// Two top-level shapes are accepted: the full object, or a bare array of
/// journal entries.
///
/// # Errors
/// Returns [`Error::Seed`] when the text is not valid JSON or the top level is
/// neither an object nor an array.
pub fn parse_seed_document(contents: &str) -> Result<SeedDocument> {
    let value: Value = serde_json::from_str(contents).map_err(|e| Error::Seed {
        message: format!("Failed to parse seed document: {e}"),
    })?;

    match value {
        Value::Object(fields) => Ok(SeedDocument::from_fields(fields)),
        Value::Array(items) => Ok(SeedDocument::from_entries(items)),
        _ => Err(Error::Seed {
            message: "Seed document must be an object or an array".to_string(),
        }),
    }
}

/// Reads the seed document at `path`.
///
/// # Returns
/// * `Ok(None)` - The file does not exist
/// * `Ok(Some(doc))` - The file was read and parsed
/// * `Err(Error)` - The file exists but could not be read or parsed
pub fn read_seed_document<P: AsRef<Path>>(path: P) -> Result<Option<SeedDocument>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No seed document at {:?}", path);
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Seed {
        message: format!("Failed to read seed document {path:?}: {e}"),
    })?;
    parse_seed_document(&contents).map(Some)
}

/// Like [`read_seed_document`], but an unreadable document is logged and
/// treated as absent.
#[must_use]
pub fn load_seed_document<P: AsRef<Path>>(path: P) -> Option<SeedDocument> {
    let document = read_seed_document(path)
        .inspect_err(|e| warn!("Ignoring seed document: {}", e))
        .ok()
        .flatten()?;
    if document.skipped > 0 {
        warn!(skipped = document.skipped, "Seed document had malformed elements");
    }
    Some(document)
}
