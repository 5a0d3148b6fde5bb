//! Backlog business logic - the games and media tracking lists.
//!
//! Both lists share the same shape (title + category) but live in separate
//! tables with their own default category. [`BacklogKind`] selects the list;
//! every operation returns the list-agnostic [`BacklogItem`].

use crate::{
    core::trimmed,
    entities::{Game, MediaItem, game, media_item},
    errors::Result,
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Which backlog list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklogKind {
    /// The `games` table
    Games,
    /// The `media` table
    Media,
}

impl BacklogKind {
    /// Category stored when the caller gives none.
    #[must_use]
    pub const fn default_category(self) -> &'static str {
        match self {
            Self::Games => "Finish",
            Self::Media => "docs",
        }
    }
}

impl fmt::Display for BacklogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Games => f.write_str("games"),
            Self::Media => f.write_str("media"),
        }
    }
}

/// One backlog entry, independent of the list it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogItem {
    /// Row id within its own list
    pub id: i64,
    /// Item title
    pub title: String,
    /// Backlog bucket, never empty
    pub category: String,
}

impl From<game::Model> for BacklogItem {
    fn from(model: game::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            category: model.category,
        }
    }
}

impl From<media_item::Model> for BacklogItem {
    fn from(model: media_item::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            category: model.category,
        }
    }
}

/// Backlog payload from the API or the seed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BacklogItemInput {
    /// Item title; missing becomes empty
    pub title: Option<String>,
    /// Missing or blank falls back to the list default
    pub category: Option<String>,
}

impl BacklogItemInput {
    /// Trimmed title and category, with blank categories replaced by the
    /// list's default.
    fn normalize(self, kind: BacklogKind) -> (String, String) {
        let category = trimmed(self.category);
        let category = if category.is_empty() {
            kind.default_category().to_string()
        } else {
            category
        };
        (trimmed(self.title), category)
    }
}

/// Retrieves every item of the list, newest first.
pub async fn list_items<C>(db: &C, kind: BacklogKind) -> Result<Vec<BacklogItem>>
where
    C: ConnectionTrait,
{
    let items: Vec<BacklogItem> = match kind {
        BacklogKind::Games => Game::find()
            .order_by_desc(game::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(BacklogItem::from)
            .collect(),
        BacklogKind::Media => MediaItem::find()
            .order_by_desc(media_item::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(BacklogItem::from)
            .collect(),
    };
    Ok(items)
}

/// Counts the items in the list. The bootstrap seeder gates on this value.
pub async fn count_items<C>(db: &C, kind: BacklogKind) -> Result<u64>
where
    C: ConnectionTrait,
{
    let count = match kind {
        BacklogKind::Games => Game::find().count(db).await?,
        BacklogKind::Media => MediaItem::find().count(db).await?,
    };
    Ok(count)
}

/// Adds an item to the list.
#[instrument(skip(db))]
pub async fn create_item<C>(
    db: &C,
    kind: BacklogKind,
    input: BacklogItemInput,
) -> Result<BacklogItem>
where
    C: ConnectionTrait,
{
    let (title, category) = input.normalize(kind);
    let item: BacklogItem = match kind {
        BacklogKind::Games => game::ActiveModel {
            title: Set(title),
            category: Set(category),
            ..Default::default()
        }
        .insert(db)
        .await?
        .into(),
        BacklogKind::Media => media_item::ActiveModel {
            title: Set(title),
            category: Set(category),
            ..Default::default()
        }
        .insert(db)
        .await?
        .into(),
    };
    Ok(item)
}

/// Deletes an item by id. A missing id is not an error.
#[instrument(skip(db))]
pub async fn delete_item<C>(db: &C, kind: BacklogKind, item_id: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = match kind {
        BacklogKind::Games => Game::delete_by_id(item_id).exec(db).await?,
        BacklogKind::Media => MediaItem::delete_by_id(item_id).exec(db).await?,
    };
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_default_categories() -> Result<()> {
        let db = setup_test_db().await?;

        let game = create_item(&db, BacklogKind::Games, backlog_input(" Hades ", None)).await?;
        assert_eq!(game.title, "Hades");
        assert_eq!(game.category, "Finish");

        let media = create_item(&db, BacklogKind::Media, backlog_input("Cosmos", Some("  ")))
            .await?;
        assert_eq!(media.category, "docs");

        let custom = create_item(
            &db,
            BacklogKind::Games,
            backlog_input("Celeste", Some(" Start ")),
        )
        .await?;
        assert_eq!(custom.category, "Start");
        Ok(())
    }

    #[tokio::test]
    async fn test_lists_are_independent() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_item(&db, BacklogKind::Games, backlog_input("Hades", None)).await?;
        let second = create_item(&db, BacklogKind::Games, backlog_input("Outer Wilds", None))
            .await?;
        create_item(&db, BacklogKind::Media, backlog_input("Cosmos", None)).await?;

        let games = list_items(&db, BacklogKind::Games).await?;
        let ids: Vec<i64> = games.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        assert_eq!(count_items(&db, BacklogKind::Games).await?, 2);
        assert_eq!(count_items(&db, BacklogKind::Media).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_item(&db, BacklogKind::Media, backlog_input("Cosmos", None)).await?;

        // Same id in the other list is untouched
        assert_eq!(delete_item(&db, BacklogKind::Games, item.id).await?, 0);
        assert_eq!(delete_item(&db, BacklogKind::Media, item.id).await?, 1);
        assert!(list_items(&db, BacklogKind::Media).await?.is_empty());
        Ok(())
    }
}
