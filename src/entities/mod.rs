//! Entity module - Contains all SeaORM entity definitions for the store.
//! The five tables are independent; none of them reference each other.
//! Each entity has a Model struct for data and an Entity struct for operations.

/// `games` table
pub mod game;
/// `pc_setup` table
pub mod hardware_profile;
/// `weed_entries` table
pub mod journal_entry;
/// `media` table
pub mod media_item;
/// `recommendations` table
pub mod recommendation;

// Re-export specific types to avoid conflicts
pub use game::{Column as GameColumn, Entity as Game, Model as GameModel};
pub use hardware_profile::{
    Column as HardwareProfileColumn, Entity as HardwareProfile, Model as HardwareProfileModel,
};
pub use journal_entry::{
    Column as JournalEntryColumn, Entity as JournalEntry, Model as JournalEntryModel,
};
pub use media_item::{Column as MediaItemColumn, Entity as MediaItem, Model as MediaItemModel};
pub use recommendation::{
    Column as RecommendationColumn, Entity as Recommendation, Model as RecommendationModel,
};
