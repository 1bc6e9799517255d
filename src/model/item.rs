//! Cached item name domain model and parameters.

use chrono::{DateTime, Utc};

/// A cached resolution of a search term to a canonical item id.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedItem {
    /// Canonical Albion item id.
    pub item_id: String,
    /// Item display name.
    pub name: String,
    /// When the entry was cached or refreshed.
    pub cached_at: DateTime<Utc>,
}

impl CachedItem {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Item name entity from the database
    ///
    /// # Returns
    /// - `CachedItem` - The converted domain model
    pub fn from_entity(entity: entity::item_name::Model) -> Self {
        Self {
            item_id: entity.item_id,
            name: entity.name,
            cached_at: entity.cached_at,
        }
    }
}

/// Parameters for caching an item resolution.
pub struct UpsertItemNameParam {
    /// Canonical Albion item id
    pub item_id: String,
    /// Item display name
    pub name: String,
    /// The search term the item was resolved from; normalized by the
    /// repository before storage
    pub searched_as: String,
}
