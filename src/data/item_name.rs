//! Item name repository for database operations.
//!
//! This module provides the `ItemNameRepository`, a write-through cache of
//! search-term to canonical-item-id resolutions used by the price command.

use crate::model::item::{CachedItem, UpsertItemNameParam};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository providing database operations for the item name cache.
pub struct ItemNameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemNameRepository<'a> {
    /// Creates a new ItemNameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ItemNameRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up a cached item by the user-supplied search term.
    ///
    /// Matching is case-insensitive: terms are normalized to lowercase both
    /// on write and on lookup.
    ///
    /// # Arguments
    /// - `name` - Search term as typed by the user
    ///
    /// # Returns
    /// - `Ok(Some(CachedItem))` - Cache hit
    /// - `Ok(None)` - No cached resolution for that term
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<CachedItem>, DbErr> {
        let entity = entity::prelude::ItemName::find()
            .filter(entity::item_name::Column::SearchName.eq(name.to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(CachedItem::from_entity))
    }

    /// Caches an item resolution.
    ///
    /// Inserts a new entry or refreshes an existing one for the same item id,
    /// including the search term it now resolves from.
    ///
    /// # Arguments
    /// - `param` - Resolution parameters: item id, display name, search term
    ///
    /// # Returns
    /// - `Ok(CachedItem)` - The created or refreshed cache entry
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertItemNameParam) -> Result<CachedItem, DbErr> {
        let entity = entity::prelude::ItemName::insert(entity::item_name::ActiveModel {
            item_id: ActiveValue::Set(param.item_id),
            name: ActiveValue::Set(param.name),
            search_name: ActiveValue::Set(param.searched_as.to_lowercase()),
            cached_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::item_name::Column::ItemId)
                .update_columns([
                    entity::item_name::Column::Name,
                    entity::item_name::Column::SearchName,
                    entity::item_name::Column::CachedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(CachedItem::from_entity(entity))
    }
}
