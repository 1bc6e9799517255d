//! Item name factory for creating test item cache entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test item name cache entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::item_name::ItemNameFactory;
///
/// let item = ItemNameFactory::new(&db)
///     .item_id("T4_BAG")
///     .name("Adept's Bag")
///     .search_name("bag")
///     .build()
///     .await?;
/// ```
pub struct ItemNameFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: String,
    name: String,
    search_name: String,
}

impl<'a> ItemNameFactory<'a> {
    /// Creates a new ItemNameFactory with default values.
    ///
    /// Defaults:
    /// - item_id: `"T4_ITEM_{id}"`
    /// - name: `"Item {id}"`
    /// - search_name: `"item {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ItemNameFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            item_id: format!("T4_ITEM_{}", id),
            name: format!("Item {}", id),
            search_name: format!("item {}", id),
        }
    }

    /// Sets the canonical item id.
    ///
    /// # Arguments
    /// - `item_id` - Canonical Albion item ID
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = item_id.into();
        self
    }

    /// Sets the item display name.
    ///
    /// # Arguments
    /// - `name` - Display name for the item
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the lowercased search term the entry resolves.
    ///
    /// # Arguments
    /// - `search_name` - Lowercased search term
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn search_name(mut self, search_name: impl Into<String>) -> Self {
        self.search_name = search_name.into();
        self
    }

    /// Inserts the item name entry into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created item name entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::item_name::Model, DbErr> {
        entity::item_name::ActiveModel {
            item_id: ActiveValue::Set(self.item_id),
            name: ActiveValue::Set(self.name),
            search_name: ActiveValue::Set(self.search_name),
            cached_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item name cache entry with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created item name entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_item_name(
    db: &DatabaseConnection,
) -> Result<entity::item_name::Model, DbErr> {
    ItemNameFactory::new(db).build().await
}
