//! Registered player factory for creating test tracked-player bindings.
//!
//! This module provides factory methods for creating registered player entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test registered players with customizable fields.
///
/// Provides a builder pattern for creating registered player entities with
/// default values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::registered_player::RegisteredPlayerFactory;
///
/// let player = RegisteredPlayerFactory::new(&db)
///     .owner_id("123456789")
///     .player_id("albion-42")
///     .player_name("CustomPlayer")
///     .build()
///     .await?;
/// ```
pub struct RegisteredPlayerFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: String,
    player_id: String,
    player_name: String,
}

impl<'a> RegisteredPlayerFactory<'a> {
    /// Creates a new RegisteredPlayerFactory with default values.
    ///
    /// Defaults:
    /// - owner_id: auto-incremented id as string
    /// - player_id: `"albion-{id}"`
    /// - player_name: `"Player {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RegisteredPlayerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id: id.to_string(),
            player_id: format!("albion-{}", id),
            player_name: format!("Player {}", id),
        }
    }

    /// Sets the Discord user id owning the binding.
    ///
    /// # Arguments
    /// - `owner_id` - Discord user ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    /// Sets the tracked Albion player id.
    ///
    /// # Arguments
    /// - `player_id` - Albion player ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn player_id(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = player_id.into();
        self
    }

    /// Sets the tracked player's display name.
    ///
    /// # Arguments
    /// - `player_name` - Display name for the player
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = player_name.into();
        self
    }

    /// Inserts the registered player into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created registered player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::registered_player::Model, DbErr> {
        entity::registered_player::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            player_id: ActiveValue::Set(self.player_id),
            player_name: ActiveValue::Set(self.player_name),
            registered_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registered player with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created registered player entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_registered_player(
    db: &DatabaseConnection,
) -> Result<entity::registered_player::Model, DbErr> {
    RegisteredPlayerFactory::new(db).build().await
}
