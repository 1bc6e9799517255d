//! Registered player repository for database operations.
//!
//! This module provides the `RegisteredPlayerRepository` for managing tracked
//! player bindings. One binding exists per Discord user; registering again
//! replaces the bound Albion player rather than adding a second one.

use crate::model::player::{RegisteredPlayer, UpsertRegisteredPlayerParam};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Repository providing database operations for tracked player bindings.
pub struct RegisteredPlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegisteredPlayerRepository<'a> {
    /// Creates a new RegisteredPlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RegisteredPlayerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts the tracked player binding for a Discord user.
    ///
    /// Inserts a new binding or replaces an existing one for the same owner.
    /// The registration timestamp is refreshed either way.
    ///
    /// # Arguments
    /// - `param` - Binding parameters: owner, player id, player name
    ///
    /// # Returns
    /// - `Ok(RegisteredPlayer)` - The created or replaced binding
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(
        &self,
        param: UpsertRegisteredPlayerParam,
    ) -> Result<RegisteredPlayer, DbErr> {
        let entity = entity::prelude::RegisteredPlayer::insert(
            entity::registered_player::ActiveModel {
                owner_id: ActiveValue::Set(param.owner_id.to_string()),
                player_id: ActiveValue::Set(param.player_id),
                player_name: ActiveValue::Set(param.player_name),
                registered_at: ActiveValue::Set(Utc::now()),
            },
        )
        .on_conflict(
            OnConflict::column(entity::registered_player::Column::OwnerId)
                .update_columns([
                    entity::registered_player::Column::PlayerId,
                    entity::registered_player::Column::PlayerName,
                    entity::registered_player::Column::RegisteredAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(RegisteredPlayer::from_entity(entity))
    }

    /// Removes a Discord user's tracked player binding.
    ///
    /// # Arguments
    /// - `owner_id` - Discord user id of the owner
    ///
    /// # Returns
    /// - `Ok(true)` - A binding existed and was removed
    /// - `Ok(false)` - No binding existed for that owner
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(&self, owner_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::RegisteredPlayer::delete_by_id(owner_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists all tracked player bindings.
    ///
    /// Ordered by owner id so a polling pass iterates players in a stable
    /// order. Reflects all upserts and removals committed before the call.
    ///
    /// # Returns
    /// - `Ok(Vec<RegisteredPlayer>)` - All bindings (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self) -> Result<Vec<RegisteredPlayer>, DbErr> {
        let entities = entity::prelude::RegisteredPlayer::find()
            .order_by_asc(entity::registered_player::Column::OwnerId)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(RegisteredPlayer::from_entity)
            .collect())
    }
}
