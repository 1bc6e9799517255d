//! Tracked player domain model and parameters.

use chrono::{DateTime, Utc};

/// A Discord user's tracked Albion player binding.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredPlayer {
    /// Discord user id of the owner.
    pub owner_id: u64,
    /// Albion player id being tracked.
    pub player_id: String,
    /// Albion player display name at registration time.
    pub player_name: String,
    /// When the binding was created or last replaced.
    pub registered_at: DateTime<Utc>,
}

impl RegisteredPlayer {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Parses the stored String owner_id into u64. If parsing fails, defaults
    /// to 0 (though this should never happen with valid database data).
    ///
    /// # Arguments
    /// - `entity` - Registered player entity from the database
    ///
    /// # Returns
    /// - `RegisteredPlayer` - The converted domain model
    pub fn from_entity(entity: entity::registered_player::Model) -> Self {
        Self {
            owner_id: entity.owner_id.parse().unwrap_or(0),
            player_id: entity.player_id,
            player_name: entity.player_name,
            registered_at: entity.registered_at,
        }
    }
}

/// Parameters for creating or replacing a tracked player binding.
pub struct UpsertRegisteredPlayerParam {
    /// Discord user id of the owner
    pub owner_id: u64,
    /// Albion player id to track
    pub player_id: String,
    /// Albion player display name
    pub player_name: String,
}
