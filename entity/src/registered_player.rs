use sea_orm::entity::prelude::*;

/// A Discord user's tracked Albion player binding.
///
/// One row per Discord user; re-registering replaces the bound player.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "registered_player")]
pub struct Model {
    /// Discord user id of the owner, stored as a string.
    #[sea_orm(primary_key, auto_increment = false)]
    pub owner_id: String,
    /// Albion player id being tracked.
    pub player_id: String,
    /// Albion player display name at registration time.
    pub player_name: String,
    /// When the binding was created or last replaced.
    pub registered_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
