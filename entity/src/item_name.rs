use sea_orm::entity::prelude::*;

/// Cached resolution of an item search name to its canonical item id.
///
/// Filled write-through by the price command so repeated lookups skip the
/// upstream search endpoint.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "item_name")]
pub struct Model {
    /// Canonical Albion item id, e.g. `T4_BAG`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: String,
    /// Item display name as returned by the search endpoint.
    pub name: String,
    /// Lowercased search term the item was resolved from.
    pub search_name: String,
    /// When the entry was cached or refreshed.
    pub cached_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
