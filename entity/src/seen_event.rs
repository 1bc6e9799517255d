use sea_orm::entity::prelude::*;

/// A kill event that has already been announced.
///
/// Rows are inserted once and never updated or deleted. `seen_at` exists so
/// an age-based retention policy can be added without a schema change.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "seen_event")]
pub struct Model {
    /// Upstream event id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: String,
    /// When the event's notification was emitted (or abandoned).
    pub seen_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
