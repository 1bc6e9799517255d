//! Seen event repository for database operations.
//!
//! This module provides the `SeenEventRepository`, the durable deduplication
//! set behind the killboard loop. Entries are only ever inserted; there is no
//! update or delete path.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for the announced-event set.
pub struct SeenEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeenEventRepository<'a> {
    /// Creates a new SeenEventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SeenEventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether an event has already been announced.
    ///
    /// # Arguments
    /// - `event_id` - Upstream event id
    ///
    /// # Returns
    /// - `Ok(true)` - The event is recorded as seen
    /// - `Ok(false)` - The event has not been announced
    /// - `Err(DbErr)` - Database error during query
    pub async fn contains(&self, event_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::SeenEvent::find()
            .filter(entity::seen_event::Column::EventId.eq(event_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records an event as announced.
    ///
    /// Recording the same id twice is a no-op, so an interrupted tick can
    /// safely re-run over partially processed players.
    ///
    /// # Arguments
    /// - `event_id` - Upstream event id
    ///
    /// # Returns
    /// - `Ok(())` - The event is recorded (inserted now or previously)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn mark_seen(&self, event_id: &str) -> Result<(), DbErr> {
        entity::prelude::SeenEvent::insert(entity::seen_event::ActiveModel {
            event_id: ActiveValue::Set(event_id.to_string()),
            seen_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::seen_event::Column::EventId)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(())
    }
}
