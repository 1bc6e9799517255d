//! Seen event factory for creating test already-announced markers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seen events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::seen_event::SeenEventFactory;
///
/// let seen = SeenEventFactory::new(&db)
///     .event_id("31337")
///     .build()
///     .await?;
/// ```
pub struct SeenEventFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: String,
}

impl<'a> SeenEventFactory<'a> {
    /// Creates a new SeenEventFactory with default values.
    ///
    /// Defaults:
    /// - event_id: auto-incremented id as string
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SeenEventFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            event_id: id.to_string(),
        }
    }

    /// Sets the event id.
    ///
    /// # Arguments
    /// - `event_id` - Upstream event ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = event_id.into();
        self
    }

    /// Inserts the seen event into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created seen event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::seen_event::Model, DbErr> {
        entity::seen_event::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            seen_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a seen event with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created seen event entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_seen_event(
    db: &DatabaseConnection,
) -> Result<entity::seen_event::Model, DbErr> {
    SeenEventFactory::new(db).build().await
}
