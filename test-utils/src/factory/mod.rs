//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let player = factory::registered_player::create_registered_player(&db).await?;
//!     let seen = factory::seen_event::create_seen_event(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::registered_player::RegisteredPlayerFactory;
//!
//! let player = RegisteredPlayerFactory::new(&db)
//!     .owner_id("987654321")
//!     .player_id("albion-42")
//!     .player_name("CustomPlayer")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `registered_player` - Create tracked player bindings
//! - `seen_event` - Create already-announced event markers
//! - `item_name` - Create cached item name entries
//! - `helpers` - Shared ID generation

pub mod helpers;
pub mod item_name;
pub mod registered_player;
pub mod seen_event;

// Re-export commonly used factory functions for concise usage
pub use item_name::create_item_name;
pub use registered_player::create_registered_player;
pub use seen_event::create_seen_event;
