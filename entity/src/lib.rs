//! SeaORM entity models for the killboard bot.

pub mod prelude;

pub mod item_name;
pub mod registered_player;
pub mod seen_event;
