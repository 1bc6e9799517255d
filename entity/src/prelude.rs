pub use super::item_name::Entity as ItemName;
pub use super::registered_player::Entity as RegisteredPlayer;
pub use super::seen_event::Entity as SeenEvent;
