//! Business logic for the killboard loop and its Discord delivery.

pub mod killboard;
pub mod notification;
