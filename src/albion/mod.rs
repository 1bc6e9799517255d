//! Typed client for the Tools4Albion game info API.
//!
//! This module wraps the upstream HTTP endpoints the bot consumes: player and
//! item search, the per-player recent events page, and per-city item prices.
//! Wire models mirror the upstream JSON verbatim; nothing here touches the
//! database or Discord.

pub mod client;
pub mod model;

pub use client::AlbionClient;
