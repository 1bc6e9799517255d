//! Discord bot integration.
//!
//! This module provides the bot half of the application: the serenity client,
//! the event handler that dispatches gateway events, and the prefix command
//! implementations. The killboard scheduler is launched from the `ready`
//! handler so it never runs before the gateway session exists.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild availability
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `MESSAGE_CONTENT` - Read message text for prefix commands (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod commands;
pub mod handler;
pub mod start;
