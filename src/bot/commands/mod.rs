//! Prefix command implementations.
//!
//! Each command is a free async `run` function taking the handler state, the
//! serenity context, and the triggering message. Failures are answered in
//! channel and logged; commands never crash the event loop.

pub mod guildinfo;
pub mod price;
pub mod register;
pub mod unregister;

use serenity::all::{Context, Message};

/// Sends a plain text reply to the command's channel.
///
/// Delivery failures are logged and swallowed; there is nowhere else to
/// surface them.
pub(crate) async fn reply(ctx: &Context, message: &Message, content: &str) {
    if let Err(e) = message.channel_id.say(&ctx.http, content).await {
        tracing::error!("Failed to send command reply: {}", e);
    }
}
