use serenity::all::{Context, Message};

use crate::bot::{commands, handler::Handler};

/// Prefix introducing chat commands.
const COMMAND_PREFIX: char = '!';

/// Handle message creation in a channel
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    // The bot's own announcements and other bots are never commands
    if message.author.bot {
        return;
    }

    // Only answer commands in guild channels (not DMs)
    if message.guild_id.is_none() {
        return;
    }

    let Some((command, args)) = parse_command(&message.content) else {
        return;
    };

    match command {
        "register" => commands::register::run(handler, &ctx, &message, args).await,
        "unregister" => commands::unregister::run(handler, &ctx, &message).await,
        "price" => commands::price::run(handler, &ctx, &message, args).await,
        "guildinfo" => commands::guildinfo::run(handler, &ctx, &message).await,
        _ => {}
    }
}

/// Splits a prefixed message into its command word and argument rest.
///
/// # Returns
/// - `Some((command, args))` - Message started with the prefix; args may be empty
/// - `None` - Not a command message
fn parse_command(content: &str) -> Option<(&str, &str)> {
    let body = content.strip_prefix(COMMAND_PREFIX)?;

    match body.split_once(char::is_whitespace) {
        Some((command, rest)) => Some((command, rest.trim())),
        None => Some((body, "")),
    }
}
