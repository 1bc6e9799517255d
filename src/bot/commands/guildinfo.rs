use serenity::all::{Context, CreateEmbed, CreateEmbedFooter, CreateMessage, Message};

use crate::bot::commands::reply;
use crate::bot::handler::Handler;

/// Display name shown in the guild info card.
const GUILD_NAME: &str = "Labubu Squad";

/// Embed color for the guild info card.
const GUILD_COLOR: u32 = 0xf1c40f;

/// `!guildinfo` - shows the configured guild's static info card.
pub async fn run(handler: &Handler, ctx: &Context, message: &Message) {
    let Some(guild_id) = handler.albion_guild_id.as_deref() else {
        reply(
            ctx,
            message,
            "The Albion Guild ID has not been configured by the bot owner.",
        )
        .await;
        return;
    };

    let embed = CreateEmbed::new()
        .title(format!("Squad Info: {}", GUILD_NAME))
        .description("The official guild information for the Labubu Squad.")
        .color(GUILD_COLOR)
        .field("Guild Name", GUILD_NAME, true)
        .field("Albion Guild ID", guild_id, true)
        .footer(CreateEmbedFooter::new("A guild of mischievous monsters."));

    if let Err(e) = message
        .channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::error!("Failed to send guild info embed: {}", e);
    }
}
