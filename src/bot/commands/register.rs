use serenity::all::{Context, Message};

use crate::bot::commands::reply;
use crate::bot::handler::Handler;
use crate::data::player::RegisteredPlayerRepository;
use crate::model::player::UpsertRegisteredPlayerParam;

/// `!register <player name>` - binds the message author to an Albion player.
///
/// Searches the Albion API for the named player and stores the binding;
/// registering again replaces the previous one.
pub async fn run(handler: &Handler, ctx: &Context, message: &Message, player_name: &str) {
    if player_name.is_empty() {
        reply(ctx, message, "Usage: `!register <player name>`").await;
        return;
    }

    let player = match handler.albion.search_player(player_name).await {
        Ok(Some(player)) => player,
        Ok(None) => {
            reply(
                ctx,
                message,
                &format!("❌ Could not find a player named `{}`.", player_name),
            )
            .await;
            return;
        }
        Err(e) => {
            tracing::error!("Player search for '{}' failed: {}", player_name, e);
            reply(
                ctx,
                message,
                "Player search is unavailable right now, try again later.",
            )
            .await;
            return;
        }
    };

    let repo = RegisteredPlayerRepository::new(&handler.db);
    let param = UpsertRegisteredPlayerParam {
        owner_id: message.author.id.get(),
        player_id: player.id,
        player_name: player.name,
    };

    match repo.upsert(param).await {
        Ok(registered) => {
            reply(
                ctx,
                message,
                &format!(
                    "✅ **Success!** `{}` is now being tracked.",
                    registered.player_name
                ),
            )
            .await;
        }
        Err(e) => {
            tracing::error!("Failed to store registration: {}", e);
            reply(ctx, message, "Something went wrong saving your registration.").await;
        }
    }
}
