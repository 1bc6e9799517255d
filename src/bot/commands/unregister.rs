use serenity::all::{Context, Message};

use crate::bot::commands::reply;
use crate::bot::handler::Handler;
use crate::data::player::RegisteredPlayerRepository;

/// `!unregister` - removes the message author's tracked player binding.
pub async fn run(handler: &Handler, ctx: &Context, message: &Message) {
    let repo = RegisteredPlayerRepository::new(&handler.db);

    match repo.remove(message.author.id.get()).await {
        Ok(true) => {
            reply(
                ctx,
                message,
                "✅ **Removed!** You will no longer be tracked.",
            )
            .await;
        }
        Ok(false) => {
            reply(ctx, message, "❌ You are not currently registered.").await;
        }
        Err(e) => {
            tracing::error!("Failed to remove registration: {}", e);
            reply(ctx, message, "Something went wrong removing your registration.").await;
        }
    }
}
