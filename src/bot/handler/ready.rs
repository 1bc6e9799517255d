use std::sync::atomic::Ordering;

use serenity::all::{ActivityData, Context, Ready};

use crate::bot::handler::Handler;
use crate::scheduler::killboard;

/// Handle the gateway session becoming ready.
///
/// Launches the killboard scheduler on the first ready event, once both the
/// gateway connection and the database connection exist. Reconnects fire
/// `ready` again and are ignored here.
pub async fn handle_ready(handler: &Handler, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("the killboard")));

    let Some(channel_id) = handler.killboard_channel_id else {
        tracing::warn!("Killboard tracking disabled (KILLBOARD_CHANNEL_ID not set)");
        return;
    };

    if handler.scheduler_started.swap(true, Ordering::SeqCst) {
        // Reconnect; scheduler already running
        return;
    }

    let db = handler.db.clone();
    let albion = handler.albion.clone();
    let http = ctx.http.clone();

    tokio::spawn(async move {
        if let Err(e) = killboard::start_scheduler(db, http, albion, channel_id).await {
            tracing::error!("Killboard scheduler error: {}", e);
        }
    });

    tracing::info!("Killboard tracking is now active");
}
