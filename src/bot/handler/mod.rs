use std::sync::atomic::AtomicBool;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::albion::AlbionClient;

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub albion: AlbionClient,
    /// Killboard channel, if configured. Absent disables event tracking.
    pub killboard_channel_id: Option<u64>,
    /// Albion guild id shown by `!guildinfo`, if configured.
    pub albion_guild_id: Option<String>,
    /// Set once the killboard scheduler has been launched. `ready` fires
    /// again on reconnect and the scheduler must not start twice.
    pub(crate) scheduler_started: AtomicBool,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        albion: AlbionClient,
        killboard_channel_id: Option<u64>,
        albion_guild_id: Option<String>,
    ) -> Self {
        Self {
            db,
            albion,
            killboard_channel_id,
            albion_guild_id,
            scheduler_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }
}
