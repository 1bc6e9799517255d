//! Discord delivery of killboard announcements.
//!
//! Builds the kill/death embed (title, color, defeated-line, fame footer,
//! server-rendered kill image) and posts it to the configured killboard
//! channel.

use std::sync::Arc;

use serenity::all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::async_trait;
use serenity::http::Http;

use crate::albion::model::KillEvent;
use crate::albion::AlbionClient;
use crate::error::AppError;
use crate::model::event::EventOutcome;
use crate::model::player::RegisteredPlayer;
use crate::service::killboard::NotificationSink;
use crate::util::format::group_digits;

/// Embed color for kill announcements.
const KILL_COLOR: u32 = 0x2ecc71;
/// Embed color for death announcements.
const DEATH_COLOR: u32 = 0xe74c3c;

/// Notification sink posting embeds to a single killboard channel.
pub struct DiscordNotifier {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordNotifier {
    /// Creates a notifier for the given killboard channel.
    ///
    /// # Arguments
    /// - `http` - Shared Discord HTTP client
    /// - `channel_id` - Channel receiving the announcements
    ///
    /// # Returns
    /// - `DiscordNotifier` - New notifier instance
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }
}

#[async_trait]
impl NotificationSink for DiscordNotifier {
    async fn notify(
        &self,
        outcome: EventOutcome,
        player: &RegisteredPlayer,
        event: &KillEvent,
    ) -> Result<(), AppError> {
        let message = CreateMessage::new().embed(build_event_embed(outcome, player, event));

        self.channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}

/// Builds the announcement embed for one classified event.
///
/// # Arguments
/// - `outcome` - Kill or death from the tracked player's perspective
/// - `player` - The tracked player the announcement concerns
/// - `event` - The raw kill event
///
/// # Returns
/// - `CreateEmbed` - Embed with title, colors, fame footer, and kill image
pub fn build_event_embed(
    outcome: EventOutcome,
    player: &RegisteredPlayer,
    event: &KillEvent,
) -> CreateEmbed {
    let (title, color) = match outcome {
        EventOutcome::Kill => (
            format!("KILL: {} got a kill!", player.player_name),
            KILL_COLOR,
        ),
        EventOutcome::Death => (
            format!("DEATH: {} was killed!", player.player_name),
            DEATH_COLOR,
        ),
    };

    CreateEmbed::new()
        .title(title)
        .description(format!(
            "**{}** defeated **{}**",
            event.killer.name, event.victim.name
        ))
        .color(color)
        .image(AlbionClient::kill_render_url(event.event_id))
        .footer(CreateEmbedFooter::new(format!(
            "Fame: {}",
            group_digits(event.total_victim_kill_fame)
        )))
}
