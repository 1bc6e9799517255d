use serenity::all::{Client, GatewayIntents};

use crate::albion::AlbionClient;
use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord client with the bot's event handler attached.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the bot to use
/// - `albion` - Albion API client shared with the command handlers
///
/// # Returns
/// - `Ok(Client)` - Configured client, not yet connected
/// - `Err(AppError)` - Client construction failed
pub async fn build_client(
    config: &Config,
    db: sea_orm::DatabaseConnection,
    albion: AlbionClient,
) -> Result<Client, AppError> {
    // Configure gateway intents - what events the bot will receive
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(
        db,
        albion,
        config.killboard_channel_id,
        config.albion_guild_id.clone(),
    );

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// This function starts the Discord bot client and blocks until the bot
/// shuts down.
///
/// # Arguments
/// - `client` - Client built by `build_client`
///
/// # Returns
/// - `Ok(())` if the bot runs to a clean shutdown
/// - `Err(AppError)` if the connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
