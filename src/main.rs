mod albion;
mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;
mod web;

use tracing_subscriber::EnvFilter;

use crate::{albion::AlbionClient, config::Config, error::AppError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Fatal error during startup: {}", e);
        std::process::exit(1);
    }
}

/// Wires up configuration, persistence, the health endpoint, and the Discord
/// client, then blocks on the bot until shutdown.
///
/// The killboard scheduler is not started here: it launches from the bot's
/// `ready` handler, once the gateway session and the database connection are
/// both established.
async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_http_client()?;
    let albion = AlbionClient::new(http_client);

    tracing::info!("Starting killboard bot");

    let client = bot::start::build_client(&config, db, albion).await?;

    // Health endpoint and bot client are independent long-running tasks with
    // no shared state.
    let health_addr = config.health_bind_addr.clone();
    tokio::spawn(async move {
        if let Err(e) = web::serve(&health_addr).await {
            tracing::error!("Health endpoint error: {}", e);
        }
    });

    bot::start::start_bot(client).await
}
