use crate::error::{config::ConfigError, AppError};

const DEFAULT_HEALTH_BIND_ADDR: &str = "0.0.0.0:3000";

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Channel that receives kill/death announcements. Absent means the
    /// killboard scheduler never starts; the bot still answers commands.
    pub killboard_channel_id: Option<u64>,
    /// Albion guild id shown by `!guildinfo`. Absent degrades the command.
    pub albion_guild_id: Option<String>,

    pub health_bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            killboard_channel_id: optional_id_var("KILLBOARD_CHANNEL_ID")?,
            albion_guild_id: std::env::var("ALBION_GUILD_ID").ok(),
            health_bind_addr: std::env::var("HEALTH_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_HEALTH_BIND_ADDR.to_string()),
        })
    }
}

/// Reads an optional environment variable holding a Discord snowflake.
///
/// Unset is fine; set-but-unparseable is a configuration error rather than a
/// silently disabled feature.
fn optional_id_var(name: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => {
            let id = raw
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value: raw,
                    source,
                })?;
            Ok(Some(id))
        }
        Err(_) => Ok(None),
    }
}
