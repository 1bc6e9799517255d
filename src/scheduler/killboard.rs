use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::albion::AlbionClient;
use crate::error::AppError;
use crate::service::killboard::KillboardService;
use crate::service::notification::DiscordNotifier;

/// Starts the killboard scheduler
///
/// This scheduler runs every minute and announces unseen kill/death events
/// for every registered player. Callers start it only once the Discord
/// gateway session and the database connection are both established.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for sending announcements
/// - `albion`: Albion API client for fetching recent events
/// - `channel_id`: Killboard channel receiving the announcements
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    albion: AlbionClient,
    channel_id: u64,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_http = discord_http.clone();
    let job_albion = albion.clone();

    // A tick that outlives its minute must never overlap the next one; an
    // occupied guard means the previous tick is still running and this
    // firing is skipped.
    let in_flight = Arc::new(Mutex::new(()));

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();
        let albion = job_albion.clone();
        let in_flight = in_flight.clone();

        Box::pin(async move {
            let Ok(_guard) = in_flight.try_lock() else {
                tracing::warn!("Previous killboard tick still running, skipping this one");
                return;
            };

            let notifier = DiscordNotifier::new(http, channel_id);
            let service = KillboardService::new(&db, &albion, &notifier);

            match service.run_tick().await {
                Ok(summary) => {
                    if summary.notifications_sent > 0 || summary.players_failed > 0 {
                        tracing::info!(
                            "Killboard tick: {} players polled, {} failed, {} notifications sent",
                            summary.players_polled,
                            summary.players_failed,
                            summary.notifications_sent
                        );
                    }
                }
                Err(e) => tracing::error!("Error processing killboard tick: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Killboard scheduler started");

    Ok(())
}
