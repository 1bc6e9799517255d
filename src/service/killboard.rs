//! Killboard polling core.
//!
//! One tick walks every registered player, fetches their recent kill events,
//! and announces each event that has not been announced before. The
//! `seen_event` table is the deduplication contract: an event id is recorded
//! the moment its notification has been sent (or abandoned after bounded
//! retries), so a tick can be interrupted and re-run without double-posting.
//!
//! The tick talks to its collaborators through the `EventSource` and
//! `NotificationSink` seams; production wires in the Albion client and the
//! Discord channel sink.

use std::time::Duration;

use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::albion::model::KillEvent;
use crate::albion::AlbionClient;
use crate::data::player::RegisteredPlayerRepository;
use crate::data::seen_event::SeenEventRepository;
use crate::error::AppError;
use crate::model::event::EventOutcome;
use crate::model::player::RegisteredPlayer;

/// Delay between per-player fetches, pacing requests to the upstream API.
const INTER_PLAYER_DELAY: Duration = Duration::from_secs(2);

/// How many times a notification send is attempted before the event is
/// recorded as seen anyway.
const SEND_ATTEMPTS: u32 = 3;

/// Backoff before the second send attempt; doubles per retry.
const SEND_RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Source of recent kill events for a player.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Returns a bounded page of the player's most recent kill events.
    /// No ordering is guaranteed or assumed.
    async fn recent_events(&self, player_id: &str) -> Result<Vec<KillEvent>, AppError>;
}

#[async_trait]
impl EventSource for AlbionClient {
    async fn recent_events(&self, player_id: &str) -> Result<Vec<KillEvent>, AppError> {
        self.player_events(player_id).await
    }
}

/// Delivery boundary for kill/death announcements.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Delivers one announcement for an event, classified from the tracked
    /// player's perspective.
    async fn notify(
        &self,
        outcome: EventOutcome,
        player: &RegisteredPlayer,
        event: &KillEvent,
    ) -> Result<(), AppError>;
}

/// Counters for one killboard tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    /// Players whose events were fetched successfully.
    pub players_polled: usize,
    /// Players skipped because the event fetch failed.
    pub players_failed: usize,
    /// Notifications emitted this tick.
    pub notifications_sent: usize,
}

/// One-tick execution of the killboard loop.
///
/// Constructed fresh per tick; readiness of the database connection is a
/// construction precondition rather than something checked per call site.
pub struct KillboardService<'a, S, N> {
    db: &'a DatabaseConnection,
    source: &'a S,
    sink: &'a N,
    inter_player_delay: Duration,
    send_retry_backoff: Duration,
}

impl<'a, S: EventSource, N: NotificationSink> KillboardService<'a, S, N> {
    pub fn new(db: &'a DatabaseConnection, source: &'a S, sink: &'a N) -> Self {
        Self {
            db,
            source,
            sink,
            inter_player_delay: INTER_PLAYER_DELAY,
            send_retry_backoff: SEND_RETRY_BACKOFF,
        }
    }

    /// Same service without pacing delays, so tests run immediately.
    #[cfg(test)]
    fn without_delays(db: &'a DatabaseConnection, source: &'a S, sink: &'a N) -> Self {
        Self {
            db,
            source,
            sink,
            inter_player_delay: Duration::ZERO,
            send_retry_backoff: Duration::ZERO,
        }
    }

    /// Runs one killboard tick over all registered players.
    ///
    /// A failed event fetch skips that player only; the remaining players are
    /// still processed. Database errors abort the tick: with the seen-set
    /// unreachable nothing can be announced safely, so the tick does nothing
    /// and the caller logs the error.
    ///
    /// # Returns
    /// - `Ok(TickSummary)` - Counters for the completed tick
    /// - `Err(AppError)` - Database failure while reading or recording state
    pub async fn run_tick(&self) -> Result<TickSummary, AppError> {
        let players = RegisteredPlayerRepository::new(self.db).list().await?;
        let mut summary = TickSummary::default();

        for player in players {
            match self.source.recent_events(&player.player_id).await {
                Ok(events) => {
                    summary.players_polled += 1;
                    for event in &events {
                        if self.announce_new_event(&player, event).await? {
                            summary.notifications_sent += 1;
                        }
                    }
                }
                Err(e) => {
                    summary.players_failed += 1;
                    tracing::warn!(
                        "Failed to fetch events for {} ({}): {}",
                        player.player_name,
                        player.player_id,
                        e
                    );
                }
            }

            if !self.inter_player_delay.is_zero() {
                tokio::time::sleep(self.inter_player_delay).await;
            }
        }

        Ok(summary)
    }

    /// Announces one event unless it is already recorded as seen.
    ///
    /// The contains-check and the mark-seen write bracket the single send, so
    /// under sequential iteration each event id is emitted at most once. The
    /// id is recorded even when every send attempt failed: a notification may
    /// be lost, but it is never re-attempted on later ticks.
    ///
    /// # Returns
    /// - `Ok(true)` - A notification was emitted
    /// - `Ok(false)` - Event was already seen, or delivery was abandoned
    /// - `Err(AppError)` - Database failure
    async fn announce_new_event(
        &self,
        player: &RegisteredPlayer,
        event: &KillEvent,
    ) -> Result<bool, AppError> {
        let seen_repo = SeenEventRepository::new(self.db);
        let event_id = event.event_id.to_string();

        if seen_repo.contains(&event_id).await? {
            return Ok(false);
        }

        let outcome = EventOutcome::classify(event, &player.player_id);

        let sent = self.send_with_retry(outcome, player, event).await;
        if !sent {
            tracing::error!(
                "Giving up on notification for event {} after {} attempts",
                event_id,
                SEND_ATTEMPTS
            );
        }

        seen_repo.mark_seen(&event_id).await?;

        Ok(sent)
    }

    /// Attempts delivery up to `SEND_ATTEMPTS` times with doubling backoff.
    async fn send_with_retry(
        &self,
        outcome: EventOutcome,
        player: &RegisteredPlayer,
        event: &KillEvent,
    ) -> bool {
        let mut backoff = self.send_retry_backoff;

        for attempt in 1..=SEND_ATTEMPTS {
            match self.sink.notify(outcome, player, event).await {
                Ok(()) => return true,
                Err(e) => {
                    tracing::warn!(
                        "Send attempt {}/{} for event {} failed: {}",
                        attempt,
                        SEND_ATTEMPTS,
                        event.event_id,
                        e
                    );
                    if attempt < SEND_ATTEMPTS && !backoff.is_zero() {
                        tokio::time::sleep(backoff).await;
                        backoff *= 2;
                    }
                }
            }
        }

        false
    }
}
