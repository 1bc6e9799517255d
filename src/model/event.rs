//! Kill event classification.

use crate::albion::model::KillEvent;

/// What a kill event means from a tracked player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The tracked player is the killer.
    Kill,
    /// The tracked player appears in the event without being the killer.
    Death,
}

impl EventOutcome {
    /// Classifies an event from one tracked player's perspective.
    ///
    /// The same raw event classifies independently per tracked player: a
    /// fight between two tracked players is a kill for one and a death for
    /// the other.
    ///
    /// # Arguments
    /// - `event` - The kill event to classify
    /// - `player_id` - Albion player id of the tracked player
    ///
    /// # Returns
    /// - `EventOutcome::Kill` if the tracked player is the event's killer
    /// - `EventOutcome::Death` otherwise
    pub fn classify(event: &KillEvent, player_id: &str) -> Self {
        if event.killer.id == player_id {
            Self::Kill
        } else {
            Self::Death
        }
    }
}
