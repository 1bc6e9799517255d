//! Wire models for the Tools4Albion API.
//!
//! Field names follow the upstream JSON: PascalCase on the game-info
//! endpoints, lowercase on the price endpoint.

use serde::Deserialize;

/// Response of the combined search endpoint.
///
/// The endpoint returns both player and item matches for a query; callers
/// pick the side they care about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
    #[serde(default)]
    pub items: Vec<ItemSummary>,
}

/// A player as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub guild_name: Option<String>,
    #[serde(default)]
    pub alliance_name: Option<String>,
}

/// An item as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemSummary {
    pub item_id: String,
    pub name: String,
}

/// One kill occurrence from the per-player events page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KillEvent {
    pub event_id: i64,
    pub killer: EventParticipant,
    pub victim: EventParticipant,
    #[serde(default)]
    pub participants: Vec<EventParticipant>,
    pub total_victim_kill_fame: i64,
    #[serde(default)]
    pub time_stamp: Option<String>,
}

/// A player's appearance in a kill event, as killer, victim, or assist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventParticipant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub guild_name: Option<String>,
    #[serde(default)]
    pub alliance_name: Option<String>,
    /// Raw equipment blob. The kill render image paints it server-side; the
    /// bot never interprets it.
    #[serde(default)]
    pub equipment: Option<serde_json::Value>,
}

/// One city's market price for an item.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPrice {
    pub city: String,
    pub price: i64,
}
