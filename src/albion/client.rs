use crate::albion::model::{ItemPrice, ItemSummary, KillEvent, PlayerSummary, SearchResponse};
use crate::error::AppError;

const API_BASE_URL: &str = "https://www.tools4albion.com/api/gameinfo";
const RENDER_BASE_URL: &str = "https://www.tools4albion.com/renderer";

/// Page size requested from the per-player events endpoint.
const EVENT_PAGE_LIMIT: u32 = 10;

/// HTTP client for the Tools4Albion game info API.
///
/// Cheap to clone; all clones share the underlying reqwest connection pool
/// and its bounded request timeout.
#[derive(Clone)]
pub struct AlbionClient {
    http: reqwest::Client,
    base_url: String,
}

impl AlbionClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Searches for a player by name and returns the best match.
    ///
    /// # Returns
    /// - `Ok(Some(PlayerSummary))` - First player match for the query
    /// - `Ok(None)` - No player matched
    /// - `Err(AppError)` - Upstream unreachable, non-2xx, or undecodable
    pub async fn search_player(&self, name: &str) -> Result<Option<PlayerSummary>, AppError> {
        let response = self.search(name).await?;
        Ok(response.players.into_iter().next())
    }

    /// Searches for an item by name and returns the best match.
    ///
    /// # Returns
    /// - `Ok(Some(ItemSummary))` - First item match for the query
    /// - `Ok(None)` - No item matched
    /// - `Err(AppError)` - Upstream unreachable, non-2xx, or undecodable
    pub async fn search_item(&self, name: &str) -> Result<Option<ItemSummary>, AppError> {
        let response = self.search(name).await?;
        Ok(response.items.into_iter().next())
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, AppError> {
        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[("search", query)])
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;

        Ok(response)
    }

    /// Fetches the most recent kill events involving a player.
    ///
    /// Returns a bounded page; no pagination is performed. No ordering is
    /// guaranteed by the upstream API and none is assumed here.
    ///
    /// # Arguments
    /// - `player_id` - Albion player id
    ///
    /// # Returns
    /// - `Ok(Vec<KillEvent>)` - Up to one page of recent events
    /// - `Err(AppError)` - Upstream unreachable, non-2xx, or undecodable
    pub async fn player_events(&self, player_id: &str) -> Result<Vec<KillEvent>, AppError> {
        let events = self
            .http
            .get(format!("{}/events/player/{}", self.base_url, player_id))
            .query(&[("limit", EVENT_PAGE_LIMIT)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<KillEvent>>()
            .await?;

        Ok(events)
    }

    /// Fetches per-city market prices for an item.
    ///
    /// # Arguments
    /// - `item_id` - Canonical Albion item id
    ///
    /// # Returns
    /// - `Ok(Vec<ItemPrice>)` - One entry per city with price data
    /// - `Err(AppError)` - Upstream unreachable, non-2xx, or undecodable
    pub async fn item_prices(&self, item_id: &str) -> Result<Vec<ItemPrice>, AppError> {
        let prices = self
            .http
            .get(format!("{}/prices/{}", self.base_url, item_id))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ItemPrice>>()
            .await?;

        Ok(prices)
    }

    /// URL of the server-rendered image for a kill event.
    pub fn kill_render_url(event_id: i64) -> String {
        format!("{}/kill/{}.png", RENDER_BASE_URL, event_id)
    }

    /// URL of the server-rendered icon for an item.
    pub fn item_render_url(item_id: &str) -> String {
        format!("{}/item/{}.png", RENDER_BASE_URL, item_id)
    }
}
