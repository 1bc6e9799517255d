use serenity::all::{Context, CreateEmbed, CreateEmbedFooter, CreateMessage, Message};

use crate::albion::AlbionClient;
use crate::bot::commands::reply;
use crate::bot::handler::Handler;
use crate::data::item_name::ItemNameRepository;
use crate::model::item::UpsertItemNameParam;
use crate::util::format::group_digits;

/// Embed color for price lookups.
const PRICE_COLOR: u32 = 0x3498db;

/// `!price <item name>` - looks up per-city market prices for an item.
///
/// Item names resolve cache-first against the `item_name` table; a cache
/// miss falls back to the upstream search endpoint and writes the resolution
/// through.
pub async fn run(handler: &Handler, ctx: &Context, message: &Message, item_name: &str) {
    if item_name.is_empty() {
        reply(ctx, message, "Usage: `!price <item name>`").await;
        return;
    }

    reply(ctx, message, &format!("🔍 Searching for `{}`...", item_name)).await;

    let Some((item_id, found_name)) = resolve_item(handler, ctx, message, item_name).await else {
        return;
    };

    let prices = match handler.albion.item_prices(&item_id).await {
        Ok(prices) => prices,
        Err(e) => {
            tracing::error!("Price fetch for {} failed: {}", item_id, e);
            reply(
                ctx,
                message,
                &format!("Could not fetch price data for `{}`.", found_name),
            )
            .await;
            return;
        }
    };

    if prices.is_empty() {
        reply(
            ctx,
            message,
            &format!("Could not fetch price data for `{}`.", found_name),
        )
        .await;
        return;
    }

    let price_lines = prices
        .iter()
        .map(|p| format!("**{}:** {} silver", p.city, group_digits(p.price)))
        .collect::<Vec<_>>()
        .join("\n");

    let embed = CreateEmbed::new()
        .title(format!("Price Check: {}", found_name))
        .color(PRICE_COLOR)
        .thumbnail(AlbionClient::item_render_url(&item_id))
        .field("Market Prices", price_lines, false)
        .footer(CreateEmbedFooter::new(
            "Prices are updated periodically by Tools4Albion.",
        ));

    if let Err(e) = message
        .channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::error!("Failed to send price embed: {}", e);
    }
}

/// Resolves a search term to (item_id, display name), cache-first.
///
/// Replies in channel and returns `None` when the item cannot be resolved.
async fn resolve_item(
    handler: &Handler,
    ctx: &Context,
    message: &Message,
    item_name: &str,
) -> Option<(String, String)> {
    let item_repo = ItemNameRepository::new(&handler.db);

    match item_repo.find_by_name(item_name).await {
        Ok(Some(cached)) => return Some((cached.item_id, cached.name)),
        Ok(None) => {}
        // A broken cache only costs the upstream round-trip
        Err(e) => tracing::warn!("Item cache lookup failed: {}", e),
    }

    match handler.albion.search_item(item_name).await {
        Ok(Some(item)) => {
            if let Err(e) = item_repo
                .upsert(UpsertItemNameParam {
                    item_id: item.item_id.clone(),
                    name: item.name.clone(),
                    searched_as: item_name.to_string(),
                })
                .await
            {
                tracing::warn!("Failed to cache item resolution: {}", e);
            }
            Some((item.item_id, item.name))
        }
        Ok(None) => {
            reply(
                ctx,
                message,
                &format!("❌ Could not find an item named `{}`.", item_name),
            )
            .await;
            None
        }
        Err(e) => {
            tracing::error!("Item search for '{}' failed: {}", item_name, e);
            reply(
                ctx,
                message,
                "Item search is unavailable right now, try again later.",
            )
            .await;
            None
        }
    }
}
