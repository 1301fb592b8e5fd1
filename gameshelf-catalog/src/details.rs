//! Helpers for the single-record details view.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::types::{GameRecord, PlayTime, discount_pct};

/// Characters left alone when encoding a query component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Shown for a missing play time.
pub const MISSING: &str = "—";

/// One store's row in the price list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRow {
    pub store: String,
    pub price: i64,
    /// The record's regular price when it is above this store's price.
    pub original: Option<i64>,
    pub discount_pct: i64,
    pub url: String,
}

/// Store rows cheapest first. Ties keep their stored order.
pub fn price_rows(game: &GameRecord) -> Vec<PriceRow> {
    let mut prices: Vec<_> = game.store_prices.iter().collect();
    prices.sort_by_key(|p| p.price);
    prices
        .into_iter()
        .map(|p| {
            let original = (game.regular > p.price).then_some(game.regular);
            PriceRow {
                store: p.name.clone(),
                price: p.price,
                original,
                discount_pct: original.map_or(0, |o| discount_pct(p.price, o)),
                url: p
                    .url
                    .clone()
                    .unwrap_or_else(|| store_search_url(&p.name, &game.title)),
            }
        })
        .collect()
}

/// Search page for `title` on a known store, or a web search otherwise.
pub fn store_search_url(store: &str, title: &str) -> String {
    let q = utf8_percent_encode(title, COMPONENT).to_string();
    match store {
        "Amazon" => format!("https://www.amazon.com/s?k={q}"),
        "Steam" => format!("https://store.steampowered.com/search/?term={q}"),
        "GOG" => format!("https://www.gog.com/en/games?query={q}"),
        "Epic Games Store" => format!("https://store.epicgames.com/en-US/browse?q={q}"),
        "PlayStation Store" => format!("https://store.playstation.com/es-es/search/{q}"),
        "Xbox Store" => format!("https://www.xbox.com/es-ES/search?q={q}"),
        "Nintendo eShop" => format!("https://www.nintendo.com/search/#q={q}"),
        _ => format!("https://www.google.com/search?q={q}"),
    }
}

/// Render a play time.
///
/// Numbers above 100 are minutes, anything else is hours. Output is
/// `"H h M min"`, or `"H h"` on a whole hour.
pub fn format_play_time(value: Option<&PlayTime>) -> String {
    match value {
        None => MISSING.to_string(),
        Some(PlayTime::Text(s)) if s.is_empty() => MISSING.to_string(),
        Some(PlayTime::Text(s)) => s.clone(),
        Some(PlayTime::Range { min }) => format_play_time(Some(min.as_ref())),
        Some(PlayTime::Amount(n)) => {
            let minutes = (if *n > 100.0 { *n } else { n * 60.0 }).round() as i64;
            let (h, m) = (minutes.div_euclid(60), minutes.rem_euclid(60));
            if m == 0 {
                format!("{h} h")
            } else {
                format!("{h} h {m} min")
            }
        }
    }
}

/// `"genre · year"`, leaving out blank parts.
pub fn subtitle(game: &GameRecord) -> String {
    let genre = game.genre.trim();
    let year = if game.year != 0 {
        game.year.to_string()
    } else {
        String::new()
    };
    [genre, year.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Find a record by title: exact match first, then case-insensitive, then
/// the first title containing `title`.
pub fn find_by_title<'a>(games: &'a [GameRecord], title: &str) -> Option<&'a GameRecord> {
    let needle = title.trim();
    let lower = needle.to_lowercase();
    games
        .iter()
        .find(|g| g.title == needle)
        .or_else(|| games.iter().find(|g| g.title.to_lowercase() == lower))
        .or_else(|| {
            (!lower.is_empty())
                .then(|| games.iter().find(|g| g.title.to_lowercase().contains(&lower)))
                .flatten()
        })
}

#[cfg(test)]
#[path = "tests/details_tests.rs"]
mod tests;
