//! Data model for catalog records.

use serde::{Deserialize, Serialize};

/// Store name used for `best` when a record has no prices.
pub const NO_STORE: &str = "N/D";

pub const DEFAULT_TITLE: &str = "Sin título";
pub const DEFAULT_GENRE: &str = "Otro";
pub const DEFAULT_YEAR: i32 = 2024;
pub const DEFAULT_PLATFORM: &str = "PC";
pub const DEFAULT_KIND: &str = "Digital";
pub const DEFAULT_FORMAT: &str = "Estándar";
pub const DEFAULT_SCORE: i64 = 70;

// ── Prices ──────────────────────────────────────────────────────────────────

/// A whole-dollar price offered by one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorePrice {
    pub name: String,
    pub price: i64,
    /// Product page stored with the record, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl StorePrice {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
            url: None,
        }
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    /// Marker used when no store has a price.
    pub fn unavailable() -> Self {
        Self::new(NO_STORE, 0)
    }
}

/// Best price, regular price and discount derived from a price list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSummary {
    pub best: StorePrice,
    pub regular: i64,
    pub discount_pct: i64,
}

impl PriceSummary {
    /// Lowest price wins (the earlier store on ties); regular is the
    /// highest price; the discount is clamped at zero.
    pub fn from_prices(prices: &[StorePrice]) -> Self {
        let Some(first) = prices.first() else {
            return Self {
                best: StorePrice::unavailable(),
                regular: 0,
                discount_pct: 0,
            };
        };
        let best = prices
            .iter()
            .skip(1)
            .fold(first, |a, b| if a.price <= b.price { a } else { b })
            .clone();
        let regular = prices.iter().map(|p| p.price).max().unwrap_or(0);
        Self {
            discount_pct: discount_pct(best.price, regular),
            best,
            regular,
        }
    }
}

/// Whole-percent discount of `price` against `regular`, never negative.
/// Zero when `regular` isn't positive.
pub fn discount_pct(price: i64, regular: i64) -> i64 {
    if regular <= 0 {
        return 0;
    }
    let pct = ((1.0 - price as f64 / regular as f64) * 100.0).round() as i64;
    pct.max(0)
}

// ── Play times ──────────────────────────────────────────────────────────────

/// A play-time value as stored: free text, a number of hours (or minutes
/// when above 100), or an object whose `min` field holds the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayTime {
    Text(String),
    Amount(f64),
    Range { min: Box<PlayTime> },
}

/// Main story, main plus extras, and completionist times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayTimes {
    #[serde(default)]
    pub main: Option<PlayTime>,
    #[serde(default)]
    pub extra: Option<PlayTime>,
    #[serde(default)]
    pub completionist: Option<PlayTime>,
}

impl PlayTimes {
    pub fn is_empty(&self) -> bool {
        self.main.is_none() && self.extra.is_none() && self.completionist.is_none()
    }
}

// ── Records ─────────────────────────────────────────────────────────────────

/// Metacritic-style score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Ok,
    Warn,
    Bad,
}

impl ScoreBand {
    pub fn for_score(score: i64) -> Self {
        if score >= 75 {
            Self::Ok
        } else if score >= 60 {
            Self::Warn
        } else {
            Self::Bad
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warn => write!(f, "warn"),
            Self::Bad => write!(f, "bad"),
        }
    }
}

/// One game in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub platforms: Vec<String>,
    /// Distribution type ("Digital", "Físico", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Edition ("Estándar", "Deluxe", ...).
    pub format: String,
    /// Explicit cover reference, already resolved against the asset
    /// directory.
    #[serde(default)]
    pub cover: Option<String>,
    pub store_prices: Vec<StorePrice>,
    pub best: StorePrice,
    pub regular: i64,
    pub discount_pct: i64,
    pub score: i64,
    #[serde(default)]
    pub play_times: PlayTimes,
}

impl GameRecord {
    /// A record with every field at its default.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genre: DEFAULT_GENRE.to_string(),
            year: DEFAULT_YEAR,
            platforms: vec![DEFAULT_PLATFORM.to_string()],
            kind: DEFAULT_KIND.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            cover: None,
            store_prices: Vec::new(),
            best: StorePrice::unavailable(),
            regular: 0,
            discount_pct: 0,
            score: DEFAULT_SCORE,
            play_times: PlayTimes::default(),
        }
    }

    /// Replace the price list and recompute best, regular and discount.
    pub fn with_prices(mut self, prices: Vec<StorePrice>) -> Self {
        let summary = PriceSummary::from_prices(&prices);
        self.store_prices = prices;
        self.best = summary.best;
        self.regular = summary.regular;
        self.discount_pct = summary.discount_pct;
        self
    }

    pub fn store_names(&self) -> impl Iterator<Item = &str> {
        self.store_prices.iter().map(|p| p.name.as_str())
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }
}
