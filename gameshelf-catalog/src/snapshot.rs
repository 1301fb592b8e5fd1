//! Mapping from a document-store export to catalog records.
//!
//! A snapshot is the JSON value of the `juegos` collection: either an object
//! keyed by record id or an array (which may contain `null` holes). A
//! whole-database export with a top-level `juegos` key is accepted too.
//! Field values are loosely typed, so every field is read leniently and
//! falls back to its default.

use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

use gameshelf_core::util::resolve_asset_reference;

use crate::types::{
    DEFAULT_FORMAT, DEFAULT_GENRE, DEFAULT_KIND, DEFAULT_PLATFORM, DEFAULT_SCORE, DEFAULT_TITLE,
    DEFAULT_YEAR, GameRecord, PlayTime, PlayTimes, StorePrice,
};

/// Collection name in the document store.
pub const COLLECTION: &str = "juegos";

/// Stores carried in the `precios` object, as (field, display name).
pub const SNAPSHOT_STORES: &[(&str, &str)] =
    &[("amazon", "Amazon"), ("playstation", "PlayStation Store")];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Unexpected snapshot shape: {0}")]
    Shape(String),
}

/// Where the records in use came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    Snapshot(String),
    Sample,
}

impl std::fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot(path) => write!(f, "snapshot {}", path),
            Self::Sample => write!(f, "built-in sample"),
        }
    }
}

/// Read and map a snapshot file.
pub fn load_snapshot(path: &Path, asset_dir: &str) -> Result<Vec<GameRecord>, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|e| CatalogError::Json {
        path: path.display().to_string(),
        source: e,
    })?;
    records_from_value(&value, asset_dir)
}

/// Map an already-parsed snapshot. `null` means an empty collection.
pub fn records_from_value(value: &Value, asset_dir: &str) -> Result<Vec<GameRecord>, CatalogError> {
    let collection = match value {
        Value::Object(map) => match map.get(COLLECTION) {
            Some(inner @ (Value::Object(_) | Value::Array(_))) => inner,
            _ => value,
        },
        _ => value,
    };

    let entries: Vec<&Value> = match collection {
        Value::Null => Vec::new(),
        Value::Object(map) => map.values().collect(),
        Value::Array(items) => items.iter().collect(),
        other => {
            return Err(CatalogError::Shape(format!(
                "expected an object or array, found {}",
                type_name(other)
            )));
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            Value::Object(fields) => records.push(record_from_fields(fields, asset_dir)),
            Value::Null => {}
            other => log::warn!("Skipping snapshot entry of type {}", type_name(other)),
        }
    }
    Ok(records)
}

/// Load `snapshot` if given, falling back to [`sample_records`] when it is
/// missing, unreadable or empty.
pub fn load_or_sample(
    snapshot: Option<&Path>,
    asset_dir: &str,
) -> (Vec<GameRecord>, CatalogOrigin) {
    if let Some(path) = snapshot {
        match load_snapshot(path, asset_dir) {
            Ok(records) if !records.is_empty() => {
                return (records, CatalogOrigin::Snapshot(path.display().to_string()));
            }
            Ok(_) => log::warn!("Snapshot {} has no records", path.display()),
            Err(e) => log::warn!("{}", e),
        }
    }
    (sample_records(), CatalogOrigin::Sample)
}

/// Small local dataset used when no snapshot is available.
pub fn sample_records() -> Vec<GameRecord> {
    let botw = GameRecord {
        genre: "Aventura".to_string(),
        year: 2017,
        platforms: vec!["Nintendo Switch".to_string()],
        kind: "Físico".to_string(),
        ..GameRecord::new("The Legend of Zelda: Breath of the Wild")
    };
    let totk = GameRecord {
        genre: "Aventura".to_string(),
        year: 2023,
        platforms: vec!["Nintendo Switch".to_string()],
        kind: "Físico".to_string(),
        format: "Deluxe".to_string(),
        ..GameRecord::new("The Legend of Zelda: Tears of the Kingdom")
    };
    vec![botw, totk]
}

/// Map one stored record.
pub fn record_from_fields(fields: &Map<String, Value>, asset_dir: &str) -> GameRecord {
    let title = scalar_string(fields.get("nombreJuego")).unwrap_or_else(|| DEFAULT_TITLE.into());

    let platforms: Vec<String> = match fields.get("plataformas") {
        Some(Value::Array(items)) if !items.is_empty() => {
            items.iter().filter_map(|v| scalar_string(Some(v))).collect()
        }
        _ => Vec::new(),
    };

    let cover = fields
        .get("imagen")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(|s| resolve_asset_reference(s, asset_dir));

    let play_times = fields.get("hltb").map(play_times).unwrap_or_default();

    GameRecord {
        genre: scalar_string(fields.get("genero")).unwrap_or_else(|| DEFAULT_GENRE.into()),
        year: truthy_number(fields.get("anio"))
            .map(|y| y.round() as i32)
            .unwrap_or(DEFAULT_YEAR),
        platforms: if platforms.is_empty() {
            vec![DEFAULT_PLATFORM.to_string()]
        } else {
            platforms
        },
        kind: scalar_string(fields.get("tipo")).unwrap_or_else(|| DEFAULT_KIND.into()),
        format: scalar_string(fields.get("formato")).unwrap_or_else(|| DEFAULT_FORMAT.into()),
        cover,
        score: truthy_number(fields.get("mc"))
            .map(|s| s.round() as i64)
            .unwrap_or(DEFAULT_SCORE),
        play_times,
        ..GameRecord::new(title)
    }
    .with_prices(store_prices(fields.get("precios")))
}

fn store_prices(prices: Option<&Value>) -> Vec<StorePrice> {
    let Some(Value::Object(prices)) = prices else {
        return Vec::new();
    };
    SNAPSHOT_STORES
        .iter()
        .filter_map(|(field, name)| {
            let entry = prices.get(*field)?;
            let price = truthy_number(entry.get("precio"))?;
            let url = entry
                .get("url")
                .and_then(Value::as_str)
                .filter(|u| !u.is_empty())
                .map(str::to_string);
            Some(StorePrice::new(*name, price.round() as i64).with_url(url))
        })
        .collect()
}

fn play_times(value: &Value) -> PlayTimes {
    let field = |name: &str| {
        value
            .get(name)
            .filter(|v| is_present(v))
            .and_then(|v| serde_json::from_value::<PlayTime>(v.clone()).ok())
    };
    PlayTimes {
        main: field("main"),
        extra: field("extra"),
        // A zero completionist time defers to the short `comp` field.
        completionist: field("completionist")
            .filter(|t| *t != PlayTime::Amount(0.0))
            .or_else(|| field("comp")),
    }
}

/// Strings verbatim, numbers and booleans as text; anything else is absent.
fn scalar_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A non-zero finite number, or a string that parses as one.
fn truthy_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    (n.is_finite() && n != 0.0).then_some(n)
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "tests/snapshot_tests.rs"]
mod tests;
