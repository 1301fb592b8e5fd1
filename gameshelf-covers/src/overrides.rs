//! Manual cover overrides for titles whose files can't be guessed.
//!
//! Two tables are consulted by [`lookup_key`]: a compiled static table and a
//! runtime table loaded once per session from `map.json`. Runtime entries
//! win when both match.

use std::collections::HashMap;
use std::path::PathBuf;

use gameshelf_core::settings::DEFAULT_ASSET_DIR;
use gameshelf_core::text::lookup_key;
pub use gameshelf_core::util::resolve_asset_reference;

use crate::encode::is_remote;
use crate::error::CoverError;

/// Known problem titles, keyed by [`lookup_key`], mapped to the file
/// actually stored in the asset directory.
///
/// The stored names carry typos ("Frobidden"), stray spaces, en dashes and
/// Roman-numeral/digit mismatches that no generated variant reproduces.
pub const STATIC_COVER_OVERRIDES: &[(&str, &str)] = &[
    ("callofdutymodernwarfareiii", "Call_of_Duty_Modern_Warfare_III_2022.png"),
    ("callofdutymodernwarfareii2022", "Call_of_Duty_Modern_Warfare_III_2022.png"),
    ("callofdutymodernwarfareii", "Call_of_Duty_Modern_Warfare_III_2022.png"),
    ("destiny2thefinalshapeexpansiondepago", "Destiny_2_The_Final_Shape.png"),
    ("destiny2thefinalshape", "Destiny_2_The_Final_Shape.png"),
    ("hadesiiearlyaccess", "Hades_II_Early Access.webp"),
    ("hades2earlyaccess", "Hades_II_Early Access.webp"),
    ("horizonforbiddenwest", "Horizon_Frobidden_West.jpg"),
    ("microsoftflightsimulator2024", "Microsoft_Flight _Simulator _2024.jpg"),
    ("remnantii", "Remnant_2.jpg"),
    ("remnant2", "Remnant_2.jpg"),
    ("thelordoftheringsreturntomoria", "Return_to_Moria_The_Lord_of the_Rings.png"),
    ("returntomoriathelordoftherings", "Return_to_Moria_The_Lord_of the_Rings.png"),
    ("supermario3dworldbowsersfury", "Super_Mario_3D_World_Bowsers_Fury.jpg"),
    (
        "thewitcher3wildhuntcompleteedition",
        "The_Witcher_3_Wild_Hunt\u{2013}Complete_Edition.jpg",
    ),
];

/// Where the runtime override map lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    File(PathBuf),
    Url(String),
}

impl MapSource {
    /// `http(s)://` locations become [`MapSource::Url`], everything else a file path.
    pub fn parse(location: &str) -> Self {
        if is_remote(location) {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

impl std::fmt::Display for MapSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Url(u) => write!(f, "{}", u),
        }
    }
}

/// Static + runtime override tables.
#[derive(Debug, Clone)]
pub struct CoverOverrides {
    asset_dir: String,
    runtime: HashMap<String, String>,
    runtime_loaded: bool,
}

impl Default for CoverOverrides {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_DIR)
    }
}

impl CoverOverrides {
    /// Tables resolving static filenames against `asset_dir`. The runtime
    /// table starts empty.
    pub fn new(asset_dir: impl Into<String>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            runtime: HashMap::new(),
            runtime_loaded: false,
        }
    }

    /// Override path for `title`, runtime table first.
    pub fn lookup(&self, title: &str) -> Option<String> {
        let key = lookup_key(title);
        if let Some(path) = self.runtime.get(&key) {
            return Some(path.clone());
        }
        STATIC_COVER_OVERRIDES
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, file)| resolve_asset_reference(file, &self.asset_dir))
    }

    /// Add one runtime entry. Blank values are ignored.
    pub fn insert_runtime(&mut self, title: &str, reference: &str) -> bool {
        let reference = reference.trim();
        if reference.is_empty() {
            return false;
        }
        self.runtime.insert(
            lookup_key(title),
            resolve_asset_reference(reference, &self.asset_dir),
        );
        true
    }

    pub fn runtime_len(&self) -> usize {
        self.runtime.len()
    }

    pub fn runtime_loaded(&self) -> bool {
        self.runtime_loaded
    }

    /// Merge a `map.json` document (`{ "<title>": "<file or path>" }`) into
    /// the runtime table. Entries whose value isn't a non-empty string are
    /// skipped. Entries are applied in document order, so when two titles
    /// share a lookup key the later one wins. Returns the number of entries
    /// added.
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize, CoverError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value
            .as_object()
            .ok_or_else(|| CoverError::InvalidMap("top level is not an object".to_string()))?;

        let mut added = 0;
        for (title, reference) in object {
            match reference.as_str() {
                Some(r) if self.insert_runtime(title, r) => added += 1,
                _ => log::debug!("[cover map] skipping entry for {:?}", title),
            }
        }
        Ok(added)
    }

    /// Load the runtime table once per session.
    ///
    /// Failures are logged and leave the runtime table as it was; the static
    /// table stays authoritative. Later calls are no-ops.
    pub async fn load_runtime(&mut self, source: &MapSource, client: &reqwest::Client) -> usize {
        if self.runtime_loaded {
            return 0;
        }
        self.runtime_loaded = true;

        let text = match fetch_map_text(source, client).await {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Cover map {} not loaded: {}", source, e);
                return 0;
            }
        };
        match self.extend_from_json(&text) {
            Ok(n) => {
                log::debug!("[cover map] loaded {} entries from {}", n, source);
                n
            }
            Err(e) => {
                log::warn!("Cover map {} is invalid: {}", source, e);
                0
            }
        }
    }
}

async fn fetch_map_text(source: &MapSource, client: &reqwest::Client) -> Result<String, CoverError> {
    match source {
        MapSource::File(path) => std::fs::read_to_string(path).map_err(|e| CoverError::Io {
            path: path.display().to_string(),
            source: e,
        }),
        MapSource::Url(url) => {
            let resp = client
                .get(url)
                .header(reqwest::header::CACHE_CONTROL, "no-store")
                .send()
                .await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(CoverError::Status {
                    status: status.as_u16(),
                    url: url.clone(),
                });
            }
            Ok(resp.text().await?)
        }
    }
}

#[cfg(test)]
#[path = "tests/overrides_tests.rs"]
mod tests;
