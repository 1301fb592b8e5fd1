//! Shared application settings.
//!
//! Every frontend reads the same file, `~/.config/gameshelf/settings.toml`,
//! and resolves each value through the same priority chain:
//!
//! 1. CLI flag (if given)
//! 2. Environment variable
//! 3. `settings.toml`
//! 4. Built-in default

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directory, relative to the site root, that holds cover images.
pub const DEFAULT_ASSET_DIR: &str = "imagenes";

/// Location of the runtime override map, relative to the site root.
pub const DEFAULT_MAP_PATH: &str = "./imagenes/map.json";

/// Seeded placeholder image service.
pub const DEFAULT_PLACEHOLDER_BASE: &str = "https://picsum.photos/seed";

pub const DEFAULT_PAGE_SIZE: usize = 20;

pub const DEFAULT_JOBS: usize = 8;

pub const ENV_ASSET_ROOT: &str = "GAMESHELF_ASSET_ROOT";
pub const ENV_SNAPSHOT: &str = "GAMESHELF_SNAPSHOT";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error on {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Full contents of `settings.toml`. Missing sections and keys fall back
/// to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub covers: CoverSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverSettings {
    /// Filesystem directory that relative candidate paths resolve against.
    pub asset_root: Option<PathBuf>,
    pub asset_dir: String,
    pub map_path: String,
    pub placeholder_base: String,
    /// Concurrent resolutions when checking a whole catalog.
    pub jobs: usize,
}

impl Default for CoverSettings {
    fn default() -> Self {
        Self {
            asset_root: None,
            asset_dir: DEFAULT_ASSET_DIR.to_string(),
            map_path: DEFAULT_MAP_PATH.to_string(),
            placeholder_base: DEFAULT_PLACEHOLDER_BASE.to_string(),
            jobs: DEFAULT_JOBS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON export of the document store's game collection.
    pub snapshot: Option<PathBuf>,
    pub page_size: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            snapshot: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Where an effective setting value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    Flag,
    EnvVar(&'static str),
    ConfigFile,
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Canonical path to the shared settings file: `~/.config/gameshelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gameshelf").join("settings.toml")
}

impl Settings {
    /// Load from the canonical settings path. A missing file yields defaults.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(SettingsError::Io {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };
        toml::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Write the settings atomically (temp file + rename).
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |e: io::Error| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let serialized = toml::to_string_pretty(self)?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, serialized).map_err(io_err)?;
        std::fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }

    /// Effective asset root: flag > `$GAMESHELF_ASSET_ROOT` > file > current directory.
    pub fn asset_root(&self, flag: Option<PathBuf>) -> (PathBuf, ValueSource) {
        pick_path(
            flag,
            std::env::var(ENV_ASSET_ROOT).ok(),
            ENV_ASSET_ROOT,
            self.covers.asset_root.clone(),
        )
        .unwrap_or_else(|| {
            (
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
                ValueSource::Default,
            )
        })
    }

    /// Effective snapshot path: flag > `$GAMESHELF_SNAPSHOT` > file. `None` when unset.
    pub fn snapshot(&self, flag: Option<PathBuf>) -> Option<(PathBuf, ValueSource)> {
        pick_path(
            flag,
            std::env::var(ENV_SNAPSHOT).ok(),
            ENV_SNAPSHOT,
            self.catalog.snapshot.clone(),
        )
    }
}

/// Apply the flag > env > file priority chain to a path-valued setting.
/// Empty environment values count as unset.
pub fn pick_path(
    flag: Option<PathBuf>,
    env_value: Option<String>,
    env_name: &'static str,
    file_value: Option<PathBuf>,
) -> Option<(PathBuf, ValueSource)> {
    if let Some(p) = flag {
        return Some((p, ValueSource::Flag));
    }
    if let Some(v) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some((PathBuf::from(v), ValueSource::EnvVar(env_name)));
    }
    file_value.map(|p| (p, ValueSource::ConfigFile))
}
