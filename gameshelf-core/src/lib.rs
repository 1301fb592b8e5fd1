//! Shared building blocks for gameshelf: title normalization, settings,
//! and small formatting helpers used by every frontend.

pub mod settings;
pub mod text;
pub mod util;

pub use settings::{
    CatalogSettings, CoverSettings, Settings, SettingsError, ValueSource, settings_path,
};
pub use text::{
    fold_for_sort, lookup_key, sanitize_filename, separator_variants, slug, strip_brackets,
    strip_diacritics,
};
pub use util::{format_usd, resolve_asset_reference};
