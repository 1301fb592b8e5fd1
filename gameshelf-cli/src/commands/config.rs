use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameshelf_core::settings::{
    DEFAULT_ASSET_DIR, DEFAULT_JOBS, DEFAULT_MAP_PATH, DEFAULT_PAGE_SIZE,
    DEFAULT_PLACEHOLDER_BASE,
};
use gameshelf_core::{Settings, ValueSource};

use crate::error::CliError;

/// Source of a plain file-or-default setting.
fn file_or_default<T: PartialEq>(value: &T, default: T) -> ValueSource {
    if *value == default {
        ValueSource::Default
    } else {
        ValueSource::ConfigFile
    }
}

/// Show effective settings and where each came from.
pub(crate) fn run_config_show(settings: &Settings, path: &Path) {
    log::info!(
        "{}",
        "Gameshelf Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    log::info!(
        "  Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );
    log::info!("");

    let (root, root_source) = settings.asset_root(None);
    let snapshot = settings.snapshot(None);
    let covers = &settings.covers;

    let rows: Vec<(&str, String, ValueSource)> = vec![
        ("asset_root", root.display().to_string(), root_source),
        (
            "asset_dir",
            covers.asset_dir.clone(),
            file_or_default(&covers.asset_dir.as_str(), DEFAULT_ASSET_DIR),
        ),
        (
            "map_path",
            covers.map_path.clone(),
            file_or_default(&covers.map_path.as_str(), DEFAULT_MAP_PATH),
        ),
        (
            "placeholder_base",
            covers.placeholder_base.clone(),
            file_or_default(&covers.placeholder_base.as_str(), DEFAULT_PLACEHOLDER_BASE),
        ),
        (
            "jobs",
            covers.jobs.to_string(),
            file_or_default(&covers.jobs, DEFAULT_JOBS),
        ),
        match snapshot {
            Some((p, source)) => ("snapshot", p.display().to_string(), source),
            None => ("snapshot", "(built-in sample)".to_string(), ValueSource::Default),
        },
        (
            "page_size",
            settings.catalog.page_size.to_string(),
            file_or_default(&settings.catalog.page_size, DEFAULT_PAGE_SIZE),
        ),
    ];

    for (name, value, source) in rows {
        log::info!(
            "  {:<17} {} {}",
            format!("{}:", name),
            value,
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path(path: &Path) {
    log::info!("{}", path.display());
}

/// Write default settings unless a file already exists.
pub(crate) fn run_config_init(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        log::warn!("Settings file already exists: {}", path.display());
        return Ok(());
    }
    Settings::default().save_to(path)?;
    log::info!(
        "{} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    Ok(())
}
