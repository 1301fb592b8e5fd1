pub(crate) mod browse;
pub(crate) mod candidates;
pub(crate) mod config;
pub(crate) mod covers;
pub(crate) mod details;
pub(crate) mod resolve;

use gameshelf_catalog::{CatalogOrigin, GameRecord, load_or_sample};
use gameshelf_core::Settings;
use gameshelf_covers::{
    CandidateConfig, CoverOverrides, FsProbe, HttpProbe, MapSource, PlaceholderSize, Probe,
    is_remote,
};

use crate::cli_types::{ProbeArgs, SnapshotArgs};
use crate::error::CliError;

pub(crate) fn candidate_config(settings: &Settings, detail: bool) -> CandidateConfig {
    let size = if detail {
        PlaceholderSize::DETAIL
    } else {
        PlaceholderSize::CARD
    };
    CandidateConfig::from_settings(&settings.covers).with_placeholder_size(size)
}

/// Pick the probe: HTTP when a base URL is given, else the filesystem under
/// the effective asset root.
pub(crate) fn build_probe(settings: &Settings, args: &ProbeArgs) -> Result<Probe, CliError> {
    if let Some(base) = &args.base_url {
        let client = HttpProbe::default_client()?;
        return Ok(Probe::Http(HttpProbe::new(client, base)?));
    }
    let (root, source) = settings.asset_root(args.root.clone());
    if !root.is_dir() {
        return Err(CliError::config(format!(
            "asset root {} (from {}) is not a directory",
            root.display(),
            source
        )));
    }
    log::debug!("Asset root {} (from {})", root.display(), source);
    Ok(Probe::Fs(FsProbe::new(root)))
}

/// Where the runtime map is read from. An explicit `--map` is taken as
/// given; the configured map is located under the asset root or base URL.
pub(crate) fn map_source(
    settings: &Settings,
    args: &ProbeArgs,
) -> Result<Option<MapSource>, CliError> {
    if let Some(map) = &args.map {
        return Ok(Some(MapSource::parse(map)));
    }
    let location = &settings.covers.map_path;
    if is_remote(location) {
        return Ok(Some(MapSource::Url(location.clone())));
    }
    if let Some(base) = &args.base_url {
        let http = HttpProbe::new(HttpProbe::default_client()?, base)?;
        return Ok(http
            .absolute_url(location)
            .map(|u| MapSource::Url(u.to_string())));
    }
    let (root, _) = settings.asset_root(args.root.clone());
    Ok(FsProbe::new(root)
        .local_path(location)
        .filter(|p| p.is_file())
        .map(MapSource::File))
}

/// Static table plus the runtime map. `None` when overrides are disabled.
pub(crate) async fn load_overrides(
    settings: &Settings,
    args: &ProbeArgs,
) -> Result<Option<CoverOverrides>, CliError> {
    if args.no_overrides {
        return Ok(None);
    }
    let mut overrides = CoverOverrides::new(settings.covers.asset_dir.clone());
    match map_source(settings, args)? {
        Some(source) => {
            let client = HttpProbe::default_client()?;
            let added = overrides.load_runtime(&source, &client).await;
            log::debug!("{} runtime cover overrides from {}", added, source);
        }
        None => log::debug!("No runtime cover map for {}", settings.covers.map_path),
    }
    Ok(Some(overrides))
}

/// Records from the effective snapshot, or the built-in sample.
pub(crate) fn load_catalog(
    settings: &Settings,
    args: &SnapshotArgs,
) -> (Vec<GameRecord>, CatalogOrigin) {
    let snapshot = settings.snapshot(args.snapshot.clone());
    if let Some((path, source)) = &snapshot {
        log::debug!("Snapshot {} (from {})", path.display(), source);
    }
    load_or_sample(
        snapshot.as_ref().map(|(p, _)| p.as_path()),
        &settings.covers.asset_dir,
    )
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe_args(root: Option<std::path::PathBuf>) -> ProbeArgs {
        ProbeArgs {
            root,
            base_url: None,
            map: None,
            no_overrides: false,
        }
    }

    #[test]
    fn detail_flag_selects_large_placeholder() {
        let settings = Settings::default();
        assert_eq!(
            candidate_config(&settings, true).placeholder_size,
            PlaceholderSize::DETAIL
        );
        assert_eq!(
            candidate_config(&settings, false).placeholder_size,
            PlaceholderSize::CARD
        );
    }

    #[test]
    fn missing_root_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = probe_args(Some(dir.path().join("nope")));
        assert!(matches!(
            build_probe(&Settings::default(), &args),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn snapshot_flag_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("juegos.json");
        std::fs::write(&path, r#"[{ "nombreJuego": "Halo", "imagen": "halo.png" }]"#).unwrap();

        let (games, origin) = load_catalog(
            &Settings::default(),
            &SnapshotArgs {
                snapshot: Some(path),
            },
        );
        assert!(matches!(origin, CatalogOrigin::Snapshot(_)));
        assert_eq!(games[0].cover.as_deref(), Some("./imagenes/halo.png"));
    }

    #[tokio::test]
    async fn runtime_map_resolves_under_asset_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("imagenes")).unwrap();
        std::fs::write(
            dir.path().join("imagenes").join("map.json"),
            r#"{ "Halo": "halo-ce.png" }"#,
        )
        .unwrap();

        let settings = Settings::default();
        let args = probe_args(Some(dir.path().to_path_buf()));
        let overrides = load_overrides(&settings, &args).await.unwrap().unwrap();
        assert_eq!(overrides.lookup("halo").as_deref(), Some("./imagenes/halo-ce.png"));

        let disabled = ProbeArgs {
            no_overrides: true,
            ..args
        };
        assert!(load_overrides(&settings, &disabled).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn explicit_map_path_is_used_as_given() {
        let dir = tempfile::tempdir().unwrap();
        let map = dir.path().join("elsewhere.json");
        std::fs::write(&map, r#"{ "Halo": "https://cdn.example.com/halo.jpg" }"#).unwrap();

        let settings = Settings::default();
        let args = ProbeArgs {
            map: Some(map.display().to_string()),
            ..probe_args(Some(dir.path().to_path_buf()))
        };
        let overrides = load_overrides(&settings, &args).await.unwrap().unwrap();
        assert_eq!(
            overrides.lookup("Halo").as_deref(),
            Some("https://cdn.example.com/halo.jpg")
        );
    }
}
