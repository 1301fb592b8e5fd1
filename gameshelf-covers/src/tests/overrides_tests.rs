use super::*;

#[test]
fn static_table_keys_are_normalized() {
    for (key, _) in STATIC_COVER_OVERRIDES {
        assert_eq!(lookup_key(key), *key, "key {key:?} is not in lookup form");
    }
}

#[test]
fn static_hit_resolves_against_asset_dir() {
    let overrides = CoverOverrides::default();
    assert_eq!(
        overrides.lookup("Horizon Forbidden West").as_deref(),
        Some("./imagenes/Horizon_Frobidden_West.jpg")
    );

    let custom = CoverOverrides::new("covers");
    assert_eq!(
        custom.lookup("Remnant 2").as_deref(),
        Some("./covers/Remnant_2.jpg")
    );
}

#[test]
fn lookup_ignores_case_punctuation_and_accents() {
    let overrides = CoverOverrides::default();
    let expected = Some("./imagenes/Hades_II_Early Access.webp".to_string());
    assert_eq!(overrides.lookup("Hades II (Early Access)"), expected);
    assert_eq!(overrides.lookup("HADES 2 — early access"), expected);
    assert_eq!(overrides.lookup("Hadés II: Early Access"), expected);
}

#[test]
fn unknown_title_has_no_override() {
    let overrides = CoverOverrides::default();
    assert_eq!(overrides.lookup("Astro Bot"), None);
    assert_eq!(overrides.lookup(""), None);
}

#[test]
fn runtime_entry_beats_static_entry() {
    let mut overrides = CoverOverrides::default();
    assert!(overrides.insert_runtime("Horizon Forbidden West", "hfw_fixed.png"));
    assert_eq!(
        overrides.lookup("horizon forbidden west").as_deref(),
        Some("./imagenes/hfw_fixed.png")
    );
}

#[test]
fn runtime_values_with_scheme_or_path_marker_are_verbatim() {
    let mut overrides = CoverOverrides::default();
    overrides.insert_runtime("A", "https://cdn.example.com/a.jpg");
    overrides.insert_runtime("B", "./elsewhere/b.jpg");
    overrides.insert_runtime("C", "/abs/c.jpg");
    assert_eq!(overrides.lookup("a").as_deref(), Some("https://cdn.example.com/a.jpg"));
    assert_eq!(overrides.lookup("b").as_deref(), Some("./elsewhere/b.jpg"));
    assert_eq!(overrides.lookup("c").as_deref(), Some("/abs/c.jpg"));
}

#[test]
fn blank_runtime_values_are_ignored() {
    let mut overrides = CoverOverrides::default();
    assert!(!overrides.insert_runtime("Halo", "   "));
    assert_eq!(overrides.runtime_len(), 0);
}

#[test]
fn extend_from_json_skips_non_strings() {
    let mut overrides = CoverOverrides::default();
    let added = overrides
        .extend_from_json(r#"{"Astro Bot": "astro.webp", "Bad": 3, "Empty": "", "Null": null}"#)
        .unwrap();
    assert_eq!(added, 1);
    assert_eq!(
        overrides.lookup("ASTRO BOT").as_deref(),
        Some("./imagenes/astro.webp")
    );
}

#[test]
fn later_map_entry_wins_on_shared_key() {
    let mut overrides = CoverOverrides::default();
    overrides
        .extend_from_json(r#"{"zeta game": "first.png", "Zeta Game": "second.png"}"#)
        .unwrap();
    assert_eq!(overrides.runtime_len(), 1);
    assert_eq!(
        overrides.lookup("Zeta Game").as_deref(),
        Some("./imagenes/second.png")
    );
}

#[test]
fn extend_from_json_rejects_non_object() {
    let mut overrides = CoverOverrides::default();
    assert!(matches!(
        overrides.extend_from_json("[1, 2]"),
        Err(CoverError::InvalidMap(_))
    ));
    assert!(matches!(
        overrides.extend_from_json("{not json"),
        Err(CoverError::Json(_))
    ));
}

#[test]
fn map_source_parse() {
    assert_eq!(
        MapSource::parse("https://example.com/map.json"),
        MapSource::Url("https://example.com/map.json".to_string())
    );
    assert_eq!(
        MapSource::parse("./imagenes/map.json"),
        MapSource::File(PathBuf::from("./imagenes/map.json"))
    );
}

#[test]
fn resolve_asset_reference_rules() {
    assert_eq!(resolve_asset_reference("a.png", "imagenes"), "./imagenes/a.png");
    assert_eq!(resolve_asset_reference("./x/a.png", "imagenes"), "./x/a.png");
    assert_eq!(resolve_asset_reference("/a.png", "imagenes"), "/a.png");
    assert_eq!(resolve_asset_reference("http://h/a.png", "imagenes"), "http://h/a.png");
}

#[tokio::test]
async fn load_runtime_from_file_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.json");
    std::fs::write(&path, r#"{"Astro Bot": "astro.webp"}"#).unwrap();

    let client = reqwest::Client::new();
    let mut overrides = CoverOverrides::default();
    let source = MapSource::File(path.clone());
    assert_eq!(overrides.load_runtime(&source, &client).await, 1);
    assert!(overrides.runtime_loaded());

    std::fs::write(&path, r#"{"Halo": "halo.webp"}"#).unwrap();
    assert_eq!(overrides.load_runtime(&source, &client).await, 0);
    assert_eq!(overrides.lookup("Halo"), None);
}

#[tokio::test]
async fn load_runtime_failure_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();
    let mut overrides = CoverOverrides::default();

    let missing = MapSource::File(dir.path().join("missing.json"));
    assert_eq!(overrides.load_runtime(&missing, &client).await, 0);
    assert_eq!(overrides.runtime_len(), 0);
    assert!(overrides.lookup("Horizon Forbidden West").is_some());
}
