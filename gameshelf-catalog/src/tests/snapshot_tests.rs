use super::*;
use serde_json::json;

fn one(value: Value) -> GameRecord {
    let Value::Object(fields) = value else {
        panic!("fixture must be an object");
    };
    record_from_fields(&fields, "imagenes")
}

#[test]
fn empty_record_gets_defaults() {
    let g = one(json!({}));
    assert_eq!(g.title, "Sin título");
    assert_eq!(g.genre, "Otro");
    assert_eq!(g.year, 2024);
    assert_eq!(g.platforms, vec!["PC"]);
    assert_eq!(g.kind, "Digital");
    assert_eq!(g.format, "Estándar");
    assert_eq!(g.cover, None);
    assert!(g.store_prices.is_empty());
    assert_eq!(g.best, StorePrice::new("N/D", 0));
    assert_eq!(g.regular, 0);
    assert_eq!(g.discount_pct, 0);
    assert_eq!(g.score, 70);
    assert!(g.play_times.is_empty());
}

#[test]
fn full_record_is_mapped() {
    let g = one(json!({
        "nombreJuego": "Astro Bot",
        "genero": "Plataformas",
        "anio": "2024",
        "plataformas": ["PlayStation 5"],
        "tipo": "Físico",
        "formato": "Deluxe",
        "imagen": "astro.webp",
        "mc": 94,
        "hltb": { "main": 11, "extra": "14 h", "comp": { "min": 20 } },
        "precios": {
            "amazon": { "precio": 59.6, "url": "https://amazon.example/astro" },
            "playstation": { "precio": 69.99 }
        }
    }));
    assert_eq!(g.title, "Astro Bot");
    assert_eq!(g.year, 2024);
    assert_eq!(g.platforms, vec!["PlayStation 5"]);
    assert_eq!(g.kind, "Físico");
    assert_eq!(g.cover.as_deref(), Some("./imagenes/astro.webp"));
    assert_eq!(g.score, 94);
    assert_eq!(
        g.store_prices,
        vec![
            StorePrice::new("Amazon", 60).with_url(Some("https://amazon.example/astro".into())),
            StorePrice::new("PlayStation Store", 70),
        ]
    );
    assert_eq!(g.best.name, "Amazon");
    assert_eq!(g.regular, 70);
    assert_eq!(g.discount_pct, 14);
    assert_eq!(g.play_times.main, Some(PlayTime::Amount(11.0)));
    assert_eq!(g.play_times.extra, Some(PlayTime::Text("14 h".into())));
    assert_eq!(
        g.play_times.completionist,
        Some(PlayTime::Range {
            min: Box::new(PlayTime::Amount(20.0))
        })
    );
}

#[test]
fn zero_and_garbage_numbers_fall_back() {
    let g = one(json!({ "anio": 0, "mc": "n/a" }));
    assert_eq!(g.year, 2024);
    assert_eq!(g.score, 70);
}

#[test]
fn empty_platform_list_falls_back() {
    assert_eq!(one(json!({ "plataformas": [] })).platforms, vec!["PC"]);
    assert_eq!(one(json!({ "plataformas": "PC" })).platforms, vec!["PC"]);
}

#[test]
fn zero_price_is_not_a_store() {
    let g = one(json!({ "precios": { "amazon": { "precio": 0 }, "playstation": { "precio": 40 } } }));
    assert_eq!(g.store_prices, vec![StorePrice::new("PlayStation Store", 40)]);
    assert_eq!(g.discount_pct, 0);
}

#[test]
fn remote_and_rooted_covers_are_verbatim() {
    assert_eq!(
        one(json!({ "imagen": "https://cdn.example/a.png" })).cover.as_deref(),
        Some("https://cdn.example/a.png")
    );
    assert_eq!(
        one(json!({ "imagen": "/covers/a.png" })).cover.as_deref(),
        Some("/covers/a.png")
    );
    assert_eq!(one(json!({ "imagen": "" })).cover, None);
}

#[test]
fn object_array_and_wrapped_collections() {
    let object = json!({ "a": { "nombreJuego": "A" }, "b": { "nombreJuego": "B" } });
    assert_eq!(records_from_value(&object, "imagenes").unwrap().len(), 2);

    let array = json!([null, { "nombreJuego": "A" }, 3]);
    let records = records_from_value(&array, "imagenes").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "A");

    let wrapped = json!({ "juegos": [{ "nombreJuego": "A" }] });
    assert_eq!(records_from_value(&wrapped, "imagenes").unwrap()[0].title, "A");

    assert!(records_from_value(&Value::Null, "imagenes").unwrap().is_empty());
    assert!(matches!(
        records_from_value(&json!("nope"), "imagenes"),
        Err(CatalogError::Shape(_))
    ));
}

#[test]
fn load_snapshot_reports_bad_files() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_snapshot(&missing, "imagenes"),
        Err(CatalogError::Io { .. })
    ));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    assert!(matches!(
        load_snapshot(&bad, "imagenes"),
        Err(CatalogError::Json { .. })
    ));
}

#[test]
fn load_or_sample_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.json");
    std::fs::write(&empty, "{}").unwrap();

    let (records, origin) = load_or_sample(Some(&empty), "imagenes");
    assert_eq!(origin, CatalogOrigin::Sample);
    assert_eq!(records, sample_records());

    let (_, origin) = load_or_sample(None, "imagenes");
    assert_eq!(origin, CatalogOrigin::Sample);

    let good = dir.path().join("good.json");
    std::fs::write(&good, r#"{ "x": { "nombreJuego": "Halo" } }"#).unwrap();
    let (records, origin) = load_or_sample(Some(&good), "imagenes");
    assert!(matches!(origin, CatalogOrigin::Snapshot(_)));
    assert_eq!(records[0].title, "Halo");
}
