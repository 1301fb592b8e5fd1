use super::*;

fn sources(list: &CandidateList) -> Vec<&str> {
    list.sources().collect()
}

#[test]
fn candidate_years_puts_record_year_first() {
    assert_eq!(
        candidate_years(Some(2017), RECENT_YEARS),
        vec![2017, 2021, 2022, 2023, 2024, 2025]
    );
    assert_eq!(
        candidate_years(Some(2023), RECENT_YEARS),
        vec![2023, 2021, 2022, 2024, 2025]
    );
    assert_eq!(candidate_years(None, RECENT_YEARS), RECENT_YEARS.to_vec());
}

#[test]
fn candidate_years_drops_out_of_range_years() {
    assert_eq!(candidate_years(Some(1970), RECENT_YEARS), RECENT_YEARS.to_vec());
    assert_eq!(candidate_years(Some(2100), RECENT_YEARS), RECENT_YEARS.to_vec());
    assert_eq!(candidate_years(Some(-5), RECENT_YEARS), RECENT_YEARS.to_vec());
    assert_eq!(candidate_years(Some(1971), RECENT_YEARS)[0], 1971);
    assert_eq!(candidate_years(Some(2099), RECENT_YEARS)[0], 2099);
}

#[test]
fn filename_variants_start_with_yearless_forms() {
    let names = filename_variants("Astro Bot", None, RECENT_YEARS);
    assert_eq!(
        &names[..8],
        &[
            "Astro Bot",
            "Astro_Bot",
            "Astro-Bot",
            "AstroBot",
            "astro bot",
            "astro_bot",
            "astro-bot",
            "astrobot",
        ]
    );
    assert_eq!(names[8], "Astro Bot 2021");
}

#[test]
fn filename_variants_for_single_word_title() {
    let names = filename_variants("halo", None, RECENT_YEARS);
    assert_eq!(names.len(), 26);
    assert_eq!(
        &names[..6],
        &["halo", "halo 2021", "halo_2021", "halo-2021", "halo2021", "halo(2021)"]
    );
}

#[test]
fn filename_variants_include_bracket_free_and_accent_free_forms() {
    let names = filename_variants("Pokémon Légendes (Arceus)", None, RECENT_YEARS);
    assert!(names.contains(&"Pokémon Légendes (Arceus)".to_string()));
    assert!(names.contains(&"Pokémon_Légendes_Arceus".to_string()));
    assert!(names.contains(&"pokemon legendes arceus".to_string()));
    assert!(names.contains(&"pokemon-legendes-arceus-".to_string()));
    assert!(names.contains(&"pokemon_legendes_arceus_".to_string()));
}

#[test]
fn year_suffix_patterns_for_2024() {
    let names = filename_variants("Astro Bot", Some(2024), RECENT_YEARS);
    for suffix in ["_2024", "-2024", " 2024", "(2024)"] {
        assert!(
            names.iter().any(|n| n.ends_with(suffix)),
            "no variant ends with {suffix:?}"
        );
    }
    assert!(names.contains(&"Astro Bot(2024)".to_string()));
    assert!(names.contains(&"astro_bot_2024".to_string()));
}

#[test]
fn filename_variants_are_unique() {
    let names = filename_variants("The Witcher 3: Wild Hunt", Some(2015), RECENT_YEARS);
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn generated_paths_pair_lower_and_upper_extensions() {
    let config = CandidateConfig::default();
    let paths = generated_paths(&["halo".to_string()], &config);
    assert_eq!(
        paths,
        vec![
            "./imagenes/halo.webp",
            "./imagenes/halo.WEBP",
            "./imagenes/halo.jpg",
            "./imagenes/halo.JPG",
            "./imagenes/halo.jpeg",
            "./imagenes/halo.JPEG",
            "./imagenes/halo.png",
            "./imagenes/halo.PNG",
            "./imagenes/halo.avif",
            "./imagenes/halo.AVIF",
        ]
    );
}

#[test]
fn placeholder_is_seeded_by_slug() {
    let config = CandidateConfig::default();
    assert_eq!(
        placeholder_url("Horizon Forbidden West", &config),
        "https://picsum.photos/seed/horizon-forbidden-west/400/225"
    );
    let detail = CandidateConfig::default().with_placeholder_size(PlaceholderSize::DETAIL);
    assert_eq!(
        placeholder_url("Halo", &detail),
        "https://picsum.photos/seed/halo/800/450"
    );
}

#[test]
fn full_list_for_plain_title() {
    let config = CandidateConfig::default();
    let list = build_candidates(&CoverRequest::new("halo"), &config, None);
    assert_eq!(list.len(), 26 * 10 + 1);
    assert_eq!(list.entries()[0].source, "./imagenes/halo.webp");
    assert_eq!(list.entries()[0].origin, CandidateOrigin::Generated);
    assert_eq!(list.placeholder(), "https://picsum.photos/seed/halo/400/225");
    assert_eq!(
        list.entries().last().map(|c| c.origin),
        Some(CandidateOrigin::Placeholder)
    );
}

#[test]
fn generated_paths_are_percent_encoded() {
    let config = CandidateConfig::default();
    let list = build_candidates(&CoverRequest::new("Astro Bot"), &config, None);
    assert_eq!(list.entries()[0].source, "./imagenes/Astro%20Bot.webp");
    assert!(list.sources().all(|s| !s.contains(' ')));
}

#[test]
fn override_bypasses_generation() {
    let config = CandidateConfig::default();
    let overrides = CoverOverrides::default();
    for year in [None, Some(2022), Some(1800)] {
        let request = CoverRequest::new("Horizon Forbidden West").year(year);
        let list = build_candidates(&request, &config, Some(&overrides));
        assert_eq!(
            sources(&list),
            vec![
                "./imagenes/Horizon_Frobidden_West.jpg",
                "https://picsum.photos/seed/horizon-forbidden-west/400/225",
            ]
        );
    }
}

#[test]
fn override_then_explicit_then_placeholder() {
    let config = CandidateConfig::default();
    let overrides = CoverOverrides::default();
    let request = CoverRequest::new("Remnant II").explicit_cover(Some("remnant.png"));
    let list = build_candidates(&request, &config, Some(&overrides));
    let origins: Vec<_> = list.entries().iter().map(|c| c.origin).collect();
    assert_eq!(
        origins,
        vec![
            CandidateOrigin::Override,
            CandidateOrigin::Explicit,
            CandidateOrigin::Placeholder,
        ]
    );
    assert_eq!(
        sources(&list),
        vec![
            "./imagenes/Remnant_2.jpg",
            "./imagenes/remnant.png",
            "https://picsum.photos/seed/remnant-ii/400/225",
        ]
    );
}

#[test]
fn override_path_is_encoded() {
    let config = CandidateConfig::default();
    let overrides = CoverOverrides::default();
    let list = build_candidates(
        &CoverRequest::new("Microsoft Flight Simulator 2024"),
        &config,
        Some(&overrides),
    );
    assert_eq!(
        list.entries()[0].source,
        "./imagenes/Microsoft_Flight%20_Simulator%20_2024.jpg"
    );
}

#[test]
fn explicit_cover_precedes_generated_and_is_not_repeated() {
    let config = CandidateConfig::default();
    let request = CoverRequest::new("Astro Bot").explicit_cover(Some("./imagenes/Astro Bot.webp"));
    let list = build_candidates(&request, &config, None);
    assert_eq!(list.entries()[0].origin, CandidateOrigin::Explicit);
    assert_eq!(list.entries()[0].source, "./imagenes/Astro%20Bot.webp");
    assert_eq!(
        list.sources()
            .filter(|s| *s == "./imagenes/Astro%20Bot.webp")
            .count(),
        1
    );
}

#[test]
fn explicit_remote_cover_is_kept_verbatim() {
    let config = CandidateConfig::default();
    let request =
        CoverRequest::new("Astro Bot").explicit_cover(Some("https://cdn.example.com/astro.jpg"));
    let list = build_candidates(&request, &config, None);
    assert_eq!(list.entries()[0].source, "https://cdn.example.com/astro.jpg");
}

#[test]
fn blank_explicit_cover_is_ignored() {
    let config = CandidateConfig::default();
    let request = CoverRequest::new("halo").explicit_cover(Some("  "));
    let list = build_candidates(&request, &config, None);
    assert_eq!(list.entries()[0].origin, CandidateOrigin::Generated);
}

#[test]
fn explicit_cover_equal_to_placeholder_keeps_placeholder_last() {
    let config = CandidateConfig::default();
    let request = CoverRequest::new("halo")
        .explicit_cover(Some("https://picsum.photos/seed/halo/400/225"));
    let list = build_candidates(&request, &config, None);
    assert_eq!(list.entries()[0].origin, CandidateOrigin::Generated);
    assert_eq!(
        list.sources()
            .filter(|s| *s == "https://picsum.photos/seed/halo/400/225")
            .count(),
        1
    );
    assert_eq!(list.placeholder(), "https://picsum.photos/seed/halo/400/225");
}

#[test]
fn every_list_is_non_empty_unique_and_ends_with_placeholder() {
    let config = CandidateConfig::default();
    let overrides = CoverOverrides::default();
    let titles = [
        "",
        "   ",
        "!!!",
        "éèê",
        "The Legend of Zelda: Tears of the Kingdom",
        "Hades II (Early Access)",
        "Call of Duty: Modern Warfare II (2022)",
        "Baldur's Gate 3",
        "100% Orange Juice",
    ];
    for title in titles {
        for year in [None, Some(2017), Some(0)] {
            let request = CoverRequest::new(title).year(year);
            let list = build_candidates(&request, &config, Some(&overrides));
            assert!(!list.is_empty());
            let unique: HashSet<_> = list.sources().collect();
            assert_eq!(unique.len(), list.len(), "duplicates for {title:?}");
            assert_eq!(list.placeholder(), encode_uri(&placeholder_url(title, &config)));
            assert_eq!(
                list.entries().last().map(|c| c.origin),
                Some(CandidateOrigin::Placeholder)
            );
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let config = CandidateConfig::default();
    let overrides = CoverOverrides::default();
    let request = CoverRequest::new("Pokémon Légendes: Arceus").year(Some(2022));
    let a = build_candidates(&request, &config, Some(&overrides));
    let b = build_candidates(&request, &config, Some(&overrides));
    assert_eq!(a, b);
}

#[test]
fn punctuation_only_title_does_not_panic() {
    let config = CandidateConfig::default();
    let list = build_candidates(&CoverRequest::new("?:*"), &config, None);
    assert_eq!(list.placeholder(), "https://picsum.photos/seed/-/400/225");
    assert_eq!(list.entries()[0].source, "./imagenes/.webp");
}

#[test]
fn config_from_settings_uses_asset_dir() {
    let settings = CoverSettings {
        asset_dir: "covers".to_string(),
        ..CoverSettings::default()
    };
    let config = CandidateConfig::from_settings(&settings);
    let list = build_candidates(&CoverRequest::new("halo"), &config, None);
    assert_eq!(list.entries()[0].source, "./covers/halo.webp");
}
