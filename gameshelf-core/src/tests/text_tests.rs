use super::*;

#[test]
fn sanitize_drops_apostrophes_and_illegal_chars() {
    assert_eq!(sanitize_filename("Baldur's Gate 3"), "Baldurs Gate 3");
    assert_eq!(sanitize_filename("Assassin\u{2019}s Creed"), "Assassins Creed");
    assert_eq!(sanitize_filename("Doom: The Dark Ages"), "Doom The Dark Ages");
    assert_eq!(sanitize_filename("A/B\\C*D?E\"F<G>H|I"), "A B C D E F G H I");
}

#[test]
fn sanitize_collapses_and_trims_whitespace() {
    assert_eq!(sanitize_filename("  Astro   Bot\t(2024) "), "Astro Bot (2024)");
    assert_eq!(sanitize_filename(""), "");
    assert_eq!(sanitize_filename("   "), "");
}

#[test]
fn strip_brackets_keeps_inner_spacing() {
    assert_eq!(strip_brackets("Astro Bot (2024)"), "Astro Bot 2024");
    assert_eq!(strip_brackets("[Demo] Game {EU}"), "Demo Game EU");
    assert_eq!(strip_brackets("()"), "");
}

#[test]
fn strip_diacritics_removes_combining_marks() {
    assert_eq!(strip_diacritics("pokémon"), "pokemon");
    assert_eq!(strip_diacritics("Ōkami"), "Okami");
    assert_eq!(strip_diacritics("niño"), "nino");
    assert_eq!(strip_diacritics("plain"), "plain");
}

#[test]
fn slug_collapses_non_alphanumeric_runs() {
    assert_eq!(slug("Astro Bot (2024)"), "astro-bot-2024-");
    assert_eq!(slug("The Witcher 3: Wild Hunt"), "the-witcher-3-wild-hunt");
    assert_eq!(slug("Pokémon Légendes"), "pokemon-legendes");
    assert_eq!(slug("  Halo  "), "halo");
}

#[test]
fn slug_of_punctuation_only_title_is_a_single_dash() {
    assert_eq!(slug("!!!"), "-");
    assert_eq!(slug(""), "");
}

#[test]
fn lookup_key_keeps_only_ascii_alphanumerics() {
    assert_eq!(lookup_key("Horizon Forbidden West"), "horizonforbiddenwest");
    assert_eq!(lookup_key("Hades II (Early Access)"), "hadesiiearlyaccess");
    assert_eq!(
        lookup_key("Super Mario 3D World + Bowser's Fury"),
        "supermario3dworldbowsersfury"
    );
    assert_eq!(lookup_key("Pokémon"), "pokemon");
    assert_eq!(lookup_key("¿?"), "");
}

#[test]
fn separator_variants_in_fixed_order() {
    assert_eq!(
        separator_variants("Astro Bot 2024"),
        vec!["Astro Bot 2024", "Astro_Bot_2024", "Astro-Bot-2024", "AstroBot2024"]
    );
}

#[test]
fn separator_variants_dedupe_single_word() {
    assert_eq!(separator_variants("halo"), vec!["halo"]);
    assert_eq!(separator_variants(""), vec![""]);
}

#[test]
fn separator_variants_treat_runs_as_one_separator() {
    assert_eq!(
        separator_variants("a  b"),
        vec!["a  b", "a_b", "a-b", "ab"]
    );
}

#[test]
fn fold_for_sort_ignores_case_and_accents() {
    assert_eq!(fold_for_sort("Éclipse"), fold_for_sort("eclipse"));
}
