//! Title normalization primitives.
//!
//! Cover files on disk were named by hand, so the same game may be stored
//! as `Astro Bot (2024).webp`, `astro_bot_2024.png` or `astro-bot.jpg`.
//! These helpers produce the canonical reductions that candidate
//! generation and override lookup are built on. None of them fail: an
//! input made only of punctuation reduces to an empty string.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Characters that are illegal in Windows file names.
const ILLEGAL_FILENAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Apostrophe-like characters dropped from file names.
const APOSTROPHES: &[char] = &['\'', '\u{2019}', '`'];

const BRACKETS: &[char] = &['(', ')', '{', '}', '[', ']'];

/// Replace file-system-illegal characters with spaces, drop apostrophes,
/// collapse whitespace runs to a single space and trim.
///
/// ```
/// use gameshelf_core::text::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Baldur's Gate 3"), "Baldurs Gate 3");
/// assert_eq!(sanitize_filename("Doom: The Dark Ages"), "Doom The Dark Ages");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .filter(|c| !APOSTROPHES.contains(c))
        .map(|c| if ILLEGAL_FILENAME_CHARS.contains(&c) { ' ' } else { c })
        .collect();
    collapse_whitespace(&replaced)
}

/// Remove bracket characters `(){}[]` and trim the ends.
///
/// Inner whitespace is left alone, so `"Astro Bot (2024)"` becomes
/// `"Astro Bot 2024"`.
pub fn strip_brackets(name: &str) -> String {
    name.chars()
        .filter(|c| !BRACKETS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Canonically decompose `s` and drop every combining mark.
pub fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lower-case, diacritic-free, dash-separated form of `s`.
///
/// Every run of characters outside `[a-z0-9]` becomes a single dash.
/// Leading and trailing runs are kept as dashes, which keeps the slug
/// stable for titles that end in punctuation (`"Hades II (Early Access)"`
/// slugs to `"hades-ii-early-access-"`).
pub fn slug(s: &str) -> String {
    let lowered = s.to_lowercase();
    let folded = strip_diacritics(lowered.trim());

    let mut out = String::with_capacity(folded.len());
    let mut in_run = false;
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }
    out
}

/// Key used to match a title against the cover override tables.
///
/// Lower-cases, strips diacritics and keeps only `[a-z0-9]`, so
/// `"Hades II (Early Access)"` and `"hades ii early-access"` share a key.
pub fn lookup_key(s: &str) -> String {
    strip_diacritics(&s.to_lowercase())
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Case- and accent-insensitive form used for alphabetical ordering.
pub fn fold_for_sort(s: &str) -> String {
    strip_diacritics(&s.to_lowercase())
}

/// The four word-separator variants of `s`: unchanged, whitespace runs
/// replaced by `_`, by `-`, and removed. Duplicates are dropped, first
/// occurrence wins.
pub fn separator_variants(s: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(4);
    for variant in [
        s.to_string(),
        replace_whitespace_runs(s, "_"),
        replace_whitespace_runs(s, "-"),
        replace_whitespace_runs(s, ""),
    ] {
        if !out.contains(&variant) {
            out.push(variant);
        }
    }
    out
}

fn replace_whitespace_runs(s: &str, sep: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push_str(sep);
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn collapse_whitespace(s: &str) -> String {
    replace_whitespace_runs(s, " ").trim().to_string()
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
