//! Cover candidate generation.
//!
//! Given a title, an optional year and an optional explicit cover hint,
//! produce the ordered list of references to try, most specific first:
//!
//! 1. Override table hit (replaces all generated paths)
//! 2. Explicit cover hint
//! 3. Generated asset paths (name variants x years x extensions)
//! 4. Seeded placeholder image
//!
//! Generation is a pure function of its inputs and never fails.

use std::collections::HashSet;

use gameshelf_core::settings::{CoverSettings, DEFAULT_ASSET_DIR, DEFAULT_PLACEHOLDER_BASE};
use gameshelf_core::text::{
    sanitize_filename, separator_variants, slug, strip_brackets, strip_diacritics,
};

use crate::encode::encode_uri;
use crate::overrides::{CoverOverrides, resolve_asset_reference};

/// Image extensions tried for every name, in priority order.
pub const IMAGE_EXTENSIONS: &[&str] = &["webp", "jpg", "jpeg", "png", "avif"];

/// Years tried for every title in addition to its own, since stored years
/// are often wrong or missing.
pub const RECENT_YEARS: &[i32] = &[2021, 2022, 2023, 2024, 2025];

/// Exclusive bounds for a usable record year.
const MIN_YEAR_EXCLUSIVE: i32 = 1970;
const MAX_YEAR_EXCLUSIVE: i32 = 2100;

/// Pixel size requested from the placeholder service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSize {
    pub width: u32,
    pub height: u32,
}

impl PlaceholderSize {
    /// Catalog grid card.
    pub const CARD: Self = Self {
        width: 400,
        height: 225,
    };
    /// Details page hero image.
    pub const DETAIL: Self = Self {
        width: 800,
        height: 450,
    };
}

/// Immutable generation constants.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateConfig {
    /// Asset directories, relative to the site root. The first one is where
    /// bare override and cover filenames live.
    pub asset_dirs: Vec<String>,
    pub extensions: Vec<String>,
    pub recent_years: Vec<i32>,
    pub placeholder_base: String,
    pub placeholder_size: PlaceholderSize,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            asset_dirs: vec![DEFAULT_ASSET_DIR.to_string()],
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            recent_years: RECENT_YEARS.to_vec(),
            placeholder_base: DEFAULT_PLACEHOLDER_BASE.to_string(),
            placeholder_size: PlaceholderSize::CARD,
        }
    }
}

impl CandidateConfig {
    pub fn from_settings(settings: &CoverSettings) -> Self {
        Self {
            asset_dirs: vec![settings.asset_dir.clone()],
            placeholder_base: settings.placeholder_base.clone(),
            ..Self::default()
        }
    }

    pub fn with_placeholder_size(mut self, size: PlaceholderSize) -> Self {
        self.placeholder_size = size;
        self
    }

    fn primary_dir(&self) -> &str {
        self.asset_dirs
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_ASSET_DIR)
    }
}

/// The record fields cover resolution needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverRequest<'a> {
    pub title: &'a str,
    pub year: Option<i32>,
    /// URL or bare filename stored with the record.
    pub explicit_cover: Option<&'a str>,
}

impl<'a> CoverRequest<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            ..Self::default()
        }
    }

    pub fn year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub fn explicit_cover(mut self, cover: Option<&'a str>) -> Self {
        self.explicit_cover = cover;
        self
    }
}

/// Why a candidate is in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOrigin {
    Override,
    Explicit,
    Generated,
    Placeholder,
}

impl std::fmt::Display for CandidateOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Override => write!(f, "override"),
            Self::Explicit => write!(f, "explicit"),
            Self::Generated => write!(f, "generated"),
            Self::Placeholder => write!(f, "placeholder"),
        }
    }
}

/// One encoded reference to try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub source: String,
    pub origin: CandidateOrigin,
}

/// Ordered, duplicate-free candidates for one title. Never empty: the last
/// entry is always the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    title: String,
    entries: Vec<Candidate>,
}

impl CandidateList {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[Candidate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.source.as_str())
    }

    pub fn placeholder(&self) -> &str {
        self.entries
            .last()
            .map(|c| c.source.as_str())
            .unwrap_or_default()
    }

    pub fn into_sources(self) -> Vec<String> {
        self.entries.into_iter().map(|c| c.source).collect()
    }
}

/// Up to eight base reductions of a title, in priority order.
fn base_forms(title: &str) -> [String; 8] {
    let sanitized = sanitize_filename(title);
    let no_brackets = strip_brackets(&sanitized);
    let lower = sanitized.to_lowercase();
    let lower_no_brackets = no_brackets.to_lowercase();
    let folded = strip_diacritics(&lower);
    let folded_no_brackets = strip_diacritics(&lower_no_brackets);
    let dashed = slug(title);
    let underscored = dashed.replace('-', "_");

    [
        sanitized,
        no_brackets,
        lower,
        lower_no_brackets,
        folded,
        folded_no_brackets,
        dashed,
        underscored,
    ]
}

/// The record's year if usable, then every recent year not already present.
pub fn candidate_years(year: Option<i32>, recent_years: &[i32]) -> Vec<i32> {
    let mut years: Vec<i32> = year
        .filter(|y| *y > MIN_YEAR_EXCLUSIVE && *y < MAX_YEAR_EXCLUSIVE)
        .into_iter()
        .collect();
    for &y in recent_years {
        if !years.contains(&y) {
            years.push(y);
        }
    }
    years
}

/// Ordered, deduplicated file stems to try for `title`.
///
/// Year-less separator variants of every base form come first, followed by
/// `"{base} {year}"`, `"{base}_{year}"`, `"{base}-{year}"` and
/// `"{base}({year})"` for every base and candidate year, each expanded into
/// its separator variants.
pub fn filename_variants(title: &str, year: Option<i32>, recent_years: &[i32]) -> Vec<String> {
    let bases = base_forms(title);
    let years = candidate_years(year, recent_years);

    let mut seen = HashSet::new();
    let mut names = Vec::new();
    let mut add = |variants: Vec<String>| {
        for v in variants {
            if seen.insert(v.clone()) {
                names.push(v);
            }
        }
    };

    for base in &bases {
        add(separator_variants(base));
    }
    for base in &bases {
        for y in &years {
            for with_year in [
                format!("{base} {y}"),
                format!("{base}_{y}"),
                format!("{base}-{y}"),
                format!("{base}({y})"),
            ] {
                add(separator_variants(&with_year));
            }
        }
    }

    names
}

/// Expand names into unencoded relative paths, two per extension (lower
/// and upper case), directory-major then name then extension.
pub fn generated_paths(names: &[String], config: &CandidateConfig) -> Vec<String> {
    let mut paths =
        Vec::with_capacity(config.asset_dirs.len() * names.len() * config.extensions.len() * 2);
    for dir in &config.asset_dirs {
        for name in names {
            for ext in &config.extensions {
                paths.push(format!("./{}/{}.{}", dir, name, ext));
                paths.push(format!("./{}/{}.{}", dir, name, ext.to_uppercase()));
            }
        }
    }
    paths
}

/// Seeded placeholder URL for `title`; identical titles give identical URLs.
pub fn placeholder_url(title: &str, config: &CandidateConfig) -> String {
    format!(
        "{}/{}/{}/{}",
        config.placeholder_base.trim_end_matches('/'),
        slug(title),
        config.placeholder_size.width,
        config.placeholder_size.height
    )
}

/// Build the full candidate list for a record.
///
/// Order is override, explicit hint, generated paths, placeholder. An
/// override hit skips generation entirely. All entries are encoded with
/// [`encode_uri`] and deduplicated after encoding; nothing equal to the
/// placeholder is emitted ahead of it.
pub fn build_candidates(
    request: &CoverRequest<'_>,
    config: &CandidateConfig,
    overrides: Option<&CoverOverrides>,
) -> CandidateList {
    let placeholder = encode_uri(&placeholder_url(request.title, config));

    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(placeholder.clone());
    let mut entries = Vec::new();
    let mut push = |raw: &str, origin: CandidateOrigin| {
        let source = encode_uri(raw);
        if seen.insert(source.clone()) {
            entries.push(Candidate { source, origin });
        }
    };

    let override_hit = overrides.and_then(|o| o.lookup(request.title));
    if let Some(path) = &override_hit {
        push(path, CandidateOrigin::Override);
    }

    if let Some(hint) = request.explicit_cover.map(str::trim).filter(|h| !h.is_empty()) {
        push(
            &resolve_asset_reference(hint, config.primary_dir()),
            CandidateOrigin::Explicit,
        );
    }

    if override_hit.is_none() {
        let names = filename_variants(request.title, request.year, &config.recent_years);
        for path in generated_paths(&names, config) {
            push(&path, CandidateOrigin::Generated);
        }
    }

    entries.push(Candidate {
        source: placeholder,
        origin: CandidateOrigin::Placeholder,
    });

    CandidateList {
        title: request.title.to_string(),
        entries,
    }
}

#[cfg(test)]
#[path = "tests/candidates_tests.rs"]
mod tests;
