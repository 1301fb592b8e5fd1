//! Search, facet filters, sorting and pagination over catalog records.

use std::cmp::Ordering;

use gameshelf_core::text::fold_for_sort;

use crate::types::GameRecord;

/// Default number of records per page.
pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    YearAsc,
    YearDesc,
    PriceAsc,
    PriceDesc,
    DiscountAsc,
    DiscountDesc,
    ScoreAsc,
    ScoreDesc,
}

impl SortKey {
    pub const ALL: &[SortKey] = &[
        Self::NameAsc,
        Self::NameDesc,
        Self::YearAsc,
        Self::YearDesc,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::DiscountAsc,
        Self::DiscountDesc,
        Self::ScoreAsc,
        Self::ScoreDesc,
    ];

    /// Parse a key like `"price-desc"`. `mc-*` is accepted for the score
    /// keys. Unknown keys give [`SortKey::NameAsc`].
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "name-desc" => Self::NameDesc,
            "year-asc" => Self::YearAsc,
            "year-desc" => Self::YearDesc,
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "discount-asc" => Self::DiscountAsc,
            "discount-desc" => Self::DiscountDesc,
            "score-asc" | "mc-asc" => Self::ScoreAsc,
            "score-desc" | "mc-desc" => Self::ScoreDesc,
            _ => Self::NameAsc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::YearAsc => "year-asc",
            Self::YearDesc => "year-desc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::DiscountAsc => "discount-asc",
            Self::DiscountDesc => "discount-desc",
            Self::ScoreAsc => "score-asc",
            Self::ScoreDesc => "score-desc",
        }
    }

    pub fn compare(&self, a: &GameRecord, b: &GameRecord) -> Ordering {
        match self {
            Self::NameAsc => compare_titles(&a.title, &b.title),
            Self::NameDesc => compare_titles(&b.title, &a.title),
            Self::YearAsc => a.year.cmp(&b.year),
            Self::YearDesc => b.year.cmp(&a.year),
            Self::PriceAsc => a.best.price.cmp(&b.best.price),
            Self::PriceDesc => b.best.price.cmp(&a.best.price),
            Self::DiscountAsc => a.discount_pct.cmp(&b.discount_pct),
            Self::DiscountDesc => b.discount_pct.cmp(&a.discount_pct),
            Self::ScoreAsc => a.score.cmp(&b.score),
            Self::ScoreDesc => b.score.cmp(&a.score),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case- and accent-insensitive title order, raw text as the tiebreak.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    fold_for_sort(a)
        .cmp(&fold_for_sort(b))
        .then_with(|| a.cmp(b))
}

/// Search term, facet selections and sort order.
///
/// Within a facet any selected value matches; an empty selection matches
/// everything. Facets and the search term combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub term: String,
    pub types: Vec<String>,
    pub platforms: Vec<String>,
    pub formats: Vec<String>,
    pub stores: Vec<String>,
    pub sort: SortKey,
}

impl Query {
    pub fn matches(&self, game: &GameRecord) -> bool {
        self.matches_term(game)
            && selected(&self.types, std::iter::once(game.kind.as_str()))
            && selected(&self.platforms, game.platforms.iter().map(String::as_str))
            && selected(&self.formats, std::iter::once(game.format.as_str()))
            && selected(&self.stores, game.store_names())
    }

    fn matches_term(&self, game: &GameRecord) -> bool {
        let term = self.term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        game.title.to_lowercase().contains(&term)
            || game.genre.to_lowercase().contains(&term)
            || game
                .platforms
                .iter()
                .any(|p| p.to_lowercase().contains(&term))
    }

    /// Matching records in sort order. The sort is stable.
    pub fn apply<'a>(&self, games: &'a [GameRecord]) -> Vec<&'a GameRecord> {
        let mut hits: Vec<&GameRecord> = games.iter().filter(|g| self.matches(g)).collect();
        hits.sort_by(|a, b| self.sort.compare(a, b));
        hits
    }
}

fn selected<'a>(selection: &[String], mut values: impl Iterator<Item = &'a str>) -> bool {
    selection.is_empty() || values.any(|v| selection.iter().any(|s| s == v))
}

/// One page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number after clamping.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Number of pages for `len` items; at least one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slice out page `requested`, clamped to `[1, total_pages]`.
pub fn paginate<T>(items: &[T], requested: usize, page_size: usize) -> Page<'_, T> {
    let size = page_size.max(1);
    let total_pages = total_pages(items.len(), size);
    let number = requested.clamp(1, total_pages);
    let start = ((number - 1) * size).min(items.len());
    let end = (start + size).min(items.len());
    Page {
        items: &items[start..end],
        number,
        total_pages,
        total_items: items.len(),
    }
}

/// `"1 resultado"`, `"5 resultados"`.
pub fn count_label(n: usize) -> String {
    if n == 1 {
        format!("{} resultado", n)
    } else {
        format!("{} resultados", n)
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
