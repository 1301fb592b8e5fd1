//! Filter checklists built from the values present in the catalog.

use gameshelf_core::text::slug;

use crate::query::compare_titles;
use crate::types::GameRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Type,
    Platform,
    Format,
    Store,
}

impl Facet {
    pub const ALL: &[Facet] = &[Self::Type, Self::Platform, Self::Format, Self::Store];

    /// Prefix for option ids.
    pub fn group(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Platform => "plat",
            Self::Format => "fmt",
            Self::Store => "store",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Type => "Tipo",
            Self::Platform => "Plataforma",
            Self::Format => "Formato",
            Self::Store => "Tienda",
        }
    }

    /// Every value `game` has for this facet.
    pub fn values<'a>(&self, game: &'a GameRecord) -> Vec<&'a str> {
        match self {
            Self::Type => vec![game.kind.as_str()],
            Self::Platform => game.platforms.iter().map(String::as_str).collect(),
            Self::Format => vec![game.format.as_str()],
            Self::Store => game.store_names().collect(),
        }
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistOption {
    /// `<group>-<slug>`.
    pub id: String,
    pub value: String,
}

/// Unique values sorted case- and accent-insensitively, each with its id.
pub fn checklist<'a>(values: impl IntoIterator<Item = &'a str>, group: &str) -> Vec<ChecklistOption> {
    let mut unique: Vec<&str> = Vec::new();
    for v in values {
        if !unique.contains(&v) {
            unique.push(v);
        }
    }
    unique.sort_by(|a, b| compare_titles(a, b));
    unique
        .into_iter()
        .map(|value| ChecklistOption {
            id: format!("{}-{}", group, slug(value)),
            value: value.to_string(),
        })
        .collect()
}

/// The checklist for one facet across `games`.
pub fn facet_checklist(games: &[GameRecord], facet: Facet) -> Vec<ChecklistOption> {
    checklist(games.iter().flat_map(|g| facet.values(g)), facet.group())
}

/// Checklists for every facet, in display order.
pub fn all_checklists(games: &[GameRecord]) -> Vec<(Facet, Vec<ChecklistOption>)> {
    Facet::ALL
        .iter()
        .map(|f| (*f, facet_checklist(games, *f)))
        .collect()
}
