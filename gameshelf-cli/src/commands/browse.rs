use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameshelf_catalog::{
    GameRecord, Query, ScoreBand, SortKey, all_checklists, count_label, paginate,
};
use gameshelf_core::{Settings, format_usd};

use crate::cli_types::SnapshotArgs;

pub(crate) struct BrowseOptions {
    pub query: Query,
    pub page: usize,
    pub facets: bool,
}

impl BrowseOptions {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        term: String,
        types: Vec<String>,
        platforms: Vec<String>,
        formats: Vec<String>,
        stores: Vec<String>,
        sort: &str,
        page: usize,
        facets: bool,
    ) -> Self {
        Self {
            query: Query {
                term,
                types,
                platforms,
                formats,
                stores,
                sort: SortKey::parse(sort),
            },
            page,
            facets,
        }
    }
}

/// Print one page of filtered, sorted results, or the filter checklists.
pub(crate) fn run_browse(settings: &Settings, snapshot: &SnapshotArgs, options: &BrowseOptions) {
    let (games, origin) = super::load_catalog(settings, snapshot);
    log::debug!("{} records from {}", games.len(), origin);

    if options.facets {
        print_checklists(&games);
        return;
    }

    let hits = options.query.apply(&games);
    let page = paginate(&hits, options.page, settings.catalog.page_size);

    log::info!(
        "{}  {}",
        count_label(hits.len()).if_supports_color(Stdout, |t| t.bold()),
        format!("sorted by {}", options.query.sort).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("");
    for game in page.items {
        print_row(game);
    }
    log::info!("");
    log::info!(
        "{} {}/{} {}",
        if page.has_prev() { "\u{27e8}" } else { " " },
        page.number,
        page.total_pages,
        if page.has_next() { "\u{27e9}" } else { " " },
    );
}

fn print_row(game: &GameRecord) {
    let score = game.score.to_string();
    let score = match game.score_band() {
        ScoreBand::Ok => score.if_supports_color(Stdout, |t| t.green()).to_string(),
        ScoreBand::Warn => score.if_supports_color(Stdout, |t| t.yellow()).to_string(),
        ScoreBand::Bad => score.if_supports_color(Stdout, |t| t.red()).to_string(),
    };
    let discount = if game.discount_pct > 0 {
        format!(" \u{2212}{}%", game.discount_pct)
            .if_supports_color(Stdout, |t| t.green())
            .to_string()
    } else {
        String::new()
    };

    log::info!(
        "  {} ({}) {}",
        game.title.if_supports_color(Stdout, |t| t.bold()),
        game.year,
        game.genre.if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "    {} at {}  regular {}{}  score {}  [{}]",
        format_usd(game.best.price).if_supports_color(Stdout, |t| t.cyan()),
        game.best.name,
        format_usd(game.regular),
        discount,
        score,
        game.platforms.join(", "),
    );
}

fn print_checklists(games: &[GameRecord]) {
    for (facet, options) in all_checklists(games) {
        log::info!("{}", facet.if_supports_color(Stdout, |t| t.bold()));
        for option in options {
            log::info!(
                "  {}  {}",
                option.value,
                option.id.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}
