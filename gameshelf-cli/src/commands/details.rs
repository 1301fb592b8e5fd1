use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameshelf_catalog::{ScoreBand, find_by_title, format_play_time, price_rows, subtitle};
use gameshelf_core::{Settings, format_usd};
use gameshelf_covers::{CoverRequest, build_candidates};

use crate::cli_types::{ProbeArgs, SnapshotArgs};
use crate::error::CliError;

/// Print the details view for one record.
pub(crate) fn run_details(
    settings: &Settings,
    snapshot: &SnapshotArgs,
    title: &str,
    probe_args: &ProbeArgs,
) -> Result<(), CliError> {
    let (games, origin) = super::load_catalog(settings, snapshot);
    let game = find_by_title(&games, title)
        .ok_or_else(|| CliError::not_found(format!("no record titled '{}' in {}", title, origin)))?;

    log::info!("{}", game.title.if_supports_color(Stdout, |t| t.bold()));
    let sub = subtitle(game);
    if !sub.is_empty() {
        log::info!("{}", sub.if_supports_color(Stdout, |t| t.dimmed()));
    }
    log::info!("");

    let msrp = if game.regular > 0 {
        format_usd(game.regular)
    } else {
        "\u{2014}".to_string()
    };
    let score = match game.score_band() {
        ScoreBand::Ok => game.score.if_supports_color(Stdout, |t| t.green()).to_string(),
        ScoreBand::Warn => game.score.if_supports_color(Stdout, |t| t.yellow()).to_string(),
        ScoreBand::Bad => game.score.if_supports_color(Stdout, |t| t.red()).to_string(),
    };
    log::info!("  Regular price: {}", msrp);
    log::info!("  Score:         {}", score);
    log::info!("  Platforms:     {}", game.platforms.join(", "));
    log::info!("  Type/format:   {} / {}", game.kind, game.format);

    let config = super::candidate_config(settings, true);
    let overrides = super::runtime()?.block_on(super::load_overrides(settings, probe_args))?;
    let request = CoverRequest::new(&game.title)
        .year(Some(game.year))
        .explicit_cover(game.cover.as_deref());
    let covers = build_candidates(&request, &config, overrides.as_ref());
    log::info!(
        "  Cover:         {} {}",
        covers.sources().next().unwrap_or_default(),
        format!("(+{} fallbacks)", covers.len() - 1).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("");

    let rows = price_rows(game);
    if rows.is_empty() {
        log::info!("  {}", "No hay precios disponibles.".if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        log::info!("{}", "Prices".if_supports_color(Stdout, |t| t.bold()));
        for row in rows {
            let original = row
                .original
                .map(|o| format!(" (was {})", format_usd(o)))
                .unwrap_or_default();
            let discount = if row.discount_pct > 0 {
                format!(" -{}%", row.discount_pct)
                    .if_supports_color(Stdout, |t| t.green())
                    .to_string()
            } else {
                String::new()
            };
            log::info!(
                "  {:<18} {}{}{}",
                row.store,
                format_usd(row.price).if_supports_color(Stdout, |t| t.cyan()),
                original,
                discount,
            );
            log::info!("  {:<18} {}", "", row.url.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
    log::info!("");

    log::info!("{}", "How long to beat".if_supports_color(Stdout, |t| t.bold()));
    let times = &game.play_times;
    log::info!("  Main story:    {}", format_play_time(times.main.as_ref()));
    log::info!("  Main + extras: {}", format_play_time(times.extra.as_ref()));
    log::info!("  Completionist: {}", format_play_time(times.completionist.as_ref()));
    Ok(())
}
