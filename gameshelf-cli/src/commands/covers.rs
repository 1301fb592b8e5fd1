use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameshelf_core::Settings;
use gameshelf_covers::{CoverPool, CoverRequest, CoverReport, build_candidates};

use crate::cli_types::{ProbeArgs, SnapshotArgs};
use crate::error::CliError;

/// Resolve every catalog record's cover concurrently.
pub(crate) fn run_covers(
    settings: &Settings,
    snapshot: &SnapshotArgs,
    probe_args: &ProbeArgs,
    jobs: Option<usize>,
    missing_only: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let probe = super::build_probe(settings, probe_args)?;
    let config = super::candidate_config(settings, false);
    let (games, origin) = super::load_catalog(settings, snapshot);
    let jobs = jobs.unwrap_or(settings.covers.jobs).max(1);
    let rt = super::runtime()?;

    log::info!(
        "Resolving {} covers from {} against {} ({} workers)",
        games.len(),
        origin,
        probe,
        jobs,
    );

    let reports = rt.block_on(async {
        let overrides = super::load_overrides(settings, probe_args).await?;
        let lists = games
            .iter()
            .map(|g| {
                let request = CoverRequest::new(&g.title)
                    .year(Some(g.year))
                    .explicit_cover(g.cover.as_deref());
                build_candidates(&request, &config, overrides.as_ref())
            })
            .collect();

        let pb = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(games.len() as u64);
            pb.set_style(
                ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            pb
        };

        let mut pool = CoverPool::start(jobs, lists, probe);
        let mut reports: Vec<CoverReport> = Vec::with_capacity(games.len());
        while let Some(report) = pool.recv().await {
            pb.set_message(report.title.clone());
            pb.inc(1);
            reports.push(report);
        }
        pb.finish_and_clear();
        reports.sort_by_key(|r| r.index);
        Ok::<_, CliError>(reports)
    })?;

    let mut found = 0;
    for report in &reports {
        let placeholder = report.outcome.is_placeholder();
        if !placeholder {
            found += 1;
        }
        if missing_only && !placeholder {
            continue;
        }
        let mark = if placeholder {
            "\u{2718}".if_supports_color(Stdout, |t| t.yellow()).to_string()
        } else {
            "\u{2714}".if_supports_color(Stdout, |t| t.green()).to_string()
        };
        log::info!("{} {}  {}", mark, report.title, report.outcome.source());
    }

    log::info!("");
    log::info!(
        "{} found, {} placeholder",
        found.if_supports_color(Stdout, |t| t.green()),
        (reports.len() - found).if_supports_color(Stdout, |t| t.yellow()),
    );
    if reports.len() < games.len() {
        log::warn!(
            "{} records produced no report",
            games.len() - reports.len()
        );
    }
    Ok(())
}
