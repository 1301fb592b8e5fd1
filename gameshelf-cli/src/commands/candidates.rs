use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameshelf_core::Settings;
use gameshelf_covers::{CandidateList, CandidateOrigin, CoverRequest, build_candidates};

use crate::cli_types::{ProbeArgs, TitleArgs};
use crate::error::CliError;

/// The list `resolve` would walk for the same arguments, overrides included.
pub(crate) fn candidate_list(
    settings: &Settings,
    record: &TitleArgs,
    probe_args: &ProbeArgs,
    detail: bool,
) -> Result<CandidateList, CliError> {
    let config = super::candidate_config(settings, detail);
    let overrides = super::runtime()?.block_on(super::load_overrides(settings, probe_args))?;
    let request = CoverRequest::new(&record.title)
        .year(record.year)
        .explicit_cover(record.cover.as_deref());
    Ok(build_candidates(&request, &config, overrides.as_ref()))
}

/// Print the ordered candidate list for one title.
pub(crate) fn run_candidates(
    settings: &Settings,
    record: &TitleArgs,
    probe_args: &ProbeArgs,
    detail: bool,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let list = candidate_list(settings, record, probe_args, detail)?;

    log::info!(
        "{} ({} candidates)",
        record.title.if_supports_color(Stdout, |t| t.bold()),
        list.len(),
    );

    let entries = list.entries();
    let shown = limit.unwrap_or(entries.len()).min(entries.len());
    let width = entries.len().to_string().len();
    let (head, last) = entries.split_at(entries.len() - 1);

    for (i, c) in head.iter().take(shown).enumerate() {
        log::info!("  {:>width$}. {} {}", i + 1, origin_tag(c.origin), c.source);
    }
    if shown < head.len() {
        log::info!(
            "  {}",
            format!("... {} more", head.len() - shown).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    for c in last {
        log::info!("  {:>width$}. {} {}", entries.len(), origin_tag(c.origin), c.source);
    }
    Ok(())
}

fn origin_tag(origin: CandidateOrigin) -> String {
    let tag = format!("[{:<11}]", origin.to_string());
    match origin {
        CandidateOrigin::Override => tag.if_supports_color(Stdout, |t| t.magenta()).to_string(),
        CandidateOrigin::Explicit => tag.if_supports_color(Stdout, |t| t.cyan()).to_string(),
        CandidateOrigin::Generated => tag.if_supports_color(Stdout, |t| t.dimmed()).to_string(),
        CandidateOrigin::Placeholder => tag.if_supports_color(Stdout, |t| t.yellow()).to_string(),
    }
}
