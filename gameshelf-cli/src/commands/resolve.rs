use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameshelf_core::Settings;
use gameshelf_covers::{
    CoverCursor, CoverRequest, CoverSlot, ResolutionOutcome, build_candidates, resolve_cover,
};

use crate::cli_types::{ProbeArgs, TitleArgs};
use crate::error::CliError;

/// Resolve one cover and report which source won.
pub(crate) fn run_resolve(
    settings: &Settings,
    record: &TitleArgs,
    probe_args: &ProbeArgs,
    detail: bool,
) -> Result<(), CliError> {
    let probe = super::build_probe(settings, probe_args)?;
    let config = super::candidate_config(settings, detail);
    let rt = super::runtime()?;

    rt.block_on(async {
        let overrides = super::load_overrides(settings, probe_args).await?;
        let request = CoverRequest::new(&record.title)
            .year(record.year)
            .explicit_cover(record.cover.as_deref());
        let list = build_candidates(&request, &config, overrides.as_ref());
        let total = list.len();

        log::info!(
            "Resolving {} against {} ({} candidates)",
            record.title.if_supports_color(Stdout, |t| t.bold()),
            probe,
            total,
        );

        let mut slot = CoverSlot::new();
        let outcome = resolve_cover(CoverCursor::new(list), &mut slot, &probe).await;
        print_outcome(&outcome);
        Ok::<(), CliError>(())
    })
}

fn print_outcome(outcome: &ResolutionOutcome) {
    match outcome {
        ResolutionOutcome::Found { source, attempts } => log::info!(
            "{} {} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            source,
            format!("(attempt {})", attempts).if_supports_color(Stdout, |t| t.dimmed()),
        ),
        ResolutionOutcome::Placeholder { source, attempts } => log::info!(
            "{} {} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.yellow()),
            source,
            format!("(placeholder after {} attempts)", attempts)
                .if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
}
