//! gameshelf CLI
//!
//! Command-line interface for resolving game cover images and browsing a
//! game price catalog.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use gameshelf_core::Settings;

use cli_types::{Cli, Commands, ConfigAction};
use commands::browse::{BrowseOptions, run_browse};
use commands::candidates::run_candidates;
use commands::config::{run_config_init, run_config_path, run_config_show};
use commands::covers::run_covers;
use commands::details::run_details;
use commands::resolve::run_resolve;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings_path = cli
        .settings
        .clone()
        .unwrap_or_else(gameshelf_core::settings_path);
    let settings = Settings::load_from(&settings_path)?;

    match cli.command {
        Commands::Candidates {
            record,
            detail,
            limit,
            probe,
        } => run_candidates(&settings, &record, &probe, detail, limit),
        Commands::Resolve {
            record,
            probe,
            detail,
        } => run_resolve(&settings, &record, &probe, detail),
        Commands::Covers {
            snapshot,
            probe,
            jobs,
            missing,
        } => run_covers(&settings, &snapshot, &probe, jobs, missing, cli.quiet),
        Commands::Browse {
            snapshot,
            query,
            types,
            platforms,
            formats,
            stores,
            sort,
            page,
            facets,
        } => {
            let options =
                BrowseOptions::new(query, types, platforms, formats, stores, &sort, page, facets);
            run_browse(&settings, &snapshot, &options);
            Ok(())
        }
        Commands::Details {
            snapshot,
            title,
            probe,
        } => run_details(&settings, &snapshot, &title, &probe),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                run_config_show(&settings, &settings_path);
                Ok(())
            }
            ConfigAction::Path => {
                run_config_path(&settings_path);
                Ok(())
            }
            ConfigAction::Init => run_config_init(&settings_path),
        },
    }
}
