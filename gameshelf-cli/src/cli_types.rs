//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gameshelf")]
#[command(about = "Resolve cover images and browse a game price catalog", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Use this settings file instead of the default location
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Record fields that drive cover candidate generation.
#[derive(Args, Clone)]
pub(crate) struct TitleArgs {
    /// Game title as stored in the catalog
    pub title: String,

    /// Release year (tried before the recent-year fallbacks)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Explicit cover reference stored with the record (URL or filename)
    #[arg(long)]
    pub cover: Option<String>,
}

/// Where candidate sources are checked.
#[derive(Args, Clone)]
pub(crate) struct ProbeArgs {
    /// Site root that relative candidate paths resolve against
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Check candidates with HTTP HEAD requests against this base URL
    #[arg(long, conflicts_with = "root")]
    pub base_url: Option<String>,

    /// Runtime override map file or URL (default: settings map_path under the asset root)
    #[arg(long)]
    pub map: Option<String>,

    /// Skip the built-in and runtime override tables
    #[arg(long)]
    pub no_overrides: bool,
}

/// Catalog source selection.
#[derive(Args, Clone)]
pub(crate) struct SnapshotArgs {
    /// Document-store JSON export of the `juegos` collection
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the cover candidates generated for a title
    Candidates {
        #[command(flatten)]
        record: TitleArgs,

        /// Use the details-page placeholder size
        #[arg(long)]
        detail: bool,

        /// Show at most this many candidates (the placeholder is always shown)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Locates the runtime override map; no sources are checked
        #[command(flatten)]
        probe: ProbeArgs,
    },

    /// Resolve the cover for one title
    Resolve {
        #[command(flatten)]
        record: TitleArgs,

        #[command(flatten)]
        probe: ProbeArgs,

        /// Use the details-page placeholder size
        #[arg(long)]
        detail: bool,
    },

    /// Resolve covers for every record in the catalog
    Covers {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        #[command(flatten)]
        probe: ProbeArgs,

        /// Number of concurrent workers (default from settings)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Only list records that fell back to the placeholder
        #[arg(long)]
        missing: bool,
    },

    /// Search, filter and sort the catalog
    Browse {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Search term (title, genre or platform)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Distribution types to include (e.g., Digital,Físico)
        #[arg(long = "type", value_delimiter = ',')]
        types: Vec<String>,

        /// Platforms to include
        #[arg(long = "platform", value_delimiter = ',')]
        platforms: Vec<String>,

        /// Editions to include
        #[arg(long = "format", value_delimiter = ',')]
        formats: Vec<String>,

        /// Stores to include
        #[arg(long = "store", value_delimiter = ',')]
        stores: Vec<String>,

        /// Sort order (name, year, price, discount, score; -asc or -desc)
        #[arg(long, default_value = "name-asc")]
        sort: String,

        /// Page number (clamped to the available pages)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print the filter checklists instead of results
        #[arg(long)]
        facets: bool,
    },

    /// Show prices, play times and store links for one record
    Details {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Title to look up (exact, then case-insensitive, then substring)
        title: String,

        /// Locates the runtime override map for the cover line
        #[command(flatten)]
        probe: ProbeArgs,
    },

    /// Manage gameshelf settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where each value came from
    Show,

    /// Print the settings file path
    Path,

    /// Write a default settings file if none exists
    Init,
}
