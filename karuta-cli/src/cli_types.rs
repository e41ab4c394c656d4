//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use karuta_catalog::{CardQuery, CommandKind, SortDirection, SortField};
use karuta_import::MergeMode;

#[derive(Parser)]
#[command(name = "karuta")]
#[command(about = "Manage a Karuta card collection", long_about = None)]
pub(crate) struct Cli {
    /// Collection file (defaults to the path in settings.toml)
    #[arg(short, long, global = true)]
    pub collection: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by commands that select cards from the collection.
#[derive(Args, Clone, Default)]
pub(crate) struct QueryArgs {
    /// Match name, code or series (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Match cards whose tag contains this text
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Only cards of this edition
    #[arg(short, long)]
    pub edition: Option<u32>,

    /// Sort by code, name, series, edition, print, quality or tag
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Reverse the sort order
    #[arg(long)]
    pub desc: bool,
}

impl QueryArgs {
    pub(crate) fn to_query(&self) -> CardQuery {
        CardQuery {
            search: self.search.clone().unwrap_or_default(),
            tag: self.tag.clone().unwrap_or_default(),
            edition: self.edition,
            sort: self.sort,
            direction: if self.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        }
    }
}

#[derive(Args)]
pub(crate) struct ImportArgs {
    /// File to import (CSV/TSV, JSON backup, or one card per line).
    /// Reads pasted text from stdin when omitted.
    pub input: Option<PathBuf>,

    /// merge (default) or replace
    #[arg(short, long)]
    pub mode: Option<MergeMode>,

    /// Cards merged and saved per step
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Skip the image lookup for new cards
    #[arg(long)]
    pub no_images: bool,

    /// Image lookups in flight at once
    #[arg(long)]
    pub concurrency: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    Json,
    Csv,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Import cards from a file or a chat paste
    Import(ImportArgs),

    /// Write the collection as JSON or CSV
    Export {
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List cards in the collection
    List {
        #[command(flatten)]
        query: QueryArgs,

        /// Show at most this many cards
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print a Karuta bot command for a set of cards
    Command {
        /// kmt, kgive, kburn, ktag, kframe or kdye
        kind: CommandKind,

        /// Card codes (defaults to every card matching the filters)
        codes: Vec<String>,

        /// Recipient, tag, frame or dye, depending on the command
        #[arg(short, long)]
        argument: Option<String>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Look up or set card images
    Image {
        /// Card code
        #[arg(required_unless_present = "missing")]
        code: Option<String>,

        /// Use this image URL instead of looking one up
        #[arg(long, conflicts_with = "missing")]
        url: Option<String>,

        /// Retry the lookup for every card still without an image
        #[arg(long)]
        missing: bool,

        /// Show candidates without saving
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Delete the stored collection
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings
    Show,

    /// Set one value, e.g. `import.chunk_size 25`
    Set {
        key: String,
        /// New value (empty clears optional settings)
        value: String,
    },

    /// Print the settings file path
    Path,
}
