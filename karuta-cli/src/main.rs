//! karuta CLI
//!
//! Command-line interface for importing, browsing and exporting a Karuta
//! card collection.

mod cli_types;
mod commands;
mod error;
mod progress;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands, ConfigAction};
use commands::Context;
pub(crate) use error::CliError;

/// Crates whose log output is shown at the chosen level. Everything else
/// (HTTP internals) stays at warnings.
const LOG_TARGETS: [&str; 5] = [
    "karuta",
    "karuta_catalog",
    "karuta_import",
    "karuta_lookup",
    "karuta_store",
];

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let settings = karuta_store::load_settings();
    let ctx = Context::new(settings, cli.collection, cli.quiet);

    let result = match cli.command {
        Commands::Import(args) => commands::import::run_import(&ctx, args),
        Commands::Export { format, output } => commands::export::run_export(&ctx, format, output),
        Commands::List { query, limit } => commands::list::run_list(&ctx, &query, limit),
        Commands::Command {
            kind,
            codes,
            argument,
            query,
        } => commands::command::run_command(&ctx, kind, codes, argument, &query),
        Commands::Image {
            code,
            url,
            missing,
            dry_run,
        } => {
            if missing {
                commands::image::run_image_missing(&ctx, dry_run)
            } else {
                commands::image::run_image(&ctx, code.unwrap_or_default(), url, dry_run)
            }
        }
        Commands::Clear { yes } => commands::clear::run_clear(&ctx, yes),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&ctx),
            ConfigAction::Set { key, value } => commands::config::run_config_set(&key, &value),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    };

    if let Err(e) = result {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

/// Install the logger. Normal output is the bare message; `--verbose` adds
/// timestamps, levels and targets. `RUST_LOG` still overrides both.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    for target in LOG_TARGETS {
        builder.filter_module(target, level);
    }

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.parse_default_env().init();
}
