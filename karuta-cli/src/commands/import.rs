use std::io::{IsTerminal, Read};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use karuta_import::{ChunkOptions, ImportError, ImportOptions, ImportSession, InputKind, MergeMode};

use super::{Context, runtime};
use crate::CliError;
use crate::cli_types::ImportArgs;
use crate::progress::BarProgress;

/// Import a file, or a paste from stdin, into the collection.
pub(crate) fn run_import(ctx: &Context, args: ImportArgs) -> Result<(), CliError> {
    let (text, kind) = match &args.input {
        Some(path) => (std::fs::read_to_string(path)?, InputKind::File),
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                log::info!("Paste your cards, then press Ctrl-D:");
            }
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            (text, InputKind::Paste)
        }
    };

    let mode = match args.mode {
        Some(mode) => mode,
        None => ctx
            .settings
            .import
            .mode
            .parse::<MergeMode>()
            .map_err(|e| CliError::config(e.to_string()))?,
    };
    let backfill = !args.no_images && ctx.settings.import.backfill_images;
    let options = ImportOptions {
        mode,
        kind,
        chunk: ChunkOptions {
            chunk_size: args.chunk_size.unwrap_or(ctx.settings.import.chunk_size),
        },
        backfill: backfill.then(|| ctx.backfill_options(args.concurrency)),
    };

    let store = ctx.store();
    let lookup = ctx.lookup()?;
    let progress = BarProgress::new(ctx.quiet);
    let session = ImportSession::new(&store, &lookup, &progress);

    let rt = runtime()?;
    let report = match rt.block_on(session.run(&text, &options)) {
        Ok(report) => report,
        Err(e) => {
            progress.abandon();
            if let ImportError::StorageExhausted { committed, total, .. } = &e {
                log::warn!(
                    "{} Storage is full: {} of {} cards were saved before it ran out.",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    committed,
                    total,
                );
                log::warn!(
                    "Retry with a smaller batch (--chunk-size), or run 'karuta export' first and clear the collection."
                );
            }
            return Err(e.into());
        }
    };

    log::info!(
        "{} Imported {} cards ({}, {} mode)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.parsed,
        report.format,
        options.mode,
    );
    log::info!("  {}", report.stats);
    if let Some(images) = report.backfill {
        log::info!(
            "  Images: {} found, {} placeholder{}",
            images.resolved,
            images.placeholders,
            if images.placeholders == 1 { "" } else { "s" },
        );
    }
    log::info!(
        "  Collection: {} cards in {}",
        report.collection.len(),
        ctx.collection_path
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
