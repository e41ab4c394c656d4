use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use karuta_import::{export_csv, export_json};

use super::{Context, load_collection, runtime};
use crate::CliError;
use crate::cli_types::ExportFormat;

/// Write the collection to `output`, or to stdout.
pub(crate) fn run_export(
    ctx: &Context,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let rt = runtime()?;
    let cards = load_collection(ctx, &rt)?;

    match &output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_cards(&cards, format, &mut writer)?;
            writer.flush()?;
            log::info!(
                "{} Exported {} cards to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                cards.len(),
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_cards(&cards, format, &mut stdout)?;
            if format == ExportFormat::Json {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}

fn write_cards<W: Write>(
    cards: &[karuta_catalog::Card],
    format: ExportFormat,
    writer: &mut W,
) -> Result<(), CliError> {
    match format {
        ExportFormat::Json => export_json(cards, writer)?,
        ExportFormat::Csv => export_csv(cards, writer)?,
    }
    Ok(())
}
