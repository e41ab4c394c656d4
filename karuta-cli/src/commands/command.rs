use karuta_catalog::{CommandKind, format_bot_command};

use super::{Context, load_collection, runtime};
use crate::CliError;
use crate::cli_types::QueryArgs;

/// Print a bot command for the given codes, or for every card matching the
/// filters when no codes are given.
pub(crate) fn run_command(
    ctx: &Context,
    kind: CommandKind,
    codes: Vec<String>,
    argument: Option<String>,
    query: &QueryArgs,
) -> Result<(), CliError> {
    let codes: Vec<String> = if codes.is_empty() {
        let rt = runtime()?;
        let cards = load_collection(ctx, &rt)?;
        query
            .to_query()
            .apply(&cards)
            .into_iter()
            .map(|card| card.code)
            .collect()
    } else {
        codes.iter().map(|code| code.trim().to_lowercase()).collect()
    };

    if codes.is_empty() {
        log::warn!("No cards selected.");
        return Ok(());
    }

    log::debug!("{} command for {} cards", kind, codes.len());
    println!("{}", format_bot_command(kind, &codes, argument.as_deref()));
    Ok(())
}
