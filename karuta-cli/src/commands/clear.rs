use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use karuta_store::CollectionStore;

use super::{Context, runtime};
use crate::CliError;

pub(crate) fn run_clear(ctx: &Context, yes: bool) -> Result<(), CliError> {
    if !yes {
        log::warn!(
            "This deletes every card in {}. Run 'karuta export' first to keep a backup,",
            ctx.collection_path.display(),
        );
        log::warn!("then confirm with 'karuta clear --yes'.");
        return Ok(());
    }

    let rt = runtime()?;
    rt.block_on(ctx.store().clear())?;
    log::info!(
        "{} Collection cleared",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}
