use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use karuta_catalog::Card;

use super::{Context, load_collection, runtime, truncate_str};
use crate::CliError;
use crate::cli_types::QueryArgs;

pub(crate) fn run_list(ctx: &Context, query: &QueryArgs, limit: Option<usize>) -> Result<(), CliError> {
    let rt = runtime()?;
    let cards = load_collection(ctx, &rt)?;

    if cards.is_empty() {
        log::info!(
            "{}",
            "The collection is empty.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("Run 'karuta import <file>' or paste cards into 'karuta import'.");
        return Ok(());
    }

    let matching = query.to_query().apply(&cards);
    let shown = limit.unwrap_or(matching.len()).min(matching.len());

    for card in &matching[..shown] {
        log::info!("{}", format_row(card));
    }
    log::info!("");
    log::info!(
        "{} of {} cards",
        shown.if_supports_color(Stdout, |t| t.bold()),
        cards.len(),
    );
    Ok(())
}

fn format_row(card: &Card) -> String {
    let tag = if card.tag.is_empty() {
        String::new()
    } else {
        format!(" [{}]", card.tag)
    };
    format!(
        "  {:<8} {} #{:<6} \u{25C8}{} {} \u{00B7} {}{}",
        card.code.if_supports_color(Stdout, |t| t.bold()),
        card.quality,
        card.print,
        card.edition,
        truncate_str(&card.series, 32).if_supports_color(Stdout, |t| t.dimmed()),
        card.name.if_supports_color(Stdout, |t| t.cyan()),
        tag,
    )
}
