use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use karuta_catalog::Card;
use karuta_import::backfill_images;
use karuta_lookup::ImageLookup;
use karuta_store::CollectionStore;

use super::{Context, runtime};
use crate::CliError;
use crate::progress::BarProgress;

/// Set the image of one card, either to `url` or to the best lookup result.
pub(crate) fn run_image(
    ctx: &Context,
    code: String,
    url: Option<String>,
    dry_run: bool,
) -> Result<(), CliError> {
    let code = code.trim().to_lowercase();
    let store = ctx.store();
    let rt = runtime()?;
    let mut cards = rt.block_on(store.load())?;

    let index = cards
        .iter()
        .position(|card| card.code == code)
        .ok_or_else(|| CliError::unknown_card(&code))?;

    let chosen = match url {
        Some(url) => url,
        None => {
            let card = &cards[index];
            let lookup = ctx.lookup()?;
            let series = (!card.series.is_empty()).then_some(card.series.as_str());
            let candidates = rt.block_on(lookup.search(&card.name, series))?;
            if candidates.is_empty() {
                log::warn!("No images found for {} ({})", card.name, card.series);
                return Ok(());
            }
            for (i, candidate) in candidates.iter().enumerate() {
                log::info!(
                    "  {}. {} ({} favorites)",
                    i + 1,
                    candidate.display_name.if_supports_color(Stdout, |t| t.bold()),
                    candidate.favorites,
                );
                log::info!(
                    "     {}",
                    candidate.image_url.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            candidates[0].image_url.clone()
        }
    };

    if dry_run {
        log::info!("Dry run: {} not changed", describe(&cards[index]));
        return Ok(());
    }

    cards[index].image_url = chosen;
    rt.block_on(store.save(&cards))?;
    log::info!(
        "{} Image set for {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        describe(&cards[index]),
    );
    Ok(())
}

/// Retry the lookup for every card that still has no real image.
pub(crate) fn run_image_missing(ctx: &Context, dry_run: bool) -> Result<(), CliError> {
    let store = ctx.store();
    let rt = runtime()?;
    let mut cards = rt.block_on(store.load())?;

    let missing: Vec<Card> = cards.iter().filter(|card| card.needs_image()).cloned().collect();
    if missing.is_empty() {
        log::info!("Every card has an image.");
        return Ok(());
    }
    if dry_run {
        log::info!("{} cards need an image:", missing.len());
        for card in &missing {
            log::info!("  {}", describe(card));
        }
        return Ok(());
    }

    let lookup = ctx.lookup()?;
    let options = ctx.backfill_options(None);
    let progress = BarProgress::new(ctx.quiet);
    let stats = rt.block_on(backfill_images(&lookup, &mut cards, &missing, &options, &progress));
    progress.abandon();
    rt.block_on(store.save(&cards))?;

    log::info!(
        "{} Images: {} found, {} still missing",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.resolved,
        stats.placeholders,
    );
    Ok(())
}

fn describe(card: &Card) -> String {
    format!("{} ({} \u{00B7} {})", card.code, card.name, card.series)
}
