//! Write the collection back out as JSON or CSV.
//!
//! Both formats mark cards without a real image with `PLACEHOLDER` and read
//! back in through the regular parsers.

use std::collections::BTreeSet;
use std::io::Write;

use karuta_catalog::{Card, CardField, EXPORT_PLACEHOLDER};

use crate::error::ImportError;

fn export_image(card: &Card) -> &str {
    if card.needs_image() {
        EXPORT_PLACEHOLDER
    } else {
        &card.image_url
    }
}

/// Pretty-printed JSON array of cards.
pub fn export_json<W: Write>(cards: &[Card], writer: W) -> Result<(), ImportError> {
    let exported: Vec<Card> = cards
        .iter()
        .map(|card| {
            let mut card = card.clone();
            card.image_url = export_image(&card).to_string();
            card
        })
        .collect();
    serde_json::to_writer_pretty(writer, &exported)?;
    Ok(())
}

/// CSV with a camelCase header row. Passthrough columns follow the known
/// fields, in name order.
pub fn export_csv<W: Write>(cards: &[Card], writer: W) -> Result<(), ImportError> {
    let extra_columns: BTreeSet<&str> = cards
        .iter()
        .flat_map(|card| card.extra.keys().map(String::as_str))
        .collect();

    let mut out = csv::Writer::from_writer(writer);
    let header = CardField::ALL
        .iter()
        .map(|field| field.canonical_name())
        .chain(extra_columns.iter().copied());
    out.write_record(header)?;

    for card in cards {
        let mut row: Vec<String> = CardField::ALL
            .iter()
            .map(|&field| match field {
                CardField::Edition => card.edition.to_string(),
                CardField::Print => card.print.to_string(),
                CardField::Number => card.number.to_string(),
                CardField::ImageUrl => export_image(card).to_string(),
                other => card.text(other).unwrap_or_default().to_string(),
            })
            .collect();
        row.extend(
            extra_columns
                .iter()
                .map(|column| card.extra.get(*column).cloned().unwrap_or_default()),
        );
        out.write_record(&row)?;
    }
    out.flush()?;
    Ok(())
}
