//! One card per line, columns in a fixed order:
//! `code, name, series, edition, print, quality, tag`.

use karuta_catalog::{Card, CardField, RawRecord, normalize};
use serde_json::Value;

use super::line_separator;

const COLUMNS: [CardField; 7] = [
    CardField::Code,
    CardField::Name,
    CardField::Series,
    CardField::Edition,
    CardField::Print,
    CardField::Quality,
    CardField::Tag,
];

/// Parse one positional line. Empty tokens are dropped before columns are
/// assigned, and at least a code and a name are required.
///
/// ```
/// use karuta_import::parse::parse_delimited_line;
///
/// let card = parse_delimited_line("k1a2,Rem,Re:Zero,2,50,★★★,waifu").unwrap();
/// assert_eq!(card.code, "k1a2");
/// assert_eq!(card.print, 50);
/// assert!(parse_delimited_line("lonely").is_none());
/// ```
pub fn parse_delimited_line(line: &str) -> Option<Card> {
    let tokens: Vec<&str> = line
        .split(line_separator(line))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() < 2 {
        return None;
    }

    let record: RawRecord = COLUMNS
        .iter()
        .zip(&tokens)
        .map(|(field, token)| (field.canonical_name().to_string(), Value::String(token.to_string())))
        .collect();
    let card = normalize(&record);
    card.is_valid().then_some(card)
}

pub fn parse_delimited(text: &str) -> Vec<Card> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let card = parse_delimited_line(line);
            if card.is_none() {
                log::trace!("Skipping line: {}", line);
            }
            card
        })
        .collect()
}
