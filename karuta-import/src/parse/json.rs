use karuta_catalog::{Card, normalize};
use serde_json::Value;

/// Read a JSON array of card objects, such as a previous export.
///
/// Non-object entries and invalid cards are skipped. Text that is not a
/// JSON array at all yields no cards.
pub fn parse_json(text: &str) -> Vec<Card> {
    let entries: Vec<Value> = match serde_json::from_str(text.trim()) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Input is not a JSON array: {}", e);
            return Vec::new();
        }
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(record) => Some(normalize(record)),
            other => {
                log::trace!("Skipping non-object entry: {}", other);
                None
            }
        })
        .filter(Card::is_valid)
        .collect()
}
