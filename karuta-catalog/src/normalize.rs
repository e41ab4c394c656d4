//! Turn loosely-typed records into canonical cards.
//!
//! Normalization never fails: missing fields get defaults, malformed numbers
//! parse to 0 (or 1 for the edition), and unknown keys are kept as
//! passthrough fields.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::fields::{CardField, is_canonical_key, resolve_field};
use crate::quality::normalize_quality;
use crate::types::{Card, EXPORT_PLACEHOLDER, RawRecord, UNKNOWN};

/// Parse an integer the forgiving way: leading whitespace and a sign are
/// skipped, then as many digits as are present are read. Anything that does
/// not start with a digit is 0, and negative numbers clamp to 0.
///
/// ```
/// use karuta_catalog::normalize::parse_lenient_int;
///
/// assert_eq!(parse_lenient_int("42"), 42);
/// assert_eq!(parse_lenient_int(" 12abc"), 12);
/// assert_eq!(parse_lenient_int("50.9"), 50);
/// assert_eq!(parse_lenient_int("-3"), 0);
/// assert_eq!(parse_lenient_int("n/a"), 0);
/// ```
pub fn parse_lenient_int(input: &str) -> u64 {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(0)
}

/// Render a JSON value as the text the normalizer works with.
/// `null` counts as absent.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// A resolved value and whether it came from the field's canonical key.
struct Slot {
    text: String,
    canonical: bool,
}

/// Collect record values by field, letting canonical keys win over aliases
/// and non-empty values win over empty ones.
fn collect_fields(record: &RawRecord) -> (HashMap<CardField, Slot>, BTreeMap<String, String>) {
    let mut fields: HashMap<CardField, Slot> = HashMap::new();
    let mut extra = BTreeMap::new();

    for (key, value) in record {
        let Some(text) = value_text(value) else {
            continue;
        };
        let Some(field) = resolve_field(key) else {
            let key = key.trim();
            if !key.is_empty() {
                extra.insert(key.to_string(), text);
            }
            continue;
        };
        let canonical = is_canonical_key(key, field);
        match fields.get(&field) {
            Some(slot) => {
                let upgrade = !text.is_empty() && (slot.text.is_empty() || (canonical && !slot.canonical));
                if upgrade {
                    fields.insert(field, Slot { text, canonical });
                }
            }
            None => {
                fields.insert(field, Slot { text, canonical });
            }
        }
    }

    (fields, extra)
}

fn field_text(fields: &HashMap<CardField, Slot>, field: CardField) -> &str {
    fields.get(&field).map(|slot| slot.text.as_str()).unwrap_or("")
}

/// Build a canonical [`Card`] from any partial record.
///
/// * `code` is lower-cased; `name` and `series` default to "Unknown".
/// * `print` and `number` are the same attribute: `print` wins when both are
///   set, and both end up holding the result.
/// * `edition` is at least 1.
/// * `quality` goes through [`normalize_quality`].
/// * The export placeholder marker in `imageUrl` reads back as "no image".
pub fn normalize(record: &RawRecord) -> Card {
    let (fields, extra) = collect_fields(record);
    let text = |field: CardField| field_text(&fields, field);
    let or_unknown = |value: &str| -> String {
        if value.is_empty() {
            UNKNOWN.to_string()
        } else {
            value.to_string()
        }
    };

    let print = match (text(CardField::Print), text(CardField::Number)) {
        (print, _) if !print.is_empty() => parse_lenient_int(print),
        (_, number) if !number.is_empty() => parse_lenient_int(number),
        _ => 0,
    };

    let edition = match u32::try_from(parse_lenient_int(text(CardField::Edition))) {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    };

    let image_url = match text(CardField::ImageUrl) {
        EXPORT_PLACEHOLDER => String::new(),
        url => url.to_string(),
    };

    let mut card = Card {
        code: text(CardField::Code).to_lowercase(),
        name: or_unknown(text(CardField::Name)),
        series: or_unknown(text(CardField::Series)),
        edition,
        print,
        number: print,
        quality: normalize_quality(text(CardField::Quality)),
        tag: text(CardField::Tag).to_string(),
        image_url,
        obtained_date: String::new(),
        obtained_timestamp: String::new(),
        burn_value: String::new(),
        dye_code: String::new(),
        dye_name: String::new(),
        frame: String::new(),
        morphed: String::new(),
        trimmed: String::new(),
        alias: String::new(),
        wishlists: String::new(),
        fights: String::new(),
        drop_quality: String::new(),
        dropper: String::new(),
        grabber: String::new(),
        guild: String::new(),
        source: String::new(),
        worker_effort: String::new(),
        worker_style: String::new(),
        worker_purity: String::new(),
        worker_grabber: String::new(),
        worker_dropper: String::new(),
        worker_quickness: String::new(),
        worker_toughness: String::new(),
        worker_vanity: String::new(),
        worker_wellness: String::new(),
        worker_status: String::new(),
        extra,
    };

    for field in CardField::ALL.into_iter().filter(|f| f.is_secondary()) {
        if let Some(slot) = card.secondary_mut(field) {
            slot.push_str(text(field));
        }
    }

    card
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
