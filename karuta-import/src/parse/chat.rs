//! Card lines copied from the bot's collection view in Discord:
//!
//! ```text
//! 🔥 `k1a2` · `★★★☆` · `#50` · `◈2` · Re:Zero · **Rem**
//! ```
//!
//! A leading emoji is the user's tag. The bot's neutral filler glyph `▪`
//! marks an untagged card.

use karuta_catalog::{Card, CardField, RawRecord, normalize};
use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

const MIN_TOKENS: usize = 6;
const NEUTRAL_TAG: &str = "▪";
const VARIATION_SELECTOR: char = '\u{FE0F}';
const EDITION_MARKS: [char; 3] = ['◈', '◊', '⧫'];

/// Whether a grapheme cluster is an emoji-like pictograph.
fn is_pictographic(grapheme: &str) -> bool {
    if grapheme.contains('\u{20E3}') || grapheme.contains(VARIATION_SELECTOR) {
        return true;
    }
    let Some(first) = grapheme.chars().next() else {
        return false;
    };
    matches!(
        u32::from(first),
        0x00A9 | 0x00AE | 0x203C | 0x2049 | 0x2122 | 0x2139
            | 0x2190..=0x21FF
            | 0x2300..=0x23FF
            | 0x24C2
            | 0x25A0..=0x25FF
            | 0x2600..=0x27BF
            | 0x2934..=0x2935
            | 0x2B00..=0x2BFF
            | 0x3030 | 0x303D | 0x3297 | 0x3299
            | 0x1F000..=0x1FAFF
    )
}

/// Remove a leading pictograph and return it with the rest of the line.
fn split_leading_emoji(line: &str) -> (Option<&str>, &str) {
    let trimmed = line.trim_start();
    match trimmed.graphemes(true).next() {
        Some(first) if is_pictographic(first) => (Some(first), &trimmed[first.len()..]),
        _ => (None, trimmed),
    }
}

fn clean_token(token: &str) -> String {
    token.replace("**", "").replace('`', "").trim().to_string()
}

/// Parse one chat line into a card.
///
/// Tokens are separated by `·`, or by `.` on lines without a `·`, and must
/// number at least six:
/// code, quality, print, edition, series, then the character name (a name
/// that itself contains the separator is joined back with single spaces).
///
/// ```
/// use karuta_import::parse::parse_chat_line;
///
/// let card = parse_chat_line("🔥k1a2·★★★·#50·◈2·Re:Zero·Rem").unwrap();
/// assert_eq!(card.tag, "🔥");
/// assert_eq!(card.edition, 2);
/// assert!(parse_chat_line("k1a2·★★★·#50").is_none());
/// ```
pub fn parse_chat_line(line: &str) -> Option<Card> {
    let (emoji, rest) = split_leading_emoji(line);
    let tag = emoji
        .filter(|e| e.trim_end_matches(VARIATION_SELECTOR) != NEUTRAL_TAG)
        .unwrap_or("");

    let separator = if rest.contains('·') { '·' } else { '.' };
    let tokens: Vec<String> = rest
        .split(separator)
        .map(clean_token)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() < MIN_TOKENS {
        return None;
    }

    let code: String = tokens[0]
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    let print = tokens[2].trim_start_matches('#');
    let edition = tokens[3].trim_start_matches(EDITION_MARKS);
    let name = tokens[5..].join(" ");
    if code.is_empty() || name.is_empty() {
        return None;
    }

    let mut record = RawRecord::new();
    let mut put = |field: CardField, value: &str| {
        record.insert(field.canonical_name().to_string(), Value::String(value.to_string()));
    };
    put(CardField::Code, &code);
    put(CardField::Quality, &tokens[1]);
    put(CardField::Print, print);
    put(CardField::Edition, edition);
    put(CardField::Series, &tokens[4]);
    put(CardField::Name, &name);
    put(CardField::Tag, tag);

    let card = normalize(&record);
    card.is_valid().then_some(card)
}

pub fn parse_chat_paste(text: &str) -> Vec<Card> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            log::trace!("Parsing line: {}", line);
            let card = parse_chat_line(line);
            if card.is_none() {
                log::trace!("Skipping line: {}", line);
            }
            card
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/chat_tests.rs"]
mod tests;
