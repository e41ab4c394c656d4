//! CSV/TSV with a header row, as produced by Karuta's collection export and
//! by spreadsheets.

use csv::StringRecord;
use karuta_catalog::{Card, CardField, RawRecord, normalize, resolve_field};
use serde_json::Value;

use super::line_separator;

/// Build a reader over `text`. Rows may have any number of fields; the
/// header is read by hand so it can go through the alias table.
fn reader(text: &str, delimiter: char) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter as u8)
        .from_reader(text.as_bytes())
}

/// Tab when the header line has one, comma otherwise.
fn table_delimiter(text: &str) -> Option<char> {
    text.lines()
        .find(|line| !line.trim().is_empty())
        .map(line_separator)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// The non-blank rows of a table, header first. Malformed rows are skipped.
fn rows(text: &str) -> impl Iterator<Item = StringRecord> + '_ {
    let delimiter = table_delimiter(text).unwrap_or(',');
    reader(text, delimiter)
        .into_records()
        .filter_map(|row| match row {
            Ok(row) => Some(row),
            Err(e) => {
                log::warn!("Skipping malformed row: {e}");
                None
            }
        })
        .filter(|row| !is_blank(row))
}

/// Split one line into fields.
///
/// Double-quoted fields may contain the separator, and `""` inside quotes
/// is a literal quote. Empty fields are kept, including a trailing one, so
/// columns stay aligned with the header.
///
/// ```
/// use karuta_import::parse::tokenize_line;
///
/// assert_eq!(tokenize_line(r#"a,"b, c","say ""hi""","#), ["a", "b, c", "say \"hi\"", ""]);
/// assert_eq!(tokenize_line("a\t\tc"), ["a", "", "c"]);
/// ```
pub fn tokenize_line(line: &str) -> Vec<String> {
    match reader(line, line_separator(line)).records().next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        _ => vec![String::new()],
    }
}

fn header_name(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_lowercase()
}

/// Parse a table whose first non-empty row is the header.
///
/// The delimiter is picked once from the header line. Quoted fields may
/// span lines, so anything [`crate::export::export_csv`] writes reads back.
/// Header names go through the normal field alias table, so Karuta's own
/// export columns (`character`, `number`, `worker.effort`, ...) work as-is.
/// Columns that match no field are kept on the card as passthrough values.
/// Rows without a code are dropped.
pub fn parse_tabular(text: &str) -> Vec<Card> {
    let mut rows = rows(text);
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header.iter().map(header_name).collect();
    log::debug!("Tabular header: {:?}", headers);

    let mut cards = Vec::new();
    for row in rows {
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, value)| (header.clone(), Value::String(value.to_string())))
            .collect();

        let card = normalize(&record);
        if card.code.is_empty() || !card.is_valid() {
            log::trace!("Skipping row: {:?}", row);
            continue;
        }
        cards.push(card);
    }
    cards
}

/// Whether the first non-empty row names a `code` column.
pub(crate) fn has_code_header(text: &str) -> bool {
    rows(text)
        .next()
        .is_some_and(|header| {
            header
                .iter()
                .any(|h| resolve_field(&header_name(h)) == Some(CardField::Code))
        })
}

#[cfg(test)]
#[path = "../tests/tabular_tests.rs"]
mod tests;
