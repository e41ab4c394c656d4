//! Input format sniffing.
//!
//! Each format has a detector that rates how sure it is the input is in
//! its format. [`parse_input`] tries the formats most-confident first and
//! keeps the first one that produces any cards.

use karuta_catalog::Card;

use crate::error::ImportError;
use crate::parse::{parse_chat_paste, parse_delimited, parse_json, parse_tabular, tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    None,
    Possible,
    Certain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    ChatPaste,
    Tabular,
    Delimited,
}

impl InputFormat {
    /// All formats in priority order.
    pub const ALL: [InputFormat; 4] = [
        InputFormat::Json,
        InputFormat::ChatPaste,
        InputFormat::Tabular,
        InputFormat::Delimited,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputFormat::Json => "JSON",
            InputFormat::ChatPaste => "chat paste",
            InputFormat::Tabular => "table",
            InputFormat::Delimited => "delimited lines",
        }
    }

    pub fn parse(self, text: &str) -> Vec<Card> {
        match self {
            InputFormat::Json => parse_json(text),
            InputFormat::ChatPaste => parse_chat_paste(text),
            InputFormat::Tabular => parse_tabular(text),
            InputFormat::Delimited => parse_delimited(text),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rates whether some text is in one particular format.
pub trait FormatDetector {
    fn format(&self) -> InputFormat;
    fn detect(&self, text: &str) -> Confidence;
}

pub struct JsonDetector;

impl FormatDetector for JsonDetector {
    fn format(&self) -> InputFormat {
        InputFormat::Json
    }

    fn detect(&self, text: &str) -> Confidence {
        if text.trim_start().starts_with('[') {
            Confidence::Certain
        } else {
            Confidence::None
        }
    }
}

pub struct ChatPasteDetector;

impl FormatDetector for ChatPasteDetector {
    fn format(&self) -> InputFormat {
        InputFormat::ChatPaste
    }

    fn detect(&self, text: &str) -> Confidence {
        if text.contains('·') {
            Confidence::Certain
        } else if text.contains('.') {
            Confidence::Possible
        } else {
            Confidence::None
        }
    }
}

pub struct TabularDetector;

impl FormatDetector for TabularDetector {
    fn format(&self) -> InputFormat {
        InputFormat::Tabular
    }

    fn detect(&self, text: &str) -> Confidence {
        if tabular::has_code_header(text) {
            Confidence::Certain
        } else {
            Confidence::None
        }
    }
}

pub struct DelimitedDetector;

impl FormatDetector for DelimitedDetector {
    fn format(&self) -> InputFormat {
        InputFormat::Delimited
    }

    fn detect(&self, _text: &str) -> Confidence {
        Confidence::Possible
    }
}

/// Where the text came from. Files are never chat pastes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Paste,
    File,
}

/// The detectors for `kind`, in priority order.
pub fn detectors(kind: InputKind) -> Vec<Box<dyn FormatDetector>> {
    let mut list: Vec<Box<dyn FormatDetector>> = vec![Box::new(JsonDetector)];
    if kind == InputKind::Paste {
        list.push(Box::new(ChatPasteDetector));
    }
    list.push(Box::new(TabularDetector));
    list.push(Box::new(DelimitedDetector));
    list
}

/// Formats worth trying for `text`, most confident first. Ties keep
/// priority order.
pub fn candidate_formats(text: &str, kind: InputKind) -> Vec<(InputFormat, Confidence)> {
    let mut rated: Vec<(InputFormat, Confidence)> = detectors(kind)
        .iter()
        .map(|d| (d.format(), d.detect(text)))
        .filter(|(_, confidence)| *confidence > Confidence::None)
        .collect();
    rated.sort_by(|a, b| b.1.cmp(&a.1));
    rated
}

/// A parsed batch and the format it was read as.
#[derive(Debug, Clone)]
pub struct ParsedInput {
    pub format: InputFormat,
    pub cards: Vec<Card>,
}

/// Parse `text` with the first format that yields at least one card.
///
/// Candidates are tried by detection confidence, not in a fixed chat-first
/// order: a `Certain` match such as a table with a code header outranks a
/// `Possible` chat paste, so dotted URLs inside a CSV never turn into chat
/// cards. Formats with equal confidence keep their detection order.
pub fn parse_input(text: &str, kind: InputKind) -> Result<ParsedInput, ImportError> {
    for (format, confidence) in candidate_formats(text, kind) {
        let cards = format.parse(text);
        log::debug!("Tried {} ({:?}): {} cards", format, confidence, cards.len());
        if !cards.is_empty() {
            return Ok(ParsedInput { format, cards });
        }
    }
    Err(ImportError::NothingValid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_orders() {
        assert!(Confidence::Certain > Confidence::Possible);
        assert!(Confidence::Possible > Confidence::None);
    }

    #[test]
    fn csv_with_urls_is_not_read_as_chat() {
        let text = "code,name,imageUrl\nabc1,Rem,https://cdn.example/rem.jpg\n";
        let formats: Vec<InputFormat> = candidate_formats(text, InputKind::Paste)
            .into_iter()
            .map(|(f, _)| f)
            .collect();
        assert_eq!(
            formats,
            [InputFormat::Tabular, InputFormat::ChatPaste, InputFormat::Delimited]
        );
    }

    #[test]
    fn headered_table_wins_over_chat_paste() {
        let text = "code,name,imageUrl\nabc1,Rem,https://cdn.example/rem.jpg\n";
        let parsed = parse_input(text, InputKind::Paste).unwrap();
        assert_eq!(parsed.format, InputFormat::Tabular);
        assert_eq!(parsed.cards.len(), 1);
        assert_eq!(parsed.cards[0].image_url, "https://cdn.example/rem.jpg");
    }

    #[test]
    fn files_skip_chat_paste() {
        let formats: Vec<InputFormat> = candidate_formats("a·b", InputKind::File)
            .into_iter()
            .map(|(f, _)| f)
            .collect();
        assert_eq!(formats, [InputFormat::Delimited]);
    }

    #[test]
    fn json_wins_when_certain() {
        let rated = candidate_formats("[{\"code\":\"abc\"}]", InputKind::Paste);
        assert_eq!(rated[0], (InputFormat::Json, Confidence::Certain));
    }
}
