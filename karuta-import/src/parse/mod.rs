//! Text parsers turning pasted or exported card lists into [`Card`]s.
//!
//! Every parser is infallible: lines it cannot use are skipped (and logged
//! at trace level), and every card it returns is normalized and valid.
//!
//! [`Card`]: karuta_catalog::Card

pub mod chat;
pub mod delimited;
pub mod json;
pub(crate) mod tabular;

pub use chat::{parse_chat_line, parse_chat_paste};
pub use delimited::{parse_delimited, parse_delimited_line};
pub use json::parse_json;
pub use tabular::{parse_tabular, tokenize_line};

/// Tab when the line has one, comma otherwise.
pub(crate) fn line_separator(line: &str) -> char {
    if line.contains('\t') { '\t' } else { ',' }
}
