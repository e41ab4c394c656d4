//! Card identity.

use std::fmt;

use crate::types::Card;

/// Composite identity of a card: `code_name_series`, all lower-cased.
///
/// Two cards with the same code but a different name or series are
/// different cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardKey(String);

impl CardKey {
    pub fn of(card: &Card) -> Self {
        Self::from_parts(&card.code, &card.name, &card.series)
    }

    pub fn from_parts(code: &str, name: &str, series: &str) -> Self {
        CardKey(format!(
            "{}_{}_{}",
            code.to_lowercase(),
            name.to_lowercase(),
            series.to_lowercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
