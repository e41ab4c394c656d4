//! Filtering and sorting a collection for display.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::types::Card;

/// Attribute a collection can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Code,
    Name,
    Series,
    Edition,
    Print,
    Quality,
    Tag,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Code,
        SortField::Name,
        SortField::Series,
        SortField::Edition,
        SortField::Print,
        SortField::Quality,
        SortField::Tag,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Code => "code",
            SortField::Name => "name",
            SortField::Series => "series",
            SortField::Edition => "edition",
            SortField::Print => "print",
            SortField::Quality => "quality",
            SortField::Tag => "tag",
        }
    }

    /// Compare two cards on this field. Text compares case-insensitively.
    pub fn compare(self, a: &Card, b: &Card) -> Ordering {
        let text = |x: &str, y: &str| x.to_lowercase().cmp(&y.to_lowercase());
        match self {
            SortField::Code => text(&a.code, &b.code),
            SortField::Name => text(&a.name, &b.name),
            SortField::Series => text(&a.series, &b.series),
            SortField::Edition => a.edition.cmp(&b.edition),
            SortField::Print => a.print.cmp(&b.print),
            SortField::Quality => filled_stars(&a.quality)
                .cmp(&filled_stars(&b.quality))
                .then_with(|| a.quality.cmp(&b.quality)),
            SortField::Tag => text(&a.tag, &b.tag),
        }
    }
}

fn filled_stars(quality: &str) -> usize {
    quality.chars().filter(|&c| c == '★').count()
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let lower = if lower == "number" { "print".to_string() } else { lower };
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == lower)
            .ok_or_else(|| CatalogError::UnknownSortField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(CatalogError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// A view over a collection: which cards to show and in what order.
///
/// An empty query matches every card and keeps collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardQuery {
    /// Case-insensitive substring matched against name, code and series.
    pub search: String,
    /// Case-insensitive substring of the tag. Cards without a tag never
    /// match a non-empty filter.
    pub tag: String,
    pub edition: Option<u32>,
    pub sort: Option<SortField>,
    pub direction: SortDirection,
}

impl CardQuery {
    pub fn matches(&self, card: &Card) -> bool {
        let search = self.search.trim().to_lowercase();
        let matches_search = search.is_empty()
            || card.name.to_lowercase().contains(&search)
            || card.code.to_lowercase().contains(&search)
            || card.series.to_lowercase().contains(&search);

        let tag = self.tag.trim().to_lowercase();
        let matches_tag =
            tag.is_empty() || (!card.tag.is_empty() && card.tag.to_lowercase().contains(&tag));

        let matches_edition = self.edition.is_none_or(|ed| card.edition == ed);

        matches_search && matches_tag && matches_edition
    }

    /// Return the matching cards, sorted. The sort is stable, so ties keep
    /// their collection order.
    pub fn apply(&self, cards: &[Card]) -> Vec<Card> {
        let mut result: Vec<Card> = cards.iter().filter(|c| self.matches(c)).cloned().collect();
        if let Some(field) = self.sort {
            result.sort_by(|a, b| {
                let ord = field.compare(a, b);
                match self.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        result
    }
}
