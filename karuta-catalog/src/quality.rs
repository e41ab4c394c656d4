//! Card condition ratings.
//!
//! Karuta shows condition as four stars. Inputs arrive as those stars, as
//! the words the bot uses ("mint", "poor", ...), or as the 0–4 score found in
//! the CSV export. Everything is folded into the star form.

/// The five canonical star strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QualityTier {
    Damaged,
    Poor,
    Good,
    Excellent,
    Mint,
}

/// Tier used for missing or unrecognized quality input.
pub const DEFAULT_QUALITY: QualityTier = QualityTier::Poor;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

impl QualityTier {
    pub const ALL: [QualityTier; 5] = [
        QualityTier::Damaged,
        QualityTier::Poor,
        QualityTier::Good,
        QualityTier::Excellent,
        QualityTier::Mint,
    ];

    pub fn stars(self) -> &'static str {
        match self {
            QualityTier::Damaged => "☆☆☆☆",
            QualityTier::Poor => "★☆☆☆",
            QualityTier::Good => "★★☆☆",
            QualityTier::Excellent => "★★★☆",
            QualityTier::Mint => "★★★★",
        }
    }

    /// Map the 0–4 export score. 0 and 1 share the lowest scored tier.
    pub fn from_score(score: i64) -> Option<Self> {
        match score {
            0 | 1 => Some(QualityTier::Poor),
            2 => Some(QualityTier::Good),
            3 => Some(QualityTier::Excellent),
            4 => Some(QualityTier::Mint),
            _ => None,
        }
    }

    /// Look up one of the condition words used by the bot.
    pub fn from_synonym(word: &str) -> Option<Self> {
        match word.trim().to_lowercase().as_str() {
            "damaged" => Some(QualityTier::Damaged),
            "poor" => Some(QualityTier::Poor),
            "good" => Some(QualityTier::Good),
            "excellent" => Some(QualityTier::Excellent),
            "mint" => Some(QualityTier::Mint),
            _ => None,
        }
    }

    /// Recognize one of the canonical star strings.
    pub fn from_stars(stars: &str) -> Option<Self> {
        QualityTier::ALL
            .into_iter()
            .find(|tier| tier.stars() == stars.trim())
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.stars())
    }
}

/// Fold any quality input into its star representation.
///
/// Input that already contains a star glyph is treated as canonical and
/// returned trimmed but otherwise untouched (the bot sometimes shows fewer
/// than four stars). Otherwise the synonym table is consulted, then the
/// numeric score, and anything left falls back to [`DEFAULT_QUALITY`].
///
/// ```
/// use karuta_catalog::quality::normalize_quality;
///
/// assert_eq!(normalize_quality("★★★"), "★★★");
/// assert_eq!(normalize_quality("Mint"), "★★★★");
/// assert_eq!(normalize_quality("2"), "★★☆☆");
/// assert_eq!(normalize_quality("shiny"), "★☆☆☆");
/// ```
pub fn normalize_quality(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.contains(FILLED_STAR) || trimmed.contains(EMPTY_STAR) {
        return trimmed.to_string();
    }
    if let Some(tier) = QualityTier::from_synonym(trimmed) {
        return tier.stars().to_string();
    }
    trimmed
        .parse::<i64>()
        .ok()
        .and_then(QualityTier::from_score)
        .unwrap_or(DEFAULT_QUALITY)
        .stars()
        .to_string()
}

#[cfg(test)]
#[path = "tests/quality_tests.rs"]
mod tests;
