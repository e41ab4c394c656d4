//! Data model types for the card collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::CardField;
use crate::normalize::normalize;

/// A loosely-typed record as produced by the parsers or read from JSON.
///
/// Keys may use any spelling known to [`crate::fields::resolve_field`];
/// anything else is carried through as a passthrough field.
pub type RawRecord = serde_json::Map<String, Value>;

/// Image reference assigned to cards whose image has not been resolved.
pub const PLACEHOLDER_IMAGE: &str = "assets/images/placeholder.png";

/// Marker written to exports in place of a missing or placeholder image.
pub const EXPORT_PLACEHOLDER: &str = "PLACEHOLDER";

/// Default for `name` and `series` when a record leaves them out.
pub const UNKNOWN: &str = "Unknown";

/// Shortest code a card may carry.
pub const MIN_CODE_LEN: usize = 3;

// ── Card ────────────────────────────────────────────────────────────────────

/// One collectible card, always in normalized form.
///
/// Deserialization runs through [`normalize`], so a `Card` read from JSON
/// has had defaults and coercions applied exactly like a parsed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawRecord")]
pub struct Card {
    pub code: String,
    pub name: String,
    pub series: String,
    pub edition: u32,
    /// Index within the edition's print run. Always equal to `number`.
    pub print: u64,
    /// Legacy spelling of `print`, kept populated for older readers.
    pub number: u64,
    pub quality: String,
    pub tag: String,
    pub image_url: String,

    pub obtained_date: String,
    pub obtained_timestamp: String,
    pub burn_value: String,
    pub dye_code: String,
    pub dye_name: String,
    pub frame: String,
    pub morphed: String,
    pub trimmed: String,
    pub alias: String,
    pub wishlists: String,
    pub fights: String,
    pub drop_quality: String,
    pub dropper: String,
    pub grabber: String,
    pub guild: String,
    pub source: String,
    pub worker_effort: String,
    pub worker_style: String,
    pub worker_purity: String,
    pub worker_grabber: String,
    pub worker_dropper: String,
    pub worker_quickness: String,
    pub worker_toughness: String,
    pub worker_vanity: String,
    pub worker_wellness: String,
    pub worker_status: String,

    /// Columns that matched no known field, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for Card {
    fn default() -> Self {
        normalize(&RawRecord::new())
    }
}

impl From<RawRecord> for Card {
    fn from(record: RawRecord) -> Self {
        normalize(&record)
    }
}

impl Card {
    /// Build a normalized card from the handful of fields every import carries.
    pub fn new(code: &str, name: &str, series: &str) -> Self {
        let mut record = RawRecord::new();
        record.insert("code".into(), Value::String(code.to_string()));
        record.insert("name".into(), Value::String(name.to_string()));
        record.insert("series".into(), Value::String(series.to_string()));
        normalize(&record)
    }

    /// Whether the card carries enough identity to be kept.
    pub fn is_valid(&self) -> bool {
        self.code.chars().count() >= MIN_CODE_LEN && !self.name.is_empty()
    }

    /// True when the card has no usable image and is eligible for lookup.
    pub fn needs_image(&self) -> bool {
        self.image_url.is_empty() || self.image_url == PLACEHOLDER_IMAGE
    }

    /// Set both print spellings at once.
    pub fn set_print(&mut self, print: u64) {
        self.print = print;
        self.number = print;
    }

    /// Flatten the card back into a plain record.
    ///
    /// `normalize(&card.to_record())` reproduces the card exactly.
    pub fn to_record(&self) -> RawRecord {
        let mut record = RawRecord::new();
        for field in CardField::ALL {
            record.insert(field.canonical_name().to_string(), self.field_value(field));
        }
        for (key, value) in &self.extra {
            record.insert(key.clone(), Value::String(value.clone()));
        }
        record
    }

    fn field_value(&self, field: CardField) -> Value {
        match field {
            CardField::Edition => Value::from(self.edition),
            CardField::Print => Value::from(self.print),
            CardField::Number => Value::from(self.number),
            other => Value::String(self.text(other).unwrap_or_default().to_string()),
        }
    }

    /// Read a text-valued field. Returns `None` for the numeric fields.
    pub fn text(&self, field: CardField) -> Option<&str> {
        let value = match field {
            CardField::Code => &self.code,
            CardField::Name => &self.name,
            CardField::Series => &self.series,
            CardField::Quality => &self.quality,
            CardField::Tag => &self.tag,
            CardField::ImageUrl => &self.image_url,
            CardField::Edition | CardField::Print | CardField::Number => return None,
            secondary => return self.secondary(secondary),
        };
        Some(value)
    }

    fn secondary(&self, field: CardField) -> Option<&str> {
        let value = match field {
            CardField::ObtainedDate => &self.obtained_date,
            CardField::ObtainedTimestamp => &self.obtained_timestamp,
            CardField::BurnValue => &self.burn_value,
            CardField::DyeCode => &self.dye_code,
            CardField::DyeName => &self.dye_name,
            CardField::Frame => &self.frame,
            CardField::Morphed => &self.morphed,
            CardField::Trimmed => &self.trimmed,
            CardField::Alias => &self.alias,
            CardField::Wishlists => &self.wishlists,
            CardField::Fights => &self.fights,
            CardField::DropQuality => &self.drop_quality,
            CardField::Dropper => &self.dropper,
            CardField::Grabber => &self.grabber,
            CardField::Guild => &self.guild,
            CardField::Source => &self.source,
            CardField::WorkerEffort => &self.worker_effort,
            CardField::WorkerStyle => &self.worker_style,
            CardField::WorkerPurity => &self.worker_purity,
            CardField::WorkerGrabber => &self.worker_grabber,
            CardField::WorkerDropper => &self.worker_dropper,
            CardField::WorkerQuickness => &self.worker_quickness,
            CardField::WorkerToughness => &self.worker_toughness,
            CardField::WorkerVanity => &self.worker_vanity,
            CardField::WorkerWellness => &self.worker_wellness,
            CardField::WorkerStatus => &self.worker_status,
            _ => return None,
        };
        Some(value)
    }

    /// Mutable access to one of the passthrough string attributes.
    pub fn secondary_mut(&mut self, field: CardField) -> Option<&mut String> {
        let slot = match field {
            CardField::ObtainedDate => &mut self.obtained_date,
            CardField::ObtainedTimestamp => &mut self.obtained_timestamp,
            CardField::BurnValue => &mut self.burn_value,
            CardField::DyeCode => &mut self.dye_code,
            CardField::DyeName => &mut self.dye_name,
            CardField::Frame => &mut self.frame,
            CardField::Morphed => &mut self.morphed,
            CardField::Trimmed => &mut self.trimmed,
            CardField::Alias => &mut self.alias,
            CardField::Wishlists => &mut self.wishlists,
            CardField::Fights => &mut self.fights,
            CardField::DropQuality => &mut self.drop_quality,
            CardField::Dropper => &mut self.dropper,
            CardField::Grabber => &mut self.grabber,
            CardField::Guild => &mut self.guild,
            CardField::Source => &mut self.source,
            CardField::WorkerEffort => &mut self.worker_effort,
            CardField::WorkerStyle => &mut self.worker_style,
            CardField::WorkerPurity => &mut self.worker_purity,
            CardField::WorkerGrabber => &mut self.worker_grabber,
            CardField::WorkerDropper => &mut self.worker_dropper,
            CardField::WorkerQuickness => &mut self.worker_quickness,
            CardField::WorkerToughness => &mut self.worker_toughness,
            CardField::WorkerVanity => &mut self.worker_vanity,
            CardField::WorkerWellness => &mut self.worker_wellness,
            CardField::WorkerStatus => &mut self.worker_status,
            _ => return None,
        };
        Some(slot)
    }
}
