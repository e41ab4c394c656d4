//! Canonical card fields and the alias table that maps every accepted
//! spelling onto them.
//!
//! Records arrive from several places: Karuta's own CSV export (flat
//! lower-case headers and dotted `worker.*` columns), older JSON backups
//! (camelCase), and hand-written spreadsheets (snake_case, "character"
//! instead of "name"). All of them resolve through [`resolve_field`].

/// A field of [`crate::Card`] that the normalizer knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardField {
    Code,
    Name,
    Series,
    Edition,
    Print,
    Number,
    Quality,
    Tag,
    ImageUrl,
    ObtainedDate,
    ObtainedTimestamp,
    BurnValue,
    DyeCode,
    DyeName,
    Frame,
    Morphed,
    Trimmed,
    Alias,
    Wishlists,
    Fights,
    DropQuality,
    Dropper,
    Grabber,
    Guild,
    Source,
    WorkerEffort,
    WorkerStyle,
    WorkerPurity,
    WorkerGrabber,
    WorkerDropper,
    WorkerQuickness,
    WorkerToughness,
    WorkerVanity,
    WorkerWellness,
    WorkerStatus,
}

impl CardField {
    /// Every field, in export column order.
    pub const ALL: [CardField; 35] = [
        CardField::Code,
        CardField::Name,
        CardField::Series,
        CardField::Edition,
        CardField::Print,
        CardField::Number,
        CardField::Quality,
        CardField::Tag,
        CardField::ImageUrl,
        CardField::ObtainedDate,
        CardField::ObtainedTimestamp,
        CardField::BurnValue,
        CardField::DyeCode,
        CardField::DyeName,
        CardField::Frame,
        CardField::Morphed,
        CardField::Trimmed,
        CardField::Alias,
        CardField::Wishlists,
        CardField::Fights,
        CardField::DropQuality,
        CardField::Dropper,
        CardField::Grabber,
        CardField::Guild,
        CardField::Source,
        CardField::WorkerEffort,
        CardField::WorkerStyle,
        CardField::WorkerPurity,
        CardField::WorkerGrabber,
        CardField::WorkerDropper,
        CardField::WorkerQuickness,
        CardField::WorkerToughness,
        CardField::WorkerVanity,
        CardField::WorkerWellness,
        CardField::WorkerStatus,
    ];

    /// The serialized (camelCase) name of this field.
    pub fn canonical_name(self) -> &'static str {
        match self {
            CardField::Code => "code",
            CardField::Name => "name",
            CardField::Series => "series",
            CardField::Edition => "edition",
            CardField::Print => "print",
            CardField::Number => "number",
            CardField::Quality => "quality",
            CardField::Tag => "tag",
            CardField::ImageUrl => "imageUrl",
            CardField::ObtainedDate => "obtainedDate",
            CardField::ObtainedTimestamp => "obtainedTimestamp",
            CardField::BurnValue => "burnValue",
            CardField::DyeCode => "dyeCode",
            CardField::DyeName => "dyeName",
            CardField::Frame => "frame",
            CardField::Morphed => "morphed",
            CardField::Trimmed => "trimmed",
            CardField::Alias => "alias",
            CardField::Wishlists => "wishlists",
            CardField::Fights => "fights",
            CardField::DropQuality => "dropQuality",
            CardField::Dropper => "dropper",
            CardField::Grabber => "grabber",
            CardField::Guild => "guild",
            CardField::Source => "source",
            CardField::WorkerEffort => "workerEffort",
            CardField::WorkerStyle => "workerStyle",
            CardField::WorkerPurity => "workerPurity",
            CardField::WorkerGrabber => "workerGrabber",
            CardField::WorkerDropper => "workerDropper",
            CardField::WorkerQuickness => "workerQuickness",
            CardField::WorkerToughness => "workerToughness",
            CardField::WorkerVanity => "workerVanity",
            CardField::WorkerWellness => "workerWellness",
            CardField::WorkerStatus => "workerStatus",
        }
    }

    /// Fields holding opaque provenance/cosmetic data that merges carry verbatim.
    pub fn is_secondary(self) -> bool {
        !matches!(
            self,
            CardField::Code
                | CardField::Name
                | CardField::Series
                | CardField::Edition
                | CardField::Print
                | CardField::Number
                | CardField::Quality
                | CardField::Tag
                | CardField::ImageUrl
        )
    }
}

impl std::fmt::Display for CardField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Every accepted spelling, lower-cased, and the field it resolves to.
///
/// Canonical camelCase names appear here in lower-case form as well, so the
/// lookup is a single case-insensitive pass.
const FIELD_ALIASES: &[(&str, CardField)] = &[
    ("code", CardField::Code),
    ("cardcode", CardField::Code),
    ("card_code", CardField::Code),
    ("card code", CardField::Code),
    ("name", CardField::Name),
    ("character", CardField::Name),
    ("charactername", CardField::Name),
    ("character_name", CardField::Name),
    ("character name", CardField::Name),
    ("series", CardField::Series),
    ("seriesname", CardField::Series),
    ("series_name", CardField::Series),
    ("anime", CardField::Series),
    ("edition", CardField::Edition),
    ("ed", CardField::Edition),
    ("print", CardField::Print),
    ("printnumber", CardField::Print),
    ("print_number", CardField::Print),
    ("number", CardField::Number),
    ("no", CardField::Number),
    ("quality", CardField::Quality),
    ("condition", CardField::Quality),
    ("stars", CardField::Quality),
    ("tag", CardField::Tag),
    ("imageurl", CardField::ImageUrl),
    ("image_url", CardField::ImageUrl),
    ("image", CardField::ImageUrl),
    ("obtaineddate", CardField::ObtainedDate),
    ("obtained_date", CardField::ObtainedDate),
    ("obtainedtimestamp", CardField::ObtainedTimestamp),
    ("obtained_timestamp", CardField::ObtainedTimestamp),
    ("burnvalue", CardField::BurnValue),
    ("burn_value", CardField::BurnValue),
    ("dyecode", CardField::DyeCode),
    ("dye_code", CardField::DyeCode),
    ("dye.code", CardField::DyeCode),
    ("dyename", CardField::DyeName),
    ("dye_name", CardField::DyeName),
    ("dye.name", CardField::DyeName),
    ("frame", CardField::Frame),
    ("morphed", CardField::Morphed),
    ("trimmed", CardField::Trimmed),
    ("alias", CardField::Alias),
    ("wishlists", CardField::Wishlists),
    ("wishlist", CardField::Wishlists),
    ("fights", CardField::Fights),
    ("dropquality", CardField::DropQuality),
    ("drop_quality", CardField::DropQuality),
    ("dropper", CardField::Dropper),
    ("grabber", CardField::Grabber),
    ("guild", CardField::Guild),
    ("source", CardField::Source),
    ("workereffort", CardField::WorkerEffort),
    ("worker_effort", CardField::WorkerEffort),
    ("worker.effort", CardField::WorkerEffort),
    ("workerstyle", CardField::WorkerStyle),
    ("worker_style", CardField::WorkerStyle),
    ("worker.style", CardField::WorkerStyle),
    ("workerpurity", CardField::WorkerPurity),
    ("worker_purity", CardField::WorkerPurity),
    ("worker.purity", CardField::WorkerPurity),
    ("workergrabber", CardField::WorkerGrabber),
    ("worker_grabber", CardField::WorkerGrabber),
    ("worker.grabber", CardField::WorkerGrabber),
    ("workerdropper", CardField::WorkerDropper),
    ("worker_dropper", CardField::WorkerDropper),
    ("worker.dropper", CardField::WorkerDropper),
    ("workerquickness", CardField::WorkerQuickness),
    ("worker_quickness", CardField::WorkerQuickness),
    ("worker.quickness", CardField::WorkerQuickness),
    ("workertoughness", CardField::WorkerToughness),
    ("worker_toughness", CardField::WorkerToughness),
    ("worker.toughness", CardField::WorkerToughness),
    ("workervanity", CardField::WorkerVanity),
    ("worker_vanity", CardField::WorkerVanity),
    ("worker.vanity", CardField::WorkerVanity),
    ("workerwellness", CardField::WorkerWellness),
    ("worker_wellness", CardField::WorkerWellness),
    ("worker.wellness", CardField::WorkerWellness),
    ("workerstatus", CardField::WorkerStatus),
    ("worker_status", CardField::WorkerStatus),
    ("worker.status", CardField::WorkerStatus),
];

/// Resolve a record key to the field it names, ignoring case and
/// surrounding whitespace.
///
/// ```
/// use karuta_catalog::fields::{CardField, resolve_field};
///
/// assert_eq!(resolve_field("worker.effort"), Some(CardField::WorkerEffort));
/// assert_eq!(resolve_field("workerEffort"), Some(CardField::WorkerEffort));
/// assert_eq!(resolve_field(" Character "), Some(CardField::Name));
/// assert_eq!(resolve_field("rarity"), None);
/// ```
pub fn resolve_field(key: &str) -> Option<CardField> {
    let key = key.trim().to_lowercase();
    FIELD_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, field)| *field)
}

/// Whether `key` is the canonical spelling of `field` (case-insensitive).
pub fn is_canonical_key(key: &str, field: CardField) -> bool {
    key.trim().eq_ignore_ascii_case(field.canonical_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_name_resolves_to_itself() {
        for field in CardField::ALL {
            assert_eq!(resolve_field(field.canonical_name()), Some(field), "{field}");
        }
    }

    #[test]
    fn dotted_and_flat_worker_columns_agree() {
        assert_eq!(resolve_field("worker.toughness"), resolve_field("workerToughness"));
        assert_eq!(resolve_field("worker.status"), resolve_field("worker_status"));
    }

    #[test]
    fn export_headers_resolve() {
        assert_eq!(resolve_field("character"), Some(CardField::Name));
        assert_eq!(resolve_field("number"), Some(CardField::Number));
        assert_eq!(resolve_field("obtainedtimestamp"), Some(CardField::ObtainedTimestamp));
    }

    #[test]
    fn secondary_split() {
        assert!(!CardField::Quality.is_secondary());
        assert!(CardField::Guild.is_secondary());
        assert_eq!(CardField::ALL.iter().filter(|f| f.is_secondary()).count(), 26);
    }
}
