//! Import reconciliation for the card collection.
//!
//! Text in (chat pastes, CSV/TSV, JSON backups), cards out: this crate
//! parses a batch, classifies it against the stored collection, applies it
//! in persisted chunks, and fills in images for newly added cards.

pub mod backfill;
pub mod chunked;
pub mod detect;
pub mod diff;
pub mod error;
pub mod export;
pub mod merge;
pub mod parse;
pub mod progress;
pub mod session;

pub use backfill::{BackfillOptions, BackfillStats, backfill_images};
pub use chunked::{ChunkOptions, DEFAULT_CHUNK_SIZE, import_chunked};
pub use detect::{Confidence, FormatDetector, InputFormat, InputKind, ParsedInput, parse_input};
pub use diff::{CardKey, CollectionDiff, diff};
pub use error::ImportError;
pub use export::{export_csv, export_json};
pub use merge::{MergeMode, MergeModeParseError, MergeOutcome, MergeStats, merge};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use session::{ImportOptions, ImportReport, ImportSession};
