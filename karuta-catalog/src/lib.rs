//! Card collection data model, field normalization, and collection queries.
//!
//! This crate defines the canonical `Card` record without any storage or
//! network dependencies. Every card that leaves a parser goes through
//! [`normalize`], so consumers can rely on defaults being applied.

pub mod command;
pub mod error;
pub mod fields;
pub mod key;
pub mod normalize;
pub mod quality;
pub mod query;
pub mod types;

pub use command::{CommandKind, format_bot_command};
pub use error::CatalogError;
pub use fields::{CardField, resolve_field};
pub use key::CardKey;
pub use normalize::{normalize, parse_lenient_int};
pub use quality::{DEFAULT_QUALITY, QualityTier, normalize_quality};
pub use query::{CardQuery, SortDirection, SortField};
pub use types::*;
