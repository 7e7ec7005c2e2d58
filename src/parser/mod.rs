//! RTF and HTML scanning.
//!
//! The converters are substitution pipelines; this module holds the pieces
//! they share: compiled patterns, escape protection, brace-group scanning,
//! entity decoding and the formatting-run parser.

mod entities;
mod escape;
mod groups;
pub(crate) mod patterns;
mod runs;

pub(crate) use entities::decode_entities;
pub(crate) use escape::{escape_rtf_text, protect_escapes, restore_escapes};
pub(crate) use groups::{check_balance, strip_destinations};
pub use runs::parse_runs;
