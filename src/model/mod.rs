//! Document model types.
//!
//! The converters work on strings directly; the model gives callers a
//! structured view of the same content for inspection and testing.

mod run;

pub use run::{FormattingRun, TextStyle};
