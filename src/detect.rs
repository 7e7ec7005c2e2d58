//! Source format detection.
//!
//! Detection looks only at the shape of the content, never at file names or
//! other metadata.

use serde::{Deserialize, Serialize};

/// RTF magic marker: `{\rtf`
const RTF_MAGIC: &str = "{\\rtf";

/// Format of a source document, inferred from its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// Rich Text Format
    Rtf,
    /// HTML fragment or document
    Html,
    /// Anything else
    PlainText,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Rtf => write!(f, "RTF"),
            SourceFormat::Html => write!(f, "HTML"),
            SourceFormat::PlainText => write!(f, "plain text"),
        }
    }
}

/// Check if content is RTF.
///
/// True iff the content, after leading whitespace, starts with `{\rtf`.
/// The match is case-sensitive.
///
/// # Example
/// ```
/// use rtfhtml::is_rtf;
///
/// assert!(is_rtf("  {\\rtf1\\ansi Text}"));
/// assert!(!is_rtf("<p>Text</p>"));
/// ```
pub fn is_rtf(content: &str) -> bool {
    !content.is_empty() && content.trim_start().starts_with(RTF_MAGIC)
}

/// Check if content is HTML.
///
/// True if the trimmed content starts with `<`, or if it contains `</`
/// anywhere. The second rule is deliberately loose: prose containing a
/// literal `</` is classified as HTML.
pub fn is_html(content: &str) -> bool {
    !content.is_empty() && (content.trim_start().starts_with('<') || content.contains("</"))
}

/// Classify content as RTF, HTML, or plain text.
///
/// RTF takes precedence, so an RTF document that happens to contain `</`
/// is still reported as RTF.
pub fn detect_format(content: &str) -> SourceFormat {
    if is_rtf(content) {
        SourceFormat::Rtf
    } else if is_html(content) {
        SourceFormat::Html
    } else {
        SourceFormat::PlainText
    }
}
