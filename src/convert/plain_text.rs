//! RTF to display-only plain text.

use super::{ConvertOptions, Transcoder};
use crate::detect::is_rtf;
use crate::error::Result;
use crate::parser::patterns::{RE_CONTROL_WORD, RE_WHITESPACE_RUN};
use crate::parser::{protect_escapes, restore_escapes};

/// Reduces RTF to its words.
///
/// Control words become spaces so adjacent words never join. Destination
/// groups are not removed, so font names from a font table show up in the
/// output.
#[derive(Debug, Default, Clone, Copy)]
pub struct RtfToPlainText;

impl Transcoder for RtfToPlainText {
    fn name(&self) -> &str {
        "rtf-to-text"
    }

    fn is_passthrough(&self, input: &str) -> bool {
        !is_rtf(input)
    }

    fn transcode(&self, rtf: &str, _options: &ConvertOptions) -> Result<String> {
        Ok(extract_words(rtf))
    }

    fn fallback(&self, rtf: &str, _options: &ConvertOptions) -> String {
        extract_words(rtf)
    }
}

fn extract_words(rtf: &str) -> String {
    let protected = protect_escapes(rtf);
    let text = RE_CONTROL_WORD.replace_all(&protected, " ");
    let text: String = text.chars().filter(|c| !matches!(c, '{' | '}')).collect();
    let text = RE_WHITESPACE_RUN.replace_all(&text, " ");
    restore_escapes(text.trim())
}
