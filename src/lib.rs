//! # rtfhtml
//!
//! RTF and HTML conversion for rich-text document editors.
//!
//! Documents are stored as RTF and edited as HTML. This library converts
//! between the two, and reduces RTF to plain text for previews. Conversions
//! are total: malformed input yields best-effort output in the target format
//! instead of an error.
//!
//! ## Quick Start
//!
//! ```
//! use rtfhtml::{html_to_rtf, rtf_to_html, rtf_to_plain_text};
//!
//! let html = rtf_to_html("{\\rtf1\\ansi\\deff0 \\b Bold text \\i Italic text}");
//! assert_eq!(html, "<div><strong>Bold text </strong><em>Italic text</em></div>");
//!
//! let rtf = html_to_rtf("<p><strong>Bold text</strong></p>");
//! assert!(rtf.starts_with("{\\rtf1\\ansi\\deff0"));
//!
//! let text = rtf_to_plain_text("{\\rtf1 \\b Hello\\b0  world}");
//! assert_eq!(text, "Hello world");
//! ```
//!
//! ## Features
//!
//! - **Format detection**: RTF, HTML or plain text by content shape
//! - **Fallback extraction**: malformed documents still produce viewable text
//! - **Formatting runs**: a structured view of bold, italic, underline and size
//! - **Batch conversion**: uses Rayon to convert many documents at once
//! - **C ABI**: optional `ffi` feature for embedding in other runtimes

pub mod convert;
pub mod detect;
pub mod error;
pub mod inspect;
pub mod model;
pub mod parser;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use convert::{
    Conversion, ConvertOptions, Direction, ErrorMode, HtmlToRtf, LineEnding, Outcome,
    RtfToHtml, RtfToPlainText, Transcoder,
};
pub use detect::{detect_format, is_html, is_rtf, SourceFormat};
pub use error::{Error, Result};
pub use inspect::{inspect, to_json, DocumentInfo, JsonFormat, RunStats};
pub use model::{FormattingRun, TextStyle};
pub use parser::parse_runs;

use rayon::prelude::*;

/// Convert RTF to HTML.
///
/// Non-RTF input is returned unchanged. Malformed RTF yields a single
/// `<p>` holding whatever text could be recovered.
///
/// # Example
///
/// ```
/// use rtfhtml::rtf_to_html;
///
/// assert_eq!(rtf_to_html("{\\rtf1 \\b Hi}"), "<div><strong>Hi</strong></div>");
/// assert_eq!(rtf_to_html("{\\rtf1"), "<p></p>");
/// assert_eq!(rtf_to_html("<p>x</p>"), "<p>x</p>");
/// ```
pub fn rtf_to_html(rtf: &str) -> String {
    convert::convert(Direction::RtfToHtml, rtf)
}

/// Convert HTML to RTF.
///
/// Input that already looks like RTF is returned unchanged.
///
/// # Example
///
/// ```
/// use rtfhtml::html_to_rtf;
///
/// let rtf = html_to_rtf("<strong>Bold text</strong>");
/// assert!(rtf.contains("\\b Bold text\\b0 "));
/// assert!(rtf.ends_with('}'));
/// ```
pub fn html_to_rtf(html: &str) -> String {
    convert::convert(Direction::HtmlToRtf, html)
}

/// Reduce RTF to space-separated words.
///
/// # Example
///
/// ```
/// use rtfhtml::rtf_to_plain_text;
///
/// let text = rtf_to_plain_text("{\\rtf1\\ansi\\deff0 \\b Bold \\i Italic \\ul Underline}");
/// assert_eq!(text, "Bold Italic Underline");
/// ```
pub fn rtf_to_plain_text(rtf: &str) -> String {
    convert::convert(Direction::RtfToText, rtf)
}

/// Convert a single document in the given direction.
pub fn convert(direction: Direction, input: &str) -> String {
    convert::convert(direction, input)
}

/// Convert many documents, preserving input order.
///
/// # Example
///
/// ```
/// use rtfhtml::{convert_batch, Direction};
///
/// let out = convert_batch(Direction::RtfToText, &["{\\rtf1 one}", "{\\rtf1 two}"]);
/// assert_eq!(out, vec!["one", "two"]);
/// ```
pub fn convert_batch<S: AsRef<str> + Sync>(direction: Direction, inputs: &[S]) -> Vec<String> {
    Converter::new().convert_batch(direction, inputs)
}

/// Builder for configured conversions.
///
/// # Example
///
/// ```
/// use rtfhtml::{Converter, LineEnding};
///
/// let rtf = Converter::new()
///     .with_line_ending(LineEnding::CrLf)
///     .with_entity_decoding(true)
///     .html_to_rtf("<p>Fish &amp; chips</p>");
/// assert!(rtf.contains("\\pard Fish & chips\\par\r\n"));
///
/// let err = Converter::new().strict().try_rtf_to_html("{\\rtf1");
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a new converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter from existing options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Fall back to plain text extraction on failure.
    pub fn lenient(mut self) -> Self {
        self.options = self.options.lenient();
        self
    }

    /// Surface structured-conversion errors from the `try_*` methods.
    pub fn strict(mut self) -> Self {
        self.options = self.options.strict();
        self
    }

    /// Set the line ending used in RTF output.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.options = self.options.with_line_ending(line_ending);
        self
    }

    /// Decode HTML character references before writing RTF.
    pub fn with_entity_decoding(mut self, decode: bool) -> Self {
        self.options = self.options.with_entity_decoding(decode);
        self
    }

    /// Disable parallel batch conversion.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Get the options in effect.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert, always returning a string.
    pub fn convert(&self, direction: Direction, input: &str) -> String {
        convert::convert_with_options(direction, input, &self.options)
    }

    /// Convert and report how the output was produced.
    ///
    /// Returns an error only in strict mode.
    pub fn try_convert(&self, direction: Direction, input: &str) -> Result<Conversion> {
        convert::transcode(direction.transcoder(), input, &self.options)
    }

    /// Convert RTF to HTML.
    pub fn rtf_to_html(&self, rtf: &str) -> String {
        self.convert(Direction::RtfToHtml, rtf)
    }

    /// Convert HTML to RTF.
    pub fn html_to_rtf(&self, html: &str) -> String {
        self.convert(Direction::HtmlToRtf, html)
    }

    /// Reduce RTF to plain text.
    pub fn rtf_to_plain_text(&self, rtf: &str) -> String {
        self.convert(Direction::RtfToText, rtf)
    }

    /// Convert RTF to HTML, honouring the error mode.
    pub fn try_rtf_to_html(&self, rtf: &str) -> Result<String> {
        self.try_convert(Direction::RtfToHtml, rtf)
            .map(Conversion::into_content)
    }

    /// Convert HTML to RTF, honouring the error mode.
    pub fn try_html_to_rtf(&self, html: &str) -> Result<String> {
        self.try_convert(Direction::HtmlToRtf, html)
            .map(Conversion::into_content)
    }

    /// Convert many documents, preserving input order.
    pub fn convert_batch<S: AsRef<str> + Sync>(
        &self,
        direction: Direction,
        inputs: &[S],
    ) -> Vec<String> {
        log::debug!(
            "Converting {} documents ({}, parallel: {})",
            inputs.len(),
            direction,
            self.options.parallel
        );

        if self.options.parallel {
            inputs
                .par_iter()
                .map(|input| self.convert(direction, input.as_ref()))
                .collect()
        } else {
            inputs
                .iter()
                .map(|input| self.convert(direction, input.as_ref()))
                .collect()
        }
    }
}
