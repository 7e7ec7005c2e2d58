//! Conversion between RTF, HTML and plain text.
//!
//! Each direction is handled by a [`Transcoder`]. A conversion is a two-phase
//! attempt: the structured transform runs first, and if it reports an error
//! the transcoder's fallback produces best-effort output in the target format.
//!
//! # Example
//!
//! ```
//! use rtfhtml::convert::{transcode, ConvertOptions, Outcome, RtfToHtml};
//!
//! let conversion = transcode(&RtfToHtml, "{\\rtf1", &ConvertOptions::default()).unwrap();
//! assert_eq!(conversion.outcome(), Outcome::Fallback);
//! assert_eq!(conversion.content(), "<p></p>");
//! ```

mod fallback;
mod html_to_rtf;
mod options;
mod plain_text;
mod rtf_to_html;

pub use html_to_rtf::HtmlToRtf;
pub use options::{ConvertOptions, ErrorMode, LineEnding};
pub use plain_text::RtfToPlainText;
pub use rtf_to_html::RtfToHtml;

use crate::detect::SourceFormat;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// RTF to HTML for display in the editor
    RtfToHtml,
    /// HTML from the editor to RTF for storage
    HtmlToRtf,
    /// RTF to display-only plain text
    RtfToText,
}

impl Direction {
    /// Format the direction converts from.
    pub fn source(&self) -> SourceFormat {
        match self {
            Direction::RtfToHtml | Direction::RtfToText => SourceFormat::Rtf,
            Direction::HtmlToRtf => SourceFormat::Html,
        }
    }

    /// Format the direction converts to.
    pub fn target(&self) -> SourceFormat {
        match self {
            Direction::RtfToHtml => SourceFormat::Html,
            Direction::HtmlToRtf => SourceFormat::Rtf,
            Direction::RtfToText => SourceFormat::PlainText,
        }
    }

    /// The transcoder handling this direction.
    pub fn transcoder(&self) -> &'static dyn Transcoder {
        match self {
            Direction::RtfToHtml => &RtfToHtml,
            Direction::HtmlToRtf => &HtmlToRtf,
            Direction::RtfToText => &RtfToPlainText,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}

/// How a conversion produced its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Input was empty or already in the target shape and returned unchanged
    Passthrough,
    /// The structured transform succeeded
    Structured,
    /// The structured transform failed and best-effort extraction was used
    Fallback,
}

/// Result of a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Input returned unchanged.
    Passthrough(String),
    /// Output of the structured transform.
    Structured(String),
    /// Output of the fallback extraction.
    Fallback {
        /// Converted content
        content: String,
        /// Why the structured transform was abandoned
        reason: String,
    },
}

impl Conversion {
    /// The converted content.
    pub fn content(&self) -> &str {
        match self {
            Conversion::Passthrough(content) | Conversion::Structured(content) => content,
            Conversion::Fallback { content, .. } => content,
        }
    }

    /// Consume the conversion and return its content.
    pub fn into_content(self) -> String {
        match self {
            Conversion::Passthrough(content) | Conversion::Structured(content) => content,
            Conversion::Fallback { content, .. } => content,
        }
    }

    /// Which path produced the content.
    pub fn outcome(&self) -> Outcome {
        match self {
            Conversion::Passthrough(_) => Outcome::Passthrough,
            Conversion::Structured(_) => Outcome::Structured,
            Conversion::Fallback { .. } => Outcome::Fallback,
        }
    }

    /// Check if the fallback path was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Conversion::Fallback { .. })
    }
}

/// Trait for a single conversion direction.
pub trait Transcoder: Send + Sync {
    /// Get the name of this transcoder.
    fn name(&self) -> &str;

    /// Whether the input should be returned unchanged.
    fn is_passthrough(&self, input: &str) -> bool;

    /// Run the structured transform.
    fn transcode(&self, input: &str, options: &ConvertOptions) -> Result<String>;

    /// Best-effort output used when [`transcode`](Transcoder::transcode) fails.
    ///
    /// Must always produce syntactically valid output in the target format.
    fn fallback(&self, input: &str, options: &ConvertOptions) -> String;
}

/// Run a transcoder over `input`, honouring the configured [`ErrorMode`].
///
/// In lenient mode this never returns an error.
pub fn transcode<T: Transcoder + ?Sized>(
    transcoder: &T,
    input: &str,
    options: &ConvertOptions,
) -> Result<Conversion> {
    if input.is_empty() {
        return Ok(Conversion::Passthrough(String::new()));
    }
    if transcoder.is_passthrough(input) {
        log::debug!("{}: input passed through unchanged", transcoder.name());
        return Ok(Conversion::Passthrough(input.to_string()));
    }

    match transcoder.transcode(input, options) {
        Ok(content) => Ok(Conversion::Structured(content)),
        Err(err) if options.error_mode == ErrorMode::Strict => Err(err),
        Err(err) => {
            log::warn!(
                "{}: structured conversion failed, using plain text fallback: {}",
                transcoder.name(),
                err
            );
            Ok(Conversion::Fallback {
                content: transcoder.fallback(input, options),
                reason: err.to_string(),
            })
        }
    }
}

/// Convert `input` in the given direction with default options.
///
/// Always returns a string; failures are absorbed by the fallback path.
pub fn convert(direction: Direction, input: &str) -> String {
    convert_with_options(direction, input, &ConvertOptions::default())
}

/// Convert `input` in the given direction with custom options.
///
/// The error mode in `options` is ignored: this function is always lenient.
pub fn convert_with_options(direction: Direction, input: &str, options: &ConvertOptions) -> String {
    let options = options.lenient();
    match transcode(direction.transcoder(), input, &options) {
        Ok(conversion) => conversion.into_content(),
        // Unreachable in lenient mode; keep the input rather than lose it.
        Err(_) => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Transcoder that always fails its structured path.
    struct Broken;

    impl Transcoder for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn is_passthrough(&self, input: &str) -> bool {
            input == "skip"
        }

        fn transcode(&self, _input: &str, _options: &ConvertOptions) -> Result<String> {
            Err(Error::Other("always fails".into()))
        }

        fn fallback(&self, input: &str, _options: &ConvertOptions) -> String {
            format!("[{}]", input)
        }
    }

    #[test]
    fn test_transcode_lenient_falls_back() {
        let conversion = transcode(&Broken, "data", &ConvertOptions::default()).unwrap();
        assert_eq!(conversion.outcome(), Outcome::Fallback);
        assert_eq!(conversion.content(), "[data]");
        match conversion {
            Conversion::Fallback { reason, .. } => assert_eq!(reason, "always fails"),
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_transcode_strict_surfaces_error() {
        let result = transcode(&Broken, "data", &ConvertOptions::new().strict());
        assert!(matches!(result, Err(Error::Other(_))));
    }

    #[test]
    fn test_transcode_passthrough_and_empty() {
        let options = ConvertOptions::new().strict();
        let conversion = transcode(&Broken, "skip", &options).unwrap();
        assert_eq!(conversion, Conversion::Passthrough("skip".into()));

        let conversion = transcode(&Broken, "", &options).unwrap();
        assert_eq!(conversion.into_content(), "");
    }

    #[test]
    fn test_direction_formats() {
        assert_eq!(Direction::RtfToHtml.source(), SourceFormat::Rtf);
        assert_eq!(Direction::HtmlToRtf.target(), SourceFormat::Rtf);
        assert_eq!(Direction::RtfToText.target(), SourceFormat::PlainText);
        assert_eq!(Direction::RtfToHtml.to_string(), "RTF -> HTML");
    }

    #[test]
    fn test_direction_transcoder_names() {
        assert_eq!(Direction::RtfToHtml.transcoder().name(), "rtf-to-html");
        assert_eq!(Direction::HtmlToRtf.transcoder().name(), "html-to-rtf");
        assert_eq!(Direction::RtfToText.transcoder().name(), "rtf-to-text");
    }

    #[test]
    fn test_convert_ignores_strict_mode() {
        let options = ConvertOptions::new().strict();
        let html = convert_with_options(Direction::RtfToHtml, "{\\rtf1", &options);
        assert!(html.contains("<p>"));
    }
}
