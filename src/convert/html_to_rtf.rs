//! HTML to RTF transcoder.

use super::fallback::minimal_rtf_from_html;
use super::{ConvertOptions, LineEnding, Transcoder};
use crate::detect::is_rtf;
use crate::error::{Error, Result};
use crate::parser::patterns::{RE_HTML_TAG, RE_TAG_NAME, RE_TAG_START};
use crate::parser::{decode_entities, escape_rtf_text};

const RTF_HEADER: &str = r"{\rtf1\ansi\deff0";
const FONT_TABLE: &str =
    r"{\fonttbl{\f0\fswiss Arial;}{\f1\fmodern Courier New;}{\f2\froman Times New Roman;}}";
const COLOR_TABLE: &str =
    r"{\colortbl;\red0\green0\blue0;\red255\green0\blue0;\red0\green255\blue0;\red0\green0\blue255;}";

/// Converts editor HTML into an RTF document.
///
/// Recognised tags become control words, every other tag is dropped and the
/// remaining text is escaped. The font and color tables are fixed.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlToRtf;

impl Transcoder for HtmlToRtf {
    fn name(&self) -> &str {
        "html-to-rtf"
    }

    fn is_passthrough(&self, input: &str) -> bool {
        is_rtf(input)
    }

    fn transcode(&self, html: &str, options: &ConvertOptions) -> Result<String> {
        check_tags_closed(html)?;

        let eol = options.line_ending.as_str();
        let mut rtf = String::with_capacity(html.len() + 256);
        for line in [RTF_HEADER, FONT_TABLE, COLOR_TABLE] {
            rtf.push_str(line);
            rtf.push_str(eol);
        }

        let mut last = 0;
        for tag in RE_HTML_TAG.find_iter(html) {
            push_text(&mut rtf, &html[last..tag.start()], options);
            if let Some(markup) = Markup::from_tag(tag.as_str()) {
                rtf.push_str(&markup.control(options.line_ending));
            }
            last = tag.end();
        }
        push_text(&mut rtf, &html[last..], options);

        rtf.push('}');
        Ok(rtf)
    }

    fn fallback(&self, html: &str, _options: &ConvertOptions) -> String {
        minimal_rtf_from_html(html)
    }
}

/// Markup opened after the last `>` was cut off. A bare `<` in prose, such
/// as `Price < 5`, is text.
fn check_tags_closed(html: &str) -> Result<()> {
    let tail = html.rfind('>').map_or(0, |end| end + 1);
    match RE_TAG_START.find(&html[tail..]) {
        Some(start) => Err(Error::UnterminatedTag {
            offset: tail + start.start(),
        }),
        None => Ok(()),
    }
}

fn push_text(rtf: &mut String, text: &str, options: &ConvertOptions) {
    if text.is_empty() {
        return;
    }
    if options.decode_entities {
        rtf.push_str(&escape_rtf_text(&decode_entities(text)));
    } else {
        rtf.push_str(&escape_rtf_text(text));
    }
}

/// HTML tags with an RTF equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Markup {
    Bold { closing: bool },
    Italic { closing: bool },
    Underline { closing: bool },
    Paragraph { closing: bool },
    LineBreak,
}

impl Markup {
    /// Classify a tag such as `<strong>`, `</EM>` or `<p class="x">`.
    /// Spans that are not a single well-formed tag, like `<b then</p>`, have
    /// no equivalent.
    fn from_tag(tag: &str) -> Option<Self> {
        let caps = RE_TAG_NAME.captures(tag)?;
        let closing = caps.get(1).is_some();
        let name = caps.get(2)?.as_str().to_ascii_lowercase();

        match name.as_str() {
            "strong" | "b" => Some(Markup::Bold { closing }),
            "em" | "i" => Some(Markup::Italic { closing }),
            "u" => Some(Markup::Underline { closing }),
            "p" => Some(Markup::Paragraph { closing }),
            "br" if !closing => Some(Markup::LineBreak),
            _ => None,
        }
    }

    fn control(&self, line_ending: LineEnding) -> String {
        match self {
            Markup::Bold { closing: false } => r"\b ".to_string(),
            Markup::Bold { closing: true } => r"\b0 ".to_string(),
            Markup::Italic { closing: false } => r"\i ".to_string(),
            Markup::Italic { closing: true } => r"\i0 ".to_string(),
            Markup::Underline { closing: false } => r"\ul ".to_string(),
            Markup::Underline { closing: true } => r"\ul0 ".to_string(),
            Markup::Paragraph { closing: false } => r"\pard ".to_string(),
            Markup::Paragraph { closing: true } => format!(r"\par{}", line_ending.as_str()),
            Markup::LineBreak => format!(r"\line{}", line_ending.as_str()),
        }
    }
}
