//! Pre-compiled patterns shared by the RTF and HTML scanners.

use regex::Regex;
use std::sync::LazyLock;

// -- Generic RTF tokens --
/// Backslash, lowercase letters, optional digits, optional single delimiter.
pub(crate) static RE_CONTROL_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-z]+[0-9]*\s?").expect("valid control word regex"));

// -- RTF header tags --
pub(crate) static RE_RTF_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\rtf[0-9]+").expect("valid rtf version regex"));
pub(crate) static RE_ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\ansi\b").expect("valid ansi regex"));
pub(crate) static RE_DEFAULT_FONT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\deff[0-9]+").expect("valid deff regex"));

// -- Destination groups carrying no visible text --
pub(crate) static RE_DESTINATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*(?:\\\*\s*)?\\(?P<name>fonttbl|colortbl|stylesheet|info)\b|\{\s*\\\*")
        .expect("valid destination regex")
});

/// Anchored form of [`RE_DESTINATION`] for checking a group opening in place.
pub(crate) static RE_DESTINATION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\{\s*(?:\\\*\s*)?\\(?:fonttbl|colortbl|stylesheet|info)\b|\{\s*\\\*)")
        .expect("valid destination start regex")
});

// -- Character formatting --
pub(crate) static RE_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\b\s+([^\\{}]+)").expect("valid bold regex"));
pub(crate) static RE_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\i\s+([^\\{}]+)").expect("valid italic regex"));
pub(crate) static RE_UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\ul\s+([^\\{}]+)").expect("valid underline regex"));
pub(crate) static RE_FONT_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\fs([0-9]+)\s+").expect("valid font size regex"));

// -- Paragraphs --
pub(crate) static RE_PARAGRAPH_DEFAULTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\pard\b\s?").expect("valid pard regex"));
pub(crate) static RE_PARAGRAPH_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\par\b\s?").expect("valid par regex"));

// -- Whitespace --
pub(crate) static RE_WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

// -- HTML --
/// Any characters between angle brackets.
pub(crate) static RE_HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid html tag regex"));
/// A whole well-formed tag: name, optional attributes, optional `/`.
/// A `<` inside the tag body disqualifies it.
pub(crate) static RE_TAG_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<\s*(/)?\s*([A-Za-z][A-Za-z0-9]*)(?:\s[^<]*)?/?\s*>$")
        .expect("valid tag name regex")
});
/// `<` followed by something that can only begin markup.
pub(crate) static RE_TAG_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z/!]").expect("valid tag start regex"));
pub(crate) static RE_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]{1,7})|#[xX]([0-9A-Fa-f]{1,6})|([A-Za-z]+));")
        .expect("valid entity regex")
});
