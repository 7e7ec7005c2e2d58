//! Best-effort extraction used when a structured transform fails.
//!
//! Both functions are total and always produce a valid envelope in the
//! target format, whatever the input looks like.

use crate::parser::patterns::{RE_CONTROL_WORD, RE_HTML_TAG};
use crate::parser::{escape_rtf_text, protect_escapes, restore_escapes};

/// Font declaration used by the minimal RTF document.
const MINIMAL_FONT_TABLE: &str = r"{\fonttbl{\f0\fswiss Arial;}}";

/// Strip control words and braces from RTF and wrap the rest in `<p>`.
pub(crate) fn html_paragraph_from_rtf(rtf: &str) -> String {
    format!("<p>{}</p>", strip_rtf(rtf))
}

/// Strip tags from HTML and wrap the text in a minimal RTF document.
pub(crate) fn minimal_rtf_from_html(html: &str) -> String {
    let text = RE_HTML_TAG.replace_all(html, "");
    format!(
        r"{{\rtf1\ansi\deff0{}\f0\fs24 {}}}",
        MINIMAL_FONT_TABLE,
        escape_rtf_text(&text)
    )
}

fn strip_rtf(rtf: &str) -> String {
    let protected = protect_escapes(rtf);
    let text = RE_CONTROL_WORD.replace_all(&protected, "");
    let text: String = text.chars().filter(|c| !matches!(c, '{' | '}')).collect();
    restore_escapes(text.trim())
}
