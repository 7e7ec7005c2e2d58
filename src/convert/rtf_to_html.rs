//! RTF to HTML transcoder.

use super::fallback::html_paragraph_from_rtf;
use super::{ConvertOptions, Transcoder};
use crate::detect::is_rtf;
use crate::error::{Error, Result};
use crate::parser::patterns::{
    RE_ANSI, RE_BOLD, RE_CONTROL_WORD, RE_DEFAULT_FONT, RE_FONT_SIZE, RE_ITALIC,
    RE_PARAGRAPH_DEFAULTS, RE_PARAGRAPH_END, RE_RTF_VERSION, RE_UNDERLINE,
};
use crate::parser::{check_balance, protect_escapes, restore_escapes, strip_destinations};

/// Converts the supported RTF control-word subset into HTML.
///
/// Output is wrapped in a single `<div>`. Bold, italic and underline apply to
/// the text run directly following the control word; `\fsN` opens an
/// unclosed `<span>` sized at `N / 2` pixels.
#[derive(Debug, Default, Clone, Copy)]
pub struct RtfToHtml;

impl Transcoder for RtfToHtml {
    fn name(&self) -> &str {
        "rtf-to-html"
    }

    fn is_passthrough(&self, input: &str) -> bool {
        !is_rtf(input)
    }

    fn transcode(&self, rtf: &str, _options: &ConvertOptions) -> Result<String> {
        let text = protect_escapes(rtf);
        check_balance(&text)?;

        let text = strip_header(&text);
        let text = strip_destinations(&text)?;

        let text = RE_BOLD.replace_all(&text, "<strong>${1}</strong>");
        let text = RE_ITALIC.replace_all(&text, "<em>${1}</em>");
        let text = RE_UNDERLINE.replace_all(&text, "<u>${1}</u>");
        let text = font_size_spans(&text)?;

        // `\pard` first so that `\par` never eats its prefix.
        let text = RE_PARAGRAPH_DEFAULTS.replace_all(&text, "<p>");
        let text = RE_PARAGRAPH_END.replace_all(&text, "</p><p>");

        let text = RE_CONTROL_WORD.replace_all(&text, "");
        let body: String = text.chars().filter(|c| !matches!(c, '{' | '}')).collect();

        Ok(format!("<div>{}</div>", restore_escapes(body.trim())))
    }

    fn fallback(&self, rtf: &str, _options: &ConvertOptions) -> String {
        html_paragraph_from_rtf(rtf)
    }
}

fn strip_header(text: &str) -> String {
    let text = RE_RTF_VERSION.replace_all(text, "");
    let text = RE_ANSI.replace_all(&text, "");
    RE_DEFAULT_FONT.replace_all(&text, "").into_owned()
}

/// Replace every `\fsN ` with an opening span. Sizes that do not fit in a
/// `u32` are rejected.
fn font_size_spans(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in RE_FONT_SIZE.captures_iter(text) {
        let (Some(whole), Some(size)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let half_points: u32 = size
            .as_str()
            .parse()
            .map_err(|_| Error::InvalidFontSize(size.as_str().to_string()))?;

        out.push_str(&text[last..whole.start()]);
        out.push_str(&format!("<span style='font-size:{}px'>", half_points / 2));
        last = whole.end();
    }

    out.push_str(&text[last..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{transcode, Conversion, Outcome};

    fn structured(rtf: &str) -> String {
        RtfToHtml
            .transcode(rtf, &ConvertOptions::default())
            .unwrap()
    }

    #[test]
    fn test_bold_and_italic() {
        let html = structured("{\\rtf1\\ansi\\deff0 \\b Bold text \\i Italic text}");
        assert_eq!(
            html,
            "<div><strong>Bold text </strong><em>Italic text</em></div>"
        );
    }

    #[test]
    fn test_underline_closes_at_control_word() {
        let html = structured("{\\rtf1 \\ul under\\ul0  after}");
        assert_eq!(html, "<div><u>under</u> after</div>");
    }

    #[test]
    fn test_font_tables_removed() {
        let rtf = "{\\rtf1\\ansi\\deff0{\\fonttbl{\\f0\\fswiss Arial;}}\
                   {\\colortbl;\\red0\\green0\\blue0;}\\f0 Body}";
        assert_eq!(structured(rtf), "<div>Body</div>");
    }

    #[test]
    fn test_font_size_half_points_to_px() {
        let html = structured("{\\rtf1 \\fs24 Twelve}");
        assert_eq!(html, "<div><span style='font-size:12px'>Twelve</div>");

        let html = structured("{\\rtf1 \\fs25 Odd}");
        assert!(html.contains("font-size:12px"));
    }

    #[test]
    fn test_paragraphs() {
        let html = structured("{\\rtf1 \\pard First\\par\n\\pard Second\\par}");
        assert_eq!(html, "<div><p>First</p><p><p>Second</p><p></div>");
    }

    #[test]
    fn test_escaped_symbols_survive() {
        let html = structured("{\\rtf1 a \\{b\\} c\\\\d}");
        assert_eq!(html, "<div>a {b} c\\d</div>");
    }

    #[test]
    fn test_ansi_code_page_not_partially_stripped() {
        let html = structured("{\\rtf1\\ansi\\ansicpg1252\\deff0 Text}");
        assert_eq!(html, "<div>Text</div>");
    }

    #[test]
    fn test_generator_destination_removed() {
        let html = structured("{\\rtf1{\\*\\generator Riched20 10.0;}Visible}");
        assert_eq!(html, "<div>Visible</div>");
    }

    #[test]
    fn test_unbalanced_falls_back() {
        let conversion = transcode(&RtfToHtml, "{\\rtf1", &ConvertOptions::default()).unwrap();
        assert_eq!(conversion.outcome(), Outcome::Fallback);
        assert_eq!(conversion.content(), "<p></p>");

        let conversion =
            transcode(&RtfToHtml, "{\\rtf1\\ansi \\b Broken", &ConvertOptions::default()).unwrap();
        assert_eq!(conversion.content(), "<p>Broken</p>");
    }

    #[test]
    fn test_oversized_font_falls_back() {
        let rtf = "{\\rtf1 \\fs99999999999 Huge}";
        assert!(matches!(
            RtfToHtml.transcode(rtf, &ConvertOptions::default()),
            Err(Error::InvalidFontSize(_))
        ));

        let conversion = transcode(&RtfToHtml, rtf, &ConvertOptions::default()).unwrap();
        assert_eq!(conversion.content(), "<p>Huge</p>");
    }

    #[test]
    fn test_non_rtf_passthrough() {
        let conversion = transcode(&RtfToHtml, "<p>x</p>", &ConvertOptions::default()).unwrap();
        assert_eq!(conversion, Conversion::Passthrough("<p>x</p>".into()));
    }
}
