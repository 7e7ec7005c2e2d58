//! RTF escaped symbols (`\\`, `\{`, `\}`).
//!
//! Escaped symbols are literal text. While the substitution pipeline runs
//! they are parked behind placeholders so that brace stripping and
//! control-word matching never see them. Placeholders are NUL-delimited, so
//! NUL characters in the input are dropped.

const BACKSLASH_PLACEHOLDER: &str = "\u{0000}BSL\u{0000}";
const OPEN_BRACE_PLACEHOLDER: &str = "\u{0000}LBR\u{0000}";
const CLOSE_BRACE_PLACEHOLDER: &str = "\u{0000}RBR\u{0000}";

/// Replace escaped symbols with placeholders.
pub(crate) fn protect_escapes(rtf: &str) -> String {
    let mut out = String::with_capacity(rtf.len());
    let mut chars = rtf.chars().filter(|&c| c != '\u{0000}');

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push_str(BACKSLASH_PLACEHOLDER),
            Some('{') => out.push_str(OPEN_BRACE_PLACEHOLDER),
            Some('}') => out.push_str(CLOSE_BRACE_PLACEHOLDER),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Turn placeholders back into the literal characters they stand for.
pub(crate) fn restore_escapes(text: &str) -> String {
    if !text.contains('\u{0000}') {
        return text.to_string();
    }
    text.replace(BACKSLASH_PLACEHOLDER, "\\")
        .replace(OPEN_BRACE_PLACEHOLDER, "{")
        .replace(CLOSE_BRACE_PLACEHOLDER, "}")
}

/// If `text` starts with a placeholder, return the literal character and the
/// placeholder's byte length.
pub(crate) fn placeholder_at(text: &str) -> Option<(char, usize)> {
    [
        (BACKSLASH_PLACEHOLDER, '\\'),
        (OPEN_BRACE_PLACEHOLDER, '{'),
        (CLOSE_BRACE_PLACEHOLDER, '}'),
    ]
    .into_iter()
    .find(|(placeholder, _)| text.starts_with(placeholder))
    .map(|(placeholder, literal)| (literal, placeholder.len()))
}

/// Escape RTF metacharacters in literal text.
///
/// Equivalent to replacing `\` first, then `{`, then `}`; a single pass
/// cannot double-escape the backslashes it inserts.
pub(crate) fn escape_rtf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            _ => out.push(c),
        }
    }
    out
}
