//! Formatting-run extraction from RTF.
//!
//! A small state machine over the control-word stream. Character formatting
//! lives on a group stack: `{` saves the current style and `}` restores it.
//! Destination groups are skipped entirely.

use crate::detect::is_rtf;
use crate::model::{FormattingRun, TextStyle};

use super::escape::{placeholder_at, protect_escapes};
use super::patterns::RE_DESTINATION_START;

/// Split an RTF document into formatting runs.
///
/// Adjacent text with the same style is merged into one run. `\par` and
/// `\line` become newlines inside the run text. Input that is not RTF
/// yields a single unstyled run; empty input yields no runs.
///
/// # Example
/// ```
/// use rtfhtml::parse_runs;
///
/// let runs = parse_runs("{\\rtf1 plain \\b bold\\b0  again}");
/// assert_eq!(runs.len(), 3);
/// assert!(runs[1].style.bold);
/// assert_eq!(runs[1].text, "bold");
/// ```
pub fn parse_runs(rtf: &str) -> Vec<FormattingRun> {
    if rtf.is_empty() {
        return Vec::new();
    }
    if !is_rtf(rtf) {
        return vec![FormattingRun::new(rtf)];
    }

    let protected = protect_escapes(rtf);
    RunParser::new(&protected).parse()
}

struct RunParser<'a> {
    text: &'a str,
    pos: usize,
    style: TextStyle,
    stack: Vec<TextStyle>,
    /// Stack depth of the destination group being skipped.
    skip_depth: Option<usize>,
    runs: Vec<FormattingRun>,
}

impl<'a> RunParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            style: TextStyle::default(),
            stack: Vec::new(),
            skip_depth: None,
            runs: Vec::new(),
        }
    }

    fn parse(mut self) -> Vec<FormattingRun> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];

            if let Some((literal, len)) = placeholder_at(rest) {
                self.push_char(literal);
                self.pos += len;
                continue;
            }

            let Some(c) = rest.chars().next() else {
                break;
            };
            match c {
                '{' => self.open_group(rest),
                '}' => self.close_group(),
                '\\' => self.control(),
                // Raw line breaks in RTF source carry no meaning.
                '\r' | '\n' => self.pos += 1,
                _ => {
                    self.push_char(c);
                    self.pos += c.len_utf8();
                }
            }
        }
        self.runs
    }

    fn open_group(&mut self, rest: &str) {
        self.stack.push(self.style);
        if self.skip_depth.is_none() && RE_DESTINATION_START.is_match(rest) {
            self.skip_depth = Some(self.stack.len());
        }
        self.pos += 1;
    }

    fn close_group(&mut self) {
        if self.skip_depth.is_some_and(|depth| self.stack.len() <= depth) {
            self.skip_depth = None;
        }
        // A stray '}' leaves the style untouched.
        if let Some(style) = self.stack.pop() {
            self.style = style;
        }
        self.pos += 1;
    }

    fn control(&mut self) {
        let rest = &self.text[self.pos + 1..];
        let word_len = rest.bytes().take_while(u8::is_ascii_lowercase).count();

        if word_len == 0 {
            self.control_symbol(rest);
            return;
        }

        let word = &rest[..word_len];
        let after = &rest[word_len..];
        let sign_len = usize::from(after.starts_with('-'));
        let digit_len = after[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();

        let (param, param_len) = if digit_len > 0 {
            let raw = &after[..sign_len + digit_len];
            (raw.parse::<i64>().ok(), sign_len + digit_len)
        } else {
            (None, 0)
        };

        let mut consumed = 1 + word_len + param_len;
        if after[param_len..].starts_with(' ') {
            consumed += 1;
        }
        self.pos += consumed;
        self.apply(word, param);
    }

    fn control_symbol(&mut self, rest: &str) {
        match rest.chars().next() {
            Some('\'') => {
                let hex_len = rest[1..]
                    .bytes()
                    .take(2)
                    .take_while(u8::is_ascii_hexdigit)
                    .count();
                self.pos += 2 + hex_len;
            }
            Some('~') => {
                self.push_char(' ');
                self.pos += 2;
            }
            Some(c) => self.pos += 1 + c.len_utf8(),
            None => self.pos += 1,
        }
    }

    fn apply(&mut self, word: &str, param: Option<i64>) {
        let enabled = param != Some(0);
        match word {
            "b" => self.style.bold = enabled,
            "i" => self.style.italic = enabled,
            "ul" => self.style.underline = enabled,
            "ulnone" => self.style.underline = false,
            "fs" => {
                if let Some(half_points) = param {
                    self.style.font_size = u32::try_from(half_points / 2).ok();
                }
            }
            "plain" => self.style = TextStyle::default(),
            "par" | "line" => self.push_char('\n'),
            "tab" => self.push_char('\t'),
            _ => {}
        }
    }

    fn push_char(&mut self, c: char) {
        if self.skip_depth.is_some() {
            return;
        }
        match self.runs.last_mut() {
            Some(run) if run.style == self.style => run.text.push(c),
            _ => self
                .runs
                .push(FormattingRun::styled(c.to_string(), self.style)),
        }
    }
}
