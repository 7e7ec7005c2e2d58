//! Document inspection.
//!
//! Summarises a stored document without converting it: what format it is,
//! how long it is and which character formatting it uses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::detect::{detect_format, SourceFormat};
use crate::error::{Error, Result};
use crate::model::FormattingRun;
use crate::parser::parse_runs;
use crate::parser::patterns::{RE_HTML_TAG, RE_TAG_NAME};

/// Summary of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Detected format
    pub format: SourceFormat,
    /// Length in bytes
    pub bytes: usize,
    /// Length in characters
    pub chars: usize,
    /// Whitespace-separated words of the display text
    pub words: usize,
    /// Number of paragraphs
    pub paragraphs: usize,
    /// Formatting statistics (RTF only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<RunStats>,
}

/// Formatting-run statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of runs
    pub total: usize,
    /// Runs set in bold
    pub bold: usize,
    /// Runs set in italic
    pub italic: usize,
    /// Underlined runs
    pub underline: usize,
    /// Distinct font sizes in points, ascending
    pub font_sizes: Vec<u32>,
}

impl RunStats {
    fn from_runs(runs: &[FormattingRun]) -> Self {
        let mut stats = RunStats {
            total: runs.len(),
            ..Default::default()
        };
        let mut sizes = BTreeSet::new();

        for run in runs {
            stats.bold += usize::from(run.style.bold);
            stats.italic += usize::from(run.style.italic);
            stats.underline += usize::from(run.style.underline);
            if let Some(size) = run.style.font_size {
                sizes.insert(size);
            }
        }

        stats.font_sizes = sizes.into_iter().collect();
        stats
    }
}

/// Inspect a document.
///
/// # Example
/// ```
/// use rtfhtml::{inspect, SourceFormat};
///
/// let info = inspect("{\\rtf1 \\b Hello\\b0  world\\par Again}");
/// assert_eq!(info.format, SourceFormat::Rtf);
/// assert_eq!(info.words, 3);
/// assert_eq!(info.paragraphs, 2);
/// ```
pub fn inspect(content: &str) -> DocumentInfo {
    let format = detect_format(content);
    let mut info = DocumentInfo {
        format,
        bytes: content.len(),
        chars: content.chars().count(),
        words: 0,
        paragraphs: 0,
        runs: None,
    };

    match format {
        SourceFormat::Rtf => {
            let runs = parse_runs(content);
            let text: String = runs.iter().map(|run| run.text.as_str()).collect();
            info.words = text.split_whitespace().count();
            info.paragraphs = count_blocks(&text);
            info.runs = Some(RunStats::from_runs(&runs));
        }
        SourceFormat::Html => {
            let text = RE_HTML_TAG.replace_all(content, " ");
            info.words = text.split_whitespace().count();
            let opened = RE_HTML_TAG
                .find_iter(content)
                .filter_map(|tag| RE_TAG_NAME.captures(tag.as_str()))
                .filter(|caps| caps.get(1).is_none())
                .filter(|caps| caps[2].eq_ignore_ascii_case("p"))
                .count();
            info.paragraphs = if opened == 0 && info.words > 0 { 1 } else { opened };
        }
        SourceFormat::PlainText => {
            info.words = content.split_whitespace().count();
            info.paragraphs = count_blocks(content);
        }
    }

    log::debug!(
        "Inspected {} document: {} words, {} paragraphs",
        info.format,
        info.words,
        info.paragraphs
    );
    info
}

/// Lines carrying at least one non-whitespace character.
fn count_blocks(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize document information to JSON.
pub fn to_json(info: &DocumentInfo, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(info),
        JsonFormat::Compact => serde_json::to_string(info),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
