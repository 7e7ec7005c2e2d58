//! Formatting runs.

use serde::{Deserialize, Serialize};

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl FormattingRun {
    /// Create a new run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a run with the given style.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                bold: true,
                ..Default::default()
            },
        )
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                italic: true,
                ..Default::default()
            },
        )
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Character formatting carried by a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Font size in points (RTF half-points divided by two)
    pub font_size: Option<u32>,
}

impl TextStyle {
    /// Check if no formatting is applied.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_constructors() {
        let run = FormattingRun::bold("Hello");
        assert!(run.style.bold);
        assert!(!run.style.italic);

        let run = FormattingRun::italic("World");
        assert!(run.style.italic);
        assert!(!run.is_empty());

        assert!(FormattingRun::new("").is_empty());
    }

    #[test]
    fn test_style_is_plain() {
        assert!(TextStyle::default().is_plain());
        let sized = TextStyle {
            font_size: Some(12),
            ..Default::default()
        };
        assert!(!sized.is_plain());
    }
}
