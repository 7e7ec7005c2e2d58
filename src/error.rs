//! Error types for rtfhtml library.

use std::io;
use thiserror::Error;

/// Result type alias for rtfhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion.
///
/// The lenient conversion functions never return these; they are surfaced
/// only in [`ErrorMode::Strict`](crate::ErrorMode::Strict) and recorded in
/// logs when a fallback is taken.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A closing brace appeared with no open group.
    #[error("Unbalanced group: unexpected '}}' at offset {offset}")]
    UnbalancedGroup {
        /// Byte offset of the stray brace
        offset: usize,
    },

    /// The document ended with groups still open.
    #[error("Unterminated group: {depth} group(s) left open")]
    UnterminatedGroup {
        /// Number of groups never closed
        depth: usize,
    },

    /// A destination group such as `\fonttbl` has no closing brace.
    #[error("Unterminated destination group: \\{0}")]
    UnterminatedDestination(String),

    /// A `\fsN` parameter could not be represented.
    #[error("Invalid font size: {0}")]
    InvalidFontSize(String),

    /// An HTML tag was opened with `<` but never closed.
    #[error("Unterminated tag at offset {offset}")]
    UnterminatedTag {
        /// Byte offset of the opening `<`
        offset: usize,
    },

    /// Error during rendering (JSON, reports).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnterminatedGroup { depth: 2 };
        assert_eq!(err.to_string(), "Unterminated group: 2 group(s) left open");

        let err = Error::UnbalancedGroup { offset: 14 };
        assert_eq!(
            err.to_string(),
            "Unbalanced group: unexpected '}' at offset 14"
        );

        let err = Error::UnterminatedDestination("fonttbl".into());
        assert_eq!(err.to_string(), "Unterminated destination group: \\fonttbl");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
