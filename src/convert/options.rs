//! Conversion options and configuration.

/// Options for converting documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Line break emitted in RTF output
    pub line_ending: LineEnding,

    /// Decode HTML character references before escaping text for RTF
    pub decode_entities: bool,

    /// Whether batch conversion uses parallel processing
    pub parallel: bool,
}

impl ConvertOptions {
    /// Create new conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (fall back to plain text extraction).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable strict mode (surface structured-conversion errors).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Set the line ending used in RTF output.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Enable or disable HTML entity decoding.
    pub fn with_entity_decoding(mut self, decode: bool) -> Self {
        self.decode_entities = decode;
        self
    }

    /// Enable or disable parallel batch conversion.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch conversion.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            line_ending: LineEnding::Lf,
            decode_entities: false,
            parallel: true,
        }
    }
}

/// How to handle a structured conversion that fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fall back to best-effort text extraction
    #[default]
    Lenient,
    /// Return the error to the caller
    Strict,
}

/// Line break sequence for generated RTF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The line break characters.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}
