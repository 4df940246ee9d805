//! Error types for the Roomgraph system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Normalization itself never fails; these errors come from document I/O,
//! configuration loading, and external collaborators.

use std::fmt;

use thiserror::Error;

/// The main error type for Roomgraph operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a document parse error for the given format.
    #[must_use]
    pub fn parse(format: DocumentFormat, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse {
            format,
            message: message.into(),
        })
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Creates a validation error reported by an external validator.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// A scene document could not be decoded.
    #[error("{format} parse error: {message}")]
    Parse {
        /// The wire format being decoded.
        format: DocumentFormat,
        /// Description of the failure.
        message: String,
    },

    /// A scene document could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A resolver configuration was malformed.
    #[error("config error: {0}")]
    Config(String),

    /// The normalized document was rejected by a schema validator.
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Wire formats a scene document can be stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Human-readable JSON.
    Json,
    /// Binary `MessagePack` with named fields.
    MessagePack,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::MessagePack => write!(f, "MessagePack"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File the error relates to.
    pub source: Option<String>,
    /// Stack of operations that led to the error, outermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias using the Roomgraph error type.
pub type Result<T> = std::result::Result<T, Error>;
