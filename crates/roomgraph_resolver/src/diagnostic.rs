//! Diagnostics reported while normalizing a scene graph.
//!
//! Diagnostics are data, not console output. The resolver hands each one to
//! a [`DiagnosticSink`]; callers pick whether to collect them, log them, or
//! both. The formatters turn collected diagnostics back into text.

use std::fmt;

use serde::Serialize;

/// Text used in place of a missing `parent` key.
const NO_PARENT: &str = "<none>";

// =============================================================================
// Diagnostic
// =============================================================================

/// A non-fatal problem found during normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An object's parent id is not in the combined id index. The object
    /// was left without a position.
    UnresolvedParent {
        /// The object that could not be placed.
        object_id: String,
        /// The parent id it referenced, if any.
        parent_id: Option<String>,
    },
}

impl Diagnostic {
    /// Creates an unresolved-parent diagnostic.
    #[must_use]
    pub fn unresolved_parent(object_id: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self::UnresolvedParent {
            object_id: object_id.into(),
            parent_id: parent_id.map(str::to_string),
        }
    }

    /// Returns the id of the object the diagnostic is about.
    #[must_use]
    pub fn object_id(&self) -> &str {
        match self {
            Self::UnresolvedParent { object_id, .. } => object_id,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedParent {
                object_id,
                parent_id,
            } => write!(
                f,
                "Warning: Parent '{}' not found for object '{object_id}'",
                parent_id.as_deref().unwrap_or(NO_PARENT)
            ),
        }
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Receiver for diagnostics as they are produced.
pub trait DiagnosticSink {
    /// Accepts one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that forwards every diagnostic to the `log` facade at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

/// Sink that forwards to two sinks in order.
#[derive(Debug, Default)]
pub struct Tee<A, B> {
    /// First receiver.
    pub first: A,
    /// Second receiver.
    pub second: B,
}

impl<A, B> Tee<A, B> {
    /// Creates a tee over two sinks.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for Tee<A, B> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.first.report(diagnostic.clone());
        self.second.report(diagnostic);
    }
}

// =============================================================================
// Formatters
// =============================================================================

/// Trait for formatting diagnostics.
pub trait DiagnosticFormatter {
    /// Formats a single diagnostic to a string.
    fn format(&self, diagnostic: &Diagnostic) -> String;

    /// Formats multiple diagnostics, one per line.
    fn format_many(&self, diagnostics: &[Diagnostic]) -> String {
        diagnostics
            .iter()
            .map(|d| self.format(d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Formats diagnostics as their warning text.
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanFormatter;

impl DiagnosticFormatter for HumanFormatter {
    fn format(&self, diagnostic: &Diagnostic) -> String {
        diagnostic.to_string()
    }
}

/// Formats diagnostics as single-line JSON objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter;

impl DiagnosticFormatter for JsonFormatter {
    fn format(&self, diagnostic: &Diagnostic) -> String {
        // Serializing a plain enum of strings cannot fail.
        serde_json::to_string(diagnostic).unwrap_or_default()
    }
}
