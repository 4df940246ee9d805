//! Normalize-then-validate pipeline.
//!
//! Schema validation belongs to an external collaborator. This module only
//! defines the seam ([`SceneValidator`]) and runs it over the normalized
//! document against [`scene_graph_schema`].

use roomgraph_foundation::{Error, Result};
use roomgraph_resolver::{Diagnostic, LogSink, Report, Resolver, Tee};
use roomgraph_scene::SceneGraph;
use roomgraph_scene::schema::scene_graph_schema;
use serde_json::Value;

use crate::serialize::to_json_value;

// =============================================================================
// Validator Seam
// =============================================================================

/// Result of checking a document against a schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the document conforms.
    pub valid: bool,
    /// Human-readable explanation, empty when valid.
    pub message: String,
}

impl ValidationOutcome {
    /// A passing outcome.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing outcome with an explanation.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// An external JSON-schema validator.
pub trait SceneValidator {
    /// Checks `document` against `schema`.
    fn validate(&self, document: &Value, schema: &Value) -> ValidationOutcome;
}

// =============================================================================
// Pipeline
// =============================================================================

/// What a pipeline run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOutput {
    /// The normalized scene graph.
    pub graph: SceneGraph,
    /// Diagnostics and counts from normalization.
    pub report: Report,
}

/// Runs normalization and, if configured, validation.
pub struct Pipeline {
    resolver: Resolver,
    validator: Option<Box<dyn SceneValidator>>,
    log_diagnostics: bool,
}

impl Pipeline {
    /// Creates a pipeline around `resolver` with no validator.
    #[must_use]
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            validator: None,
            log_diagnostics: false,
        }
    }

    /// Builder method to validate normalized documents.
    #[must_use]
    pub fn with_validator(mut self, validator: Box<dyn SceneValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Builder method to also forward diagnostics to the log as they occur.
    #[must_use]
    pub fn with_logged_diagnostics(mut self, enabled: bool) -> Self {
        self.log_diagnostics = enabled;
        self
    }

    /// Returns the resolver.
    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Normalizes `graph`, then validates it if a validator is set.
    ///
    /// # Errors
    ///
    /// Returns a validation error carrying the validator's message if the
    /// normalized document is rejected, or a serialization error if the
    /// document cannot be converted for validation. Diagnostics never cause
    /// an error.
    pub fn run(&self, mut graph: SceneGraph) -> Result<PipelineOutput> {
        let report = if self.log_diagnostics {
            let mut sink = Tee::new(Vec::<Diagnostic>::new(), LogSink);
            let stats = self.resolver.normalize_with_sink(&mut graph, &mut sink);
            Report {
                diagnostics: sink.first,
                stats,
            }
        } else {
            self.resolver.normalize(&mut graph)
        };

        log::info!(
            "normalized scene: {} rooms defaulted, {} objects sized, {} placed, {} unresolved",
            report.stats.rooms_defaulted,
            report.stats.objects_dimensioned,
            report.stats.objects_positioned,
            report.stats.unresolved_parents
        );

        if let Some(validator) = &self.validator {
            let document = to_json_value(&graph)?;
            let outcome = validator.validate(&document, &scene_graph_schema());
            if !outcome.valid {
                return Err(Error::validation(outcome.message));
            }
            log::debug!("normalized scene passed validation");
        }

        Ok(PipelineOutput { graph, report })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Resolver::default())
    }
}
