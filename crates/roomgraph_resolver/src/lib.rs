//! Defaulting resolver for Roomgraph.
//!
//! This crate provides:
//! - [`Resolver`] - Fills missing room sizes, object sizes, and object positions
//! - [`ResolverConfig`] - The default size tables the resolver reads
//! - [`Placement`] - Per-kind rules for positioning an object on its parent
//! - [`Diagnostic`] - Non-fatal problems, delivered through a [`DiagnosticSink`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod diagnostic;
pub mod placement;
pub mod resolve;

pub use config::{ObjectDefaults, ResolverConfig};
pub use diagnostic::{
    Diagnostic, DiagnosticFormatter, DiagnosticSink, HumanFormatter, JsonFormatter, LogSink, Tee,
};
pub use placement::Placement;
pub use resolve::{NormalizeStats, Report, Resolver};
