//! Document I/O, pipeline, and CLI for Roomgraph.
//!
//! This crate provides:
//! - Scene document serialization (JSON and `MessagePack`)
//! - [`Pipeline`] - Normalization followed by external validation
//! - Logging initialization for the `roomgraph` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod pipeline;
pub mod serialize;

pub use pipeline::{Pipeline, PipelineOutput, SceneValidator, ValidationOutcome};
pub use serialize::{load_from_file, save_to_file};

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initializes `pretty_env_logger`, honouring `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filters =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    let _ = pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .try_init();
}
