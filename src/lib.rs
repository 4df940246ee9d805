//! Roomgraph - Scene-graph normalization
//!
//! This crate re-exports all layers of the Roomgraph system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: roomgraph_runtime     — Document I/O, CLI, pipeline seams
//! Layer 2: roomgraph_resolver    — Defaulting resolver, placement rules, diagnostics
//! Layer 1: roomgraph_scene       — Scene graph model, identifier index, schema
//! Layer 0: roomgraph_foundation  — Core types (Dimensions, Position, Error)
//! ```

pub use roomgraph_foundation as foundation;
pub use roomgraph_resolver as resolver;
pub use roomgraph_runtime as runtime;
pub use roomgraph_scene as scene;
