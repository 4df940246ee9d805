//! Scene graph model, identifier index, and document schema for Roomgraph.
//!
//! This crate provides:
//! - [`SceneGraph`] - Flat lists of rooms and objects linked by parent id
//! - [`ObjectKind`] - Closed set of object types the resolver understands
//! - [`IdIndex`] - Combined room + object identifier lookup
//! - [`schema`] - The JSON schema shared with external generators and validators

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod index;
pub mod model;
pub mod schema;

pub use index::{EntityRef, IdIndex};
pub use model::{ObjectKind, Room, SceneGraph, SceneObject};
