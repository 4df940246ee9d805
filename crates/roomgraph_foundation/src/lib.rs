//! Core geometry value types and errors for Roomgraph.
//!
//! This crate provides:
//! - [`Dimensions`] - Width/length/height extents in centimeters
//! - [`Position`] - Local x/y/z offsets in centimeters
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod geometry;

pub use error::{DocumentFormat, Error, ErrorContext, ErrorKind, Result};
pub use geometry::{Dimensions, Position};
