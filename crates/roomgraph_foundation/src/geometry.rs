//! Geometry value types.
//!
//! All lengths are centimeters. Both types travel on the wire as plain
//! 3-element numeric arrays; the axis order is fixed because downstream
//! importers apply a linear unit conversion element by element.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extents of a room or object: `[width, length, height]`.
///
/// For objects the second axis is usually called depth; it occupies the
/// same slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Dimensions {
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub length: f64,
    /// Extent along z.
    pub height: f64,
}

impl Dimensions {
    /// All-zero extents.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates new dimensions.
    #[must_use]
    pub const fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// Returns the extents as `[width, length, height]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.width, self.length, self.height]
    }
}

impl From<[f64; 3]> for Dimensions {
    fn from([width, length, height]: [f64; 3]) -> Self {
        Self::new(width, length, height)
    }
}

impl From<Dimensions> for [f64; 3] {
    fn from(dims: Dimensions) -> Self {
        dims.to_array()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.width, self.length, self.height)
    }
}

/// Local offset of an object relative to its parent's origin: `[x, y, z]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Position {
    /// Offset along x.
    pub x: f64,
    /// Offset along y.
    pub y: f64,
    /// Offset along z.
    pub z: f64,
}

impl Position {
    /// The parent's local origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the offset as `[x, y, z]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Position {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Position> for [f64; 3] {
    fn from(pos: Position) -> Self {
        pos.to_array()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}
