//! Placement rules: where an object sits relative to its parent.
//!
//! Positions are offsets from the parent's local origin. A rule only ever
//! reads the parent's dimensions, never the parent's position.

use roomgraph_foundation::{Dimensions, Position};
use roomgraph_scene::ObjectKind;

/// How an object of a given kind is placed on its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Centered in x/y on the parent's top face, with the object's origin
    /// at the parent's height.
    CenteredOnTop,
    /// At the parent's local origin, on the floor.
    Origin,
}

impl Placement {
    /// Returns the rule for `kind`.
    #[must_use]
    pub fn for_kind(kind: &ObjectKind) -> Self {
        match kind {
            ObjectKind::Lamp | ObjectKind::Skylight => Self::CenteredOnTop,
            ObjectKind::BedsideTable | ObjectKind::Other(_) => Self::Origin,
        }
    }

    /// Computes the position of an object of size `own` on a parent of
    /// size `parent`.
    #[must_use]
    pub fn apply(self, parent: Dimensions, own: Dimensions) -> Position {
        match self {
            // The object's own height is not subtracted.
            Self::CenteredOnTop => Position::new(
                parent.width / 2.0 - own.width / 2.0,
                parent.length / 2.0 - own.length / 2.0,
                parent.height,
            ),
            Self::Origin => Position::ORIGIN,
        }
    }
}
