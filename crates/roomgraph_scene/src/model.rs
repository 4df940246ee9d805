//! Scene graph data model.
//!
//! A scene graph is a flat pair of lists. Objects point at their parent (a
//! room or another object) by id rather than by nesting, so the graph is
//! only meaningful together with an [`IdIndex`](crate::IdIndex).
//!
//! Keys this model does not know about (the generator's `shape`, for
//! instance) are carried through untouched in each entry's `extra` map.

use std::fmt;

use roomgraph_foundation::{Dimensions, Position};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Scene Graph
// =============================================================================

/// The top-level scene document: `{ "rooms": [...], "objects": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    /// Rooms in document order.
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Objects in document order.
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl SceneGraph {
    /// Creates an empty scene graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append a room.
    #[must_use]
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Builder method to append an object.
    #[must_use]
    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Returns the first room with the given id.
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Returns the first object with the given id.
    #[must_use]
    pub fn object(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Returns the total number of rooms and objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len() + self.objects.len()
    }

    /// Returns true if the graph has neither rooms nor objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.objects.is_empty()
    }
}

// =============================================================================
// Room
// =============================================================================

/// A room: the root container objects are ultimately placed in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Identifier, unique across rooms and objects.
    pub id: String,
    /// Free-form room type tag (`"loft"`, `"bedroom"`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Interior extents, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions_cm: Option<Dimensions>,
    /// Keys not modelled above, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Room {
    /// Creates a room with no dimensions.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            dimensions_cm: None,
            extra: Map::new(),
        }
    }

    /// Builder method to set dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, dims: impl Into<Dimensions>) -> Self {
        self.dimensions_cm = Some(dims.into());
        self
    }
}

// =============================================================================
// Scene Object
// =============================================================================

/// An object placed in a room or on another object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Identifier, unique across rooms and objects.
    pub id: String,
    /// Object type tag.
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Id of the containing room or supporting object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Extents, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions_cm: Option<Dimensions>,
    /// Offset from the parent's local origin, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_cm: Option<Position>,
    /// Keys not modelled above, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SceneObject {
    /// Creates an object with no parent and no geometry.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<ObjectKind>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            parent: None,
            dimensions_cm: None,
            position_cm: None,
            extra: Map::new(),
        }
    }

    /// Builder method to set the parent id.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Builder method to set dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, dims: impl Into<Dimensions>) -> Self {
        self.dimensions_cm = Some(dims.into());
        self
    }

    /// Builder method to set position.
    #[must_use]
    pub fn with_position(mut self, pos: impl Into<Position>) -> Self {
        self.position_cm = Some(pos.into());
        self
    }
}

// =============================================================================
// Object Kind
// =============================================================================

/// Object type tag.
///
/// The resolver has default dimensions and placement rules for the named
/// variants only. Everything else lands in [`ObjectKind::Other`] with its
/// original tag so it round-trips unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObjectKind {
    /// `"lamp"`
    Lamp,
    /// `"bedside_table"`
    BedsideTable,
    /// `"skylight"`
    Skylight,
    /// Any other tag.
    Other(String),
}

impl ObjectKind {
    /// Returns the wire tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lamp => "lamp",
            Self::BedsideTable => "bedside_table",
            Self::Skylight => "skylight",
            Self::Other(tag) => tag,
        }
    }

    /// Returns true for tags the resolver has rules for.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ObjectKind {
    fn from(tag: &str) -> Self {
        match tag {
            "lamp" => Self::Lamp,
            "bedside_table" => Self::BedsideTable,
            "skylight" => Self::Skylight,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ObjectKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "lamp" => Self::Lamp,
            "bedside_table" => Self::BedsideTable,
            "skylight" => Self::Skylight,
            _ => Self::Other(tag),
        }
    }
}

impl From<ObjectKind> for String {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
