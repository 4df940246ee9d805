//! Combined room + object identifier index.
//!
//! Parent references resolve against a single namespace covering both
//! rooms and objects. Rooms are inserted first, then objects; a later
//! insert under an existing id replaces the earlier entry, so an object
//! shadows a room that shares its id. Duplicates are not reported.

use std::collections::HashMap;

use roomgraph_foundation::Dimensions;

use crate::model::SceneGraph;

/// Positional handle to an entry of a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// Index into [`SceneGraph::rooms`].
    Room(usize),
    /// Index into [`SceneGraph::objects`].
    Object(usize),
}

/// Id lookup over every room and object of one scene graph.
///
/// Handles stay valid as long as the graph's lists are not reordered,
/// grown, or shrunk; filling optional fields in place is fine.
#[derive(Clone, Debug, Default)]
pub struct IdIndex {
    entries: HashMap<String, EntityRef>,
}

impl IdIndex {
    /// Builds the index for `graph`.
    #[must_use]
    pub fn build(graph: &SceneGraph) -> Self {
        let mut entries = HashMap::with_capacity(graph.len());

        for (i, room) in graph.rooms.iter().enumerate() {
            entries.insert(room.id.clone(), EntityRef::Room(i));
        }
        for (i, object) in graph.objects.iter().enumerate() {
            entries.insert(object.id.clone(), EntityRef::Object(i));
        }

        Self { entries }
    }

    /// Resolves an id to its entry.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<EntityRef> {
        self.entries.get(id).copied()
    }

    /// Returns the number of distinct ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no ids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads the current dimensions of a resolved entry.
    ///
    /// Returns `None` if the entry has no dimensions or the handle is out
    /// of range for `graph`.
    #[must_use]
    pub fn dimensions_of(graph: &SceneGraph, entity: EntityRef) -> Option<Dimensions> {
        match entity {
            EntityRef::Room(i) => graph.rooms.get(i)?.dimensions_cm,
            EntityRef::Object(i) => graph.objects.get(i)?.dimensions_cm,
        }
    }
}
