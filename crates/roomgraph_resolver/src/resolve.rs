//! The defaulting resolver.
//!
//! Normalization runs in four steps over one scene graph:
//!
//! 1. Build the combined room + object [`IdIndex`].
//! 2. Give every room without dimensions the configured room size.
//! 3. Give every object of a known kind without dimensions its kind's
//!    default size. Unknown kinds are left alone.
//! 4. Place every object without a position using its kind's
//!    [`Placement`] rule and its parent's dimensions.
//!
//! Step 3 finishes for every object before step 4 starts, and placement
//! reads only parent dimensions, never parent positions, so the order of
//! objects in the document never changes the result. Every step only fills
//! absent fields, which makes normalization idempotent.

use roomgraph_foundation::Dimensions;
use roomgraph_scene::{IdIndex, SceneGraph};

use crate::config::ResolverConfig;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::placement::Placement;

// =============================================================================
// Results
// =============================================================================

/// Counts of what a normalization run filled in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Rooms that received the default room size.
    pub rooms_defaulted: usize,
    /// Objects that received their kind's default size.
    pub objects_dimensioned: usize,
    /// Objects that received a computed position.
    pub objects_positioned: usize,
    /// Objects skipped because their parent did not resolve.
    pub unresolved_parents: usize,
    /// Objects of unknown kind still without dimensions.
    pub unknown_kinds_without_dimensions: usize,
}

impl NormalizeStats {
    /// Returns true if the run filled nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.rooms_defaulted == 0 && self.objects_dimensioned == 0 && self.objects_positioned == 0
    }
}

/// Diagnostics and counts from one normalization run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    /// Diagnostics in the order they were produced.
    pub diagnostics: Vec<Diagnostic>,
    /// What was filled in.
    pub stats: NormalizeStats,
}

impl Report {
    /// Returns true if no diagnostics were produced.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Fills missing room and object geometry.
///
/// The resolver holds only its configuration; it keeps no state between
/// runs and can be shared freely.
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Creates a resolver with the given configuration.
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Normalizes `graph` in place and returns the collected diagnostics.
    pub fn normalize(&self, graph: &mut SceneGraph) -> Report {
        let mut diagnostics = Vec::new();
        let stats = self.normalize_with_sink(graph, &mut diagnostics);
        Report { diagnostics, stats }
    }

    /// Normalizes an owned graph and returns it with the report.
    #[must_use]
    pub fn normalized(&self, mut graph: SceneGraph) -> (SceneGraph, Report) {
        let report = self.normalize(&mut graph);
        (graph, report)
    }

    /// Normalizes `graph` in place, delivering diagnostics to `sink` as they
    /// occur.
    pub fn normalize_with_sink(
        &self,
        graph: &mut SceneGraph,
        sink: &mut dyn DiagnosticSink,
    ) -> NormalizeStats {
        let index = IdIndex::build(graph);
        let mut stats = NormalizeStats::default();

        self.fill_room_dimensions(graph, &mut stats);
        self.fill_object_dimensions(graph, &mut stats);
        self.fill_object_positions(graph, &index, sink, &mut stats);

        log::debug!(
            "normalized {} rooms, {} objects: {stats:?}",
            graph.rooms.len(),
            graph.objects.len()
        );
        stats
    }

    fn fill_room_dimensions(&self, graph: &mut SceneGraph, stats: &mut NormalizeStats) {
        for room in graph.rooms.iter_mut().filter(|r| r.dimensions_cm.is_none()) {
            room.dimensions_cm = Some(self.config.room_dimensions);
            stats.rooms_defaulted += 1;
        }
    }

    fn fill_object_dimensions(&self, graph: &mut SceneGraph, stats: &mut NormalizeStats) {
        for object in graph.objects.iter_mut().filter(|o| o.dimensions_cm.is_none()) {
            match self.config.objects.for_kind(&object.kind) {
                Some(dims) => {
                    object.dimensions_cm = Some(dims);
                    stats.objects_dimensioned += 1;
                }
                None => {
                    log::debug!(
                        "object '{}' has unknown type '{}' and no dimensions",
                        object.id,
                        object.kind
                    );
                    stats.unknown_kinds_without_dimensions += 1;
                }
            }
        }
    }

    fn fill_object_positions(
        &self,
        graph: &mut SceneGraph,
        index: &IdIndex,
        sink: &mut dyn DiagnosticSink,
        stats: &mut NormalizeStats,
    ) {
        for i in 0..graph.objects.len() {
            let object = &graph.objects[i];
            if object.position_cm.is_some() {
                continue;
            }

            let Some(parent) = object.parent.as_deref().and_then(|id| index.resolve(id)) else {
                sink.report(Diagnostic::unresolved_parent(
                    &object.id,
                    object.parent.as_deref(),
                ));
                stats.unresolved_parents += 1;
                continue;
            };

            // A parent without dimensions counts as a default-sized room,
            // even when the parent is an object.
            let parent_dims =
                IdIndex::dimensions_of(graph, parent).unwrap_or(self.config.room_dimensions);
            let own_dims = object.dimensions_cm.unwrap_or(Dimensions::ZERO);
            let position = Placement::for_kind(&object.kind).apply(parent_dims, own_dims);

            graph.objects[i].position_cm = Some(position);
            stats.objects_positioned += 1;
        }
    }
}
