//! Configuration for the defaulting resolver.
//!
//! Holds the fixed default tables. A partial JSON config overrides only the
//! entries it names:
//!
//! ```text
//! {
//!   "room_dimensions": [600, 400, 280],
//!   "objects": { "lamp": [15, 15, 60] }
//! }
//! ```

use roomgraph_foundation::{Dimensions, Error, Result};
use roomgraph_scene::ObjectKind;
use serde::{Deserialize, Serialize};

/// Room size used when a room has none, and as the parent size when a
/// resolved parent has none.
pub const DEFAULT_ROOM_DIMENSIONS: Dimensions = Dimensions::new(400.0, 500.0, 300.0);

/// Default bedside table size.
pub const DEFAULT_BEDSIDE_TABLE_DIMENSIONS: Dimensions = Dimensions::new(50.0, 50.0, 75.0);

/// Default lamp size.
pub const DEFAULT_LAMP_DIMENSIONS: Dimensions = Dimensions::new(20.0, 20.0, 40.0);

/// Default skylight size.
pub const DEFAULT_SKYLIGHT_DIMENSIONS: Dimensions = Dimensions::new(100.0, 100.0, 10.0);

// =============================================================================
// Object Defaults
// =============================================================================

/// Default dimensions per known object kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObjectDefaults {
    /// Size given to lamps without dimensions.
    pub lamp: Dimensions,
    /// Size given to bedside tables without dimensions.
    pub bedside_table: Dimensions,
    /// Size given to skylights without dimensions.
    pub skylight: Dimensions,
}

impl Default for ObjectDefaults {
    fn default() -> Self {
        Self {
            lamp: DEFAULT_LAMP_DIMENSIONS,
            bedside_table: DEFAULT_BEDSIDE_TABLE_DIMENSIONS,
            skylight: DEFAULT_SKYLIGHT_DIMENSIONS,
        }
    }
}

impl ObjectDefaults {
    /// Returns the default size for `kind`.
    ///
    /// Unknown kinds have no default and get `None`; there is no catch-all
    /// size.
    #[must_use]
    pub fn for_kind(&self, kind: &ObjectKind) -> Option<Dimensions> {
        match kind {
            ObjectKind::Lamp => Some(self.lamp),
            ObjectKind::BedsideTable => Some(self.bedside_table),
            ObjectKind::Skylight => Some(self.skylight),
            ObjectKind::Other(_) => None,
        }
    }
}

// =============================================================================
// Resolver Configuration
// =============================================================================

/// Configuration for the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Size given to rooms without dimensions, and assumed for any parent
    /// that has none.
    pub room_dimensions: Dimensions,
    /// Per-kind object sizes.
    pub objects: ObjectDefaults,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            room_dimensions: DEFAULT_ROOM_DIMENSIONS,
            objects: ObjectDefaults::default(),
        }
    }
}

impl ResolverConfig {
    /// Creates a configuration with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the default room size.
    #[must_use]
    pub fn with_room_dimensions(mut self, dims: impl Into<Dimensions>) -> Self {
        self.room_dimensions = dims.into();
        self
    }

    /// Builder method to replace the object default table.
    #[must_use]
    pub fn with_object_defaults(mut self, objects: ObjectDefaults) -> Self {
        self.objects = objects;
        self
    }

    /// Parses a configuration from JSON, filling unnamed entries with the
    /// built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns a config error if the JSON is malformed, names an unknown
    /// key, or has a triple of the wrong length.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))
    }
}
