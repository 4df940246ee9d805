//! JSON schema for scene documents.
//!
//! This is the contract shared with the external collaborators: the
//! generator is asked to produce documents matching it, and the validator
//! checks normalized documents against it. Nothing in this workspace
//! evaluates the schema.

use serde_json::{Value, json};

/// Name of the generator function in the function-calling envelope.
pub const GENERATOR_FUNCTION_NAME: &str = "generate_scene_graph";

/// Returns the JSON schema for a scene document.
///
/// Rooms require `id` and `type`; objects require `id`, `type`, and
/// `parent`. Geometry arrays are optional so the same schema accepts
/// documents before and after normalization.
#[must_use]
pub fn scene_graph_schema() -> Value {
    let triple = |description: &str| {
        json!({
            "type": "array",
            "description": description,
            "items": { "type": "number" },
            "minItems": 3,
            "maxItems": 3
        })
    };

    json!({
        "type": "object",
        "properties": {
            "rooms": {
                "type": "array",
                "description": "List of rooms in the scene.",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Unique room identifier" },
                        "type": { "type": "string", "description": "Type of room (e.g., loft, bedroom)" },
                        "dimensions_cm": triple("Dimensions in cm: width, length, height")
                    },
                    "required": ["id", "type"]
                }
            },
            "objects": {
                "type": "array",
                "description": "List of objects in the scene",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Object identifier" },
                        "type": { "type": "string", "description": "Object type (e.g., table, lamp)" },
                        "shape": { "type": "string", "description": "Shape of object if applicable (e.g., rocket)" },
                        "parent": { "type": "string", "description": "Parent object or room" },
                        "position_cm": triple("Position in cm: x, y, z"),
                        "dimensions_cm": triple("Dimensions in cm: width, depth, height")
                    },
                    "required": ["id", "type", "parent"]
                }
            }
        },
        "required": ["rooms", "objects"]
    })
}

/// Returns the function-calling envelope handed to the scene generator.
#[must_use]
pub fn generator_function_spec() -> Value {
    json!({
        "name": GENERATOR_FUNCTION_NAME,
        "description": "Parses a scene prompt into a rigid scene graph JSON.",
        "parameters": scene_graph_schema()
    })
}
