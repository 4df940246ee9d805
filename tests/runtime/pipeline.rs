//! Integration tests for the normalize-then-validate pipeline

use roomgraph_foundation::ErrorKind;
use roomgraph_resolver::Resolver;
use roomgraph_runtime::{Pipeline, SceneValidator, ValidationOutcome};
use roomgraph_scene::{Room, SceneGraph, SceneObject};
use serde_json::Value;

/// Checks the fields the schema marks as required, the way an external
/// validator would report them.
struct RequiredFields;

impl SceneValidator for RequiredFields {
    fn validate(&self, document: &Value, schema: &Value) -> ValidationOutcome {
        let required = schema["properties"]["rooms"]["items"]["required"]
            .as_array()
            .unwrap();
        for room in document["rooms"].as_array().unwrap() {
            for key in required {
                if room.get(key.as_str().unwrap()).is_none() {
                    return ValidationOutcome::invalid(format!("room missing {key}"));
                }
            }
            if room.get("dimensions_cm").is_none() {
                return ValidationOutcome::invalid("room missing dimensions_cm");
            }
        }
        ValidationOutcome::valid()
    }
}

/// Rejects everything.
struct AlwaysInvalid;

impl SceneValidator for AlwaysInvalid {
    fn validate(&self, _document: &Value, _schema: &Value) -> ValidationOutcome {
        ValidationOutcome::invalid("'objects' is a required property")
    }
}

fn scene() -> SceneGraph {
    SceneGraph::new()
        .with_room(Room::new("room1", "loft"))
        .with_object(SceneObject::new("lamp1", "lamp").with_parent("room1"))
}

#[test]
fn normalized_document_passes_validator() {
    let out = Pipeline::new(Resolver::default())
        .with_validator(Box::new(RequiredFields))
        .run(scene())
        .unwrap();
    assert!(out.report.is_clean());
}

#[test]
fn validator_failure_surfaces_message() {
    let err = Pipeline::default()
        .with_validator(Box::new(AlwaysInvalid))
        .run(scene())
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Validation(_)));
    assert!(err.to_string().contains("'objects' is a required property"));
}
