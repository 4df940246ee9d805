//! Integration tests for the scene document model

use roomgraph_foundation::Dimensions;
use roomgraph_scene::schema::scene_graph_schema;
use roomgraph_scene::{ObjectKind, SceneGraph};
use serde_json::json;

#[test]
fn generator_style_document_parses() {
    let doc = json!({
        "rooms": [{ "id": "room1", "type": "loft" }],
        "objects": [
            { "id": "skylight1", "type": "skylight", "parent": "room1" },
            { "id": "table1", "type": "bedside_table", "parent": "room1" },
            { "id": "lamp1", "type": "lamp", "shape": "rocket", "parent": "table1" }
        ]
    });

    let graph: SceneGraph = serde_json::from_value(doc).unwrap();
    assert_eq!(graph.rooms.len(), 1);
    assert_eq!(graph.objects.len(), 3);
    assert_eq!(graph.object("lamp1").unwrap().kind, ObjectKind::Lamp);
    assert_eq!(graph.object("lamp1").unwrap().extra["shape"], json!("rocket"));
}

#[test]
fn unknown_type_round_trips_verbatim() {
    let doc = json!({ "rooms": [], "objects": [{ "id": "r", "type": "Rocket_Lamp", "parent": "x" }] });
    let graph: SceneGraph = serde_json::from_value(doc.clone()).unwrap();
    assert_eq!(graph.objects[0].kind, ObjectKind::Other("Rocket_Lamp".to_string()));
    assert_eq!(serde_json::to_value(&graph).unwrap(), doc);
}

#[test]
fn float_dimensions_are_accepted() {
    let doc = json!({ "rooms": [{ "id": "r", "type": "loft", "dimensions_cm": [400.5, 500, 300.25] }] });
    let graph: SceneGraph = serde_json::from_value(doc).unwrap();
    assert_eq!(graph.rooms[0].dimensions_cm, Some(Dimensions::new(400.5, 500.0, 300.25)));
}

#[test]
fn schema_marks_parent_required_for_objects() {
    let schema = scene_graph_schema();
    let required = &schema["properties"]["objects"]["items"]["required"];
    assert!(required.as_array().unwrap().contains(&json!("parent")));
}
