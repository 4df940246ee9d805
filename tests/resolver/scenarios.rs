//! End-to-end normalization scenarios

use roomgraph_foundation::{Dimensions, Position};
use roomgraph_resolver::{Resolver, ResolverConfig};
use roomgraph_scene::SceneGraph;
use serde_json::{Value, json};

fn normalize(doc: Value) -> SceneGraph {
    let graph: SceneGraph = serde_json::from_value(doc).unwrap();
    Resolver::default().normalized(graph).0
}

fn position_of(graph: &SceneGraph, id: &str) -> Option<[f64; 3]> {
    graph.object(id).and_then(|o| o.position_cm).map(Position::to_array)
}

// =============================================================================
// Rooms
// =============================================================================

#[test]
fn room_without_dimensions_gets_default() {
    let graph = normalize(json!({ "rooms": [{ "id": "room1", "type": "loft" }], "objects": [] }));
    assert_eq!(
        graph.rooms[0].dimensions_cm.map(Dimensions::to_array),
        Some([400.0, 500.0, 300.0])
    );
}

// =============================================================================
// Parametric placement
// =============================================================================

#[test]
fn lamp_is_centered_on_bedside_table() {
    let graph = normalize(json!({
        "rooms": [{ "id": "room1", "type": "loft", "dimensions_cm": [400, 500, 300] }],
        "objects": [
            { "id": "table1", "type": "bedside_table", "parent": "room1", "dimensions_cm": [50, 50, 75] },
            { "id": "lamp1", "type": "lamp", "parent": "table1", "dimensions_cm": [20, 20, 40] }
        ]
    }));

    assert_eq!(position_of(&graph, "lamp1"), Some([15.0, 15.0, 75.0]));
    assert_eq!(position_of(&graph, "table1"), Some([0.0, 0.0, 0.0]));
}

#[test]
fn skylight_is_centered_on_ceiling() {
    let graph = normalize(json!({
        "rooms": [{ "id": "room1", "type": "loft", "dimensions_cm": [400, 500, 300] }],
        "objects": [
            { "id": "skylight1", "type": "skylight", "parent": "room1", "dimensions_cm": [100, 100, 10] }
        ]
    }));

    assert_eq!(position_of(&graph, "skylight1"), Some([150.0, 200.0, 300.0]));
}

#[test]
fn fully_defaulted_cosy_loft() {
    let graph = normalize(json!({
        "rooms": [{ "id": "loft", "type": "loft" }],
        "objects": [
            { "id": "skylight", "type": "skylight", "parent": "loft" },
            { "id": "lamp", "type": "lamp", "shape": "rocket", "parent": "table" },
            { "id": "table", "type": "bedside_table", "parent": "loft" }
        ]
    }));

    assert_eq!(position_of(&graph, "skylight"), Some([150.0, 200.0, 300.0]));
    assert_eq!(position_of(&graph, "lamp"), Some([15.0, 15.0, 75.0]));
    assert_eq!(position_of(&graph, "table"), Some([0.0, 0.0, 0.0]));
    assert_eq!(
        graph.object("lamp").unwrap().dimensions_cm.map(Dimensions::to_array),
        Some([20.0, 20.0, 40.0])
    );
    assert_eq!(graph.object("lamp").unwrap().extra["shape"], json!("rocket"));
}

#[test]
fn unknown_type_stays_unsized_but_is_placed() {
    let graph = normalize(json!({
        "rooms": [{ "id": "room1", "type": "loft" }],
        "objects": [{ "id": "rug1", "type": "rug", "parent": "room1" }]
    }));

    let rug = graph.object("rug1").unwrap();
    assert_eq!(rug.dimensions_cm, None);
    assert_eq!(position_of(&graph, "rug1"), Some([0.0, 0.0, 0.0]));
}

#[test]
fn configured_defaults_replace_builtins() {
    let config = ResolverConfig::from_json_str(
        r#"{ "room_dimensions": [300, 300, 250], "objects": { "skylight": [50, 50, 5] } }"#,
    )
    .unwrap();
    let graph: SceneGraph = serde_json::from_value(json!({
        "rooms": [{ "id": "room1", "type": "bedroom" }],
        "objects": [{ "id": "sky", "type": "skylight", "parent": "room1" }]
    }))
    .unwrap();

    let (graph, _) = Resolver::new(config).normalized(graph);
    assert_eq!(position_of(&graph, "sky"), Some([125.0, 125.0, 250.0]));
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn normalizing_twice_matches_normalizing_once() {
    let doc = json!({
        "rooms": [{ "id": "room1", "type": "loft" }],
        "objects": [
            { "id": "table1", "type": "bedside_table", "parent": "room1" },
            { "id": "lamp1", "type": "lamp", "parent": "table1" },
            { "id": "ghost", "type": "lamp", "parent": "nowhere" },
            { "id": "vase", "type": "vase", "parent": "table1" }
        ]
    });

    let once = normalize(doc);
    let twice = Resolver::default().normalized(once.clone()).0;
    assert_eq!(
        serde_json::to_value(&once).unwrap(),
        serde_json::to_value(&twice).unwrap()
    );
}
