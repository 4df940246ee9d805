//! Integration tests for unresolved-parent diagnostics

use roomgraph_resolver::{Diagnostic, DiagnosticFormatter, HumanFormatter, Resolver};
use roomgraph_scene::SceneGraph;
use serde_json::json;

#[test]
fn missing_parent_leaves_no_position_and_one_warning() {
    let mut graph: SceneGraph = serde_json::from_value(json!({
        "rooms": [{ "id": "room1", "type": "loft" }],
        "objects": [{ "id": "lamp1", "type": "lamp", "parent": "nonexistent_parent" }]
    }))
    .unwrap();

    let report = Resolver::default().normalize(&mut graph);

    assert_eq!(graph.objects[0].position_cm, None);
    assert_eq!(report.diagnostics.len(), 1);

    let text = HumanFormatter.format_many(&report.diagnostics);
    assert!(text.contains("Parent 'nonexistent_parent' not found for object 'lamp1'"));
}

#[test]
fn failures_are_isolated_per_object() {
    let mut graph: SceneGraph = serde_json::from_value(json!({
        "rooms": [{ "id": "room1", "type": "loft" }],
        "objects": [
            { "id": "a", "type": "lamp", "parent": "x" },
            { "id": "b", "type": "skylight", "parent": "room1" },
            { "id": "c", "type": "bedside_table", "parent": "y" }
        ]
    }))
    .unwrap();

    let report = Resolver::default().normalize(&mut graph);

    assert_eq!(
        report.diagnostics,
        vec![
            Diagnostic::unresolved_parent("a", Some("x")),
            Diagnostic::unresolved_parent("c", Some("y")),
        ]
    );
    assert!(graph.objects[1].position_cm.is_some());
    // Dimensions are filled even when placement fails.
    assert!(graph.objects[0].dimensions_cm.is_some());
    assert!(graph.objects[2].dimensions_cm.is_some());
}

#[test]
fn diagnostics_serialize_with_both_ids() {
    let d = Diagnostic::unresolved_parent("lamp1", Some("nonexistent_parent"));
    let value = serde_json::to_value(&d).unwrap();
    assert_eq!(value["object_id"], json!("lamp1"));
    assert_eq!(value["parent_id"], json!("nonexistent_parent"));
}
