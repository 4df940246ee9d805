//! Integration tests for geometry value types

use roomgraph_foundation::{Dimensions, Position};

#[test]
fn dimensions_keep_width_length_height_order() {
    let dims: Dimensions = [400.0, 500.0, 300.0].into();
    assert_eq!((dims.width, dims.length, dims.height), (400.0, 500.0, 300.0));
    let back: [f64; 3] = dims.into();
    assert_eq!(back, [400.0, 500.0, 300.0]);
}

#[test]
fn position_keeps_xyz_order() {
    let pos: Position = [15.0, 15.0, 75.0].into();
    assert_eq!((pos.x, pos.y, pos.z), (15.0, 15.0, 75.0));
}

#[test]
fn zero_and_origin_constants() {
    assert_eq!(Dimensions::ZERO, Dimensions::default());
    assert_eq!(Position::ORIGIN, Position::new(0.0, 0.0, 0.0));
}
