#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

#[test]
fn pointer_at_center_gives_no_offset() {
    let bounds = Bounds::new(100.0, 100.0, 200.0, 60.0);
    assert_eq!(magnetic_offset(bounds.center(), bounds, 0.15), Point::new(0.0, 0.0));
}

#[test]
fn offset_scales_displacement_on_both_axes() {
    let bounds = Bounds::new(0.0, 0.0, 200.0, 60.0);
    let offset = magnetic_offset(Point::new(200.0, 0.0), bounds, 0.15);
    assert!((offset.x - 15.0).abs() < EPSILON);
    assert!((offset.y + 4.5).abs() < EPSILON);
}

#[test]
fn transform_is_a_translate() {
    assert_eq!(magnetic_transform(Point::new(3.0, -1.5)), "translate(3px, -1.5px)");
}
