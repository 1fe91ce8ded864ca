#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn center_is_flat() {
    let bounds = Bounds::new(0.0, 0.0, 300.0, 200.0);
    let tilt = tilt_angles(bounds.center(), bounds, 5.0);
    assert_eq!(tilt.rotate_y_deg, 0.0);
    assert_eq!(tilt.rotate_x_deg, 0.0);
}

#[test]
fn corners_reach_half_the_max_angle_range() {
    let bounds = Bounds::new(0.0, 0.0, 300.0, 200.0);
    let top_right = tilt_angles(Point::new(300.0, 0.0), bounds, 5.0);
    assert_eq!(top_right, Tilt { rotate_y_deg: 2.5, rotate_x_deg: 2.5 });
    let bottom_left = tilt_angles(Point::new(0.0, 200.0), bounds, 5.0);
    assert_eq!(bottom_left, Tilt { rotate_y_deg: -2.5, rotate_x_deg: -2.5 });
}

#[test]
fn transform_includes_perspective_and_lift() {
    let css = tilt_transform(Tilt { rotate_y_deg: 1.0, rotate_x_deg: -2.0 }, &TiltConfig::default());
    assert_eq!(css, "perspective(800px) rotateY(1deg) rotateX(-2deg) translateY(-6px)");
}
