#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn center_of_bounds() {
    let b = Bounds::new(100.0, 50.0, 200.0, 40.0);
    assert_eq!(b.center(), Point::new(200.0, 70.0));
}

#[test]
fn offset_from_center_is_signed() {
    let b = Bounds::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(b.offset_from_center(Point::new(80.0, 10.0)), Point::new(30.0, -40.0));
}

#[test]
fn normalized_spans_half_unit_each_way() {
    let b = Bounds::new(10.0, 10.0, 100.0, 50.0);
    assert_eq!(b.normalized(Point::new(10.0, 10.0)), Point::new(-0.5, -0.5));
    assert_eq!(b.normalized(Point::new(110.0, 60.0)), Point::new(0.5, 0.5));
    assert_eq!(b.normalized(Point::new(60.0, 35.0)), Point::new(0.0, 0.0));
}

#[test]
fn degenerate_bounds_normalize_to_zero() {
    let b = Bounds::new(10.0, 10.0, 0.0, 0.0);
    assert_eq!(b.normalized(Point::new(50.0, 50.0)), Point::default());
}
