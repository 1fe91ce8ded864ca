//! Viewport-space points and element bounds for pointer effects.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in CSS pixels, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.left + self.width * 0.5, y: self.top + self.height * 0.5 }
    }

    /// Displacement of `p` from the center.
    #[must_use]
    pub fn offset_from_center(&self, p: Point) -> Point {
        let c = self.center();
        Point { x: p.x - c.x, y: p.y - c.y }
    }

    /// Position of `p` within the box, each axis in `-0.5..=0.5` for points
    /// inside. A degenerate axis reads as `0.0`.
    #[must_use]
    pub fn normalized(&self, p: Point) -> Point {
        let axis = |offset: f64, size: f64| if size > 0.0 { offset / size - 0.5 } else { 0.0 };
        Point { x: axis(p.x - self.left, self.width), y: axis(p.y - self.top, self.height) }
    }
}

#[cfg(feature = "hydrate")]
impl From<&web_sys::DomRect> for Bounds {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
    }
}
