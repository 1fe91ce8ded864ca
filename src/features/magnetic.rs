//! "Magnetic" call-to-action buttons that lean toward the pointer.
//!
//! Hover-capable devices only; on touch screens the buttons stay put.

use crate::util::geometry::{Bounds, Point};

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;
#[cfg(feature = "hydrate")]
use crate::util::frame::on_pointer_coalesced;

#[cfg(test)]
#[path = "magnetic_test.rs"]
mod magnetic_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "MagneticButtons";

pub const BUTTON_SELECTOR: &str = ".btn--primary, .btn--outline";

/// Translation for a button: `strength` times the pointer's offset from the
/// button center, on both axes.
#[must_use]
pub fn magnetic_offset(pointer: Point, bounds: Bounds, strength: f64) -> Point {
    let d = bounds.offset_from_center(pointer);
    Point::new(d.x * strength, d.y * strength)
}

#[must_use]
pub fn magnetic_transform(offset: Point) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

#[cfg(feature = "hydrate")]
pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
    if !dom::supports_hover() {
        return Ok(());
    }
    let strength = config.magnetic.strength;
    let buttons = dom::query_all(BUTTON_SELECTOR)?;
    for button in &buttons {
        let moved = button.clone();
        let left = button.clone();
        on_pointer_coalesced(
            button,
            MODULE,
            move |pointer| {
                let bounds = Bounds::from(&moved.get_bounding_client_rect());
                dom::set_style(&moved, "transform", &magnetic_transform(magnetic_offset(pointer, bounds, strength)))
            },
            move || dom::clear_style(&left, "transform"),
        )?;
    }
    log::debug!("[KSP] {MODULE}: {} buttons", buttons.len());
    Ok(())
}
