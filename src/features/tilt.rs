//! Subtle 3-D tilt on service cards following the pointer.

use crate::config::TiltConfig;
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
#[path = "tilt_test.rs"]
mod tilt_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "CardTilt";

pub const CARD_SELECTOR: &str = ".service-card";

/// Rotation in degrees around the Y and X axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_y_deg: f64,
    pub rotate_x_deg: f64,
}

/// Tilt for a pointer over a card: the card turns toward the pointer,
/// reaching `max_angle_deg` at the edges.
#[must_use]
pub fn tilt_angles(pointer: Point, bounds: Bounds, max_angle_deg: f64) -> Tilt {
    let n = bounds.normalized(pointer);
    Tilt { rotate_y_deg: n.x * max_angle_deg, rotate_x_deg: -n.y * max_angle_deg }
}

#[must_use]
pub fn tilt_transform(tilt: Tilt, config: &TiltConfig) -> String {
    format!(
        "perspective({}px) rotateY({}deg) rotateX({}deg) translateY({}px)",
        config.perspective_px, tilt.rotate_y_deg, tilt.rotate_x_deg, config.lift_y_px
    )
}

#[cfg(feature = "hydrate")]
pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
    if !dom::supports_hover() {
        return Ok(());
    }
    let tilt_config = config.tilt;
    let cards = dom::query_all(CARD_SELECTOR)?;
    for card in &cards {
        let moved = card.clone();
        let left = card.clone();
        on_pointer_coalesced(
            card,
            MODULE,
            move |pointer| {
                let bounds = Bounds::from(&moved.get_bounding_client_rect());
                let tilt = tilt_angles(pointer, bounds, tilt_config.max_angle_deg);
                dom::set_style(&moved, "transform", &tilt_transform(tilt, &tilt_config))
            },
            move || dom::clear_style(&left, "transform"),
        )?;
    }
    log::debug!("[KSP] {MODULE}: {} cards", cards.len());
    Ok(())
}
