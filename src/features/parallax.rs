//! Hero background parallax.
//!
//! Skipped on touch devices and under reduced motion. Updates stop once the
//! hero has scrolled out; the image keeps its last in-range offset.

use crate::config::ParallaxConfig;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;
#[cfg(feature = "hydrate")]
use crate::util::frame::on_scroll_coalesced;

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "Parallax";

#[derive(Debug, Clone, Default)]
pub struct ParallaxState {
    offset: Option<f64>,
}

impl ParallaxState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied translation, if any.
    #[must_use]
    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    /// New translation for `scroll_y`, or `None` when the hero is out of
    /// range and nothing should change.
    pub fn update(&mut self, scroll_y: f64, hero_height: f64, config: &ParallaxConfig) -> Option<f64> {
        if scroll_y > hero_height {
            return None;
        }
        let offset = scroll_y * config.factor;
        self.offset = Some(offset);
        Some(offset)
    }
}

#[must_use]
pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

#[cfg(feature = "hydrate")]
pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let Some(image) = dom::query(".hero__bg-image")? else {
        return Ok(());
    };
    if dom::has_touch() || dom::prefers_reduced_motion() {
        return Ok(());
    }
    let parallax = config.parallax;
    let state = Rc::new(RefCell::new(ParallaxState::new()));

    on_scroll_coalesced(MODULE, move || {
        let hero_height = dom::query(".hero")?
            .as_ref()
            .and_then(dom::offset_height)
            .filter(|h| *h > 0.0)
            .unwrap_or(parallax.fallback_hero_height);
        match state.borrow_mut().update(dom::scroll_y()?, hero_height, &parallax) {
            Some(offset) => dom::set_style(&image, "transform", &parallax_transform(offset)),
            None => Ok(()),
        }
    })
}
