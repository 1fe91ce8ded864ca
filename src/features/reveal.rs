//! One-shot reveal animations for elements scrolled into view.
//!
//! Elements carrying one of the animatable classes start hidden (per the
//! stylesheet); the first time each crosses the viewport it gets `visible`
//! and is never observed again.

use crate::config::ScrollConfig;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "ScrollAnimations";

pub const ANIMATED_SELECTOR: &str = ".fade-in, .fade-in-left, .fade-in-right, .scale-in";
pub const VISIBLE_CLASS: &str = "visible";

/// Intersection settings: fire when `threshold` of the element is visible,
/// with the viewport's bottom edge pulled up by the root margin.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl RevealOptions {
    #[must_use]
    pub fn from_config(config: &ScrollConfig) -> Self {
        Self { threshold: config.reveal_threshold.clamp(0.0, 1.0), root_margin: config.reveal_root_margin.clone() }
    }
}

#[cfg(feature = "hydrate")]
pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let elements = dom::query_all(ANIMATED_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }
    let options = RevealOptions::from_config(&config.scroll);
    dom::observe_once(MODULE, &elements, options.threshold, Some(&options.root_margin), |el| {
        dom::set_class(el, VISIBLE_CLASS, true)?;
        dom::set_style(el, "will-change", "auto")
    })?;
    log::debug!("[KSP] {MODULE}: observing {} elements", elements.len());
    Ok(())
}
