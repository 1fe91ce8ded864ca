//! Floating "back to top" button shown once the reader is well down the page.

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;
#[cfg(feature = "hydrate")]
use crate::util::frame::on_scroll_coalesced;

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "BackToTop";

#[must_use]
pub fn is_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(feature = "hydrate")]
pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let Some(button) = dom::query(".back-to-top")? else {
        return Ok(());
    };
    let threshold = config.scroll.back_to_top_threshold;

    let shown = button.clone();
    on_scroll_coalesced(MODULE, move || dom::set_class(&shown, "visible", is_visible(dom::scroll_y()?, threshold)))?;
    dom::listen(&button, "click", MODULE, |_ev| dom::scroll_to_smooth(0.0))
}
