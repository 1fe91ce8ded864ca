//! Smooth scrolling for same-page anchor links, offset by the fixed header.

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "SmoothScroll";

/// Where a same-page link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// `#` or `#top`: the document origin.
    Top,
    /// `#<id>`: the element with that id, if any.
    Element(&'a str),
}

impl<'a> AnchorTarget<'a> {
    /// Classify an `href`. Returns `None` for anything but a fragment.
    #[must_use]
    pub fn parse(href: &'a str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        match id {
            "" | "top" => Some(Self::Top),
            id => Some(Self::Element(id)),
        }
    }
}

/// Document-space scroll offset that puts a target just below the header.
///
/// `target_top` is the target's viewport-relative top edge. A missing or
/// zero-height header falls back to `fallback_header_height`.
#[must_use]
pub fn scroll_destination(target_top: f64, scroll_y: f64, header_height: Option<f64>, fallback_header_height: f64) -> f64 {
    let header = header_height.filter(|h| *h > 0.0).unwrap_or(fallback_header_height);
    target_top + scroll_y - header
}

/// What a click on a same-page link should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollPlan {
    /// Leave the click to the browser's default navigation.
    PassThrough,
    /// Cancel the click and smooth-scroll to this document offset.
    ScrollTo(f64),
}

/// Plan the click on a link with `href`.
///
/// `find` looks up an element id and returns its viewport-relative top edge.
/// `header_height` is only consulted when a target exists.
pub fn plan_click<F, H>(href: &str, find: F, scroll_y: f64, header_height: H, fallback_header_height: f64) -> ScrollPlan
where
    F: FnOnce(&str) -> Option<f64>,
    H: FnOnce() -> Option<f64>,
{
    match AnchorTarget::parse(href) {
        None => ScrollPlan::PassThrough,
        Some(AnchorTarget::Top) => ScrollPlan::ScrollTo(0.0),
        Some(AnchorTarget::Element(id)) => find(id).map_or(ScrollPlan::PassThrough, |top| {
            ScrollPlan::ScrollTo(scroll_destination(top, scroll_y, header_height(), fallback_header_height))
        }),
    }
}

#[cfg(feature = "hydrate")]
pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let links = dom::query_all(r##"a[href^="#"]"##)?;
    let fallback = config.smooth_scroll.fallback_header_height;

    for link in &links {
        let anchor = link.clone();
        dom::listen(link, "click", MODULE, move |ev| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let document = dom::document()?;
            let plan = plan_click(
                &href,
                |id| document.get_element_by_id(id).map(|target| target.get_bounding_client_rect().top()),
                dom::scroll_y()?,
                || document.query_selector(".header").unwrap_or(None).as_ref().and_then(dom::offset_height),
                fallback,
            );
            match plan {
                ScrollPlan::PassThrough => Ok(()),
                ScrollPlan::ScrollTo(top) => {
                    ev.prevent_default();
                    dom::scroll_to_smooth(top)
                }
            }
        })?;
    }
    log::debug!("[KSP] {MODULE}: {} anchor links", links.len());
    Ok(())
}
