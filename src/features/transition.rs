//! Page-transition curtain for navigation between site pages.
//!
//! Internal page links are delayed while an overlay wipes up from the bottom;
//! when a page is shown again from history the overlay wipes away upward.
//! The overlay element is only created on the first intercepted click.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Element, MouseEvent};

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "PageTransition";

pub const OVERLAY_CLASS: &str = "page-transition";

pub const COVER_EASING: &str = "cubic-bezier(0.65, 0, 0.35, 1)";

/// Inline styles that cover the viewport before leaving the page. The wipe
/// lasts as long as the navigation delay.
#[must_use]
pub fn cover_styles(duration_ms: u32) -> [(&'static str, String); 3] {
    [
        ("transform-origin", "bottom".to_owned()),
        ("transform", "scaleY(1)".to_owned()),
        ("transition", format!("transform {duration_ms}ms {COVER_EASING}")),
    ]
}

/// Inline styles that uncover the page after history navigation.
pub const REVEAL_STYLES: [(&str, &str); 2] = [("transform-origin", "top"), ("transform", "scaleY(0)")];

/// Whether a click on a link should play the transition before navigating.
///
/// Only relative links to site pages qualify: fragments, `tel:`, `mailto:`,
/// links to other origins and links opening a new tab are left alone.
#[must_use]
pub fn is_transition_link(href: &str, target: Option<&str>) -> bool {
    if href.is_empty() || target == Some("_blank") {
        return false;
    }
    if href.starts_with('#') || href.starts_with("tel:") || href.starts_with("mailto:") {
        return false;
    }
    if href.starts_with("//") || href.contains("://") {
        return false;
    }
    href.ends_with(".html") || href == "/"
}

#[cfg(feature = "hydrate")]
#[derive(Default)]
struct Overlay {
    el: RefCell<Option<Element>>,
}

#[cfg(feature = "hydrate")]
impl Overlay {
    fn ensure(&self) -> Result<Element, SiteError> {
        if let Some(el) = self.el.borrow().as_ref() {
            return Ok(el.clone());
        }
        let document = dom::document()?;
        let el = document.create_element("div")?;
        el.set_class_name(OVERLAY_CLASS);
        if let Some(body) = document.body() {
            body.append_child(&el)?;
        }
        *self.el.borrow_mut() = Some(el.clone());
        Ok(el)
    }

    fn existing(&self) -> Option<Element> {
        self.el.borrow().clone()
    }
}

#[cfg(feature = "hydrate")]
fn apply_styles<V: AsRef<str>>(el: &Element, styles: &[(&str, V)]) -> Result<(), SiteError> {
    for (property, value) in styles {
        dom::set_style(el, property, value.as_ref())?;
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let overlay = Rc::new(Overlay::default());
    let duration_ms = config.transition.duration_ms;
    let cover = cover_styles(duration_ms);

    let on_click = Rc::clone(&overlay);
    dom::listen(dom::document()?.as_ref(), "click", MODULE, move |ev| {
        if ev.default_prevented() {
            return Ok(());
        }
        if let Some(mouse) = ev.dyn_ref::<MouseEvent>()
            && (mouse.ctrl_key() || mouse.meta_key() || mouse.shift_key() || mouse.button() != 0)
        {
            return Ok(());
        }
        let Some(origin) = ev.target().and_then(|t| t.dyn_ref::<Element>().cloned()) else {
            return Ok(());
        };
        let Some(link) = origin.closest("a[href]")? else {
            return Ok(());
        };
        let href = link.get_attribute("href").unwrap_or_default();
        if !is_transition_link(&href, link.get_attribute("target").as_deref()) {
            return Ok(());
        }

        ev.prevent_default();
        apply_styles(&on_click.ensure()?, &cover)?;
        dom::after(duration_ms, MODULE, move || {
            dom::window()?.location().set_href(&href)?;
            Ok(())
        });
        Ok(())
    })?;

    dom::listen(dom::window()?.as_ref(), "pageshow", MODULE, move |_ev| match overlay.existing() {
        Some(el) => apply_styles(&el, &REVEAL_STYLES),
        None => Ok(()),
    })
}
