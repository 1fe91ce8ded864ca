//! Scroll-reactive site header.
//!
//! Past `scroll_threshold` the header takes its compact "scrolled" look.
//! Past `hide_threshold` it slides away while scrolling down and returns while
//! scrolling up; small jitters under `scroll_delta` change nothing.

use crate::config::HeaderConfig;

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
#[path = "header_test.rs"]
mod header_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "Header";

/// Presentation state to mirror onto the header's classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderClasses {
    pub scrolled: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    last_scroll: f64,
    classes: HeaderClasses,
}

impl HeaderState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn classes(&self) -> HeaderClasses {
        self.classes
    }

    #[must_use]
    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }

    /// Recompute the header state for the current scroll offset.
    pub fn update(&mut self, scroll_y: f64, config: &HeaderConfig) -> HeaderClasses {
        self.classes.scrolled = scroll_y > config.scroll_threshold;

        if scroll_y > config.hide_threshold {
            let delta = scroll_y - self.last_scroll;
            if delta > config.scroll_delta {
                self.classes.hidden = true;
            } else if -delta > config.scroll_delta {
                self.classes.hidden = false;
            }
        } else {
            self.classes.hidden = false;
        }

        self.last_scroll = scroll_y.max(0.0);
        self.classes
    }
}

#[cfg(feature = "hydrate")]
pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let Some(header) = dom::query(".header")? else {
        return Ok(());
    };
    let transparent = header.get_attribute("data-transparent").as_deref() == Some("true");
    let header_config = config.header;
    let state = Rc::new(RefCell::new(HeaderState::new()));

    let apply = move || -> Result<(), SiteError> {
        let classes = state.borrow_mut().update(dom::scroll_y()?, &header_config);
        dom::set_class(&header, "header--scrolled", classes.scrolled)?;
        if transparent {
            dom::set_class(&header, "header--transparent", !classes.scrolled)?;
        }
        dom::set_class(&header, "header--hidden", classes.hidden)
    };
    apply()?;
    on_scroll_coalesced(MODULE, apply)
}
