//! Page features, one module each.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every module exposes an `init(&SiteConfig) -> Result<(), SiteError>` entry
//! point (browser builds only) registered in [`crate::boot`]. The state and
//! math each feature needs live in plain types beside it so they can be
//! tested without a browser. A missing element is not an error: `init`
//! returns `Ok(())` and the feature stays dormant.

pub mod active_nav;
pub mod back_to_top;
pub mod contact;
pub mod counter;
pub mod drawer;
pub mod faq;
pub mod header;
pub mod loading;
pub mod magnetic;
pub mod parallax;
pub mod reveal;
pub mod smooth_scroll;
pub mod tilt;
pub mod transition;
