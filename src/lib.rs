//! # ksp-site
//!
//! Interactive behavior for the KSP corporate site, compiled to WebAssembly.
//! The pages themselves are static HTML styled by an external stylesheet;
//! this crate only toggles classes, ARIA attributes and inline styles on
//! markup that already exists.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`boot`] | Failure-isolated initializer registry |
//! | [`config`] | Immutable tuning parameters, with JSON overrides |
//! | [`error`] | [`error::SiteError`] |
//! | [`features`] | The fourteen page features |
//! | [`util`] | Frame coalescing, number formatting, DOM glue |
//!
//! Every feature keeps its decisions in plain Rust types that build and test
//! natively; the `hydrate` feature adds the `web_sys` wiring around them.

pub mod boot;
pub mod config;
pub mod error;
pub mod features;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: runs the initializer once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Ok(document) = util::dom::document() else {
        return;
    };
    // The logger passes everything; the max level does the filtering.
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("[KSP] console logger unavailable: {err}").into());
    }

    let (config, rejected) = config::SiteConfig::from_document(&document);
    log::set_max_level(config.log_level().to_level_filter());
    if let Some(err) = rejected {
        log::warn!("[KSP] ignoring #{}: {err}", crate::config::CONFIG_ELEMENT_ID);
    }

    if document.ready_state() == "loading" {
        let mut pending = Some(config);
        let wired = util::dom::listen(&document, "DOMContentLoaded", "Boot", move |_ev| {
            if let Some(config) = pending.take() {
                boot::init_page(&config);
            }
            Ok(())
        });
        if let Err(err) = wired {
            log::warn!("[KSP] could not wait for DOMContentLoaded: {err}");
        }
    } else {
        boot::init_page(&config);
    }
}
