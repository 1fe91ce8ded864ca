//! Page initializer: runs every feature once, each behind its own failure
//! boundary, in a fixed order.
//!
//! ARCHITECTURE
//! ============
//! Features never call each other. The only things they share are the
//! immutable [`SiteConfig`] and the page markup, so one feature failing to
//! wire up leaves the rest of the page fully enhanced.

use crate::config::SiteConfig;
use crate::error::SiteError;

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

/// A feature entry point.
pub type InitFn = fn(&SiteConfig) -> Result<(), SiteError>;

/// Outcome of one [`run_all`] pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub initialized: Vec<&'static str>,
    pub failed: Vec<(&'static str, String)>,
}

impl InitReport {
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run `init`; on error log a warning tagged with `name` and carry on.
///
/// Returns whether the initializer succeeded.
pub fn safe_init<F>(name: &str, init: F) -> bool
where
    F: FnOnce() -> Result<(), SiteError>,
{
    match init() {
        Ok(()) => true,
        Err(err) => {
            log::warn!("[KSP] {name} initialization failed: {err}");
            false
        }
    }
}

/// Run every entry of `registry` in order, isolating failures.
pub fn run_all(registry: &[(&'static str, InitFn)], config: &SiteConfig) -> InitReport {
    let mut report = InitReport::default();
    for &(name, init) in registry {
        let mut failure = None;
        let ok = safe_init(name, || {
            init(config).inspect_err(|err| failure = Some(err.to_string()))
        });
        if ok {
            report.initialized.push(name);
        } else {
            report.failed.push((name, failure.unwrap_or_default()));
        }
    }
    report
}

/// Production registry, in initialization order.
#[cfg(feature = "hydrate")]
pub const MODULES: [(&str, InitFn); 14] = {
    use crate::features::*;
    [
        ("LoadingScreen", loading::init),
        ("Header", header::init),
        ("Hamburger", drawer::init),
        ("ScrollAnimations", reveal::init),
        ("SmoothScroll", smooth_scroll::init),
        ("CurrentNav", active_nav::init),
        ("BackToTop", back_to_top::init),
        ("CounterAnimation", counter::init),
        ("ContactForm", contact::init),
        ("MagneticButtons", magnetic::init),
        ("PageTransition", transition::init),
        ("CardTilt", tilt::init),
        ("FAQAccordion", faq::init),
        ("Parallax", parallax::init),
    ]
};

/// Run the production registry once.
#[cfg(feature = "hydrate")]
pub fn init_page(config: &SiteConfig) -> InitReport {
    let report = run_all(&MODULES, config);
    log::debug!(
        "[KSP] initialized {} modules, {} failed",
        report.initialized.len(),
        report.failed.len()
    );
    report
}
