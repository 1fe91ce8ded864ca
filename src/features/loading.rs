//! Loading splash that stays up until the page has loaded *and* the bar
//! animation has had time to finish.
//!
//! A fallback timer forces the splash away so it can never block the page.
//! Under reduced motion the splash is dismissed immediately.

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

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "LoadingScreen";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    #[default]
    Pending,
    BarFilling,
    Loaded,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingSignal {
    /// The window `load` event fired.
    PageLoaded,
    /// The minimum display time elapsed.
    MinDurationElapsed,
    /// The hard fallback timeout elapsed.
    FallbackTimeout,
}

/// AND-join of "page loaded" and "animation done", with a fallback override.
#[derive(Debug, Clone, Default)]
pub struct LoadingGate {
    phase: LoadingPhase,
    page_loaded: bool,
    animation_done: bool,
}

impl LoadingGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    /// Start the splash. Returns `true` when it should be dismissed at once.
    pub fn begin(&mut self, reduced_motion: bool) -> bool {
        if self.phase != LoadingPhase::Pending {
            return false;
        }
        if reduced_motion {
            self.phase = LoadingPhase::Loaded;
            return true;
        }
        self.phase = LoadingPhase::BarFilling;
        false
    }

    /// Feed one signal. Returns `true` exactly once: on the transition to
    /// [`LoadingPhase::Loaded`].
    pub fn signal(&mut self, signal: LoadingSignal) -> bool {
        if self.phase != LoadingPhase::BarFilling {
            return false;
        }
        match signal {
            LoadingSignal::PageLoaded => self.page_loaded = true,
            LoadingSignal::MinDurationElapsed => self.animation_done = true,
            LoadingSignal::FallbackTimeout => {
                self.phase = LoadingPhase::Loaded;
                return true;
            }
        }
        if self.page_loaded && self.animation_done {
            self.phase = LoadingPhase::Loaded;
            return true;
        }
        false
    }

    /// Record that the splash element has been detached.
    pub fn mark_removed(&mut self) {
        if self.phase == LoadingPhase::Loaded {
            self.phase = LoadingPhase::Removed;
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let Some(screen) = dom::query(".loading-screen")? else {
        return Ok(());
    };
    let remove_delay = config.loading.remove_delay_ms;
    let gate = Rc::new(RefCell::new(LoadingGate::new()));

    if gate.borrow_mut().begin(dom::prefers_reduced_motion()) {
        return finish(&screen, &gate, remove_delay);
    }

    let document = dom::document()?;
    if document.ready_state() == "complete" {
        advance(&screen, &gate, LoadingSignal::PageLoaded, remove_delay)?;
    } else {
        let screen = screen.clone();
        let gate = Rc::clone(&gate);
        dom::listen(dom::window()?.as_ref(), "load", MODULE, move |_ev| {
            advance(&screen, &gate, LoadingSignal::PageLoaded, remove_delay)
        })?;
    }

    for (delay, signal) in [
        (config.loading.min_display_ms, LoadingSignal::MinDurationElapsed),
        (config.loading.fallback_timeout_ms, LoadingSignal::FallbackTimeout),
    ] {
        let screen = screen.clone();
        let gate = Rc::clone(&gate);
        dom::after(delay, MODULE, move || advance(&screen, &gate, signal, remove_delay));
    }
    log::debug!("[KSP] {MODULE}: waiting for load");
    Ok(())
}

#[cfg(feature = "hydrate")]
fn advance(
    screen: &web_sys::Element,
    gate: &Rc<RefCell<LoadingGate>>,
    signal: LoadingSignal,
    remove_delay: u32,
) -> Result<(), SiteError> {
    let loaded = gate.borrow_mut().signal(signal);
    if loaded { finish(screen, gate, remove_delay) } else { Ok(()) }
}

#[cfg(feature = "hydrate")]
fn finish(screen: &web_sys::Element, gate: &Rc<RefCell<LoadingGate>>, remove_delay: u32) -> Result<(), SiteError> {
    dom::set_class(screen, "loaded", true)?;
    let screen = screen.clone();
    let gate = Rc::clone(gate);
    dom::after(remove_delay, MODULE, move || {
        screen.remove();
        gate.borrow_mut().mark_removed();
        Ok(())
    });
    Ok(())
}
