//! Frame-aligned coalescing for high-frequency events.
//!
//! A scroll or pointer burst may fire many events per rendered frame; the
//! gate lets exactly one `requestAnimationFrame` callback be pending at a time.

use std::cell::Cell;
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

/// Shared "frame pending" flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    pending: Rc<Cell<bool>>,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next frame. Returns `false` if one is already scheduled.
    pub fn try_acquire(&self) -> bool {
        if self.pending.get() {
            return false;
        }
        self.pending.set(true);
        true
    }

    /// Mark the scheduled frame as handled.
    pub fn release(&self) {
        self.pending.set(false);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Run `handler` at most once per animation frame while the window scrolls.
#[cfg(feature = "hydrate")]
pub fn on_scroll_coalesced<F>(module: &'static str, handler: F) -> Result<(), SiteError>
where
    F: FnMut() -> Result<(), SiteError> + 'static,
{
    let window = dom::window()?;
    let gate = FrameGate::new();
    let handler = Rc::new(RefCell::new(handler));
    dom::listen_passive(&window, "scroll", module, move |_ev| {
        if !gate.try_acquire() {
            return Ok(());
        }
        let gate = gate.clone();
        let handler = Rc::clone(&handler);
        let frame_gate = gate.clone();
        let scheduled = dom::request_frame(module, move |_ts| {
            frame_gate.release();
            (handler.borrow_mut())()
        });
        if scheduled.is_err() {
            gate.release();
        }
        scheduled
    })
}

/// Track the pointer over `el`, calling `on_move` at most once per frame
/// with the latest position. A frame still pending when the pointer leaves
/// is dropped, so `on_leave` always has the last word.
#[cfg(feature = "hydrate")]
pub fn on_pointer_coalesced<M, L>(
    el: &web_sys::Element,
    module: &'static str,
    on_move: M,
    mut on_leave: L,
) -> Result<(), SiteError>
where
    M: FnMut(crate::util::geometry::Point) -> Result<(), SiteError> + 'static,
    L: FnMut() -> Result<(), SiteError> + 'static,
{
    use wasm_bindgen::JsCast;

    use crate::util::geometry::Point;

    let gate = FrameGate::new();
    let latest = Rc::new(Cell::new(None::<Point>));
    let on_move = Rc::new(RefCell::new(on_move));

    let move_latest = Rc::clone(&latest);
    dom::listen_passive(el, "mousemove", module, move |ev| {
        let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else {
            return Ok(());
        };
        move_latest.set(Some(Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))));
        if !gate.try_acquire() {
            return Ok(());
        }
        let gate = gate.clone();
        let latest = Rc::clone(&move_latest);
        let on_move = Rc::clone(&on_move);
        let frame_gate = gate.clone();
        let scheduled = dom::request_frame(module, move |_ts| {
            frame_gate.release();
            match latest.get() {
                Some(point) => (on_move.borrow_mut())(point),
                None => Ok(()),
            }
        });
        if scheduled.is_err() {
            gate.release();
        }
        scheduled
    })?;

    dom::listen_passive(el, "mouseleave", module, move |_ev| {
        latest.set(None);
        on_leave()
    })
}
