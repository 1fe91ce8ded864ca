//! Mobile navigation drawer behind the hamburger button.
//!
//! While open, the page behind is pinned with `body { top: -<offset>px }`
//! rather than `overflow: hidden`, so the visual scroll position survives,
//! and keyboard focus is trapped inside the drawer.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Element, HtmlElement, KeyboardEvent};

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "Hamburger";

/// Elements that take part in the focus trap.
pub const FOCUSABLE_SELECTOR: &str = r#"a[href], button, input, textarea, select, [tabindex]:not([tabindex="-1"])"#;

/// What a keydown should do while the drawer is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction<E> {
    Ignore,
    Close,
    /// Cancel the default tab move and focus this element instead.
    Focus(E),
}

/// Open/closed state plus what is needed to undo opening.
///
/// `E` is the focusable handle type (`web_sys::Element` in the browser).
#[derive(Debug, Clone)]
pub struct Drawer<E> {
    open: bool,
    saved_scroll: f64,
    focusables: Option<Vec<E>>,
}

impl<E> Default for Drawer<E> {
    fn default() -> Self {
        Self { open: false, saved_scroll: 0.0, focusables: None }
    }
}

impl<E: Clone + PartialEq> Drawer<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open at `scroll_y`, keeping an ordered snapshot of the focusables
    /// (the trigger first, then the drawer contents).
    pub fn open(&mut self, scroll_y: f64, focusables: Vec<E>) {
        self.open = true;
        self.saved_scroll = scroll_y;
        self.focusables = Some(focusables);
    }

    /// Close and return the scroll offset to restore, or `None` if the
    /// drawer was not open.
    pub fn close(&mut self) -> Option<f64> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.focusables = None;
        Some(self.saved_scroll)
    }

    /// Inline `top` for `<body>` while the page is pinned.
    #[must_use]
    pub fn body_offset(&self) -> String {
        format!("-{}px", self.saved_scroll)
    }

    /// Decide how to handle a key press. `refresh` supplies a fresh focusable
    /// list if the snapshot is missing.
    pub fn on_key<R>(&self, key: &str, shift: bool, active: Option<&E>, refresh: R) -> KeyAction<E>
    where
        R: FnOnce() -> Vec<E>,
    {
        if !self.open {
            return KeyAction::Ignore;
        }
        match key {
            "Escape" => KeyAction::Close,
            "Tab" => {
                let fresh;
                let list = if let Some(list) = &self.focusables {
                    list.as_slice()
                } else {
                    fresh = refresh();
                    fresh.as_slice()
                };
                trap_target(list, active, shift).map_or(KeyAction::Ignore, |el| KeyAction::Focus(el.clone()))
            }
            _ => KeyAction::Ignore,
        }
    }
}

/// Where focus must wrap to, if the tab move would leave `list`.
pub fn trap_target<'a, E: PartialEq>(list: &'a [E], active: Option<&E>, shift: bool) -> Option<&'a E> {
    let (first, last) = (list.first()?, list.last()?);
    let active = active?;
    if shift && active == first {
        Some(last)
    } else if !shift && active == last {
        Some(first)
    } else {
        None
    }
}

#[cfg(feature = "hydrate")]
struct DrawerController {
    trigger: Element,
    nav: Element,
    body: HtmlElement,
    state: RefCell<Drawer<Element>>,
}

#[cfg(feature = "hydrate")]
impl DrawerController {
    fn focusables(&self) -> Vec<Element> {
        let mut list = vec![self.trigger.clone()];
        match dom::query_all_in(&self.nav, FOCUSABLE_SELECTOR) {
            Ok(found) => list.extend(found),
            Err(err) => log::debug!("[KSP] {MODULE}: focusable scan failed: {err}"),
        }
        list
    }

    fn open(&self) -> Result<(), SiteError> {
        let scroll_y = dom::scroll_y()?;
        self.state.borrow_mut().open(scroll_y, self.focusables());

        dom::set_class(&self.trigger, "active", true)?;
        self.trigger.set_attribute("aria-expanded", "true")?;
        dom::set_class(&self.nav, "active", true)?;
        dom::set_class(&self.body, "nav-open", true)?;
        let offset = self.state.borrow().body_offset();
        self.body.style().set_property("top", &offset)?;

        if let Some(first_link) = dom::query_in(&self.nav, "a")? {
            dom::focus(&first_link)?;
        }
        Ok(())
    }

    fn close(&self) -> Result<(), SiteError> {
        let Some(restore) = self.state.borrow_mut().close() else {
            return Ok(());
        };
        dom::set_class(&self.trigger, "active", false)?;
        self.trigger.set_attribute("aria-expanded", "false")?;
        dom::set_class(&self.nav, "active", false)?;
        dom::set_class(&self.body, "nav-open", false)?;
        self.body.style().remove_property("top")?;
        dom::window()?.scroll_to_with_x_and_y(0.0, restore);
        dom::focus(&self.trigger)
    }

    fn toggle(&self) -> Result<(), SiteError> {
        let open = self.state.borrow().is_open();
        if open { self.close() } else { self.open() }
    }

    fn on_keydown(&self, ev: &KeyboardEvent) -> Result<(), SiteError> {
        let active = dom::document()?.active_element();
        let action = self
            .state
            .borrow()
            .on_key(&ev.key(), ev.shift_key(), active.as_ref(), || self.focusables());
        match action {
            KeyAction::Ignore => Ok(()),
            KeyAction::Close => self.close(),
            KeyAction::Focus(target) => {
                ev.prevent_default();
                dom::focus(&target)
            }
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn init(_config: &SiteConfig) -> Result<(), SiteError> {
    let (Some(trigger), Some(nav)) = (dom::query(".hamburger")?, dom::query(".mobile-nav")?) else {
        return Ok(());
    };
    let document = dom::document()?;
    let Some(body) = document.body() else {
        return Ok(());
    };
    trigger.set_attribute("aria-expanded", "false")?;

    let links = dom::query_all_in(&nav, "a")?;
    let controller = Rc::new(DrawerController { trigger, nav, body, state: RefCell::new(Drawer::new()) });

    let on_click = Rc::clone(&controller);
    dom::listen(&controller.trigger, "click", MODULE, move |_ev| on_click.toggle())?;

    for link in &links {
        let on_link = Rc::clone(&controller);
        dom::listen(link, "click", MODULE, move |_ev| on_link.close())?;
    }

    let on_key = Rc::clone(&controller);
    dom::listen(&document, "keydown", MODULE, move |ev| {
        let Some(ev) = ev.dyn_ref::<KeyboardEvent>() else {
            return Ok(());
        };
        on_key.on_keydown(ev)
    })?;

    log::debug!("[KSP] {MODULE}: {} drawer links", links.len());
    Ok(())
}
