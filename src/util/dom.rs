//! Thin `web_sys` wrappers used by every feature's browser wiring.
//!
//! Listeners registered here live for the page lifetime: their closures are
//! leaked with `forget` and are never removed. Handler errors are logged with
//! the owning module's name and swallowed.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, CssStyleDeclaration, Document, Element, Event, EventTarget, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, NodeList, ScrollBehavior,
    ScrollToOptions, SvgElement, Window,
};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Log a handler failure. Errors never propagate out of event callbacks.
pub fn report(module: &str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        log::warn!("[KSP] {module} handler failed: {err}");
    }
}

// --- Queries ---

pub fn query(selector: &str) -> Result<Option<Element>, SiteError> {
    Ok(document()?.query_selector(selector)?)
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(elements_of(&document()?.query_selector_all(selector)?))
}

pub fn query_in(root: &Element, selector: &str) -> Result<Option<Element>, SiteError> {
    Ok(root.query_selector(selector)?)
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(elements_of(&root.query_selector_all(selector)?))
}

fn elements_of(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

// --- Capabilities ---

pub fn media_matches(query: &str) -> bool {
    let Ok(window) = window() else {
        return false;
    };
    matches!(window.match_media(query), Ok(Some(mq)) if mq.matches())
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn supports_hover() -> bool {
    media_matches("(hover: hover)")
}

pub fn has_touch() -> bool {
    let Ok(window) = window() else {
        return false;
    };
    js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
}

// --- Classes, attributes, styles ---

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), SiteError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn style_of(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<SvgElement>().map(SvgElement::style)
}

pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), SiteError> {
    if let Some(style) = style_of(el) {
        style.set_property(property, value)?;
    }
    Ok(())
}

pub fn clear_style(el: &Element, property: &str) -> Result<(), SiteError> {
    if let Some(style) = style_of(el) {
        style.remove_property(property)?;
    }
    Ok(())
}

pub fn focus(el: &Element) -> Result<(), SiteError> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.focus()?;
    }
    Ok(())
}

pub fn offset_height(el: &Element) -> Option<f64> {
    el.dyn_ref::<HtmlElement>().map(|html| f64::from(html.offset_height()))
}

// --- Scrolling ---

pub fn scroll_y() -> Result<f64, SiteError> {
    Ok(window()?.scroll_y()?)
}

pub fn scroll_to_smooth(top: f64) -> Result<(), SiteError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

// --- Events and scheduling ---

/// Attach `handler` to `target` for the rest of the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, module: &'static str, mut handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) -> Result<(), SiteError> + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(move |ev: Event| report(module, handler(ev)));
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], but registered as passive (never calls `preventDefault`).
pub fn listen_passive<F>(target: &EventTarget, event: &str, module: &'static str, mut handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) -> Result<(), SiteError> + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::<dyn FnMut(Event)>::new(move |ev: Event| report(module, handler(ev)));
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Schedule `f` on the next animation frame with the frame timestamp.
pub fn request_frame<F>(module: &'static str, f: F) -> Result<(), SiteError>
where
    F: FnOnce(f64) -> Result<(), SiteError> + 'static,
{
    let cb = Closure::once_into_js(move |ts: f64| report(module, f(ts)));
    window()?.request_animation_frame(cb.unchecked_ref())?;
    Ok(())
}

/// Run `f` once after `millis`. The timer is not cancelable.
pub fn after<F>(millis: u32, module: &'static str, f: F)
where
    F: FnOnce() -> Result<(), SiteError> + 'static,
{
    Timeout::new(millis, move || report(module, f())).forget();
}

/// Observe `elements` and call `on_enter` the first time each one intersects
/// the viewport. Each element is unobserved right after it fires.
pub fn observe_once<F>(
    module: &'static str,
    elements: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_enter: F,
) -> Result<(), SiteError>
where
    F: FnMut(&Element) -> Result<(), SiteError> + 'static,
{
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                report(module, on_enter(&target));
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    for el in elements {
        observer.observe(el);
    }
    cb.forget();
    Ok(())
}
