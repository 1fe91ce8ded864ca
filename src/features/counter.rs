//! Statistic counters that count up from zero when scrolled into view.
//!
//! Each `.stat-item__number[data-count]` animates once with a cubic ease-out
//! and lands exactly on its target. A surrounding progress ring, if present,
//! is filled to its `data-progress` percentage at the same time.

use std::f64::consts::PI;

#[cfg(feature = "hydrate")]
use web_sys::Element;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;
#[cfg(feature = "hydrate")]
use crate::util::format::format_locale;

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "CounterAnimation";

pub const COUNTER_SELECTOR: &str = ".stat-item__number[data-count]";

#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Leading integer of `raw`, the way `parseInt(raw, 10)` reads it.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    let Ok(value) = digits[..end].parse::<i64>() else {
        return None;
    };
    Some(if negative { -value } else { value })
}

/// Target count from a `data-count` attribute. Negative or non-numeric
/// values leave the element untouched.
#[must_use]
pub fn parse_count(raw: Option<&str>) -> Option<u64> {
    let value = parse_leading_int(raw?)?;
    let Ok(count) = u64::try_from(value) else {
        return None;
    };
    Some(count)
}

/// Ring fill percentage from `data-progress`; absent, unparsable or zero
/// means a full ring.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn parse_progress(raw: Option<&str>) -> f64 {
    match raw.and_then(parse_leading_int) {
        Some(value) if value != 0 => value as f64,
        _ => 100.0,
    }
}

#[must_use]
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// `stroke-dashoffset` that shows `percent` of a ring.
#[must_use]
pub fn ring_offset(circumference: f64, percent: f64) -> f64 {
    circumference - (circumference * percent / 100.0)
}

/// One rendered frame of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

/// Time-driven count from zero to `target`.
#[derive(Debug, Clone)]
pub struct CounterTween {
    target: u64,
    duration_ms: f64,
    start_ms: Option<f64>,
}

impl CounterTween {
    #[must_use]
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self { target, duration_ms, start_ms: None }
    }

    /// Value to display at frame time `now_ms`. The first call fixes the
    /// start time; the last frame is exactly `target`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frame(&mut self, now_ms: f64) -> CounterFrame {
        let start = *self.start_ms.get_or_insert(now_ms);
        let progress = if self.duration_ms > 0.0 { ((now_ms - start) / self.duration_ms).min(1.0) } else { 1.0 };
        if progress >= 1.0 {
            return CounterFrame { value: self.target, done: true };
        }
        let value = (self.target as f64 * ease_out_cubic(progress)).floor().max(0.0) as u64;
        CounterFrame { value: value.min(self.target), done: false }
    }
}

#[cfg(feature = "hydrate")]
pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let counters = dom::query_all(COUNTER_SELECTOR)?;
    if counters.is_empty() {
        return Ok(());
    }
    let duration_ms = config.counter.duration_ms;
    let locale = config.counter.locale.clone();
    let ring_circumference = circumference(config.counter.ring_radius);

    dom::observe_once(MODULE, &counters, config.counter.observer_threshold, None, move |el| {
        if let Some(target) = parse_count(el.get_attribute("data-count").as_deref()) {
            animate(el.clone(), CounterTween::new(target, duration_ms), locale.clone())?;
        }
        fill_ring(el, ring_circumference)
    })?;
    log::debug!("[KSP] {MODULE}: observing {} counters", counters.len());
    Ok(())
}

#[cfg(feature = "hydrate")]
fn animate(el: Element, mut tween: CounterTween, locale: String) -> Result<(), SiteError> {
    dom::request_frame(MODULE, move |now_ms| {
        let frame = tween.frame(now_ms);
        el.set_text_content(Some(&format_locale(frame.value, &locale)));
        if frame.done { Ok(()) } else { animate(el, tween, locale) }
    })
}

#[cfg(feature = "hydrate")]
fn fill_ring(number: &Element, ring_circumference: f64) -> Result<(), SiteError> {
    let Some(value_wrapper) = number.closest(".stat-item__ring-value")? else {
        return Ok(());
    };
    let Some(ring) = value_wrapper.closest(".stat-item__ring-wrapper")? else {
        return Ok(());
    };
    let Some(progress) = dom::query_in(&ring, ".stat-item__ring-progress")? else {
        return Ok(());
    };
    let percent = parse_progress(progress.get_attribute("data-progress").as_deref());
    let offset = ring_offset(ring_circumference, percent);
    dom::set_style(&progress, "stroke-dashoffset", &offset.to_string())
}
