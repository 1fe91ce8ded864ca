//! Tuning parameters for every page feature.
//!
//! `SiteConfig` is built once at startup and handed to each initializer by
//! reference. Every field has a default, so a page may embed a partial JSON
//! override in `<script type="application/json" id="site-config">` and leave
//! the rest untouched.

use serde::Deserialize;

use crate::error::SiteError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the inline JSON element read by [`SiteConfig::from_document`].
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub loading: LoadingConfig,
    pub header: HeaderConfig,
    pub scroll: ScrollConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub counter: CounterConfig,
    pub contact: ContactConfig,
    pub magnetic: MagneticConfig,
    pub tilt: TiltConfig,
    pub transition: TransitionConfig,
    pub parallax: ParallaxConfig,
    /// Console log level: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            loading: LoadingConfig::default(),
            header: HeaderConfig::default(),
            scroll: ScrollConfig::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            counter: CounterConfig::default(),
            contact: ContactConfig::default(),
            magnetic: MagneticConfig::default(),
            tilt: TiltConfig::default(),
            transition: TransitionConfig::default(),
            parallax: ParallaxConfig::default(),
            log_level: "warn".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Time the loading bar needs to fill (1.2 s animation plus buffer).
    pub min_display_ms: u32,
    /// Delay between the `loaded` class and removing the element.
    pub remove_delay_ms: u32,
    /// Hard ceiling after which the splash is dismissed regardless.
    pub fallback_timeout_ms: u32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self { min_display_ms: 1400, remove_delay_ms: 600, fallback_timeout_ms: 3000 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub scroll_threshold: f64,
    pub hide_threshold: f64,
    pub scroll_delta: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { scroll_threshold: 50.0, hide_threshold: 300.0, scroll_delta: 5.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub back_to_top_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold: 600.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -60px 0px".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    /// Offset used when the page has no `.header`.
    pub fallback_header_height: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self { fallback_header_height: 80.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    pub observer_threshold: f64,
    /// Radius of the SVG progress ring (`r` attribute).
    pub ring_radius: f64,
    pub locale: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { duration_ms: 2000.0, observer_threshold: 0.5, ring_radius: 45.0, locale: "ja-JP".to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Address the composed inquiry mail is addressed to.
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { recipient: "info@ksp-delivery.co.jp".to_owned() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MagneticConfig {
    pub strength: f64,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self { strength: 0.15 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    pub max_angle_deg: f64,
    pub lift_y_px: f64,
    pub perspective_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self { max_angle_deg: 5.0, lift_y_px: -6.0, perspective_px: 800.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { duration_ms: 400 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub factor: f64,
    pub fallback_hero_height: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { factor: 0.3, fallback_hero_height: 800.0 }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    /// The configured console level, falling back to `Warn` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Warn)
    }

    /// Resolve the inline override text, falling back to defaults.
    ///
    /// A rejected override is handed back next to the defaults so the caller
    /// can report it once logging is up.
    pub fn from_override(raw: Option<&str>) -> (Self, Option<SiteError>) {
        match raw.map(Self::from_json) {
            None => (Self::default(), None),
            Some(Ok(config)) => (config, None),
            Some(Err(err)) => (Self::default(), Some(err)),
        }
    }

    /// Read the inline override from the document, see [`Self::from_override`].
    #[cfg(feature = "hydrate")]
    pub fn from_document(document: &web_sys::Document) -> (Self, Option<SiteError>) {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .map(|el| el.text_content().unwrap_or_default());
        Self::from_override(raw.as_deref())
    }
}
