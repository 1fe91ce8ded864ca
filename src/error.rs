//! Error type shared by every initializer and event handler.
//!
//! Nothing here is fatal to the page: errors are logged at the module
//! boundary and the enhancement they belong to is simply absent.

/// Failure raised while wiring a feature or handling one of its events.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No global `window` (not running in a browser).
    #[error("window is not available")]
    NoWindow,

    /// The window has no `document`.
    #[error("document is not available")]
    NoDocument,

    /// The embedded site configuration could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// A browser API call threw.
    #[error("{0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        if let Some(message) = value.as_string() {
            return Self::Js(message);
        }
        match js_sys::Reflect::get(&value, &wasm_bindgen::JsValue::from_str("message")) {
            Ok(message) => Self::Js(message.as_string().unwrap_or_else(|| format!("{value:?}"))),
            Err(_) => Self::Js(format!("{value:?}")),
        }
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
