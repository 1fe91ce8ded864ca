//! Helpers shared across feature modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue (`dom`) is isolated here so feature modules keep their
//! decision logic free of `web_sys` and testable natively.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod format;
pub mod frame;
pub mod geometry;
