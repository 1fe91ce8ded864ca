//! Marks the navigation links that point at the current page.

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::SiteError;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(test)]
#[path = "active_nav_test.rs"]
mod active_nav_test;

#[cfg(feature = "hydrate")]
const MODULE: &str = "CurrentNav";

pub const NAV_LINK_SELECTOR: &str = ".header__nav-link, .footer__nav-link";

/// Directory index served for paths ending in `/`.
pub const INDEX_FILE: &str = "index.html";

/// Last path segment of a URL path or `href`, ignoring any query or fragment.
#[must_use]
pub fn file_name(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => INDEX_FILE,
    }
}

/// Whether a link `href` names the page at `current_path`.
///
/// Empty and fragment-only hrefs stay on the page they are on but never name
/// it, so they are not matched.
#[must_use]
pub fn is_current_page(href: &str, current_path: &str) -> bool {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return false;
    }
    file_name(href) == file_name(current_path)
}

#[cfg(feature = "hydrate")]
pub fn init(_config: &SiteConfig) -> Result<(), SiteError> {
    let current_path = dom::window()?.location().pathname()?;
    let mut marked = 0_usize;
    for link in dom::query_all(NAV_LINK_SELECTOR)? {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if is_current_page(&href, &current_path) {
            dom::set_class(&link, "active", true)?;
            link.set_attribute("aria-current", "page")?;
            marked += 1;
        }
    }
    log::debug!("[KSP] {MODULE}: {marked} links marked for {current_path}");
    Ok(())
}
