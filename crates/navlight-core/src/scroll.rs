//! Scroll targets and the smooth-scroll engine seam.
//!
//! Positions are in the host's units (pixels in a browser, rows in the
//! terminal preview). The engine is optional: pages excluded from smooth
//! scrolling, or an engine that fails to start, get the linear fallback.

use crate::config::SiteConfig;

/// Animated viewport movement
pub trait ScrollEngine {
    /// Bring `top - offset` to the top of the viewport
    fn scroll_to(&mut self, top: f64, offset: f64);
}

/// Space to leave above a section so the sticky header does not cover it
pub fn header_offset(header_height: Option<f64>, site: &SiteConfig) -> f64 {
    match header_height {
        Some(height) => height + site.header_offset_padding,
        None => site.fallback_header_offset,
    }
}

/// Absolute target of the fallback scroll: the element's viewport-relative
/// top plus the current scroll position, minus the header offset
pub fn fallback_scroll_target(element_top: f64, page_y_offset: f64, offset: f64) -> f64 {
    (element_top + page_y_offset - offset).max(0.0)
}

/// Whether the header should show its scrolled style
pub fn header_scrolled(scroll_y: f64, site: &SiteConfig) -> bool {
    scroll_y > site.header_scroll_threshold
}

/// Whether the smooth-scroll engine is started on `page`
pub fn smooth_scroll_allowed(page: &str, site: &SiteConfig) -> bool {
    !site
        .smooth_scroll_excluded_pages
        .iter()
        .any(|excluded| page.contains(excluded.as_str()))
}

/// Start the smooth-scroll engine for `page`.
///
/// Returns `None` when the page is excluded or `init` fails; callers then
/// scroll with their linear fallback.
pub fn init_smooth_scroll<E, F, Err>(page: &str, site: &SiteConfig, init: F) -> Option<E>
where
    F: FnOnce() -> std::result::Result<E, Err>,
    Err: std::fmt::Display,
{
    if !smooth_scroll_allowed(page, site) {
        tracing::debug!(page, "Smooth scroll disabled for page");
        return None;
    }

    match init() {
        Ok(engine) => {
            tracing::debug!(page, "Smooth scroll initialized");
            Some(engine)
        }
        Err(e) => {
            tracing::warn!("Smooth scroll initialization failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_offset() {
        let site = SiteConfig::default();
        assert_eq!(header_offset(Some(70.0), &site), 90.0);
        assert_eq!(header_offset(None, &site), 100.0);
    }

    #[test]
    fn test_fallback_target() {
        assert_eq!(fallback_scroll_target(400.0, 250.0, 90.0), 560.0);
        assert_eq!(fallback_scroll_target(10.0, 0.0, 90.0), 0.0);
    }

    #[test]
    fn test_header_scrolled_threshold() {
        let site = SiteConfig::default();
        assert!(!header_scrolled(50.0, &site));
        assert!(header_scrolled(51.0, &site));
    }

    #[test]
    fn test_excluded_pages() {
        let site = SiteConfig::default();
        assert!(smooth_scroll_allowed("index.html", &site));
        assert!(!smooth_scroll_allowed("blog.html", &site));
        assert!(!smooth_scroll_allowed("/shop/products.html", &site));
    }

    #[test]
    fn test_init_failure_degrades() {
        let site = SiteConfig::default();
        let engine: Option<u8> =
            init_smooth_scroll("index.html", &site, || Err::<u8, _>("no engine"));
        assert!(engine.is_none());

        let engine = init_smooth_scroll("index.html", &site, || {
            Ok::<_, String>(0u8)
        });
        assert!(engine.is_some());

        let engine = init_smooth_scroll("blog.html", &site, || {
            Ok::<_, String>(0u8)
        });
        assert!(engine.is_none());
    }
}
