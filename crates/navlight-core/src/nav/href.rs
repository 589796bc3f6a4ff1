/// Page and fragment a navigation href points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub page: String,
    /// `#fragment`, `#` for a bare trailing hash, or empty
    pub hash: String,
}

/// Split an href into its target page and fragment.
///
/// Returns `None` for hrefs that cannot point into the site: empty values and
/// anything carrying a scheme (`https://`, `mailto:`). Fragment-only hrefs
/// target `landing_page`, and so do bare names such as `pricing`, which are
/// read as `#pricing`.
pub fn parse_href(href: &str, landing_page: &str) -> Option<LinkTarget> {
    let href = href.trim();
    if href.is_empty() || has_scheme(href) {
        return None;
    }

    if let Some((page, rest)) = href.split_once('#') {
        // Only the text up to a second '#' belongs to the fragment
        let fragment = rest.split('#').next().unwrap_or_default();
        let page = if page.is_empty() { landing_page } else { page };
        return Some(LinkTarget {
            page: page.to_string(),
            hash: format!("#{}", fragment),
        });
    }

    if is_page_link(href) {
        Some(LinkTarget {
            page: href.to_string(),
            hash: String::new(),
        })
    } else {
        Some(LinkTarget {
            page: landing_page.to_string(),
            hash: format!("#{}", href),
        })
    }
}

/// Link to another HTML page rather than to a section
pub fn is_page_link(href: &str) -> bool {
    href.trim().ends_with(".html")
}

/// Section id an in-page link scrolls to: `#pricing` and `pricing` both give
/// `pricing`. Page links, `#` and schemed hrefs give `None`.
pub fn fragment_id(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.is_empty() || has_scheme(href) || is_page_link(href) {
        return None;
    }
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        Some(_) => None,
        None if !href.contains('#') && !href.contains('/') => Some(href),
        None => None,
    }
}

/// `mailto:`, `https:` and the like; such links leave the site
pub fn has_scheme(href: &str) -> bool {
    match href.find(':') {
        Some(idx) => {
            let scheme = &href[..idx];
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(page: &str, hash: &str) -> Option<LinkTarget> {
        Some(LinkTarget {
            page: page.to_string(),
            hash: hash.to_string(),
        })
    }

    #[test]
    fn test_fragment_only_targets_landing_page() {
        assert_eq!(parse_href("#hero", "index.html"), target("index.html", "#hero"));
    }

    #[test]
    fn test_page_only() {
        assert_eq!(parse_href("blog.html", "index.html"), target("blog.html", ""));
    }

    #[test]
    fn test_page_and_fragment() {
        assert_eq!(
            parse_href("products.html#specs", "index.html"),
            target("products.html", "#specs")
        );
    }

    #[test]
    fn test_only_first_fragment_kept() {
        assert_eq!(parse_href("#a#b", "index.html"), target("index.html", "#a"));
    }

    #[test]
    fn test_bare_hash() {
        assert_eq!(parse_href("#", "index.html"), target("index.html", "#"));
    }

    #[test]
    fn test_bare_name_is_fragment() {
        assert_eq!(parse_href("pricing", "index.html"), target("index.html", "#pricing"));
    }

    #[test]
    fn test_unusable_hrefs() {
        assert_eq!(parse_href("", "index.html"), None);
        assert_eq!(parse_href("   ", "index.html"), None);
        assert_eq!(parse_href("https://example.com/blog.html", "index.html"), None);
        assert_eq!(parse_href("mailto:hello@example.com", "index.html"), None);
    }

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#pricing"), Some("pricing"));
        assert_eq!(fragment_id("pricing"), Some("pricing"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("blog.html"), None);
        assert_eq!(fragment_id("index.html#pricing"), None);
        assert_eq!(fragment_id("https://example.com"), None);
    }

    #[test]
    fn test_scheme_detection() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("tel:+15550100"));
        assert!(!has_scheme("#note:1"));
        assert!(!has_scheme("blog.html"));
    }
}
