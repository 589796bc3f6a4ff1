//! Current page and fragment, derived from the browser-style location.

use url::Url;

/// Base used to resolve relative locations such as `blog.html#top`
const LOCAL_BASE: &str = "http://localhost/";

/// Where the visitor currently is. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Last path segment, or the landing page when the path ends in `/`
    pub current_page: String,
    /// `#fragment`, or empty when there is none
    pub current_hash: String,
}

impl NavigationState {
    pub fn new(current_page: impl Into<String>, current_hash: impl Into<String>) -> Self {
        Self {
            current_page: current_page.into(),
            current_hash: current_hash.into(),
        }
    }

    /// Build from a raw path and fragment, the way the page reads `location`
    pub fn from_parts(path: &str, hash: &str, landing_page: &str) -> Self {
        let page = path.rsplit('/').next().unwrap_or_default();
        let current_page = if page.is_empty() {
            landing_page.to_string()
        } else {
            page.to_string()
        };

        Self {
            current_page,
            current_hash: normalize_hash(hash),
        }
    }

    /// Parse an absolute or site-relative location
    pub fn from_url(location: &str, landing_page: &str) -> crate::Result<Self> {
        let url = match Url::parse(location) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(LOCAL_BASE)?.join(location)?,
            Err(e) => return Err(e.into()),
        };

        Ok(Self::from_parts(
            url.path(),
            url.fragment().unwrap_or_default(),
            landing_page,
        ))
    }

    /// Same page, new fragment (hash change)
    pub fn with_hash(&self, hash: &str) -> Self {
        Self {
            current_page: self.current_page.clone(),
            current_hash: normalize_hash(hash),
        }
    }

    /// Location string, e.g. `index.html#pricing`
    pub fn href(&self) -> String {
        format!("{}{}", self.current_page, self.current_hash)
    }
}

/// Fragments are stored with their leading `#`; an empty fragment is stored as ""
fn normalize_hash(hash: &str) -> String {
    let bare = hash.strip_prefix('#').unwrap_or(hash);
    if bare.is_empty() {
        String::new()
    } else {
        format!("#{}", bare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_defaults_to_landing_page() {
        let state = NavigationState::from_url("https://example.com/", "index.html").unwrap();
        assert_eq!(state.current_page, "index.html");
        assert_eq!(state.current_hash, "");
    }

    #[test]
    fn test_last_segment_is_page() {
        let state =
            NavigationState::from_url("https://example.com/site/blog.html#top", "index.html")
                .unwrap();
        assert_eq!(state.current_page, "blog.html");
        assert_eq!(state.current_hash, "#top");
    }

    #[test]
    fn test_relative_location() {
        let state = NavigationState::from_url("index.html#pricing", "index.html").unwrap();
        assert_eq!(state, NavigationState::new("index.html", "#pricing"));
        assert_eq!(state.href(), "index.html#pricing");
    }

    #[test]
    fn test_empty_fragment_is_empty_hash() {
        let state = NavigationState::from_url("/index.html#", "index.html").unwrap();
        assert_eq!(state.current_hash, "");
    }

    #[test]
    fn test_with_hash() {
        let state = NavigationState::new("index.html", "");
        assert_eq!(state.with_hash("contact").current_hash, "#contact");
        assert_eq!(state.with_hash("#").current_hash, "");
    }
}
