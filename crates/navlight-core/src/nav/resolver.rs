use std::collections::BTreeSet;

use super::href::parse_href;
use super::registry::{LinkId, NavLink};
use crate::config::SiteConfig;
use crate::location::NavigationState;

/// Links currently marked active
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSet(BTreeSet<LinkId>);

impl ActiveSet {
    pub fn contains(&self, id: LinkId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = LinkId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, id: LinkId) {
        self.0.insert(id);
    }
}

impl FromIterator<LinkId> for ActiveSet {
    fn from_iter<I: IntoIterator<Item = LinkId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Decides which navigation links are active for a location.
///
/// On the landing page links are matched by fragment, with
/// `default_section` standing in for a missing fragment. On any other page
/// every link to that page is active whatever the fragment. An active link
/// inside a dropdown also activates the dropdown's toggle, one level only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavResolver {
    landing_page: String,
    default_section: String,
}

impl Default for NavResolver {
    fn default() -> Self {
        Self::new("index.html", "#hero")
    }
}

impl NavResolver {
    pub fn new(landing_page: impl Into<String>, default_section: impl Into<String>) -> Self {
        Self {
            landing_page: landing_page.into(),
            default_section: default_section.into(),
        }
    }

    pub fn from_site(site: &SiteConfig) -> Self {
        Self::new(&site.landing_page, &site.default_section)
    }

    pub fn landing_page(&self) -> &str {
        &self.landing_page
    }

    pub fn resolve_state(&self, links: &[NavLink], state: &NavigationState) -> ActiveSet {
        self.resolve(links, &state.current_page, &state.current_hash)
    }

    /// Compute the active set. Never fails: links with unusable hrefs stay inactive.
    pub fn resolve(&self, links: &[NavLink], current_page: &str, current_hash: &str) -> ActiveSet {
        let on_landing = current_page == self.landing_page;
        let mut active = ActiveSet::default();

        for link in links {
            let Some(target) = parse_href(&link.href, &self.landing_page) else {
                continue;
            };
            if target.page != current_page {
                continue;
            }

            let matched = !on_landing
                || target.hash == current_hash
                || (current_hash.is_empty() && target.hash == self.default_section);
            if !matched {
                continue;
            }

            active.insert(link.id);
            // A toggle's closest grouping is its own dropdown
            if !link.is_dropdown_toggle {
                if let Some(parent) = link.parent {
                    active.insert(parent);
                }
            }
        }

        if on_landing && (current_hash.is_empty() || current_hash == "#") {
            if let Some(home) = links.iter().find(|link| link.href == self.default_section) {
                active.insert(home.id);
            }
        }

        active
    }
}

/// Resolve with the stock rules (`index.html`, `#hero`)
pub fn resolve(links: &[NavLink], current_page: &str, current_hash: &str) -> ActiveSet {
    NavResolver::default().resolve(links, current_page, current_hash)
}
