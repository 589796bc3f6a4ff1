use chrono::Datelike;

use crate::config::{AppConfig, SiteConfig};
use crate::location::NavigationState;
use crate::nav::{ActiveSet, NavRegistry, NavResolver};

/// Navigation rules and the link registry of one site, fixed for the session
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub registry: NavRegistry,
    resolver: NavResolver,
}

impl Site {
    pub fn new(config: SiteConfig, registry: NavRegistry) -> Self {
        let resolver = NavResolver::from_site(&config);
        Self {
            config,
            registry,
            resolver,
        }
    }

    /// Site whose registry comes from the `nav` config entries
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(config.site.clone(), NavRegistry::from_config(&config.nav))
    }

    /// Recompute the active links for a location
    pub fn active_links(&self, state: &NavigationState) -> ActiveSet {
        self.resolver.resolve_state(self.registry.links(), state)
    }

    pub fn locate(&self, location: &str) -> crate::Result<NavigationState> {
        NavigationState::from_url(location, &self.config.landing_page)
    }

    pub fn landing(&self) -> NavigationState {
        NavigationState::new(self.config.landing_page.clone(), "")
    }
}

/// Year shown in the page footer
pub fn footer_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_landing_activates_home() {
        let site = Site::from_app_config(&AppConfig::default_site());
        let active = site.active_links(&site.landing());
        let labels: Vec<&str> = active
            .iter()
            .filter_map(|id| site.registry.get(id))
            .map(|link| link.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Home"]);
    }

    #[test]
    fn test_pricing_activates_products_dropdown() {
        let site = Site::from_app_config(&AppConfig::default_site());
        let state = site.locate("https://example.com/index.html#pricing").unwrap();
        let labels: Vec<&str> = site
            .active_links(&state)
            .iter()
            .filter_map(|id| site.registry.get(id))
            .map(|link| link.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Products", "Pricing"]);
    }

    #[test]
    fn test_footer_year_is_plausible() {
        assert!(footer_year() >= 2024);
    }
}
