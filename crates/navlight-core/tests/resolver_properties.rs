use navlight_core::nav::{parse_href, parse_nav_markup, resolve, ActiveSet, NavRegistry};
use navlight_core::{AppConfig, NavigationState, NavResolver};

const HASHES: &[&str] = &["", "#", "#hero", "#services", "#pricing", "#contact", "#missing"];
const PAGES: &[&str] = &["index.html", "blog.html", "products.html", "about.html"];

fn site_registry() -> NavRegistry {
    NavRegistry::from_config(&AppConfig::default_site().nav)
}

fn hrefs(registry: &NavRegistry, active: &ActiveSet) -> Vec<String> {
    active
        .iter()
        .filter_map(|id| registry.get(id))
        .map(|link| link.href.clone())
        .collect()
}

#[test]
fn test_links_to_other_pages_never_active() {
    let registry = site_registry();
    for page in PAGES {
        for hash in HASHES {
            let active = resolve(registry.links(), page, hash);
            for link in registry.links() {
                let Some(target) = parse_href(&link.href, "index.html") else {
                    assert!(!active.contains(link.id));
                    continue;
                };
                // Toggles can be lit by a child; every other mismatch stays dark
                if target.page != *page && !link.is_dropdown_toggle {
                    assert!(
                        !active.contains(link.id),
                        "{} active on {}{}",
                        link.href,
                        page,
                        hash
                    );
                }
            }
        }
    }
}

#[test]
fn test_empty_hash_lights_only_hero_at_top_level() {
    let registry = site_registry();
    let active = resolve(registry.links(), "index.html", "");
    let top_level_active: Vec<&str> = registry
        .top_level()
        .filter(|link| active.contains(link.id))
        .map(|link| link.href.as_str())
        .collect();
    assert_eq!(top_level_active, vec!["#hero"]);
}

#[test]
fn test_pricing_hash_lights_pricing_and_its_dropdown() {
    let registry = site_registry();
    let active = resolve(registry.links(), "index.html", "#pricing");
    assert_eq!(hrefs(&registry, &active), vec!["#products", "#pricing"]);

    let toggle = registry.find_by_href("#products").unwrap();
    assert!(toggle.is_dropdown_toggle);
    assert!(active.contains(toggle.id));
}

#[test]
fn test_secondary_page_ignores_hash() {
    let registry = site_registry();
    for hash in HASHES {
        let active = resolve(registry.links(), "blog.html", hash);
        assert_eq!(hrefs(&registry, &active), vec!["blog.html"]);
    }
}

#[test]
fn test_idempotent_and_order_independent() {
    let registry = site_registry();
    let resolver = NavResolver::default();
    let first: Vec<ActiveSet> = HASHES
        .iter()
        .map(|hash| resolver.resolve(registry.links(), "index.html", hash))
        .collect();
    let reversed: Vec<ActiveSet> = HASHES
        .iter()
        .rev()
        .map(|hash| resolver.resolve(registry.links(), "index.html", hash))
        .collect();

    for (i, active) in first.iter().enumerate() {
        assert_eq!(active, &reversed[HASHES.len() - 1 - i]);
        assert_eq!(
            active,
            &resolver.resolve(registry.links(), "index.html", HASHES[i])
        );
    }
}

#[test]
fn test_scenario_from_location_strings() {
    let mut registry = NavRegistry::new();
    registry.push("#hero", "Home", false, None);
    registry.push("#pricing", "Pricing", false, None);
    registry.push("blog.html", "Blog", false, None);
    let resolver = NavResolver::default();

    let cases = [
        ("https://example.com/", vec!["#hero"]),
        ("https://example.com/index.html#pricing", vec!["#pricing"]),
        ("https://example.com/blog.html", vec!["blog.html"]),
        ("https://example.com/blog.html#pricing", vec!["blog.html"]),
    ];
    for (location, expected) in cases {
        let state = NavigationState::from_url(location, "index.html").unwrap();
        let active = resolver.resolve_state(registry.links(), &state);
        assert_eq!(hrefs(&registry, &active), expected, "{}", location);
    }
}

#[test]
fn test_markup_registry_resolves_like_config_registry() {
    let markup = r##"<ul class="navbar__links">
  <li><a class="nav-link" href="#hero">Home</a></li>
  <li><a class="nav-link" href="#services">Services</a></li>
  <li class="dropdown">
    <a class="nav-link dropdown-toggle" href="#products">Products</a>
    <ul>
      <li><a class="nav-link" href="#products">Featured</a></li>
      <li><a class="nav-link" href="#pricing">Pricing</a></li>
      <li><a class="nav-link" href="products.html">Catalogue</a></li>
    </ul>
  </li>
  <li><a class="nav-link" href="blog.html">Blog</a></li>
  <li><a class="nav-link" href="#contact">Contact</a></li>
</ul>"##;
    let from_markup = parse_nav_markup(markup).unwrap();
    let from_config = site_registry();

    for page in PAGES {
        for hash in HASHES {
            assert_eq!(
                resolve(from_markup.links(), page, hash),
                resolve(from_config.links(), page, hash)
            );
        }
    }
}
