use std::path::Path;

use quick_xml::escape::{resolve_html5_entity, unescape_with};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::registry::{LinkId, NavRegistry};
use crate::Result;

const LINKS_CONTAINER_CLASS: &str = "navbar__links";
const LINK_CLASS: &str = "nav-link";
const TOGGLE_CLASS: &str = "dropdown-toggle";
const DROPDOWN_CLASS: &str = "dropdown";

/// HTML elements that never have a closing tag
const VOID_ELEMENTS: &[&[u8]] = &[
    b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
    b"source", b"track", b"wbr",
];

/// Open element on the parse stack
#[derive(Debug)]
struct Frame {
    name: Vec<u8>,
    is_container: bool,
    /// `Some` for `.dropdown` elements; holds their toggle once seen
    dropdown: Option<Option<LinkId>>,
    /// The `a.nav-link` whose label is being collected
    link: Option<LinkId>,
}

/// Read a navbar HTML file and extract its links
pub fn parse_nav_markup_file(path: &Path) -> Result<NavRegistry> {
    let content = std::fs::read_to_string(path)?;
    parse_nav_markup(&content)
}

/// Extract `a.nav-link` elements inside the `.navbar__links` container.
///
/// A link whose classes include `dropdown-toggle` opens the nearest enclosing
/// `.dropdown`; other links inside that element get the toggle as parent.
/// Markup without the container yields an empty registry.
pub fn parse_nav_markup(content: &str) -> Result<NavRegistry> {
    let mut reader = Reader::from_str(content);
    let config = reader.config_mut();
    config.trim_text(true);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut registry = NavRegistry::new();
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let frame = open_element(&e, &mut stack, &mut registry);
                if !VOID_ELEMENTS.contains(&e.name().as_ref()) {
                    stack.push(frame);
                }
            }
            Ok(Event::Empty(e)) => {
                open_element(&e, &mut stack, &mut registry);
            }
            Ok(Event::End(e)) => {
                // Closes any elements left open inside it (`</li>` is optional);
                // end tags without an open element are ignored
                if let Some(pos) = stack
                    .iter()
                    .rposition(|frame| frame.name == e.name().as_ref())
                {
                    stack.truncate(pos);
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(id) = stack.iter().rev().find_map(|frame| frame.link) {
                    let raw = String::from_utf8_lossy(t.as_ref());
                    registry.append_label(id, &decode_entities(&raw));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(crate::Error::Markup(format!(
                    "Failed to parse navigation markup at byte {}: {}",
                    reader.error_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    tracing::debug!(links = registry.len(), "Parsed navigation markup");
    Ok(registry)
}

/// Resolve HTML named and numeric character references; unknown names are
/// dropped, a stray `&` keeps the text as written
fn decode_entities(raw: &str) -> String {
    unescape_with(raw, |entity| Some(resolve_html5_entity(entity).unwrap_or("")))
        .map(|text| text.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

fn open_element(e: &BytesStart<'_>, stack: &mut [Frame], registry: &mut NavRegistry) -> Frame {
    let mut class = String::new();
    let mut href = String::new();
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"class" => class = String::from_utf8_lossy(&attr.value).to_string(),
            b"href" => href = String::from_utf8_lossy(&attr.value).to_string(),
            _ => {}
        }
    }
    let classes: Vec<&str> = class.split_whitespace().collect();

    let mut frame = Frame {
        name: e.name().as_ref().to_vec(),
        is_container: classes.contains(&LINKS_CONTAINER_CLASS),
        dropdown: classes.contains(&DROPDOWN_CLASS).then_some(None),
        link: None,
    };

    let inside_container = stack.iter().any(|frame| frame.is_container);
    if !inside_container || e.name().as_ref() != b"a" || !classes.contains(&LINK_CLASS) {
        return frame;
    }

    let is_toggle = classes.contains(&TOGGLE_CLASS);
    let parent = if is_toggle {
        // The toggle opens its own dropdown; any parent is an outer, already claimed one
        stack
            .iter()
            .rev()
            .filter_map(|frame| frame.dropdown)
            .find_map(|toggle| toggle)
    } else {
        stack
            .iter()
            .rev()
            .find_map(|frame| frame.dropdown)
            .flatten()
    };

    let id = registry.push(&href, "", is_toggle, parent);
    frame.link = Some(id);

    if is_toggle {
        if let Some(unclaimed) = stack
            .iter_mut()
            .rev()
            .find(|frame| frame.dropdown == Some(None))
        {
            unclaimed.dropdown = Some(Some(id));
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAVBAR: &str = r##"<header class="site-header">
  <nav class="navbar">
    <a class="navbar__brand" href="index.html">Brand</a>
    <button class="navbar__toggler"><span></span></button>
    <ul class="navbar__links">
      <li><a class="nav-link" href="#hero">Home</a></li>
      <li><a class="nav-link" href="#services">Services</a></li>
      <li class="dropdown">
        <a class="nav-link dropdown-toggle" href="#products">Products <i class="arrow"></i></a>
        <ul class="dropdown-menu">
          <li><a class="nav-link" href="#pricing">Pricing</a></li>
          <li><a class="nav-link" href="products.html">Catalogue</a></li>
        </ul>
      </li>
      <li><a class="nav-link" href="blog.html">Blog<br></a></li>
      <li><a class="nav-link">Broken</a></li>
    </ul>
  </nav>
</header>"##;

    #[test]
    fn test_parse_navbar() {
        let registry = parse_nav_markup(NAVBAR).unwrap();
        let hrefs: Vec<&str> = registry.iter().map(|link| link.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["#hero", "#services", "#products", "#pricing", "products.html", "blog.html", ""]
        );
    }

    #[test]
    fn test_dropdown_membership() {
        let registry = parse_nav_markup(NAVBAR).unwrap();
        let toggle = registry.find_by_href("#products").unwrap();
        assert!(toggle.is_dropdown_toggle);
        assert_eq!(toggle.parent, None);

        let pricing = registry.find_by_href("#pricing").unwrap();
        assert_eq!(pricing.parent, Some(toggle.id));
        let blog = registry.find_by_href("blog.html").unwrap();
        assert_eq!(blog.parent, None);
    }

    #[test]
    fn test_labels_collected() {
        let registry = parse_nav_markup(NAVBAR).unwrap();
        assert_eq!(registry.find_by_href("#products").unwrap().label, "Products");
        assert_eq!(registry.find_by_href("blog.html").unwrap().label, "Blog");
    }

    #[test]
    fn test_links_outside_container_ignored() {
        let registry = parse_nav_markup(NAVBAR).unwrap();
        assert!(registry.find_by_href("index.html").is_none());
    }

    #[test]
    fn test_unclosed_list_items_end_with_their_list() {
        let markup = r##"<ul class="navbar__links">
  <li><a class="nav-link" href="#hero">Home</a>
  <li><a class="nav-link" href="#pricing">Pricing</a>
</ul>
<footer><a class="nav-link" href="blog.html">Blog</a></footer>"##;
        let registry = parse_nav_markup(markup).unwrap();
        let hrefs: Vec<&str> = registry.iter().map(|link| link.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#hero", "#pricing"]);
    }

    #[test]
    fn test_stray_end_tag_ignored() {
        let markup = r##"<ul class="navbar__links"></span>
  <li><a class="nav-link" href="#hero">Home</a></li>
</ul>"##;
        let registry = parse_nav_markup(markup).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_html_entities_in_labels() {
        let markup = r##"<ul class="navbar__links">
  <li><a class="nav-link" href="#hero">Home &copy;</a></li>
  <li><a class="nav-link" href="#services">Tools&nbsp;&amp;&nbsp;Services</a></li>
  <li><a class="nav-link" href="#contact">Contact &bogus;us</a></li>
  <li><a class="nav-link" href="blog.html">News &#38; Blog</a></li>
</ul>"##;
        let registry = parse_nav_markup(markup).unwrap();
        let label = |href: &str| registry.find_by_href(href).unwrap().label.clone();
        assert_eq!(label("#hero"), "Home ©");
        assert_eq!(label("#services"), "Tools\u{a0}&\u{a0}Services");
        assert_eq!(label("#contact"), "Contact us");
        assert_eq!(label("blog.html"), "News & Blog");
    }

    #[test]
    fn test_missing_container_gives_empty_registry() {
        let registry =
            parse_nav_markup(r##"<nav><a class="nav-link" href="#hero">Home</a></nav>"##).unwrap();
        assert!(registry.is_empty());
    }
}
