use serde::Serialize;

use crate::config::NavItemConfig;

/// Position of a link in its registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LinkId(pub usize);

/// A navigation link as declared in the navbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub id: LinkId,
    /// Raw href; may be empty when the markup omitted it
    pub href: String,
    pub label: String,
    pub is_dropdown_toggle: bool,
    /// Toggle link of the dropdown this link sits in
    pub parent: Option<LinkId>,
}

/// The fixed set of navigation links, built once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavRegistry {
    links: Vec<NavLink>,
}

impl NavRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `nav` entries of the configuration. Entries with
    /// children become dropdown toggles; their children point back at them.
    pub fn from_config(items: &[NavItemConfig]) -> Self {
        let mut registry = Self::new();
        for item in items {
            registry.push_item(item, None);
        }
        tracing::debug!(links = registry.len(), "Built navigation registry from config");
        registry
    }

    fn push_item(&mut self, item: &NavItemConfig, parent: Option<LinkId>) {
        let is_toggle = !item.children.is_empty();
        let id = self.push(&item.href, &item.label, is_toggle, parent);
        for child in &item.children {
            self.push_item(child, Some(id));
        }
    }

    /// Append a link and return its id
    pub fn push(
        &mut self,
        href: &str,
        label: &str,
        is_dropdown_toggle: bool,
        parent: Option<LinkId>,
    ) -> LinkId {
        let id = LinkId(self.links.len());
        self.links.push(NavLink {
            id,
            href: href.to_string(),
            label: label.to_string(),
            is_dropdown_toggle,
            parent,
        });
        id
    }

    /// Add text to a link label, space separated
    pub(crate) fn append_label(&mut self, id: LinkId, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if let Some(link) = self.links.get_mut(id.0) {
            if !link.label.is_empty() {
                link.label.push(' ');
            }
            link.label.push_str(text);
        }
    }

    pub fn get(&self, id: LinkId) -> Option<&NavLink> {
        self.links.get(id.0)
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavLink> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Links shown directly in the bar (not inside a dropdown)
    pub fn top_level(&self) -> impl Iterator<Item = &NavLink> {
        self.links.iter().filter(|link| link.parent.is_none())
    }

    /// Links inside the dropdown opened by `toggle`
    pub fn children_of(&self, toggle: LinkId) -> impl Iterator<Item = &NavLink> {
        self.links
            .iter()
            .filter(move |link| link.parent == Some(toggle))
    }

    /// First link whose raw href is exactly `href`
    pub fn find_by_href(&self, href: &str) -> Option<&NavLink> {
        self.links.iter().find(|link| link.href == href)
    }

    /// Links in display order: each toggle followed by its children
    pub fn display_order(&self) -> Vec<LinkId> {
        let mut order = Vec::with_capacity(self.links.len());
        for link in self.top_level() {
            self.collect_display(link.id, &mut order);
        }
        order
    }

    fn collect_display(&self, id: LinkId, order: &mut Vec<LinkId>) {
        order.push(id);
        let children: Vec<LinkId> = self.children_of(id).map(|link| link.id).collect();
        for child in children {
            self.collect_display(child, order);
        }
    }
}
