//! Page documents laid out as terminal rows
//!
//! A page is a hero block, its sections and a footer stacked vertically.
//! Row offsets of each block double as the anchor positions that section
//! links scroll to.

use navlight_core::animation::{reveal_selector, HeroSpan, RevealTarget};
use navlight_core::config::{HeroConfig, PageConfig, SectionConfig};
use navlight_core::state::PageFeatures;
use unicode_width::UnicodeWidthChar;

/// Rows taken by the hero block
pub const HERO_ROWS: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Hero,
    Section(usize),
    Footer,
}

/// A block positioned in the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBlock {
    pub kind: BlockKind,
    /// Anchor id (empty for the footer)
    pub id: String,
    pub top: u16,
    pub height: u16,
    /// Wrapped body text (sections only)
    pub body: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PageDocument {
    pub name: String,
    pub title: String,
    pub features: PageFeatures,
    pub hero: Option<HeroConfig>,
    pub sections: Vec<SectionConfig>,
    /// Page is not part of the configured site
    pub missing: bool,
    blocks: Vec<PlacedBlock>,
    width: u16,
}

impl PageDocument {
    pub fn from_config(page: &PageConfig) -> Self {
        let mut doc = Self {
            name: page.name.clone(),
            title: page.title.clone(),
            features: PageFeatures {
                has_header: page.has_header,
                has_menu_toggler: page.has_menu_toggler,
                has_theme_toggle: page.has_theme_toggle,
                has_modal: page.has_modal,
            },
            hero: page.hero.clone(),
            sections: page.sections.clone(),
            missing: false,
            blocks: Vec::new(),
            width: 0,
        };
        doc.layout(80);
        doc
    }

    /// Stand-in for a page the site does not define
    pub fn placeholder(name: &str) -> Self {
        let mut doc = Self {
            name: name.to_string(),
            title: name.to_string(),
            features: PageFeatures::all(),
            hero: None,
            sections: Vec::new(),
            missing: true,
            blocks: Vec::new(),
            width: 0,
        };
        doc.layout(80);
        doc
    }

    /// Recompute row positions for a content width; no-op when unchanged
    pub fn layout(&mut self, width: u16) {
        if width == self.width && !self.blocks.is_empty() {
            return;
        }
        self.width = width;
        self.blocks.clear();

        let mut top = 0u16;
        if let Some(hero) = &self.hero {
            self.blocks.push(PlacedBlock {
                kind: BlockKind::Hero,
                id: hero.id.clone(),
                top,
                height: HERO_ROWS,
                body: Vec::new(),
            });
            top += HERO_ROWS;
        }

        let text_width = width.saturating_sub(4).max(10) as usize;
        for (idx, section) in self.sections.iter().enumerate() {
            let body: Vec<String> = section
                .body
                .lines()
                .flat_map(|line| wrap(line, text_width))
                .collect();
            // title, spacer, body, spacer, [button, spacer], gap
            let mut height = u16::try_from(body.len())
                .unwrap_or(u16::MAX)
                .saturating_add(4);
            if section.enquire {
                height = height.saturating_add(2);
            }
            self.blocks.push(PlacedBlock {
                kind: BlockKind::Section(idx),
                id: section.id.clone(),
                top,
                height,
                body,
            });
            top = top.saturating_add(height);
        }

        self.blocks.push(PlacedBlock {
            kind: BlockKind::Footer,
            id: String::new(),
            top,
            height: 1,
            body: Vec::new(),
        });
    }

    pub fn blocks(&self) -> &[PlacedBlock] {
        &self.blocks
    }

    pub fn total_rows(&self) -> u16 {
        self.blocks
            .last()
            .map(|b| b.top.saturating_add(b.height))
            .unwrap_or(0)
    }

    /// Furthest the page can scroll with `viewport_height` rows visible
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_rows().saturating_sub(viewport_height)
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.section_top(id).is_some()
    }

    /// Row where the section with `id` starts
    pub fn section_top(&self, id: &str) -> Option<u16> {
        if id.is_empty() {
            return None;
        }
        self.blocks.iter().find(|b| b.id == id).map(|b| b.top)
    }

    pub fn section(&self, idx: usize) -> Option<&SectionConfig> {
        self.sections.get(idx)
    }

    /// Whether any section offers the enquiry button
    pub fn has_enquiry(&self) -> bool {
        self.sections.iter().any(|s| s.enquire)
    }

    pub fn hero_spans(&self) -> Vec<HeroSpan> {
        self.hero
            .as_ref()
            .map(|hero| hero.title_spans.iter().cloned().map(HeroSpan::Text).collect())
            .unwrap_or_default()
    }

    /// Section titles revealed as they scroll into view
    pub fn reveal_targets(&self) -> Vec<RevealTarget> {
        self.sections
            .iter()
            .map(|s| RevealTarget {
                selector: reveal_selector(&s.id),
                delay: s.delay.clone(),
            })
            .collect()
    }
}

/// Greedy word wrap by display width
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width: usize = word.chars().filter_map(|c| c.width()).sum();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use navlight_core::AppConfig;

    fn index() -> PageDocument {
        let config = AppConfig::default_site();
        PageDocument::from_config(config.page("index.html").unwrap())
    }

    #[test]
    fn test_sections_stack_after_hero() {
        let doc = index();
        assert_eq!(doc.section_top("hero"), Some(0));
        assert_eq!(doc.section_top("services"), Some(HERO_ROWS));
        let services = doc.section_top("services").unwrap();
        let products = doc.section_top("products").unwrap();
        assert!(products > services);
        assert!(doc.has_section("contact"));
        assert!(!doc.has_section("latest"));
        assert!(!doc.has_section(""));
    }

    #[test]
    fn test_max_scroll() {
        let doc = index();
        assert_eq!(doc.max_scroll(u16::MAX), 0);
        assert_eq!(doc.max_scroll(10), doc.total_rows() - 10);
    }

    #[test]
    fn test_narrow_layout_grows_page() {
        let mut doc = index();
        doc.layout(120);
        let wide = doc.total_rows();
        doc.layout(20);
        assert!(doc.total_rows() > wide);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("unbreakable", 4), vec!["unbreakable"]);
    }

    #[test]
    fn test_reveal_targets_carry_delay() {
        let targets = index().reveal_targets();
        let pricing = targets
            .iter()
            .find(|t| t.selector == "#pricing .animate-title")
            .unwrap();
        assert_eq!(pricing.delay.as_deref(), Some("0.2"));
    }

    #[test]
    fn test_placeholder_has_only_footer() {
        let doc = PageDocument::placeholder("about.html");
        assert!(doc.missing);
        assert_eq!(doc.blocks().len(), 1);
        assert_eq!(doc.blocks()[0].kind, BlockKind::Footer);
    }
}
