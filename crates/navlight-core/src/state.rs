//! Page UI state and its update function.
//!
//! Every toggle the page has (theme, mobile menu, dropdowns, modal, header
//! style) is a named field of `AppState`. Events come in through `update`,
//! which mutates the state and returns the side effects the host performs:
//! persisting the theme, scrolling, navigating, recomputing active links.

use std::collections::BTreeSet;

use crate::nav::{route_click, ClickContext, LinkAction, LinkId, SectionIndex};
use crate::scroll::{header_offset, header_scrolled};
use crate::site::Site;
use crate::theme::Theme;

/// Elements present on the current page; a missing element disables its feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFeatures {
    pub has_header: bool,
    pub has_menu_toggler: bool,
    pub has_theme_toggle: bool,
    pub has_modal: bool,
}

impl PageFeatures {
    pub fn all() -> Self {
        Self {
            has_header: true,
            has_menu_toggler: true,
            has_theme_toggle: true,
            has_modal: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub theme: Theme,
    pub menu_open: bool,
    pub open_dropdowns: BTreeSet<LinkId>,
    pub modal_shown: bool,
    pub header_scrolled: bool,
    pub viewport_width: u16,
    pub scroll_y: f64,
}

/// Something that happened on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    Loaded,
    ThemeToggleClicked,
    MenuTogglerClicked,
    LinkClicked(LinkId),
    Scrolled(f64),
    HashChanged,
    Resized(u16),
    EnquireClicked,
    ModalCloseClicked,
    ModalBackdropClicked,
}

/// Work for the host after an update
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PersistTheme(Theme),
    ScrollToSection { id: String, offset: f64 },
    Navigate(String),
    FollowHref(String),
    RecomputeActive,
}

/// Everything `update` needs to know about the page being shown
pub struct PageContext<'a> {
    pub site: &'a Site,
    pub features: PageFeatures,
    pub sections: &'a dyn SectionIndex,
    /// Rendered header height, when the page has a header
    pub header_height: Option<f64>,
}

impl AppState {
    pub fn new(theme: Theme, viewport_width: u16) -> Self {
        Self {
            theme,
            menu_open: false,
            open_dropdowns: BTreeSet::new(),
            modal_shown: false,
            header_scrolled: false,
            viewport_width,
            scroll_y: 0.0,
        }
    }

    pub fn is_dropdown_open(&self, toggle: LinkId) -> bool {
        self.open_dropdowns.contains(&toggle)
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
        self.open_dropdowns.clear();
    }

    pub fn update(&mut self, event: UiEvent, page: &PageContext<'_>) -> Vec<Effect> {
        let features = page.features;
        match event {
            UiEvent::Loaded | UiEvent::HashChanged => vec![Effect::RecomputeActive],
            UiEvent::ThemeToggleClicked => {
                if !features.has_theme_toggle {
                    return Vec::new();
                }
                self.theme = self.theme.toggle();
                vec![Effect::PersistTheme(self.theme)]
            }
            UiEvent::MenuTogglerClicked => {
                if !features.has_menu_toggler {
                    return Vec::new();
                }
                if self.menu_open {
                    self.close_menu();
                } else {
                    self.menu_open = true;
                }
                Vec::new()
            }
            UiEvent::LinkClicked(id) => self.link_clicked(id, page),
            UiEvent::Scrolled(y) => {
                self.scroll_y = y;
                if features.has_header {
                    self.header_scrolled = header_scrolled(y, &page.site.config);
                }
                vec![Effect::RecomputeActive]
            }
            UiEvent::Resized(width) => {
                self.viewport_width = width;
                Vec::new()
            }
            UiEvent::EnquireClicked => {
                if features.has_modal {
                    self.modal_shown = true;
                }
                Vec::new()
            }
            UiEvent::ModalCloseClicked | UiEvent::ModalBackdropClicked => {
                self.modal_shown = false;
                Vec::new()
            }
        }
    }

    fn link_clicked(&mut self, id: LinkId, page: &PageContext<'_>) -> Vec<Effect> {
        let Some(link) = page.site.registry.get(id) else {
            return Vec::new();
        };

        // Without the menu toggler no click handling is installed; links behave natively
        if !page.features.has_menu_toggler {
            let href = link.href.trim();
            return if href.is_empty() {
                Vec::new()
            } else {
                vec![Effect::FollowHref(href.to_string())]
            };
        }

        let site = &page.site.config;
        let outcome = route_click(
            link,
            &ClickContext {
                menu_open: self.menu_open,
                viewport_width: self.viewport_width,
                mobile_breakpoint: site.mobile_breakpoint,
                landing_page: &site.landing_page,
                sections: page.sections,
            },
        );

        if let Some(toggle) = outcome.toggle_dropdown {
            if !self.open_dropdowns.remove(&toggle) {
                self.open_dropdowns.insert(toggle);
            }
        }
        if outcome.close_menu {
            self.close_menu();
        }

        match outcome.action {
            LinkAction::ScrollToSection(id) => {
                let header = page.header_height.filter(|_| page.features.has_header);
                vec![Effect::ScrollToSection {
                    id,
                    offset: header_offset(header, site),
                }]
            }
            LinkAction::Navigate(location) => vec![Effect::Navigate(location)],
            LinkAction::FollowHref(href) => vec![Effect::FollowHref(href)],
            LinkAction::Nothing => Vec::new(),
        }
    }
}
