use std::convert::Infallible;
use std::time::Instant;

use navlight_core::animation::{
    hero_support_tweens, hero_title_tweens, register_all, reveal_selector, reveal_tweens,
};
use navlight_core::nav::{has_scheme, ActiveSet, LinkId, NavLink};
use navlight_core::scroll::{fallback_scroll_target, init_smooth_scroll, ScrollEngine};
use navlight_core::site::{footer_year, Site};
use navlight_core::state::{AppState, Effect, PageContext, UiEvent};
use navlight_core::theme::{KeyValueStore, ThemePreference};
use navlight_core::{AppConfig, NavigationState};

use crate::input::Action;
use crate::page::PageDocument;
use crate::scroll::{ScrollAnimator, ScrollConfigExt};
use crate::theme::Palette;
use crate::timeline::Timeline;

/// Pixels one terminal row stands for; site distances are configured in pixels
pub const ROW_PX: f64 = 20.0;
/// Pixels one terminal column stands for when deriving the viewport width
pub const COL_PX: u16 = 8;
/// Rows taken by the sticky header
pub const HEADER_ROWS: u16 = 3;
/// Rows taken by the status bar
pub const STATUS_ROWS: u16 = 1;

/// Site preview state
pub struct App {
    pub config: AppConfig,
    pub site: Site,
    pub page: PageDocument,
    pub location: NavigationState,
    pub state: AppState,
    pub active: ActiveSet,
    /// Link with keyboard focus
    pub focused: Option<LinkId>,
    pub palette: Palette,
    pub timeline: Timeline,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Rows available to the page body
    pub viewport_height: u16,
    pub footer_year: i32,
    /// Smooth-scroll engine running on this page (otherwise linear fallback)
    pub smooth_scroll: bool,
    animator: ScrollAnimator,
    store: Box<dyn KeyValueStore>,
    content_width: u16,
    reported_scroll: u16,
}

impl App {
    /// Open the preview at `start`, or the landing page when `None`
    pub fn new(
        config: AppConfig,
        store: Box<dyn KeyValueStore>,
        start: Option<NavigationState>,
        columns: u16,
        rows: u16,
    ) -> Self {
        let site = Site::from_app_config(&config);
        let theme = ThemePreference::load(store.as_ref());
        let palette = Palette::for_theme(theme, &config.ui.palette);
        let location = start.unwrap_or_else(|| site.landing());
        let viewport_width = viewport_width_px(&config, columns);

        let mut app = Self {
            animator: ScrollAnimator::new(config.scroll.clone()),
            page: PageDocument::placeholder(&location.current_page),
            state: AppState::new(theme, viewport_width),
            active: ActiveSet::default(),
            focused: None,
            palette,
            timeline: Timeline::new(ROW_PX),
            status_message: None,
            should_quit: false,
            viewport_height: body_rows(rows),
            footer_year: footer_year(),
            smooth_scroll: false,
            store,
            content_width: columns,
            reported_scroll: 0,
            location: location.clone(),
            site,
            config,
        };
        app.load_page(location);
        app
    }

    /// Replace the displayed page, as a full page load does
    pub fn load_page(&mut self, location: NavigationState) {
        let mut page = match self.config.page(&location.current_page) {
            Some(page) => PageDocument::from_config(page),
            None => {
                tracing::warn!(page = %location.current_page, "Page not defined in site config");
                PageDocument::placeholder(&location.current_page)
            }
        };
        page.layout(self.content_width);
        self.page = page;
        self.location = location;
        self.state = AppState::new(self.state.theme, self.state.viewport_width);
        self.focused = None;

        let scroll_config = self.config.scroll.clone();
        let engine = init_smooth_scroll(&self.page.name, &self.site.config, || {
            Ok::<_, Infallible>(ScrollAnimator::new(scroll_config))
        });
        self.smooth_scroll = engine.is_some();
        self.animator = engine
            .unwrap_or_else(|| ScrollAnimator::new(self.config.scroll.linear_fallback()));
        self.reported_scroll = 0;

        self.timeline.restart();
        let mut tweens = Vec::new();
        if self.page.hero.is_some() {
            tweens.extend(hero_title_tweens(&self.page.hero_spans()));
            tweens.extend(hero_support_tweens());
        }
        tweens.extend(reveal_tweens(&self.page.reveal_targets()));
        let accepted = register_all(&mut self.timeline, tweens);
        tracing::debug!(page = %self.page.name, accepted, "Entrance animations registered");

        self.dispatch(UiEvent::Loaded);

        // The browser jumps to the fragment's element on load
        let hash = self.location.current_hash.clone();
        if let Some(id) = hash.strip_prefix('#') {
            self.jump_to_section(id);
        }
    }

    /// Feed an event to the page state and carry out the resulting effects
    pub fn dispatch(&mut self, event: UiEvent) {
        let page = &self.page;
        let sections = |id: &str| page.has_section(id);
        let ctx = PageContext {
            site: &self.site,
            features: page.features,
            sections: &sections,
            header_height: page
                .features
                .has_header
                .then_some(HEADER_ROWS as f64 * ROW_PX),
        };
        let effects = self.state.update(event, &ctx);
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::PersistTheme(theme) => {
                ThemePreference::save(self.store.as_mut(), theme);
                self.palette = Palette::for_theme(theme, &self.config.ui.palette);
                self.status_message = Some(format!("Theme: {}", theme));
            }
            Effect::ScrollToSection { id, offset } => {
                if let Some(top) = self.page.section_top(&id) {
                    self.scroll_to_section(top, offset / ROW_PX);
                }
            }
            Effect::Navigate(location) => self.navigate(&location),
            Effect::FollowHref(href) => self.follow_href(&href),
            Effect::RecomputeActive => self.recompute_active(),
        }
    }

    /// Smooth engine when running, else the fallback target from the
    /// element's viewport position
    fn scroll_to_section(&mut self, top: u16, offset: f64) {
        if self.smooth_scroll {
            ScrollEngine::scroll_to(&mut self.animator, top as f64, offset);
            return;
        }
        let scroll = self.scroll() as f64;
        let max = self.max_scroll();
        let target = fallback_scroll_target(top as f64 - scroll, scroll, offset);
        self.animator
            .scroll_to(target.round().min(max as f64) as u16, max);
    }

    pub fn recompute_active(&mut self) {
        self.active = self.site.active_links(&self.location);
    }

    /// Load another location, e.g. `index.html#contact`
    pub fn navigate(&mut self, location: &str) {
        match self.site.locate(location) {
            Ok(state) => {
                tracing::info!("Navigating to {}", state.href());
                self.load_page(state);
            }
            Err(e) => {
                tracing::warn!("Cannot navigate to {}: {}", location, e);
                self.status_message = Some(format!("Cannot navigate to {}", location));
            }
        }
    }

    /// What the browser does with a plain link
    fn follow_href(&mut self, href: &str) {
        if has_scheme(href) {
            self.open_external(href);
        } else if let Some(id) = href.strip_prefix('#') {
            self.location = self.location.with_hash(href);
            self.jump_to_section(id);
            self.dispatch(UiEvent::HashChanged);
        } else {
            self.navigate(href);
        }
    }

    fn open_external(&mut self, href: &str) {
        match open::that(href) {
            Ok(()) => self.status_message = Some(format!("Opened {}", href)),
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", href, e);
                self.status_message = Some(format!("Failed to open {}", href));
            }
        }
    }

    /// Instant anchor jump, leaving the section just below the header
    fn jump_to_section(&mut self, id: &str) {
        if let Some(top) = self.page.section_top(id) {
            let max_scroll = self.max_scroll();
            self.animator.set_scroll(top.min(max_scroll));
        }
    }

    pub fn max_scroll(&self) -> u16 {
        self.page.max_scroll(self.viewport_height)
    }

    pub fn scroll(&self) -> u16 {
        self.animator.current_scroll()
    }

    /// Advance animations by one frame
    pub fn tick(&mut self, now: Instant) {
        let scroll = self.animator.update(self.max_scroll());
        if scroll != self.reported_scroll {
            self.reported_scroll = scroll;
            self.dispatch(UiEvent::Scrolled(scroll as f64 * ROW_PX));
        }

        let page = &self.page;
        let scroll = scroll as f64;
        self.timeline.fire_visible(
            |selector| {
                page.sections
                    .iter()
                    .find(|s| reveal_selector(&s.id) == selector)
                    .and_then(|s| page.section_top(&s.id))
                    .map(|top| top as f64 - scroll)
            },
            self.viewport_height as f64,
            now,
        );
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        self.animator.needs_update() || self.timeline.is_running(now)
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.content_width = columns;
        self.viewport_height = body_rows(rows);
        self.page.layout(columns);
        self.dispatch(UiEvent::Resized(viewport_width_px(&self.config, columns)));
        self.drop_hidden_focus();
    }

    pub fn is_mobile(&self) -> bool {
        self.state.viewport_width <= self.site.config.mobile_breakpoint
    }

    /// Navigation links shown in the menu; collapsed mobile menus show none
    pub fn visible_links(&self) -> Vec<LinkId> {
        if self.is_mobile() && self.page.features.has_menu_toggler && !self.state.menu_open {
            return Vec::new();
        }
        let mut links = Vec::new();
        for link in self.site.registry.top_level() {
            links.push(link.id);
            if link.is_dropdown_toggle && self.dropdown_expanded(link.id) {
                links.extend(self.site.registry.children_of(link.id).map(|c| c.id));
            }
        }
        links
    }

    /// Dropdowns open on click on mobile and on focus (hover) on desktop
    pub fn dropdown_expanded(&self, toggle: LinkId) -> bool {
        if self.state.is_dropdown_open(toggle) {
            return true;
        }
        if self.is_mobile() {
            return false;
        }
        self.focused
            .and_then(|id| self.site.registry.get(id))
            .is_some_and(|link| link.id == toggle || link.parent == Some(toggle))
    }

    pub fn focused_link(&self) -> Option<&NavLink> {
        self.focused.and_then(|id| self.site.registry.get(id))
    }

    fn drop_hidden_focus(&mut self) {
        if self.focused.is_some_and(|id| !self.visible_links().contains(&id)) {
            self.focused = None;
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let links = self.visible_links();
        if links.is_empty() {
            self.focused = None;
            return;
        }
        let position = self.focused.and_then(|id| links.iter().position(|l| *l == id));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => links.len() - 1,
            (Some(i), true) => (i + 1) % links.len(),
            (Some(i), false) => (i + links.len() - 1) % links.len(),
        };
        self.focused = Some(links[next]);
    }

    /// Carry out a key action
    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusNext => self.move_focus(true),
            Action::FocusPrev => self.move_focus(false),
            Action::Activate => {
                if let Some(id) = self.focused {
                    self.dispatch(UiEvent::LinkClicked(id));
                    self.drop_hidden_focus();
                }
            }
            Action::ToggleTheme => {
                if self.page.features.has_theme_toggle {
                    self.dispatch(UiEvent::ThemeToggleClicked);
                } else {
                    self.status_message = Some("No theme toggle on this page".to_string());
                }
            }
            Action::ToggleMenu => {
                if !self.page.features.has_menu_toggler {
                    self.status_message = Some("No menu toggler on this page".to_string());
                } else if !self.is_mobile() {
                    self.status_message = Some("Menu toggler is hidden at this width".to_string());
                } else {
                    self.dispatch(UiEvent::MenuTogglerClicked);
                }
            }
            Action::OpenEnquiry => {
                if self.page.has_enquiry() {
                    self.dispatch(UiEvent::EnquireClicked);
                } else {
                    self.status_message = Some("No enquiry button on this page".to_string());
                }
            }
            Action::CloseModal => self.dispatch(UiEvent::ModalCloseClicked),
            Action::DismissModal => self.dispatch(UiEvent::ModalBackdropClicked),
            Action::ScrollDown => {
                let max = self.max_scroll();
                self.animator.scroll_down(max);
            }
            Action::ScrollUp => {
                let max = self.max_scroll();
                self.animator.scroll_up(max);
            }
            Action::ScrollHalfPageDown => {
                let max = self.max_scroll();
                self.animator.scroll_half_page_down(self.viewport_height, max);
            }
            Action::ScrollHalfPageUp => {
                let max = self.max_scroll();
                self.animator.scroll_half_page_up(self.viewport_height, max);
            }
            Action::JumpToTop => {
                let max = self.max_scroll();
                self.animator.scroll_to(0, max);
            }
            Action::JumpToBottom => {
                let max = self.max_scroll();
                self.animator.scroll_to(max, max);
            }
            Action::GoHome => {
                let landing = self.site.landing();
                self.load_page(landing);
            }
            Action::None => {}
        }
    }
}

/// Viewport width in pixels: the configured override, else derived from the terminal
pub fn viewport_width_px(config: &AppConfig, columns: u16) -> u16 {
    if config.ui.viewport_width > 0 {
        config.ui.viewport_width
    } else {
        columns.saturating_mul(COL_PX)
    }
}

fn body_rows(rows: u16) -> u16 {
    rows.saturating_sub(HEADER_ROWS + STATUS_ROWS).max(1)
}
