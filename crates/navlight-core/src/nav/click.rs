use super::href::fragment_id;
use super::registry::{LinkId, NavLink};

/// Sections present on the page being shown
pub trait SectionIndex {
    fn has_section(&self, id: &str) -> bool;
}

impl<F: Fn(&str) -> bool> SectionIndex for F {
    fn has_section(&self, id: &str) -> bool {
        self(id)
    }
}

/// Page conditions at the moment of a click
pub struct ClickContext<'a> {
    pub menu_open: bool,
    pub viewport_width: u16,
    pub mobile_breakpoint: u16,
    pub landing_page: &'a str,
    pub sections: &'a dyn SectionIndex,
}

impl ClickContext<'_> {
    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= self.mobile_breakpoint
    }
}

/// What the page should do once a link is clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Scroll to a section of the current page
    ScrollToSection(String),
    /// Load another location, e.g. `index.html#pricing`
    Navigate(String),
    /// Let the href load as-is
    FollowHref(String),
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Close the mobile menu and every open dropdown
    pub close_menu: bool,
    /// Dropdown whose open state flips
    pub toggle_dropdown: Option<LinkId>,
    pub action: LinkAction,
}

/// Decide the effect of clicking `link`.
///
/// In-page fragments scroll when the section exists here. A fragment whose
/// section is missing belongs to the landing page, so the click navigates
/// there with the fragment appended. On narrow viewports a dropdown toggle
/// opens its menu instead of following its href.
pub fn route_click(link: &NavLink, ctx: &ClickContext<'_>) -> ClickOutcome {
    let mobile_toggle = link.is_dropdown_toggle && ctx.is_mobile();

    let toggle_dropdown = mobile_toggle.then_some(link.id);
    let close_menu = ctx.menu_open && !mobile_toggle;

    let action = match fragment_id(&link.href) {
        Some(id) if ctx.sections.has_section(id) => LinkAction::ScrollToSection(id.to_string()),
        Some(id) => LinkAction::Navigate(format!("{}#{}", ctx.landing_page, id)),
        None if mobile_toggle || link.href.trim().is_empty() => LinkAction::Nothing,
        None => LinkAction::FollowHref(link.href.trim().to_string()),
    };

    tracing::debug!(href = %link.href, ?action, close_menu, "Routed navigation click");

    ClickOutcome {
        close_menu,
        toggle_dropdown,
        action,
    }
}
