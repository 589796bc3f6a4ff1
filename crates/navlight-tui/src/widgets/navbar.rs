use navlight_core::nav::NavLink;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Sticky site header with the navigation links
pub struct NavbarWidget;

impl NavbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let palette = &app.palette;
        if !app.page.features.has_header {
            frame.render_widget(Block::default().style(Style::default().bg(palette.background)), area);
            return;
        }

        // Scrolled header gets the raised surface color
        let bg = if app.state.header_scrolled {
            palette.surface
        } else {
            palette.background
        };
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.muted))
            .style(Style::default().bg(bg).fg(palette.text));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![
            Span::styled(
                format!(" {} ", app.page.title),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        if !app.is_mobile() {
            for link in app.site.registry.top_level() {
                spans.push(Span::styled(link_text(link), link_style(app, link)));
                spans.push(Span::raw("  "));
            }
        }

        let mut right = Vec::new();
        if app.page.features.has_theme_toggle {
            right.push(if app.state.theme.is_dark() { "[☾]" } else { "[☀]" });
        }
        if app.is_mobile() && app.page.features.has_menu_toggler {
            right.push(if app.state.menu_open { "[✕]" } else { "[☰]" });
        }
        let right = right.join(" ");

        let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let padding = (inner.width as usize).saturating_sub(left_width + right.width() + 1);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(right, Style::default().fg(palette.muted)));

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    /// Open dropdowns (desktop) or the expanded mobile menu, drawn over the page
    pub fn render_overlay(frame: &mut Frame, header: Rect, body: Rect, app: &App) {
        if !app.page.features.has_header {
            return;
        }
        if app.is_mobile() {
            Self::render_mobile_menu(frame, body, app);
        } else {
            Self::render_dropdowns(frame, header, body, app);
        }
    }

    fn render_dropdowns(frame: &mut Frame, header: Rect, body: Rect, app: &App) {
        // Same x positions as the inline links in `render`
        let mut x = header.x + app.page.title.width() as u16 + 4;
        for link in app.site.registry.top_level() {
            let width = link_text(link).width() as u16;
            if link.is_dropdown_toggle && app.dropdown_expanded(link.id) {
                let children: Vec<&NavLink> = app.site.registry.children_of(link.id).collect();
                let panel_width = children
                    .iter()
                    .map(|c| c.label.width() as u16 + 4)
                    .max()
                    .unwrap_or(0)
                    .max(width + 2);
                let area = Rect::new(
                    x.min(body.right().saturating_sub(panel_width)),
                    body.y,
                    panel_width.min(body.width),
                    (children.len() as u16 + 2).min(body.height),
                );
                Self::render_panel(frame, area, app, &children, 0);
            }
            x += width + 2;
        }
    }

    fn render_mobile_menu(frame: &mut Frame, body: Rect, app: &App) {
        if app.page.features.has_menu_toggler && !app.state.menu_open {
            return;
        }
        let links: Vec<&NavLink> = app
            .visible_links()
            .into_iter()
            .filter_map(|id| app.site.registry.get(id))
            .collect();
        let area = Rect::new(
            body.x,
            body.y,
            body.width,
            (links.len() as u16 + 2).min(body.height),
        );
        Self::render_panel(frame, area, app, &links, 2);
    }

    fn render_panel(frame: &mut Frame, area: Rect, app: &App, links: &[&NavLink], indent: usize) {
        let palette = &app.palette;
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .style(Style::default().bg(palette.surface).fg(palette.text));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = links
            .iter()
            .map(|link| {
                let pad = if link.parent.is_some() { indent } else { 0 };
                Line::from(vec![
                    Span::raw(" ".repeat(pad + 1)),
                    Span::styled(link_text(link), link_style(app, link)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn link_text(link: &NavLink) -> String {
    if link.is_dropdown_toggle {
        format!("{} ▾", link.label)
    } else {
        link.label.clone()
    }
}

fn link_style(app: &App, link: &NavLink) -> Style {
    let palette = &app.palette;
    let mut style = Style::default().fg(palette.text);
    if app.active.contains(link.id) {
        style = style
            .fg(palette.active)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if app.focused == Some(link.id) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}
