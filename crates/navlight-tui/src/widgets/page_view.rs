use std::time::Instant;

use navlight_core::animation::{
    hero_span_selector, reveal_selector, AMBIENT_SHAPE_MOTION, HERO_BUTTON_SELECTOR,
    HERO_SUBTITLE_SELECTOR,
};
use navlight_core::config::HeroConfig;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, COL_PX};
use crate::page::{BlockKind, PlacedBlock, HERO_ROWS};
use crate::timeline::Pose;

const SHAPES: [&str; 3] = ["◆", "●", "▲"];

/// Scrollable page body
pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let palette = &app.palette;
        let base = Style::default().bg(palette.background).fg(palette.text);
        frame.render_widget(Block::default().style(base), area);

        if app.page.missing {
            let message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{} is not part of this site", app.page.name),
                    Style::default().fg(palette.muted),
                )),
                Line::from(Span::styled(
                    "Press H to return home",
                    Style::default().fg(palette.muted),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(message, area);
            return;
        }

        let mut lines: Vec<Line> = Vec::with_capacity(app.page.total_rows() as usize);
        for block in app.page.blocks() {
            match block.kind {
                BlockKind::Hero => {
                    if let Some(hero) = &app.page.hero {
                        lines.extend(hero_lines(app, hero, area.width, now));
                    }
                }
                BlockKind::Section(idx) => lines.extend(section_lines(app, block, idx, now)),
                BlockKind::Footer => lines.push(
                    Line::from(Span::styled(
                        format!("© {} {}", app.footer_year, app.page.title),
                        Style::default().fg(palette.muted),
                    ))
                    .alignment(Alignment::Center),
                ),
            }
        }

        let paragraph = Paragraph::new(lines).style(base).scroll((app.scroll(), 0));
        frame.render_widget(paragraph, area);
    }
}

/// Hero rows: shapes, title (and the row it slides up from), subtitle and
/// button, each followed by its slide row, shapes
fn hero_lines(app: &App, hero: &HeroConfig, width: u16, now: Instant) -> Vec<Line<'static>> {
    let palette = &app.palette;
    let timeline = &app.timeline;
    let mut lines = Vec::with_capacity(HERO_ROWS as usize);

    lines.push(shape_line(app, width, now, 0));
    lines.push(Line::from(""));

    // Each word is drawn on the title row once settled, on the row below while rising
    let mut title = vec![Span::raw("  ")];
    let mut rising = vec![Span::raw("  ")];
    for (i, word) in hero.title_spans.iter().enumerate() {
        let pose = timeline.pose(&hero_span_selector(i), now);
        let style = entrance_style(pose, Style::default().fg(palette.text))
            .add_modifier(Modifier::BOLD);
        let text = format!("{} ", word);
        let blank = " ".repeat(text.width());
        if !pose.visible {
            title.push(Span::raw(blank.clone()));
            rising.push(Span::raw(blank));
        } else if pose.offset_rows == 0 {
            title.push(Span::styled(text, style));
            rising.push(Span::raw(blank));
        } else {
            title.push(Span::raw(blank));
            rising.push(Span::styled(text, style));
        }
    }
    lines.push(Line::from(title));
    lines.push(Line::from(rising));

    let subtitle = Span::styled(
        format!("  {}", hero.subtitle),
        Style::default().fg(palette.muted),
    );
    lines.extend(rising_pair(timeline.pose(HERO_SUBTITLE_SELECTOR, now), subtitle));

    match &hero.button {
        Some(label) => {
            let button = Span::styled(
                format!("  [ {} ]", label),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            );
            lines.extend(rising_pair(timeline.pose(HERO_BUTTON_SELECTOR, now), button));
        }
        None => lines.extend([Line::from(""), Line::from("")]),
    }

    lines.push(shape_line(app, width, now, SHAPES.len()));
    lines
}

/// An element and the row below it, with the element on whichever row its pose puts it
fn rising_pair(pose: Pose, span: Span<'static>) -> [Line<'static>; 2] {
    let style = entrance_style(pose, span.style);
    let span = Span::styled(span.content, style);
    if !pose.visible {
        [Line::from(""), Line::from("")]
    } else if pose.offset_rows == 0 {
        [Line::from(span), Line::from("")]
    } else {
        [Line::from(""), Line::from(span)]
    }
}

fn section_lines(app: &App, block: &PlacedBlock, idx: usize, now: Instant) -> Vec<Line<'static>> {
    let palette = &app.palette;
    let Some(section) = app.page.section(idx) else {
        return Vec::new();
    };
    let mut lines = Vec::with_capacity(block.height as usize);

    let pose = app.timeline.pose(&reveal_selector(&section.id), now);
    let title_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    if pose.visible {
        lines.push(Line::from(Span::styled(
            format!("  {}", section.title),
            entrance_style(pose, title_style),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));

    for body in &block.body {
        lines.push(Line::from(format!("  {}", body)));
    }
    lines.push(Line::from(""));

    if section.enquire {
        lines.push(Line::from(vec![
            Span::styled(
                "  [ Enquire ]",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  press e", Style::default().fg(palette.muted)),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines
}

/// Dimmed until most of the entrance has played
fn entrance_style(pose: Pose, settled: Style) -> Style {
    if pose.progress < 0.6 {
        settled.add_modifier(Modifier::DIM)
    } else {
        settled
    }
}

/// Background shapes drifting sideways around fixed anchors
fn shape_line(app: &App, width: u16, now: Instant, first: usize) -> Line<'static> {
    let motion = AMBIENT_SHAPE_MOTION;
    let elapsed = app.timeline.since_load(now);
    let width = width as usize;
    let mut row = vec![' '; width];

    for (n, glyph) in SHAPES.iter().enumerate() {
        let i = first + n;
        let unit = |salt: usize| ((i * 7 + salt + 1) as f64 * 0.618_033_988_7).fract();
        let reach = motion.x.sample(unit(0)) / COL_PX as f64;
        let duration = motion.duration.sample(unit(1));
        let delay = motion.delay.sample(unit(2));
        let phase = ((elapsed - delay).max(0.0) / duration) * std::f64::consts::TAU;
        // Only the horizontal part of the drift fits in a single row
        let drift = reach * motion.ease.apply((phase.sin() + 1.0) / 2.0) * 2.0 - reach;

        let anchor = width * (2 * n + 1) / (2 * SHAPES.len());
        let x = (anchor as f64 + drift).round().clamp(0.0, width.saturating_sub(1) as f64) as usize;
        if let Some(slot) = row.get_mut(x) {
            *slot = glyph.chars().next().unwrap_or('*');
        }
    }

    Line::from(Span::styled(
        row.into_iter().collect::<String>(),
        Style::default().fg(app.palette.muted).add_modifier(Modifier::DIM),
    ))
}
