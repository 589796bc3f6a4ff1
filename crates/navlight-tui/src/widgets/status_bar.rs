use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::truncate_str;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let palette = &app.palette;
        let layout = if app.is_mobile() { "mobile" } else { "desktop" };
        let scrolling = if app.smooth_scroll { "smooth" } else { "linear" };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => format!(
                " {} | {} | {}px {} | {}",
                app.location.href(),
                app.state.theme,
                app.state.viewport_width,
                layout,
                scrolling
            ),
        };

        let help_hint = " q:quit tab:links enter:open t:theme m:menu e:enquire ";
        let status_text = truncate_str(&status_text, area.width as usize);
        let used = status_text.chars().count() + help_hint.len();
        let (padding, hint) = if used <= area.width as usize {
            (" ".repeat(area.width as usize - used), help_hint)
        } else {
            (String::new(), "")
        };

        let bar = Style::default().bg(palette.surface);
        let line = Line::from(vec![
            Span::styled(status_text, bar.fg(palette.text)),
            Span::styled(padding, bar),
            Span::styled(hint, bar.fg(palette.muted)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
