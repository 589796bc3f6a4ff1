use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::centered_rect;

/// Product enquiry dialog
pub struct ModalWidget;

impl ModalWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        if !app.state.modal_shown {
            return;
        }
        let palette = &app.palette;
        let area = frame.area();

        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let popup_height = 9u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Product enquiry ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.surface).fg(palette.text));
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(2),    // Message
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Hint
            ])
            .split(inner_area);

        let message = Paragraph::new(vec![
            Line::from(Span::styled(
                "Tell us what you need.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("We reply to every enquiry within one working day."),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let key = Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD);
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(palette.muted)),
            Span::styled("Enter", key),
            Span::styled("] close  [", Style::default().fg(palette.muted)),
            Span::styled("Esc", key),
            Span::styled("] dismiss", Style::default().fg(palette.muted)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[2]);
    }
}
