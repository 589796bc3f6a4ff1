use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use navlight_core::theme::FileStore;
use navlight_core::{AppConfig, NavigationState};
use navlight_tui::{
    app::{App, HEADER_ROWS, STATUS_ROWS},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{ModalWidget, NavbarWidget, PageViewWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, url: Option<&str>) -> Result<()> {
    let start = url
        .map(|url| NavigationState::from_url(url, &config.site.landing_page))
        .transpose()?;
    let store = FileStore::new(config.storage_path());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("navlight"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(config, Box::new(store), start, size.width, size.height);
    let event_handler =
        EventHandler::with_animation_fps(app.config.ui.tick_rate_ms, app.config.scroll.animation_fps);

    let result = main_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll rate
    let mut needs_fast_update = true;

    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(HEADER_ROWS),
                    Constraint::Min(1),
                    Constraint::Length(STATUS_ROWS),
                ])
                .split(frame.area());

            NavbarWidget::render(frame, layout[0], app);
            PageViewWidget::render(frame, layout[1], app, now);
            NavbarWidget::render_overlay(frame, layout[0], layout[1], app);
            StatusBarWidget::render(frame, layout[2], app);
            ModalWidget::render(frame, app);
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    app.status_message = None;
                    let action = handle_key_event(key, app);
                    app.perform(action);
                }
                AppEvent::Resize(width, height) => app.resize(width, height),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
