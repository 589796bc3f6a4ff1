use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    /// Click the focused link
    Activate,
    ToggleTheme,
    ToggleMenu,
    OpenEnquiry,
    /// Modal close button
    CloseModal,
    /// Click outside the modal
    DismissModal,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    GoHome,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.state.modal_shown {
        return handle_modal_mode(key);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Link focus
        (KeyCode::Tab, KeyModifiers::NONE) => Action::FocusNext,
        (KeyCode::BackTab, _) => Action::FocusPrev,
        (KeyCode::Tab, KeyModifiers::SHIFT) => Action::FocusPrev,
        (KeyCode::Right, KeyModifiers::NONE) => Action::FocusNext,
        (KeyCode::Left, KeyModifiers::NONE) => Action::FocusPrev,
        (KeyCode::Enter, _) => Action::Activate,

        // Page controls
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleTheme,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,
        (KeyCode::Char('e'), KeyModifiers::NONE) => Action::OpenEnquiry,
        (KeyCode::Char('H'), _) => Action::GoHome,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::PageDown, _) => Action::ScrollHalfPageDown,
        (KeyCode::PageUp, _) => Action::ScrollHalfPageUp,
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), _) => Action::JumpToBottom,
        (KeyCode::End, _) => Action::JumpToBottom,

        _ => Action::None,
    }
}

/// Keys while the enquiry modal is shown
fn handle_modal_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Enter, _) | (KeyCode::Char('x'), _) => Action::CloseModal,
        (KeyCode::Esc, _) | (KeyCode::Char('q'), _) => Action::DismissModal,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use navlight_core::theme::MemoryStore;
    use navlight_core::AppConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_keys() {
        let app = App::new(AppConfig::default_site(), Box::new(MemoryStore::new()), None, 160, 40);
        assert_eq!(handle_key_event(key(KeyCode::Tab), &app), Action::FocusNext);
        assert_eq!(handle_key_event(key(KeyCode::Char('t')), &app), Action::ToggleTheme);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL), &app),
            Action::ScrollHalfPageDown
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::None);
    }

    #[test]
    fn test_modal_swallows_page_keys() {
        let mut app = App::new(AppConfig::default_site(), Box::new(MemoryStore::new()), None, 160, 40);
        app.perform(Action::OpenEnquiry);
        assert!(app.state.modal_shown);

        assert_eq!(handle_key_event(key(KeyCode::Char('t')), &app), Action::None);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::DismissModal);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::CloseModal);
    }
}
