//! Event handlers for popup screens
//!
//! Handles: EditValue, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::runtime::ExitAction;

/// Handle the value editor popup
pub fn handle_edit_value_screen(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.submit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.editor.pop(),
        KeyCode::Char(c) => app.editor.push(c),
        _ => {}
    }
}

pub fn handle_help_screen(app: &mut App, key_code: KeyCode) {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
    ) {
        app.current_screen = CurrentScreen::Main;
    }
}

/// Confirmation before dropping pending edits
pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.exit_action = Some(ExitAction::Discard),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
}
