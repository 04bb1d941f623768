//! Event handler for the option list

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::runtime::ExitAction;

/// Handle main screen input
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Home => app.jump_to_top(),
        KeyCode::End => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Left => app.rotate_selected(false),
        KeyCode::Right => app.rotate_selected(true),
        KeyCode::Char('r') => app.reset_selected(),
        KeyCode::Char('R') => app.discard_all(),
        KeyCode::F(5) => app.reload(),
        KeyCode::Char('?') => app.current_screen = CurrentScreen::Help,
        KeyCode::Char('c') | KeyCode::Char('C') => app.request_exit(ExitAction::Reconfigure),
        KeyCode::Char('g') | KeyCode::Char('G') => app.request_exit(ExitAction::Configure),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_exit(ExitAction::Discard),
        _ => {}
    }
}
