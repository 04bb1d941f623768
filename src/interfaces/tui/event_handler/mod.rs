//! Event handling for TUI
//!
//! Handles keyboard events and delegates to the handler of the current
//! screen:
//! - main_screen: option list
//! - popup_screens: EditValue, Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::runtime::ExitAction;

mod main_screen;
mod popup_screens;

use main_screen::handle_main_screen;
use popup_screens::{handle_edit_value_screen, handle_exiting_screen, handle_help_screen};

/// Handle keyboard input based on current screen. Returns `true` once the
/// app has an exit action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl-C 在任何界面都直接放弃修改退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.exit_action = Some(ExitAction::Discard);
        return true;
    }

    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key.code),
        CurrentScreen::EditValue => handle_edit_value_screen(app, key.code),
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }

    app.should_exit()
}
