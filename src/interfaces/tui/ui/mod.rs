// UI submodules
mod common;
mod detail_panel;
mod edit_value;
mod exiting;
mod help;
mod option_list;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use detail_panel::draw_detail_panel;
pub use edit_value::draw_edit_value_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use option_list::draw_option_list;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Option list
            Constraint::Length(6), // Details
            Constraint::Length(3), // Status
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_title_bar(frame, app, chunks[0]);
    draw_option_list(frame, app, chunks[1]);
    draw_detail_panel(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);
    draw_footer(frame, app, chunks[4]);

    // 弹窗覆盖在列表之上
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::EditValue => draw_edit_value_screen(frame, app, chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, area),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, chunks[1]),
    }
}
