use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "NAVIGATION",
        &[
            ("Up/Down, j/k", "Move selection"),
            ("PageUp/PageDown", "Scroll 10 options"),
            ("Home/End", "Jump to first / last option"),
        ],
    ),
    (
        "EDITING",
        &[
            ("Enter", "Toggle boolean, rotate combo, edit other values"),
            ("Left/Right", "Previous / next choice"),
            ("r", "Reset selected option"),
            ("R", "Discard all pending changes"),
            ("F5", "Reload options from the build directory"),
        ],
    ),
    (
        "EXIT",
        &[
            ("c", "Apply changes and reconfigure"),
            ("g", "Apply changes without reconfiguring"),
            ("q", "Quit without applying"),
            ("Ctrl-C", "Quit without applying"),
        ],
    ),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let mut lines = Vec::new();
    for (heading, keys) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            *heading,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(Color::Cyan)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Options marked with * have pending changes",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner_area);
}
