use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with the project header and pending change count
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        app.header.as_str(),
        Style::default().fg(colors::PRIMARY).bold(),
    )];

    let dirty = app.store.dirty_count();
    if dirty > 0 {
        spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        spans.push(Span::styled(
            format!("{} pending", dirty),
            Style::default().fg(colors::WARNING),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(colors::ERROR).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            app.status_message.clone(),
            Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(colors::PRIMARY))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Main => vec![
            ("enter", "Edit entry", Color::Cyan),
            ("c", "Reconfigure", Color::Green),
            ("g", "Configure", Color::Green),
            ("r", "Reset", Color::Yellow),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::EditValue => vec![
            ("enter", "Apply", Color::Green),
            ("esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Help => vec![("esc", "Close", Color::Red)],
        CurrentScreen::Exiting => vec![("y", "Discard and quit", Color::Red), ("n", "Back", Color::Green)],
    };

    let mut spans = vec![Span::styled("Keys: ", Style::default().fg(colors::MUTED))];
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
