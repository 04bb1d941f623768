//! Detail panel for the selected option

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;

/// Three lines: `name: description`, section/machine/type, choices.
pub fn draw_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED));

    let lines = match app.selected_option() {
        Some(option) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", option.name),
                        Style::default()
                            .fg(colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(option.description.as_str()),
                ]),
                Line::from(Span::styled(
                    format!(
                        "Section: {}, Machine: {}, Type: {}",
                        option.section, option.machine, option.option_type
                    ),
                    Style::default().fg(colors::MUTED),
                )),
            ];
            if let Some(choices) = option.choices.as_ref().filter(|c| !c.is_empty()) {
                lines.push(Line::from(format!("Choices: {}", choices.join(" "))));
            }
            if option.is_dirty() {
                lines.push(Line::from(Span::styled(
                    format!("Was: {}", option.committed()),
                    Style::default().fg(colors::WARNING),
                )));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "This build directory has no options",
            Style::default().fg(colors::MUTED),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
