use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};
use crate::meson::OptionType;

pub fn draw_edit_value_screen(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Edit {} ", app.editor.option_name);
    let inner_area = Popup::new(&title, popup::EDIT_VALUE).render(frame, area);

    let option = app.store.get(&app.editor.option_name);
    let hint = match option.map(|o| o.option_type) {
        Some(OptionType::Array) => "Comma separated items, or ['a', 'b']",
        Some(OptionType::Integer) => "Whole number",
        _ => "Text, used as is",
    };

    let field = InputField::new("Value", &app.editor.input)
        .active(true)
        .error(app.editor.error.as_deref())
        .placeholder("empty");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(field.height()),
        ])
        .split(inner_area);

    let description = option.map(|o| o.description.as_str()).unwrap_or_default();
    let info = Paragraph::new(vec![
        Line::from(description),
        Line::from(Span::styled(hint, Style::default().fg(colors::MUTED))),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    field.render(frame, chunks[1]);
}
