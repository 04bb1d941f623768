use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Row, Table, TableState},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{NAME_COLUMN_PERCENT, colors, value_colors};
use crate::meson::OptionValue;

/// Color of a value cell, by type and for switch-like values by state
pub fn value_style(value: &OptionValue) -> Style {
    let color = match value {
        OptionValue::Boolean(true) => value_colors::ON,
        OptionValue::Boolean(false) => value_colors::OFF,
        OptionValue::Combo(choice) => match choice.as_str() {
            "true" | "enabled" => value_colors::ON,
            "false" | "disabled" => value_colors::OFF,
            _ => value_colors::CHOICE,
        },
        OptionValue::String(_) => value_colors::STRING,
        OptionValue::Integer(_) => value_colors::INTEGER,
        OptionValue::Array(_) => value_colors::ARRAY,
    };
    Style::default().fg(color)
}

pub fn draw_option_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let total = app.option_count();

    // border 2 行开销
    let visible_height = (area.height as usize).saturating_sub(2);
    app.last_visible_height = visible_height.max(1);
    app.adjust_scroll_offset();

    let offset = app.scroll_offset.min(total.saturating_sub(1));
    let end = (offset + visible_height).min(total);

    // 虚拟渲染：只构建可见行
    let rows: Vec<Row> = app.store.options()[offset..end]
        .iter()
        .map(|option| {
            let marker = if option.is_dirty() { "*" } else { " " };
            let name_style = if option.is_dirty() {
                Style::default()
                    .fg(colors::WARNING)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Span::styled(format!("{}{}", marker, option.name), name_style),
                Span::styled(option.value().to_string(), value_style(option.value())),
            ])
        })
        .collect();

    let title = format!("Options ({})", total);
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(NAME_COLUMN_PERCENT),
            Constraint::Percentage(100 - NAME_COLUMN_PERCENT),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    // 虚拟 TableState：selected 调整为相对于可见窗口的偏移
    let mut virtual_state = TableState::default();
    if app.selected_index >= offset && app.selected_index < end {
        virtual_state.select(Some(app.selected_index - offset));
    }

    frame.render_stateful_widget(table, area, &mut virtual_state);
}
