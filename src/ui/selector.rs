//! Selector view: the hour and minute dropdowns and the START button.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::selection::{Dropdown, SelectorFocus};

use super::colors;
use super::utils::centered_fixed;

/// Outer size of the selector panel.
const PANEL_WIDTH: u16 = 44;
const PANEL_HEIGHT: u16 = 11;

/// Columns reserved for a dropdown value.
const FIELD_WIDTH: usize = 14;

/// Style for a focusable control.
fn control_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(colors::SELECTION)
            .fg(colors::SELECTION_TEXT)
    } else {
        Style::default().fg(Color::White)
    }
}

/// One dropdown row: caption, boxed value and the open marker.
fn dropdown_line<'a>(caption: &'a str, dropdown: &'a Dropdown, focused: bool) -> Line<'a> {
    let style = control_style(focused);
    let value = match dropdown.value() {
        Some(label) => Span::styled(format!("{label:<FIELD_WIDTH$}"), style.bold()),
        None => Span::styled(
            format!("{:<FIELD_WIDTH$}", ""),
            style.fg(if focused {
                colors::SELECTION_TEXT
            } else {
                colors::MUTED
            }),
        ),
    };

    Line::from(vec![
        Span::styled(if focused { "▸ " } else { "  " }, Style::default().fg(colors::PRIMARY)),
        Span::styled(format!("{caption:<9}"), Style::default().fg(colors::MUTED)),
        Span::styled("[ ", style),
        value,
        Span::styled(" ▾ ]", style),
    ])
}

/// Draws the selector panel centered in `area`.
pub fn draw_selector(frame: &mut Frame, area: Rect, app: &App) {
    let selector = &app.selector;
    let panel = centered_fixed(PANEL_WIDTH, PANEL_HEIGHT, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("⏱", Style::default().fg(colors::ACCENT)),
            Span::styled(" Timer ", Style::default().fg(Color::White).bold()),
        ]))
        .padding(Padding::horizontal(1));

    let start_focused = selector.focus == SelectorFocus::Start;
    let start_style = if start_focused {
        Style::default()
            .bg(colors::SECONDARY)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::SECONDARY).bold()
    };

    let content = vec![
        Line::from(""),
        dropdown_line(
            "Hours",
            &selector.hours,
            selector.focus == SelectorFocus::Hours,
        ),
        Line::from(""),
        dropdown_line(
            "Minutes",
            &selector.minutes,
            selector.focus == SelectorFocus::Minutes,
        ),
        Line::from(""),
        Line::from(Span::styled("[ START ]", start_style)).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "Enter opens a dropdown · s starts",
            Style::default().fg(colors::MUTED),
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(content).block(block), panel);
}
