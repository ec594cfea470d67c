//! Dialog rendering (information message, dropdown option list).

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::Dialog;
use crate::constants::dialog;
use crate::selection::{Dropdown, Field};

use super::colors;
use super::utils::centered_rect;

/// Draws a modal dialog.
pub fn draw_dialog(frame: &mut Frame, dialog: &Dialog) {
    match dialog {
        Dialog::Info { title, message } => draw_info_dialog(frame, title, message),
    }
}

/// Draws an informational dialog with a single OK action.
fn draw_info_dialog(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(dialog::INFO_WIDTH, dialog::INFO_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::WARNING))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("ℹ", Style::default().fg(colors::WARNING)),
            Span::styled(" ", Style::default()),
            Span::styled(title, Style::default().fg(Color::White).bold()),
            Span::styled(" ", Style::default()),
        ]))
        .padding(Padding::uniform(1));

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(colors::WARNING))),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
            Span::styled(" ok  ", Style::default().fg(colors::MUTED)),
            Span::styled("Esc", Style::default().fg(colors::KEY).bold()),
            Span::styled(" close", Style::default().fg(colors::MUTED)),
        ]),
    ];

    let info_widget = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(info_widget, area);
}

/// Draws the option list of an open dropdown.
pub fn draw_dropdown(frame: &mut Frame, field: Field, dropdown: &Dropdown) {
    let area = centered_rect(
        dialog::DROPDOWN_WIDTH,
        dialog::DROPDOWN_HEIGHT,
        frame.area(),
    );

    // Clear the background
    frame.render_widget(Clear, area);

    let title = match field {
        Field::Hours => " Hours ",
        Field::Minutes => " Minutes ",
    };

    // Split area into list and footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // List
            Constraint::Length(1), // Footer with commands
        ])
        .margin(1)
        .split(area);

    // Outer block
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::PRIMARY))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("▾", Style::default().fg(colors::ACCENT)),
            Span::styled(title, Style::default().fg(Color::White).bold()),
        ]));

    frame.render_widget(block, area);

    let highlighted = dropdown.list_state.selected();
    let items: Vec<ListItem> = dropdown
        .options
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let is_highlighted = highlighted == Some(idx);
            let is_current = dropdown.selected == Some(idx);

            let style = if is_highlighted {
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
            } else {
                Style::default()
            };

            let current_marker = if is_current {
                Span::styled(" (current)", Style::default().fg(colors::SUCCESS))
            } else {
                Span::raw("")
            };

            let content = Line::from(vec![
                Span::styled(
                    if is_highlighted { "▸" } else { " " },
                    Style::default().fg(if is_current {
                        colors::SUCCESS
                    } else {
                        colors::PRIMARY
                    }),
                ),
                Span::styled(" ", style),
                Span::styled(label.as_str(), style.add_modifier(Modifier::BOLD)),
                current_marker,
            ]);

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_symbol("");

    frame.render_stateful_widget(list, chunks[0], &mut dropdown.list_state.clone());

    // Footer with commands
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("j/k", Style::default().fg(colors::KEY).bold()),
        Span::styled(" navigate  ", Style::default().fg(colors::MUTED)),
        Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
        Span::styled(" select  ", Style::default().fg(colors::MUTED)),
        Span::styled("Esc", Style::default().fg(colors::KEY).bold()),
        Span::styled(" cancel", Style::default().fg(colors::MUTED)),
    ]));
    frame.render_widget(footer, chunks[1]);
}
