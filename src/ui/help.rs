//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- Press any key to close ",
                        Style::default().fg(colors::MUTED),
                    ),
                ])),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

/// One "key  description" row.
fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("    ", Style::default()),
        Span::styled(format!("{key:<12}"), Style::default().fg(colors::KEY).bold()),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

/// Section heading row.
fn section(title: &'static str) -> Line<'static> {
    let style = Style::default().fg(colors::PRIMARY).bold();
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("▪ ", Style::default().fg(colors::ACCENT)),
        Span::styled(title, style),
    ])
}

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    Text::from(vec![
        Line::from(""),
        section("SELECTOR"),
        Line::from(""),
        help_line("Tab / l", "Focus next control"),
        help_line("S-Tab / h", "Focus previous control"),
        help_line("Enter", "Open dropdown / press START"),
        help_line("j / k", "Move through dropdown options"),
        help_line("g / G", "First / last option"),
        help_line("Esc", "Close dropdown without picking"),
        help_line("s", "Start the countdown"),
        Line::from(""),
        section("COUNTDOWN"),
        Line::from(""),
        help_line("Tab", "Switch between RESET and RESTART"),
        help_line("Enter", "Press the focused button"),
        help_line("r", "Restart with the same duration"),
        help_line("Esc / b", "Reset and go back to the selector"),
        Line::from(""),
        section("GENERAL"),
        Line::from(""),
        help_line("? / F1", "Show this help"),
        help_line("q / Ctrl+C", "Quit application"),
        Line::from(""),
    ])
}
