//! Countdown view: the large remaining-time display and its buttons.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::{App, CountdownButton};
use crate::countdown::{Countdown, CountdownState};

use super::colors;
use super::glyphs::{self, GLYPH_HEIGHT};

/// Draws the countdown panel.
pub fn draw_countdown(frame: &mut Frame, area: Rect, app: &App) {
    let Some(countdown) = app.countdown.as_ref() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("⏱", Style::default().fg(colors::ACCENT)),
            Span::styled(" TIMER ", Style::default().fg(Color::White).bold()),
            Span::styled(
                format!("· {} ", countdown.preset()),
                Style::default().fg(colors::MUTED),
            ),
        ]))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Display
            Constraint::Length(1), // Target time
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
        ])
        .split(inner);

    draw_display(frame, chunks[0], countdown);

    let target = Paragraph::new(Line::from(vec![
        Span::styled("ends at ", Style::default().fg(colors::MUTED)),
        Span::styled(
            countdown.target().format("%H:%M:%S").to_string(),
            Style::default().fg(colors::PRIMARY),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(target, chunks[1]);

    draw_buttons(frame, chunks[3], app.countdown_focus);
}

/// Draws the remaining time, in block glyphs when there is room for them.
fn draw_display(frame: &mut Frame, area: Rect, countdown: &Countdown) {
    let text = countdown.display();
    let style = match countdown.state() {
        CountdownState::Running => Style::default().fg(colors::DIGITS).bold(),
        CountdownState::Expired => Style::default().fg(colors::ERROR).bold(),
    };

    let fits = glyphs::width(text) <= usize::from(area.width)
        && GLYPH_HEIGHT <= usize::from(area.height);

    let mut lines: Vec<Line> = if fits {
        glyphs::render(text)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(text.to_string(), style))]
    };

    // Center vertically
    let top = usize::from(area.height).saturating_sub(lines.len()) / 2;
    let mut padded = vec![Line::from(""); top];
    padded.append(&mut lines);

    frame.render_widget(Paragraph::new(padded).alignment(Alignment::Center), area);
}

/// Draws the RESET and RESTART buttons, highlighting the focused one.
fn draw_buttons(frame: &mut Frame, area: Rect, focus: CountdownButton) {
    let button = |label: &'static str, focused: bool| {
        let style = if focused {
            Style::default()
                .bg(colors::SELECTION)
                .fg(colors::SELECTION_TEXT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::KEY).bold()
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    let line = Line::from(vec![
        button("RESET", focus == CountdownButton::Reset),
        Span::raw("    "),
        button("RESTART", focus == CountdownButton::Restart),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
