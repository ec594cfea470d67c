//! Header rendering with ASCII art logo.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};
use crate::countdown::CountdownState;

use super::colors;

/// Logo rows, drawn between the box borders.
const LOGO: [&str; 2] = [" ▀█▀ █ █▀▄▀█ █▀▀ █▀█ ", "  █  █ █ ▀ █ ██▄ █▀▄ "];

/// Short badge describing what the app is doing right now.
fn state_badge(app: &App) -> (&'static str, Color) {
    match (app.current_view, app.countdown.as_ref().map(|c| c.state())) {
        (View::Countdown, Some(CountdownState::Expired)) => ("TIME UP", colors::ERROR),
        (View::Countdown, _) => ("RUNNING", colors::SUCCESS),
        (View::Selector, _) => ("SELECT", colors::WARNING),
    }
}

/// Draws the header with ASCII art logo and state badge.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = Style::default().fg(colors::BORDER);
    let dim_style = Style::default().fg(Color::Rgb(55, 65, 81));
    let muted_style = Style::default().fg(Color::Rgb(75, 85, 99));
    let logo_style = Style::default().fg(colors::DIGITS).bold();
    let rule = "━".repeat(LOGO[0].chars().count());

    let (badge, badge_color) = state_badge(app);
    let badge_style = if badge_color == colors::ERROR {
        Style::default()
            .fg(badge_color)
            .add_modifier(Modifier::SLOW_BLINK)
    } else {
        Style::default().fg(badge_color)
    };

    // Top border
    let line0 = Line::from(vec![
        Span::styled("┏", Style::default().fg(colors::ACCENT)),
        Span::styled(rule.clone(), border_style),
        Span::styled("┓", Style::default().fg(colors::PRIMARY)),
        Span::styled("░▒▓", dim_style),
        Span::styled("┃", border_style),
        Span::styled(" ◈ ", badge_style),
        Span::styled(badge, Style::default().fg(badge_color).bold()),
        Span::styled(" ┃", border_style),
        Span::styled("▓▒░", dim_style),
    ]);

    // Logo line 1 + title
    let line1 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(LOGO[0], logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ◆", Style::default().fg(colors::ACCENT)),
        Span::styled(" COUNTDOWN", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(" ▸▸ ", muted_style),
        Span::styled("TUI", Style::default().fg(colors::KEY).bold()),
    ]);

    // Logo line 2 + version
    let line2 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(LOGO[1], logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ▪", Style::default().fg(colors::SECONDARY)),
        Span::styled(
            format!(" v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
    ]);

    // Bottom border
    let line3 = Line::from(vec![
        Span::styled("┗", Style::default().fg(colors::ACCENT)),
        Span::styled(rule, border_style),
        Span::styled("┛", Style::default().fg(colors::PRIMARY)),
    ]);

    let header = Paragraph::new(vec![line0, line1, line2, line3]);
    frame.render_widget(header, area);
}
