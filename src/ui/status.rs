//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, View};

use super::colors;

/// Draws the commands bar showing available actions for current view.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands(app);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of commands available in the current state.
fn get_commands(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.dialog.is_some() {
        return vec![("Enter", "ok"), ("Esc", "close")];
    }
    if app.show_help {
        return vec![("any key", "close help")];
    }

    match app.current_view {
        View::Selector if app.selector.open.is_some() => {
            vec![("j/k", "navigate"), ("Enter", "select"), ("Esc", "cancel")]
        }
        View::Selector => vec![
            ("Tab", "next field"),
            ("Enter", "open / start"),
            ("s", "start"),
            ("?", "help"),
            ("q", "quit"),
        ],
        View::Countdown => vec![
            ("Tab", "switch button"),
            ("Enter", "press"),
            ("r", "restart"),
            ("Esc", "reset"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (format!(" {} ", status.text), style)
    } else {
        (" Ready".to_string(), Style::default().fg(colors::MUTED))
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Action;

    #[test]
    fn test_selector_commands() {
        let app = App::new();
        let commands = get_commands(&app);
        assert!(commands.contains(&("s", "start")));
    }

    #[test]
    fn test_dialog_commands_take_precedence() {
        let mut app = App::new();
        app.start();
        assert_eq!(get_commands(&app), vec![("Enter", "ok"), ("Esc", "close")]);
    }

    #[test]
    fn test_open_dropdown_commands() {
        let mut app = App::new();
        app.handle_event(Action::Enter);
        assert!(get_commands(&app).contains(&("Esc", "cancel")));
    }
}
