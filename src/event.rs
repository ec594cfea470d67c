//! Event handling module.
//!
//! This module reads terminal events from crossterm's async event stream and
//! converts key presses into application actions.

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Move highlight up
    Up,
    /// Move highlight down
    Down,
    /// Move to the top of the list
    Top,
    /// Move to the bottom of the list
    Bottom,
    /// Activate the focused control / pick the highlighted option
    Enter,
    /// Close a popup, or reset the countdown
    Back,
    /// Focus the next control
    NextField,
    /// Focus the previous control
    PrevField,
    /// Start the countdown from the selector
    Start,
    /// Restart the countdown with its original duration
    Restart,
    /// Show help
    Help,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Async stream of terminal events
    events: EventStream,
}

impl EventHandler {
    /// Creates a new event handler reading from the terminal.
    pub fn new() -> Self {
        Self {
            events: EventStream::new(),
        }
    }

    /// Waits for the next terminal event and converts it to an Action.
    ///
    /// Returns Ok(None) for events that carry no action (key releases,
    /// resizes, unmapped keys); the caller just redraws.
    pub async fn next(&mut self) -> io::Result<Option<Action>> {
        match self.events.next().await {
            Some(Ok(Event::Key(key_event))) => {
                // Only process key press events (not releases)
                if key_event.kind == KeyEventKind::Press {
                    Ok(key_to_action(key_event))
                } else {
                    Ok(None)
                }
            }
            Some(Ok(_)) => Ok(None),
            Some(Err(e)) => Err(e),
            // The terminal went away; nothing more will arrive
            None => Ok(Some(Action::Quit)),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a key event to an application action.
pub(crate) fn key_to_action(key: KeyEvent) -> Option<Action> {
    // Check for Ctrl+C first (quit)
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevField),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Enter),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),

        // Actions
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('s') => Some(Action::Start),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),

        _ => None,
    }
}
