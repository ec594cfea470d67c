//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each view is rendered by a separate submodule for clarity.

mod colors;
mod countdown;
mod dialogs;
mod glyphs;
mod header;
mod help;
mod selector;
mod status;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, View};
use crate::constants::layout;

use countdown::draw_countdown;
use dialogs::{draw_dialog, draw_dropdown};
use header::draw_header;
use help::draw_help_overlay;
use selector::draw_selector;
use status::{draw_commands_bar, draw_status_bar};

/// Main draw function - dispatches to specific view renderers.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, content, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Main content
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    // Draw the header
    draw_header(frame, chunks[0], app);

    // Only the active view is drawn; the other one is hidden
    match app.current_view {
        View::Selector => {
            draw_selector(frame, chunks[1], app);
            // Open option list goes on top of the selector
            if let Some(field) = app.selector.open {
                draw_dropdown(frame, field, app.selector.dropdown(field));
            }
        }
        View::Countdown => draw_countdown(frame, chunks[1], app),
    }

    // Draw the commands bar (shows available actions)
    draw_commands_bar(frame, chunks[2], app);

    // Draw the status bar (shows messages)
    draw_status_bar(frame, chunks[3], app);

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame);
    }

    // Modal dialogs sit above everything else
    if let Some(dialog) = &app.dialog {
        draw_dialog(frame, dialog);
    }
}
