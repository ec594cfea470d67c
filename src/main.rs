//! Countdown timer TUI
//!
//! Pick hours and minutes, press START, and watch the time run down to
//! "TIME UP". Run with: countdown-tui [--log-file <PATH>] [-v]

mod app;
mod config;
mod constants;
mod countdown;
mod event;
mod logging;
mod selection;
mod ui;
mod validation;

use std::io;

use anyhow::{Context, Result};
use tokio::time::Instant;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::event::EventHandler;

/// Entry point for the application.
///
/// Everything runs on one thread: user input and the countdown refresh are
/// multiplexed by the event loop below.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    info!("Starting countdown-tui v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the terminal
    let terminal = init_or_restore(ratatui::try_init, ratatui::restore)?;

    // Run the application
    let result = run_app(terminal, App::new()).await;

    // Restore the terminal to its original state
    ratatui::restore();

    // Return the result
    result
}

/// Runs terminal setup, undoing any partial setup when it fails.
///
/// Raw mode may already be enabled when a later setup step errors out.
fn init_or_restore<T>(init: impl FnOnce() -> io::Result<T>, restore: impl FnOnce()) -> Result<T> {
    init()
        .or_else(|e| {
            restore();
            Err(e)
        })
        .context("Failed to initialize the terminal")
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Draw the current UI state
/// 2. Wait for either a key press or the next countdown tick
/// 3. Update application state
/// 4. Repeat until the user quits
async fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    let mut event_handler = EventHandler::new();

    loop {
        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        tokio::select! {
            event = event_handler.next() => {
                let event = event.context("Failed to read terminal event")?;
                if let Some(action) = event {
                    if app.handle_event(action) {
                        break;
                    }
                }
            }
            _ = wait_for_tick(app.next_tick()) => {
                app.on_tick();
            }
        }
    }

    Ok(())
}

/// Resolves when the scheduled tick is due, or never if none is scheduled.
async fn wait_for_tick(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use super::*;
    use crate::constants::TICK_INTERVAL;

    #[test]
    fn test_failed_terminal_setup_is_restored() {
        let restored = Cell::new(false);
        let result: Result<()> = init_or_restore(
            || Err(io::Error::other("alternate screen unavailable")),
            || restored.set(true),
        );

        assert!(restored.get());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to initialize the terminal"));
        assert!(message.contains("alternate screen unavailable"));
    }

    #[test]
    fn test_successful_terminal_setup_is_kept() {
        let restored = Cell::new(false);
        let result = init_or_restore(|| Ok(42), || restored.set(true));

        assert_eq!(result.unwrap(), 42);
        assert!(!restored.get());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_tick_resolves_at_deadline() {
        let start = Instant::now();
        wait_for_tick(Some(start + TICK_INTERVAL)).await;
        assert_eq!(start.elapsed(), TICK_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_tick_without_deadline_stays_pending() {
        let result = tokio::time::timeout(Duration::from_secs(3600), wait_for_tick(None)).await;
        assert!(result.is_err());
    }
}
