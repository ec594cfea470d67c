//! Application state and logic.
//!
//! `App` is the single UI root: it owns the selector, the optional running
//! countdown, the active view and the scheduled refresh tick. Both views
//! talk to each other only through it.

use chrono::{DateTime, Local};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::constants::TICK_INTERVAL;
use crate::countdown::{Countdown, CountdownState, Preset};
use crate::event::Action;
use crate::selection::{Field, Selector, SelectorFocus};
use crate::validation::validate_duration;

/// Title of the dialog shown when no duration was picked.
pub const INCOMPLETE_TITLE: &str = "Incomplete details";

/// The different views/screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Hour and minute dropdowns with the START button
    Selector,
    /// The running (or finished) countdown
    Countdown,
}

/// Modal dialogs drawn over the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Informational message, dismissed with Enter or Esc
    Info { title: String, message: String },
}

/// Buttons on the countdown view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownButton {
    Reset,
    Restart,
}

impl CountdownButton {
    fn toggle(self) -> Self {
        match self {
            CountdownButton::Reset => CountdownButton::Restart,
            CountdownButton::Restart => CountdownButton::Reset,
        }
    }
}

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// Current view/screen
    pub current_view: View,
    /// Status message to display
    pub status: Option<StatusMessage>,
    /// Modal dialog, if one is open
    pub dialog: Option<Dialog>,

    // --- Selector state ---
    pub selector: Selector,

    // --- Countdown state ---
    /// The countdown, present only while its view exists
    pub countdown: Option<Countdown>,
    /// Focused countdown button
    pub countdown_focus: CountdownButton,
    /// When the next refresh tick is due (None when nothing is scheduled)
    next_tick: Option<Instant>,

    // --- Help visibility ---
    pub show_help: bool,
}

impl App {
    /// Creates a new application showing an empty selector.
    pub fn new() -> Self {
        Self {
            current_view: View::Selector,
            status: None,
            dialog: None,
            selector: Selector::new(),
            countdown: None,
            countdown_focus: CountdownButton::Reset,
            next_tick: None,
            show_help: false,
        }
    }

    /// Deadline of the pending refresh tick.
    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> bool {
        if action == Action::Quit {
            info!("quit requested");
            return true;
        }

        // Modal dialogs swallow everything until dismissed
        if self.dialog.is_some() {
            if matches!(action, Action::Enter | Action::Back) {
                self.dialog = None;
            }
            return false;
        }

        // Handle help toggle from any view
        if action == Action::Help {
            self.show_help = !self.show_help;
            return false;
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return false;
        }

        match self.current_view {
            View::Selector => self.handle_selector_action(action),
            View::Countdown => self.handle_countdown_action(action),
        }
        false
    }

    /// Handles actions in the selector view.
    fn handle_selector_action(&mut self, action: Action) {
        if let Some(field) = self.selector.open {
            self.handle_dropdown_action(field, action);
            return;
        }

        match action {
            Action::NextField | Action::Down => self.selector.focus = self.selector.focus.next(),
            Action::PrevField | Action::Up => self.selector.focus = self.selector.focus.previous(),
            Action::Top => self.selector.focus = SelectorFocus::Hours,
            Action::Bottom => self.selector.focus = SelectorFocus::Start,
            Action::Enter => match self.selector.focus {
                SelectorFocus::Hours => self.selector.open_dropdown(Field::Hours),
                SelectorFocus::Minutes => self.selector.open_dropdown(Field::Minutes),
                SelectorFocus::Start => self.start(),
            },
            Action::Start => self.start(),
            _ => {}
        }
    }

    /// Handles actions while a dropdown's option list is open.
    fn handle_dropdown_action(&mut self, field: Field, action: Action) {
        let dropdown = self.selector.dropdown_mut(field);
        match action {
            Action::Up => dropdown.highlight_previous(),
            Action::Down => dropdown.highlight_next(),
            Action::Top => dropdown.highlight_first(),
            Action::Bottom => dropdown.highlight_last(),
            Action::Enter => {
                self.selector.close_dropdown(true);
                // Move on so the next Enter opens the following control
                self.selector.focus = self.selector.focus.next();
            }
            Action::Back => self.selector.close_dropdown(false),
            _ => {}
        }
    }

    /// Handles actions in the countdown view.
    fn handle_countdown_action(&mut self, action: Action) {
        match action {
            Action::NextField | Action::PrevField | Action::Up | Action::Down => {
                self.countdown_focus = self.countdown_focus.toggle();
            }
            Action::Enter => match self.countdown_focus {
                CountdownButton::Reset => self.reset(),
                CountdownButton::Restart => self.restart(),
            },
            Action::Restart => self.restart(),
            Action::Back => self.reset(),
            _ => {}
        }
    }

    // --- Selector operations ---

    /// Starts a countdown from the current dropdown selections.
    pub fn start(&mut self) {
        self.start_at(Local::now());
    }

    fn start_at(&mut self, now: DateTime<Local>) {
        let (hours, minutes) = self.selector.selected_labels();

        let preset = match Preset::from_labels(&hours, &minutes) {
            Ok(preset) => preset,
            Err(e) => {
                warn!(%hours, %minutes, error = %e, "unreadable selection");
                self.set_status(&e, true);
                return;
            }
        };

        if let Err(message) = validate_duration(preset.hours, preset.minutes) {
            warn!(%hours, %minutes, "rejected zero duration");
            self.dialog = Some(Dialog::Info {
                title: INCOMPLETE_TITLE.to_string(),
                message,
            });
            return;
        }

        let countdown = Countdown::new(preset, now);
        info!(
            preset = %countdown.preset(),
            target = %countdown.target().format("%H:%M:%S"),
            "countdown started"
        );
        self.set_status(
            &format!("Countdown started: {}", countdown.preset()),
            false,
        );
        let state = countdown.state();
        self.countdown = Some(countdown);
        self.countdown_focus = CountdownButton::Reset;
        self.schedule_after(state);

        // The selector is only hidden; its state object stays in place
        self.selector.close_dropdown(false);
        self.current_view = View::Countdown;
    }

    /// Shows the selector again with both dropdowns empty.
    pub fn restore(&mut self) {
        self.selector.clear();
        self.current_view = View::Selector;
    }

    // --- Countdown operations ---

    /// Runs one refresh tick of the countdown.
    pub fn on_tick(&mut self) {
        self.on_tick_at(Local::now());
    }

    fn on_tick_at(&mut self, now: DateTime<Local>) {
        let Some(countdown) = self.countdown.as_mut() else {
            // Nothing left to refresh; the countdown was torn down
            self.next_tick = None;
            return;
        };

        let state = countdown.tick(now);
        debug!(display = countdown.display(), "tick");
        if state == CountdownState::Expired {
            info!("countdown expired");
            self.set_status("Time is up", false);
        }
        self.schedule_after(state);
    }

    /// Restarts the countdown with its original duration.
    pub fn restart(&mut self) {
        self.restart_at(Local::now());
    }

    fn restart_at(&mut self, now: DateTime<Local>) {
        let Some(countdown) = self.countdown.as_mut() else {
            return;
        };

        countdown.restart(now);
        info!(preset = %countdown.preset(), "countdown restarted");
        let state = countdown.state();
        self.set_status("Countdown restarted", false);
        self.schedule_after(state);
    }

    /// Tears the countdown down and brings the selector back.
    pub fn reset(&mut self) {
        if self.countdown.take().is_some() {
            info!("countdown reset");
        }
        self.next_tick = None;
        self.clear_status();
        self.restore();
    }

    /// Schedules the next tick one interval from now while still running.
    fn schedule_after(&mut self, state: CountdownState) {
        self.next_tick = match state {
            CountdownState::Running => Some(Instant::now() + TICK_INTERVAL),
            CountdownState::Expired => None,
        };
    }

    // --- Status message helpers ---

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    use crate::constants::TIME_UP;
    use crate::validation::INCOMPLETE_DETAILS;

    /// Picks an option in a dropdown through the keyboard flow.
    fn pick(app: &mut App, field: Field, index: usize) {
        app.selector.focus = match field {
            Field::Hours => SelectorFocus::Hours,
            Field::Minutes => SelectorFocus::Minutes,
        };
        app.handle_event(Action::Enter);
        app.handle_event(Action::Top);
        for _ in 0..index {
            app.handle_event(Action::Down);
        }
        app.handle_event(Action::Enter);
    }

    fn seconds(n: i64) -> TimeDelta {
        TimeDelta::seconds(n)
    }

    #[test]
    fn test_starts_on_empty_selector() {
        let app = App::new();
        assert_eq!(app.current_view, View::Selector);
        assert_eq!(app.selector.hours.value(), None);
        assert_eq!(app.selector.minutes.value(), None);
        assert!(app.countdown.is_none());
        assert!(app.next_tick().is_none());
    }

    #[test]
    fn test_start_with_nothing_selected_shows_dialog() {
        let mut app = App::new();
        app.start();

        assert_eq!(app.current_view, View::Selector);
        assert!(app.countdown.is_none());
        assert!(app.next_tick().is_none());
        assert_eq!(
            app.dialog,
            Some(Dialog::Info {
                title: INCOMPLETE_TITLE.to_string(),
                message: INCOMPLETE_DETAILS.to_string(),
            })
        );
    }

    #[test]
    fn test_start_with_explicit_zeros_shows_dialog() {
        let mut app = App::new();
        pick(&mut app, Field::Hours, 0);
        pick(&mut app, Field::Minutes, 0);
        assert_eq!(app.selector.hours.value(), Some("0 hours"));

        app.handle_event(Action::Start);

        assert!(app.countdown.is_none());
        assert!(app.dialog.is_some());
    }

    #[test]
    fn test_dialog_is_modal_and_dismissable() {
        let mut app = App::new();
        app.start();

        // Other keys are ignored while the dialog is open
        app.handle_event(Action::Down);
        app.handle_event(Action::Help);
        assert!(app.dialog.is_some());
        assert!(!app.show_help);
        assert_eq!(app.selector.focus, SelectorFocus::Hours);

        app.handle_event(Action::Enter);
        assert!(app.dialog.is_none());
        assert_eq!(app.current_view, View::Selector);
    }

    #[test]
    fn test_start_with_only_minutes() {
        let mut app = App::new();
        pick(&mut app, Field::Minutes, 1);
        let now = Local::now();
        app.start_at(now);

        assert_eq!(app.current_view, View::Countdown);
        assert!(app.dialog.is_none());
        let countdown = app.countdown.as_ref().unwrap();
        assert_eq!(countdown.state(), CountdownState::Running);
        assert_eq!(countdown.target(), now + seconds(60));
        assert_eq!(countdown.display(), "0 : 01 : 00");
        assert!(app.next_tick().is_some());
    }

    #[test]
    fn test_start_with_only_hours() {
        let mut app = App::new();
        pick(&mut app, Field::Hours, 9);
        let now = Local::now();
        app.start_at(now);

        let countdown = app.countdown.as_ref().unwrap();
        assert_eq!(countdown.target(), now + seconds(9 * 3600));
        assert_eq!(countdown.preset().minutes_label, "0 minutes");
    }

    #[test]
    fn test_start_via_focus_and_enter() {
        let mut app = App::new();
        pick(&mut app, Field::Hours, 2);
        // Picking advances focus to the minutes dropdown
        assert_eq!(app.selector.focus, SelectorFocus::Minutes);
        app.handle_event(Action::Enter);
        app.handle_event(Action::Down);
        app.handle_event(Action::Down);
        app.handle_event(Action::Enter);
        assert_eq!(app.selector.focus, SelectorFocus::Start);

        app.handle_event(Action::Enter);

        assert_eq!(app.current_view, View::Countdown);
        let preset = app.countdown.as_ref().unwrap().preset();
        assert_eq!((preset.hours, preset.minutes), (2, 2));
    }

    #[test]
    fn test_one_minute_scenario() {
        let mut app = App::new();
        pick(&mut app, Field::Minutes, 1);
        let start = Local::now();
        app.start_at(start);

        app.on_tick_at(start + seconds(59));
        assert_eq!(app.countdown.as_ref().unwrap().display(), "0 : 00 : 01");
        assert!(app.next_tick().is_some());

        app.on_tick_at(start + seconds(60));
        let countdown = app.countdown.as_ref().unwrap();
        assert_eq!(countdown.display(), TIME_UP);
        assert_eq!(countdown.state(), CountdownState::Expired);
        assert!(app.next_tick().is_none());
    }

    #[test]
    fn test_next_tick_is_one_interval_after_each_refresh() {
        assert_eq!(TICK_INTERVAL, std::time::Duration::from_secs(1));

        let mut app = App::new();
        pick(&mut app, Field::Minutes, 5);
        let start = Local::now();

        let before = Instant::now();
        app.start_at(start);
        let after = Instant::now();
        let deadline = app.next_tick().unwrap();
        assert!(deadline >= before + TICK_INTERVAL);
        assert!(deadline <= after + TICK_INTERVAL);

        let before = Instant::now();
        app.on_tick_at(start + seconds(1));
        let after = Instant::now();
        let deadline = app.next_tick().unwrap();
        assert!(deadline >= before + TICK_INTERVAL);
        assert!(deadline <= after + TICK_INTERVAL);

        let before = Instant::now();
        app.restart_at(start + seconds(2));
        let after = Instant::now();
        let deadline = app.next_tick().unwrap();
        assert!(deadline >= before + TICK_INTERVAL);
        assert!(deadline <= after + TICK_INTERVAL);
    }

    #[test]
    fn test_restart_restores_full_duration() {
        let mut app = App::new();
        pick(&mut app, Field::Hours, 1);
        pick(&mut app, Field::Minutes, 30);
        let start = Local::now();
        app.start_at(start);
        app.on_tick_at(start + seconds(4000));

        let later = start + seconds(4000);
        app.restart_at(later);

        let countdown = app.countdown.as_ref().unwrap();
        assert_eq!(countdown.target(), later + seconds(5400));
        assert_eq!(countdown.display(), "1 : 30 : 00");
        assert!(app.next_tick().is_some());
    }

    #[test]
    fn test_restart_after_time_up_reschedules() {
        let mut app = App::new();
        pick(&mut app, Field::Minutes, 1);
        let start = Local::now();
        app.start_at(start);
        app.on_tick_at(start + seconds(120));
        assert!(app.next_tick().is_none());

        app.restart_at(start + seconds(130));

        assert_eq!(
            app.countdown.as_ref().unwrap().state(),
            CountdownState::Running
        );
        assert!(app.next_tick().is_some());
    }

    #[test]
    fn test_reset_returns_to_empty_selector() {
        let mut app = App::new();
        pick(&mut app, Field::Hours, 3);
        pick(&mut app, Field::Minutes, 45);
        app.handle_event(Action::Start);
        assert_eq!(app.current_view, View::Countdown);

        app.handle_event(Action::Back);

        assert_eq!(app.current_view, View::Selector);
        assert!(app.countdown.is_none());
        assert!(app.next_tick().is_none());
        assert_eq!(app.selector.hours.value(), None);
        assert_eq!(app.selector.minutes.value(), None);
    }

    #[test]
    fn test_tick_after_reset_is_a_no_op() {
        let mut app = App::new();
        pick(&mut app, Field::Minutes, 5);
        app.handle_event(Action::Start);
        app.reset();

        app.on_tick();

        assert!(app.countdown.is_none());
        assert!(app.next_tick().is_none());
        assert_eq!(app.current_view, View::Selector);
    }

    #[test]
    fn test_countdown_buttons() {
        let mut app = App::new();
        pick(&mut app, Field::Minutes, 10);
        app.handle_event(Action::Start);
        assert_eq!(app.countdown_focus, CountdownButton::Reset);

        app.handle_event(Action::NextField);
        assert_eq!(app.countdown_focus, CountdownButton::Restart);
        app.handle_event(Action::Enter);
        assert_eq!(app.current_view, View::Countdown);
        assert_eq!(app.status.as_ref().unwrap().text, "Countdown restarted");

        app.handle_event(Action::PrevField);
        app.handle_event(Action::Enter);
        assert_eq!(app.current_view, View::Selector);
    }

    #[test]
    fn test_dropdown_escape_keeps_selection() {
        let mut app = App::new();
        pick(&mut app, Field::Hours, 4);
        app.selector.focus = SelectorFocus::Hours;

        app.handle_event(Action::Enter);
        assert_eq!(app.selector.open, Some(Field::Hours));
        app.handle_event(Action::Bottom);
        app.handle_event(Action::Back);

        assert_eq!(app.selector.open, None);
        assert_eq!(app.selector.hours.value(), Some("4 hours"));
    }

    #[test]
    fn test_help_toggle() {
        let mut app = App::new();
        app.handle_event(Action::Help);
        assert!(app.show_help);

        // Any key closes help without acting on the view
        app.handle_event(Action::Start);
        assert!(!app.show_help);
        assert!(app.dialog.is_none());
    }

    #[test]
    fn test_quit_from_every_state() {
        let mut app = App::new();
        assert!(app.handle_event(Action::Quit));

        app.start();
        assert!(app.dialog.is_some());
        assert!(app.handle_event(Action::Quit));
    }
}
