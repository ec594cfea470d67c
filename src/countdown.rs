//! Countdown state machine.
//!
//! A countdown owns its target timestamp and turns "now" into the text the
//! countdown view shows. It never reads the clock itself: every operation
//! takes the current time so callers (and tests) decide what "now" is.

use std::fmt;

use chrono::{DateTime, Local, TimeDelta};

use crate::constants::selection::{HOURS_UNIT, MAX_HOURS, MAX_MINUTES, MINUTES_UNIT};
use crate::constants::TIME_UP;
use crate::validation::parse_quantity;

/// Lifecycle of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Ticking towards the target
    Running,
    /// Reached zero; no more ticks
    Expired,
}

/// The duration a countdown was started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub hours: u32,
    pub minutes: u32,
    /// Raw dropdown labels the preset was parsed from
    pub hours_label: String,
    pub minutes_label: String,
}

impl Preset {
    /// Parses the raw dropdown labels ("3 hours", "45 minutes").
    pub fn from_labels(hours: &str, minutes: &str) -> Result<Self, String> {
        Ok(Self {
            hours: parse_quantity(hours, HOURS_UNIT, MAX_HOURS)?,
            minutes: parse_quantity(minutes, MINUTES_UNIT, MAX_MINUTES)?,
            hours_label: hours.to_string(),
            minutes_label: minutes.to_string(),
        })
    }

    pub fn total_seconds(&self) -> i64 {
        i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60
    }

    pub fn duration(&self) -> TimeDelta {
        TimeDelta::seconds(self.total_seconds())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.hours_label, self.minutes_label)
    }
}

/// Remaining time split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Splits a number of seconds. Negative input is clamped to zero.
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        let (total_minutes, seconds) = (total / 60, total % 60);
        let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {:02} : {:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// A single running (or finished) countdown.
#[derive(Debug, Clone)]
pub struct Countdown {
    preset: Preset,
    target: DateTime<Local>,
    state: CountdownState,
    display: String,
}

impl Countdown {
    /// Starts a countdown at `now` and runs the first refresh immediately.
    pub fn new(preset: Preset, now: DateTime<Local>) -> Self {
        let target = now + preset.duration();
        let mut countdown = Self {
            preset,
            target,
            state: CountdownState::Running,
            display: String::new(),
        };
        countdown.tick(now);
        countdown
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// Text currently on display: "H : MM : SS" or "TIME UP".
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Time left at `now`, truncated to whole seconds.
    pub fn remaining(&self, now: DateTime<Local>) -> Remaining {
        Remaining::from_seconds((self.target - now).num_seconds())
    }

    /// Runs one refresh step and returns the resulting state.
    ///
    /// A countdown that already expired stays expired and keeps its label.
    pub fn tick(&mut self, now: DateTime<Local>) -> CountdownState {
        if self.state == CountdownState::Expired {
            return self.state;
        }

        let remaining = self.remaining(now);
        if remaining.is_zero() {
            self.state = CountdownState::Expired;
            self.display = TIME_UP.to_string();
        } else {
            self.display = remaining.to_string();
        }
        self.state
    }

    /// Recomputes the target from the original preset and resumes running.
    pub fn restart(&mut self, now: DateTime<Local>) {
        self.target = now + self.preset.duration();
        self.state = CountdownState::Running;
        self.tick(now);
    }
}
