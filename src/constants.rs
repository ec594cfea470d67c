//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Delay between two countdown refresh ticks.
///
/// The next tick is scheduled this long after the previous one ran, so
/// drift from scheduling latency accumulates and is not compensated.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Label shown once the countdown reaches zero.
pub const TIME_UP: &str = "TIME UP";

/// Dropdown value ranges.
pub mod selection {
    /// Largest selectable hour value (inclusive).
    pub const MAX_HOURS: u32 = 9;
    /// Largest selectable minute value (inclusive).
    pub const MAX_MINUTES: u32 = 59;
    /// Unit suffix used in hour labels ("3 hours").
    pub const HOURS_UNIT: &str = "hours";
    /// Unit suffix used in minute labels ("45 minutes").
    pub const MINUTES_UNIT: &str = "minutes";
}

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height including ASCII art.
    pub const HEADER_HEIGHT: u16 = 4;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 60;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 75;
    /// Info dialog width percentage.
    pub const INFO_WIDTH: u16 = 50;
    /// Info dialog height percentage.
    pub const INFO_HEIGHT: u16 = 35;
    /// Dropdown popup width percentage.
    pub const DROPDOWN_WIDTH: u16 = 40;
    /// Dropdown popup height percentage.
    pub const DROPDOWN_HEIGHT: u16 = 70;
}
