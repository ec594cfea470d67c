//! Color theme definitions for the UI.
//!
//! A dark-red-on-light palette, after the classic kitchen timer face.
//! All color constants are defined here for consistency and easy theme changes.

use ratatui::style::Color;

/// Titles and highlighted labels
pub const PRIMARY: Color = Color::Rgb(220, 38, 38); // Red
/// START button and other positive controls
pub const SECONDARY: Color = Color::Rgb(234, 88, 12); // Burnt orange
/// Background for focused controls and highlighted options
pub const SELECTION: Color = Color::Rgb(127, 29, 29); // Maroon
/// Text on selection
pub const SELECTION_TEXT: Color = Color::Rgb(254, 242, 242); // Off-white
/// Hints and captions
pub const MUTED: Color = Color::Rgb(168, 162, 158); // Warm gray
/// Error text and the TIME UP display
pub const ERROR: Color = Color::Rgb(239, 68, 68); // Bright red
/// Dialog frames and the SELECT badge
pub const WARNING: Color = Color::Rgb(245, 158, 11); // Amber
/// Success messages and the RUNNING badge
pub const SUCCESS: Color = Color::Rgb(132, 204, 22); // Lime
/// Panel borders
pub const BORDER: Color = Color::Rgb(231, 229, 228); // Light stone
/// Keyboard shortcuts
pub const KEY: Color = Color::Rgb(251, 113, 133); // Rose
/// Icons and logo frame corners
pub const ACCENT: Color = Color::Rgb(248, 113, 113); // Salmon
/// Countdown digits
pub const DIGITS: Color = Color::Rgb(153, 27, 27); // Dark red

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_display_differs_from_running_digits() {
        assert_ne!(DIGITS, ERROR);
    }

    #[test]
    fn test_state_badges_are_distinguishable() {
        // The header blinks the badge whose color is ERROR
        assert_ne!(ERROR, SUCCESS);
        assert_ne!(ERROR, WARNING);
    }
}
