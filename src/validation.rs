//! Input validation for the duration picked in the selector.

/// Validation result with error message.
pub type ValidationResult = Result<(), String>;

/// Message shown when the selected duration is zero.
pub const INCOMPLETE_DETAILS: &str = "Please enter the minutes to start the timer";

/// Parses a dropdown label such as "3 hours" back into its number.
///
/// Rules:
/// - The number is the first whitespace-separated token
/// - It must be followed by the expected unit
/// - It must not exceed `max`
pub fn parse_quantity(label: &str, unit: &str, max: u32) -> Result<u32, String> {
    let mut parts = label.split_whitespace();

    let number = parts
        .next()
        .ok_or_else(|| format!("Empty {unit} value"))?;

    let value: u32 = number
        .parse()
        .map_err(|_| format!("Invalid {unit} value: '{label}'"))?;

    match parts.next() {
        Some(found) if found == unit => {}
        _ => return Err(format!("Expected '{unit}' in '{label}'")),
    }

    if parts.next().is_some() {
        return Err(format!("Unexpected text after '{unit}' in '{label}'"));
    }

    if value > max {
        return Err(format!("{label} is out of range (max {max} {unit})"));
    }

    Ok(value)
}

/// Validates that a duration is long enough to count down.
///
/// Only the all-zero duration is rejected; a single non-zero field is enough.
pub fn validate_duration(hours: u32, minutes: u32) -> ValidationResult {
    if hours == 0 && minutes == 0 {
        return Err(INCOMPLETE_DETAILS.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_labels() {
        assert_eq!(parse_quantity("0 hours", "hours", 9), Ok(0));
        assert_eq!(parse_quantity("9 hours", "hours", 9), Ok(9));
        assert_eq!(parse_quantity("45 minutes", "minutes", 59), Ok(45));
        assert_eq!(parse_quantity("  1   minutes ", "minutes", 59), Ok(1));
    }

    #[test]
    fn test_parse_invalid_labels() {
        assert!(parse_quantity("", "hours", 9).is_err());
        assert!(parse_quantity("hours", "hours", 9).is_err());
        assert!(parse_quantity("3", "hours", 9).is_err()); // Missing unit
        assert!(parse_quantity("3 minutes", "hours", 9).is_err()); // Wrong unit
        assert!(parse_quantity("-1 hours", "hours", 9).is_err());
        assert!(parse_quantity("3 hours extra", "hours", 9).is_err());
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(parse_quantity("10 hours", "hours", 9).is_err());
        assert!(parse_quantity("60 minutes", "minutes", 59).is_err());
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert_eq!(
            validate_duration(0, 0),
            Err(INCOMPLETE_DETAILS.to_string())
        );
    }

    #[test]
    fn test_single_nonzero_field_accepted() {
        assert!(validate_duration(1, 0).is_ok());
        assert!(validate_duration(0, 1).is_ok());
        assert!(validate_duration(9, 59).is_ok());
    }
}
