//! Display formatting for calculator values
//!
//! One policy for every display surface: fixed fractional precision,
//! trailing zeros trimmed, no grouping separators.

/// Default number of fractional digits shown
pub const DEFAULT_FRACTION_DIGITS: usize = 10;

/// Text shown in place of a value after an arithmetic error
pub const ERROR_TEXT: &str = "Error";

/// Formats a value with at most `max_fraction_digits` fractional digits.
///
/// ```
/// use calculator_engine::format::format_for_display;
///
/// assert_eq!(format_for_display(10.0, 10), "10");
/// assert_eq!(format_for_display(1.0 / 3.0, 10), "0.3333333333");
/// assert_eq!(format_for_display(2.50, 10), "2.5");
/// ```
#[must_use]
pub fn format_for_display(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }

    let fixed = format!("{value:.max_fraction_digits$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    // Tiny negatives round to "-0"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Formats with [`DEFAULT_FRACTION_DIGITS`]
#[must_use]
pub fn format_number(value: f64) -> String {
    format_for_display(value, DEFAULT_FRACTION_DIGITS)
}

/// Parses operand text permissively: unparsable text counts as zero.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(0.0)
}
