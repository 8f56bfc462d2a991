//! Field validators
//!
//! Each validator is a pure function of one already-trimmed string and
//! returns a [`ValidationResult`]; invalid input is never an error.
//! Rules are checked in order and the first failing rule wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the field passed every rule
    pub is_valid: bool,
    /// User-facing reason; empty when valid
    pub error_message: String,
}

impl ValidationResult {
    /// A passing result
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }

    /// A failing result with a user-facing message
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: message.into(),
        }
    }

    /// The error message, if the result is invalid
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        (!self.is_valid).then_some(self.error_message.as_str())
    }
}

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const NAME_LETTERS_ONLY: &str = "Name can only contain letters";
pub const MOBILE_REQUIRED: &str = "Mobile number is required";
pub const MOBILE_LENGTH: &str = "Mobile number must be 10 digits";
pub const MOBILE_INVALID: &str = "Enter a valid Indian mobile number";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email address";
pub const COLLEGE_REQUIRED: &str = "College name is required";
pub const COLLEGE_TOO_SHORT: &str = "College name must be at least 3 characters";

const NAME_MIN_CHARS: usize = 2;
const MOBILE_DIGITS: usize = 10;
const COLLEGE_MIN_CHARS: usize = 3;

// Patterns are literals; compilation cannot fail.
#[allow(clippy::expect_used)]
fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("literal pattern compiles"))
}

/// ASCII letters and ASCII whitespace only; no-break and other Unicode
/// spaces are rejected
fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compiled(&PATTERN, r"^[a-zA-Z \t\n\x0B\f\r]+$")
}

/// Indian mobile: starts with 6-9, ten digits total
fn mobile_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compiled(&PATTERN, r"^[6-9][0-9]{9}$")
}

/// Same shape as the common platform email pattern: local part, `@`,
/// one or more dot-separated labels.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compiled(
        &PATTERN,
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(?:\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Letters and spaces, at least 2 characters
#[must_use]
pub fn validate_name(name: &str) -> ValidationResult {
    if is_blank(name) {
        ValidationResult::invalid(NAME_REQUIRED)
    } else if name.chars().count() < NAME_MIN_CHARS {
        ValidationResult::invalid(NAME_TOO_SHORT)
    } else if !name_pattern().is_match(name) {
        ValidationResult::invalid(NAME_LETTERS_ONLY)
    } else {
        ValidationResult::valid()
    }
}

/// Ten-digit Indian mobile number
#[must_use]
pub fn validate_mobile(mobile: &str) -> ValidationResult {
    if is_blank(mobile) {
        ValidationResult::invalid(MOBILE_REQUIRED)
    } else if mobile.chars().count() != MOBILE_DIGITS {
        ValidationResult::invalid(MOBILE_LENGTH)
    } else if !mobile_pattern().is_match(mobile) {
        ValidationResult::invalid(MOBILE_INVALID)
    } else {
        ValidationResult::valid()
    }
}

#[must_use]
pub fn validate_email(email: &str) -> ValidationResult {
    if is_blank(email) {
        ValidationResult::invalid(EMAIL_REQUIRED)
    } else if !email_pattern().is_match(email) {
        ValidationResult::invalid(EMAIL_INVALID)
    } else {
        ValidationResult::valid()
    }
}

#[must_use]
pub fn validate_college_name(college_name: &str) -> ValidationResult {
    if is_blank(college_name) {
        ValidationResult::invalid(COLLEGE_REQUIRED)
    } else if college_name.chars().count() < COLLEGE_MIN_CHARS {
        ValidationResult::invalid(COLLEGE_TOO_SHORT)
    } else {
        ValidationResult::valid()
    }
}

/// Fraction of results that are valid; `0.0` for an empty slice
#[must_use]
pub fn completion_ratio(results: &[ValidationResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let valid = results.iter().filter(|r| r.is_valid).count();
    valid as f64 / results.len() as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== ValidationResult =====

    #[test]
    fn test_valid_result_has_empty_message() {
        let r = ValidationResult::valid();
        assert!(r.is_valid);
        assert!(r.error_message.is_empty());
        assert_eq!(r.error(), None);
    }

    #[test]
    fn test_invalid_result_exposes_message() {
        let r = ValidationResult::invalid("nope");
        assert!(!r.is_valid);
        assert_eq!(r.error(), Some("nope"));
    }

    // ===== Name =====

    #[test]
    fn test_name_valid() {
        assert!(validate_name("John Doe").is_valid);
        assert!(validate_name("Al").is_valid);
    }

    #[test]
    fn test_name_required() {
        assert_eq!(validate_name(""), ValidationResult::invalid(NAME_REQUIRED));
        assert_eq!(validate_name("   "), ValidationResult::invalid(NAME_REQUIRED));
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(validate_name("J"), ValidationResult::invalid(NAME_TOO_SHORT));
    }

    #[test]
    fn test_name_letters_only() {
        assert_eq!(
            validate_name("John3"),
            ValidationResult::invalid(NAME_LETTERS_ONLY)
        );
        assert_eq!(
            validate_name("O'Brien"),
            ValidationResult::invalid(NAME_LETTERS_ONLY)
        );
    }

    #[test]
    fn test_name_rejects_unicode_spaces() {
        for name in ["John\u{00A0}Doe", "John\u{2003}Doe", "John\u{3000}Doe"] {
            assert_eq!(
                validate_name(name),
                ValidationResult::invalid(NAME_LETTERS_ONLY),
                "{name:?} should be rejected"
            );
        }
        assert!(validate_name("John\tDoe").is_valid);
    }

    #[test]
    fn test_name_short_rule_precedes_letters_rule() {
        assert_eq!(validate_name("3"), ValidationResult::invalid(NAME_TOO_SHORT));
    }

    // ===== Mobile =====

    #[test]
    fn test_mobile_valid() {
        assert!(validate_mobile("9876543210").is_valid);
        assert!(validate_mobile("6000000000").is_valid);
    }

    #[test]
    fn test_mobile_required() {
        assert_eq!(
            validate_mobile(""),
            ValidationResult::invalid(MOBILE_REQUIRED)
        );
    }

    #[test]
    fn test_mobile_wrong_length() {
        assert_eq!(
            validate_mobile("12345"),
            ValidationResult::invalid(MOBILE_LENGTH)
        );
        assert_eq!(
            validate_mobile("98765432100"),
            ValidationResult::invalid(MOBILE_LENGTH)
        );
    }

    #[test]
    fn test_mobile_bad_prefix() {
        assert_eq!(
            validate_mobile("1234567890"),
            ValidationResult::invalid(MOBILE_INVALID)
        );
        assert_eq!(
            validate_mobile("5876543210"),
            ValidationResult::invalid(MOBILE_INVALID)
        );
    }

    #[test]
    fn test_mobile_non_digits() {
        assert_eq!(
            validate_mobile("98765abcde"),
            ValidationResult::invalid(MOBILE_INVALID)
        );
    }

    // ===== Email =====

    #[test]
    fn test_email_valid() {
        assert!(validate_email("student@college.edu").is_valid);
        assert!(validate_email("first.last+fest@mail.example.co.in").is_valid);
    }

    #[test]
    fn test_email_required() {
        assert_eq!(validate_email(""), ValidationResult::invalid(EMAIL_REQUIRED));
    }

    #[test]
    fn test_email_invalid() {
        for bad in ["plainaddress", "missing@tld", "@no-local.com", "a@b@c.com", "sp ace@x.com"] {
            assert_eq!(
                validate_email(bad),
                ValidationResult::invalid(EMAIL_INVALID),
                "{bad} should be rejected"
            );
        }
    }

    // ===== College =====

    #[test]
    fn test_college_valid() {
        assert!(validate_college_name("IIT").is_valid);
        assert!(validate_college_name("Christ University").is_valid);
    }

    #[test]
    fn test_college_required() {
        assert_eq!(
            validate_college_name(""),
            ValidationResult::invalid(COLLEGE_REQUIRED)
        );
    }

    #[test]
    fn test_college_too_short() {
        assert_eq!(
            validate_college_name("AB"),
            ValidationResult::invalid(COLLEGE_TOO_SHORT)
        );
    }

    // ===== Completion ratio =====

    #[test]
    fn test_completion_ratio_three_of_four() {
        let results = [
            validate_name("John Doe"),
            validate_mobile("9876543210"),
            validate_email("john@example.com"),
            validate_college_name(""),
        ];
        assert!((completion_ratio(&results) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completion_ratio_empty() {
        assert!(completion_ratio(&[]).abs() < f64::EPSILON);
    }

    proptest! {
        /// Validators are total: every input yields a result, and an
        /// invalid result always carries a message
        #[test]
        fn prop_validators_total(s in ".{0,40}") {
            for r in [
                validate_name(&s),
                validate_mobile(&s),
                validate_email(&s),
                validate_college_name(&s),
            ] {
                prop_assert_eq!(r.is_valid, r.error_message.is_empty());
            }
        }

        #[test]
        fn prop_valid_mobiles_accepted(first in 6u8..=9u8, rest in "[0-9]{9}") {
            let mobile = format!("{first}{rest}");
            prop_assert!(validate_mobile(&mobile).is_valid);
        }

        #[test]
        fn prop_ratio_in_unit_interval(flags in prop::collection::vec(any::<bool>(), 0..8)) {
            let results: Vec<_> = flags
                .iter()
                .map(|ok| if *ok { ValidationResult::valid() } else { ValidationResult::invalid("x") })
                .collect();
            let ratio = completion_ratio(&results);
            prop_assert!((0.0..=1.0).contains(&ratio));
        }
    }
}
