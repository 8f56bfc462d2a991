//! Tracked form fields

use crate::validation::{
    validate_college_name, validate_email, validate_mobile, validate_name, ValidationResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field on the basic-details step of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Mobile,
    Email,
    CollegeName,
}

impl Field {
    /// Every tracked field, in form order
    pub const ALL: [Self; 4] = [Self::Name, Self::Mobile, Self::Email, Self::CollegeName];

    /// Number of tracked fields
    pub const COUNT: usize = Self::ALL.len();

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Mobile => "Mobile number",
            Self::Email => "Email",
            Self::CollegeName => "College name",
        }
    }

    /// Runs this field's validator
    #[must_use]
    pub fn validate(&self, value: &str) -> ValidationResult {
        match self {
            Self::Name => validate_name(value),
            Self::Mobile => validate_mobile(value),
            Self::Email => validate_email(value),
            Self::CollegeName => validate_college_name(value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_in_form_order() {
        assert_eq!(Field::COUNT, 4);
        assert_eq!(Field::ALL[0], Field::Name);
        assert_eq!(Field::ALL[3], Field::CollegeName);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Field::Mobile.to_string(), "Mobile number");
        assert_eq!(Field::CollegeName.label(), "College name");
    }

    #[test]
    fn test_validate_dispatches_per_field() {
        assert!(Field::Name.validate("Asha Rao").is_valid);
        assert!(!Field::Mobile.validate("Asha Rao").is_valid);
        assert!(Field::Email.validate("asha@uni.edu").is_valid);
        assert!(Field::CollegeName.validate("Asha Rao").is_valid);
    }
}
