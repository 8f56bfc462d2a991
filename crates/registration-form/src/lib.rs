//! Event Registration Form
//!
//! Field validation and the multi-step flow behind an event registration
//! form: basic details, event selection, review and confirmation.
//!
//! Validators are pure functions of already-trimmed text and return a
//! [`ValidationResult`]; a bad field is a value, not an error.
//! [`RegistrationError`] is reserved for attempts to advance the flow
//! with data that does not validate.
//!
//! # Example
//!
//! ```rust
//! use registration_form::prelude::*;
//!
//! let form = RegistrationForm::new()
//!     .with(Field::Name, "Asha Rao")
//!     .with(Field::Mobile, "9876543210")
//!     .with(Field::Email, "asha@uni.edu")
//!     .with(Field::CollegeName, "");
//! assert_eq!(form.progress_label(), "3/4");
//!
//! let mut flow = RegistrationFlow::new();
//! assert!(flow.submit_details(&form).is_err());
//!
//! flow.submit_details(&form.with(Field::CollegeName, "NIT Trichy")).unwrap();
//! flow.select_events(EventGroup::Technical, 2).unwrap();
//! let confirmation = flow.confirm(1_767_225_600_000).unwrap();
//! assert_eq!(confirmation.registration_id, "REV2026-ASH-17672256");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_debug_implementations)]

pub mod error;
pub mod events;
pub mod field;
pub mod flow;
pub mod form;
pub mod record;
pub mod validation;

pub use error::{RegistrationError, RegistrationResult};
pub use events::EventGroup;
pub use field::Field;
pub use flow::{Confirmation, RegistrationFlow, Step};
pub use form::RegistrationForm;
pub use record::RegistrationRecord;
pub use validation::{
    completion_ratio, validate_college_name, validate_email, validate_mobile, validate_name,
    ValidationResult,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{RegistrationError, RegistrationResult};
    pub use crate::events::{event_count_label, EventGroup};
    pub use crate::field::Field;
    pub use crate::flow::{Confirmation, RegistrationFlow, Step};
    pub use crate::form::RegistrationForm;
    pub use crate::record::RegistrationRecord;
    pub use crate::validation::{
        completion_ratio, validate_college_name, validate_email, validate_mobile, validate_name,
        ValidationResult,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_validators() {
        let results = [
            validate_name("Jo"),
            validate_mobile("5123456789"),
            validate_email("jo@x.io"),
            validate_college_name("ABC"),
        ];
        assert!((completion_ratio(&results) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_prelude_flow() {
        let mut flow = RegistrationFlow::new();
        assert_eq!(flow.step(), Step::Details);
        let err = flow.select_events(EventGroup::Gaming, 1).unwrap_err();
        assert!(matches!(err, RegistrationError::WrongStep { .. }));
    }
}
