//! Error types for the registration flow

use crate::field::Field;
use crate::flow::Step;
use thiserror::Error;

/// Result type for registration operations
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Errors raised by the registration flow.
///
/// Per-field validation failures are [`ValidationResult`] values; this
/// type only covers attempts to move the flow forward with bad data.
///
/// [`ValidationResult`]: crate::validation::ValidationResult
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Details submitted while some fields are invalid
    #[error("Please fill all fields correctly: {}", field_list(.fields))]
    InvalidFields {
        /// Fields that failed validation, in form order
        fields: Vec<Field>,
    },

    /// No event group chosen
    #[error("Please select an event group")]
    NoGroupSelected,

    /// Event count outside 1..=max for the group
    #[error("Please select between 1 and {max} events (got {count})")]
    InvalidEventCount {
        /// Requested count
        count: u32,
        /// Group maximum
        max: u32,
    },

    /// Group name not in the catalogue
    #[error("Unknown event group: {0:?}")]
    UnknownGroup(String),

    /// Operation called on the wrong step
    #[error("Expected the {expected} step, but the registration is at {actual}")]
    WrongStep {
        /// Step the operation belongs to
        expected: Step,
        /// Step the flow is actually at
        actual: Step,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::label)
        .collect::<Vec<_>>()
        .join(", ")
}
