//! Error types for the calculator engine
//!
//! Arithmetic failures are reported after the engine has already reset
//! itself, so a caller can render the error and keep sending input.

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division by an exact zero divisor
    #[error("Division by zero")]
    DivisionByZero,

    /// Result was NaN or infinite (e.g. overflow)
    #[error("Non-finite result: {0}")]
    NonFinite(f64),

    /// Digit outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),

    /// Key with no keypad meaning
    #[error("Unknown key: {0:?}")]
    UnknownKey(char),

    /// Operator symbol that is not one of + − × ÷
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Operand text reached the configured length limit
    #[error("Input too long: limit is {limit} characters")]
    InputTooLong {
        /// Configured maximum operand length
        limit: usize,
    },

    /// Engine configuration was rejected
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalcError {
    /// Returns true for errors that reset the engine (arithmetic faults)
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::NonFinite(_))
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
