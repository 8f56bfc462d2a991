//! Binary operators for the keypad calculator
//!
//! The set is closed: there is no fallback branch for an unknown symbol,
//! parsing rejects it instead.

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe operator enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the display glyph
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parses a keypad glyph or its ASCII equivalent
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' | 'x' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator in double precision.
    ///
    /// Dividing by an exact zero yields `NaN` rather than an infinity so
    /// that `0 ÷ 0` and `5 ÷ 0` are reported the same way.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
        }
    }

    /// Applies the operator and classifies a non-finite result
    pub fn checked_apply(self, a: f64, b: f64) -> CalcResult<f64> {
        if self == Self::Divide && b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        let result = self.apply(a, b);
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::NonFinite(result))
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_symbol(c).ok_or_else(|| CalcError::UnknownOperator(s.to_string()))
            }
            _ => Err(CalcError::UnknownOperator(s.to_string())),
        }
    }
}
