//! Keypad input events
//!
//! Every button on the calculator keypad maps to exactly one event; the
//! presentation layer forwards these into [`CalculatorEngine::handle`].
//!
//! [`CalculatorEngine::handle`]: crate::engine::CalculatorEngine::handle

use crate::error::{CalcError, CalcResult};
use crate::operator::Operator;
use serde::{Deserialize, Serialize};

/// Actions a keypad button can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a decimal point
    DecimalPoint,
    /// Choose a binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Remove the last typed character
    Delete,
    /// Reset everything
    Clear,
    /// Divide the current operand by 100
    Percent,
}

impl InputEvent {
    /// Maps a keyboard character to an event.
    ///
    /// Accepts digits, `.`/`,`, operator glyphs, `=` and Enter (`\n`/`\r`),
    /// `%`, `c`/`C`, and backspace (`\u{8}`/`\u{7f}`).
    pub fn from_key(key: char) -> CalcResult<Self> {
        if let Some(d) = key.to_digit(10) {
            return Ok(Self::Digit(d as u8));
        }
        if let Some(op) = Operator::from_symbol(key) {
            return Ok(Self::Operator(op));
        }
        match key {
            '.' | ',' => Ok(Self::DecimalPoint),
            '=' | '\n' | '\r' => Ok(Self::Equals),
            '%' => Ok(Self::Percent),
            'c' | 'C' => Ok(Self::Clear),
            '\u{8}' | '\u{7f}' | '⌫' => Ok(Self::Delete),
            other => Err(CalcError::UnknownKey(other)),
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Delete => "⌫".to_string(),
            Self::Clear => "C".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Parses a key script such as `"5+3="`, skipping whitespace
    pub fn parse_sequence(keys: &str) -> CalcResult<Vec<Self>> {
        keys.chars()
            .filter(|c| *c != ' ' && *c != '\t')
            .map(Self::from_key)
            .collect()
    }
}
