//! Keypad Calculator Engine
//!
//! The arithmetic-entry state machine behind a four-function keypad
//! calculator. A presentation layer forwards one button press at a time
//! and renders the display strings the engine produces; the engine holds
//! no UI state and performs no I/O.
//!
//! - Operators chain strictly left to right (no precedence).
//! - Arithmetic is done in `f64`; division by zero or overflow resets the
//!   engine and is reported as a [`CalcError`], never a panic.
//! - Displayed values use at most 10 fractional digits with trailing
//!   zeros trimmed.
//!
//! # Example
//!
//! ```rust
//! use calculator_engine::prelude::*;
//!
//! let mut calc = CalculatorEngine::new();
//! calc.press_keys("5 + 3 + 2 =").unwrap();
//! assert_eq!(calc.display(), "10");
//!
//! // Division by zero resets instead of failing hard
//! let err = calc.press_keys("1 ÷ 0 =").unwrap_err();
//! assert_eq!(err, CalcError::DivisionByZero);
//! assert_eq!(calc.result_line(), "Error");
//! assert_eq!(calc.state(), EngineState::Idle);
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

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod history;
pub mod input;
pub mod operator;

pub use config::EngineConfig;
pub use engine::{CalculatorEngine, EngineSnapshot, EngineState};
pub use error::{CalcError, CalcResult};
pub use operator::Operator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::{CalculatorEngine, EngineSnapshot, EngineState};
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::format::{format_for_display, format_number};
    pub use crate::history::{History, HistoryEntry};
    pub use crate::input::InputEvent;
    pub use crate::operator::Operator;
}
