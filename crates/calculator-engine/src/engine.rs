//! Keypad calculator state machine
//!
//! The engine owns one session's entry state and exposes a transition per
//! keypad button. Operators chain strictly left to right: choosing a new
//! operator while one is pending evaluates the pending one first.
//!
//! ```text
//!   Idle ──digit──▶ OperandEntry ──op──▶ OperatorPending ──digit──▶ (operand)
//!    ▲                                        │
//!    └──────────── = / clear / error ◀────────┘
//! ```

use crate::config::EngineConfig;
use crate::error::{CalcError, CalcResult};
use crate::format::{format_for_display, parse_operand, ERROR_TEXT};
use crate::history::History;
use crate::input::InputEvent;
use crate::operator::Operator;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Coarse engine state, derived from the entry fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Nothing typed, or showing a computed value the next digit replaces
    Idle,
    /// An operand is being typed
    OperandEntry,
    /// An operator is waiting for its second operand
    OperatorPending,
}

/// Serializable copy of the entry fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Operand text being typed
    pub current_input: String,
    /// Value captured when the pending operator was chosen
    pub first_operand: f64,
    /// Pending operator, if any
    pub operator: Option<Operator>,
    /// Next digit starts a fresh operand
    pub is_new_operation: bool,
}

/// Calculator session state
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    config: EngineConfig,
    current_input: String,
    first_operand: f64,
    operator: Option<Operator>,
    is_new_operation: bool,
    expression: String,
    last_result: Option<CalcResult<f64>>,
    history: History,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Creates an engine with a validated configuration
    pub fn with_config(config: EngineConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let history = History::with_capacity(config.history_capacity);
        Self {
            config,
            current_input: String::new(),
            first_operand: 0.0,
            operator: None,
            is_new_operation: true,
            expression: String::new(),
            last_result: None,
            history,
        }
    }

    // ===== Transitions =====

    /// Appends a digit, or starts a fresh operand after a result
    pub fn append_digit(&mut self, digit: u8) -> CalcResult<()> {
        let c = char::from_digit(u32::from(digit), 10).ok_or(CalcError::InvalidDigit(digit))?;

        if self.is_new_operation {
            self.current_input.clear();
            self.current_input.push(c);
            self.is_new_operation = false;
        } else {
            self.ensure_room(1)?;
            self.current_input.push(c);
        }
        Ok(())
    }

    /// Appends a decimal point; a second point in the same operand is ignored
    pub fn append_decimal_point(&mut self) -> CalcResult<()> {
        if self.is_new_operation {
            self.ensure_capacity_for(2)?;
            self.current_input = "0.".to_string();
            self.is_new_operation = false;
        } else if !self.current_input.contains('.') {
            if self.current_input.is_empty() {
                self.ensure_room(2)?;
                self.current_input.push_str("0.");
            } else {
                self.ensure_room(1)?;
                self.current_input.push('.');
            }
        }
        Ok(())
    }

    /// Chooses an operator, evaluating any pending one first.
    ///
    /// No-op while no operand has been typed. If the cascaded evaluation
    /// fails the engine is reset and the new operator is dropped.
    pub fn set_operator(&mut self, op: Operator) -> CalcResult<()> {
        if self.current_input.is_empty() {
            return Ok(());
        }

        if self.operator.is_some() {
            self.evaluate()?;
        }

        self.first_operand = parse_operand(&self.current_input);
        self.operator = Some(op);
        self.expression = format!("{} {}", self.format(self.first_operand), op);
        self.current_input.clear();

        debug!(operator = %op, first_operand = self.first_operand, "operator set");
        Ok(())
    }

    /// Applies the pending operator to the typed operand.
    ///
    /// Returns `Ok(None)` when there is nothing to evaluate. A non-finite
    /// result resets the engine before the error is returned.
    pub fn evaluate(&mut self) -> CalcResult<Option<f64>> {
        let Some(op) = self.operator else {
            return Ok(None);
        };
        if self.current_input.is_empty() {
            return Ok(None);
        }

        let first = self.first_operand;
        let second = parse_operand(&self.current_input);
        let expression = format!("{} {} {}", self.format(first), op, self.format(second));

        match op.checked_apply(first, second) {
            Ok(result) => {
                debug!(%expression, result, "evaluated");
                self.history.record(&expression, result);
                self.current_input = result.to_string();
                self.operator = None;
                self.is_new_operation = true;
                self.expression = expression;
                self.last_result = Some(Ok(result));
                Ok(Some(result))
            }
            Err(err) => {
                warn!(%expression, error = %err, "arithmetic error, resetting engine");
                self.reset_entry();
                self.last_result = Some(Err(err.clone()));
                Err(err)
            }
        }
    }

    /// Removes the last character of the operand being typed.
    ///
    /// On a computed value the character comes off the text on screen, and
    /// what remains becomes an operand being typed.
    pub fn delete(&mut self) {
        if self.is_new_operation && !self.current_input.is_empty() {
            self.current_input = self.display();
            self.is_new_operation = false;
        }
        self.current_input.pop();
    }

    /// Resets every field to its zero value
    pub fn clear(&mut self) {
        self.reset_entry();
        self.last_result = None;
        debug!("engine cleared");
    }

    /// Replaces the current operand with its display text divided by 100.
    ///
    /// Entry mode is unchanged: digits typed next extend the new value
    /// (`50 % 7` reads `0.57`), while a percent taken of a result is still
    /// replaced by the next digit.
    pub fn percent(&mut self) {
        if self.current_input.is_empty() {
            return;
        }
        let value = parse_operand(&self.current_input) / 100.0;
        if value.is_finite() {
            self.current_input = self.format(value);
        }
    }

    /// Dispatches a keypad event
    pub fn handle(&mut self, event: InputEvent) -> CalcResult<()> {
        match event {
            InputEvent::Digit(d) => self.append_digit(d),
            InputEvent::DecimalPoint => self.append_decimal_point(),
            InputEvent::Operator(op) => self.set_operator(op),
            InputEvent::Equals => self.evaluate().map(|_| ()),
            InputEvent::Delete => {
                self.delete();
                Ok(())
            }
            InputEvent::Clear => {
                self.clear();
                Ok(())
            }
            InputEvent::Percent => {
                self.percent();
                Ok(())
            }
        }
    }

    /// Runs a key script such as `"5+3+2="`.
    ///
    /// The whole script is parsed before any key is applied; the first
    /// failing key stops the run and its error is returned.
    pub fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        for event in InputEvent::parse_sequence(keys)? {
            self.handle(event)?;
        }
        Ok(())
    }

    fn reset_entry(&mut self) {
        self.current_input.clear();
        self.first_operand = 0.0;
        self.operator = None;
        self.is_new_operation = true;
        self.expression.clear();
    }

    fn ensure_room(&self, extra: usize) -> CalcResult<()> {
        self.ensure_capacity_for(self.current_input.chars().count() + extra)
    }

    fn ensure_capacity_for(&self, len: usize) -> CalcResult<()> {
        match self.config.max_input_len {
            Some(limit) if len > limit => Err(CalcError::InputTooLong { limit }),
            _ => Ok(()),
        }
    }

    fn format(&self, value: f64) -> String {
        format_for_display(value, self.config.max_fraction_digits)
    }

    // ===== Display surface =====

    /// Main display line: the operand being typed, or the formatted result
    #[must_use]
    pub fn display(&self) -> String {
        if self.current_input.is_empty() {
            "0".to_string()
        } else if self.is_new_operation {
            self.format(parse_operand(&self.current_input))
        } else {
            self.current_input.clone()
        }
    }

    /// Secondary line: `"5 +"` while pending, `"5 + 3"` after `=`
    #[must_use]
    pub fn expression_line(&self) -> &str {
        &self.expression
    }

    /// Last evaluation outcome: formatted value, `"Error"`, or empty
    #[must_use]
    pub fn result_line(&self) -> String {
        match &self.last_result {
            Some(Ok(value)) => self.format(*value),
            Some(Err(_)) => ERROR_TEXT.to_string(),
            None => String::new(),
        }
    }

    /// Last evaluation outcome, if any since the last clear
    #[must_use]
    pub const fn last_result(&self) -> Option<&CalcResult<f64>> {
        self.last_result.as_ref()
    }

    /// True when the last evaluation failed and the engine reset itself
    #[must_use]
    pub const fn has_error(&self) -> bool {
        matches!(self.last_result, Some(Err(_)))
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.operator.is_some() {
            EngineState::OperatorPending
        } else if !self.current_input.is_empty() && !self.is_new_operation {
            EngineState::OperandEntry
        } else {
            EngineState::Idle
        }
    }

    // ===== Accessors =====

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub const fn first_operand(&self) -> f64 {
        self.first_operand
    }

    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.operator
    }

    #[must_use]
    pub const fn is_new_operation(&self) -> bool {
        self.is_new_operation
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Drops recorded evaluations without touching entry state
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            current_input: self.current_input.clone(),
            first_operand: self.first_operand,
            operator: self.operator,
            is_new_operation: self.is_new_operation,
        }
    }
}
