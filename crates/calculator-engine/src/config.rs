//! Engine configuration

use crate::error::{CalcError, CalcResult};
use crate::format::DEFAULT_FRACTION_DIGITS;
use crate::history::History;
use serde::{Deserialize, Serialize};

/// Upper bound for `max_fraction_digits`; f64 has ~15-17 significant digits
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Calculator engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fractional digits shown on the display
    pub max_fraction_digits: usize,
    /// Completed evaluations kept in history
    pub history_capacity: usize,
    /// Maximum operand length (`None` = unbounded)
    pub max_input_len: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
            history_capacity: History::DEFAULT_MAX_ENTRIES,
            max_input_len: None,
        }
    }
}

impl EngineConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set displayed fractional digits
    #[must_use]
    pub const fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Set history capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Cap operand length
    #[must_use]
    pub const fn with_max_input_len(mut self, limit: usize) -> Self {
        self.max_input_len = Some(limit);
        self
    }

    /// Checks the configuration for values the engine cannot honour
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(CalcError::Config(format!(
                "max_fraction_digits must be at most {MAX_FRACTION_DIGITS}, got {}",
                self.max_fraction_digits
            )));
        }
        if self.history_capacity == 0 {
            return Err(CalcError::Config(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if self.max_input_len == Some(0) {
            return Err(CalcError::Config(
                "max_input_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration; missing keys take defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
