//! History of completed evaluations
//!
//! Bounded queue: once full, the oldest evaluation is dropped.

use crate::format::format_number;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single completed evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Expression line at the time of evaluation, e.g. `"5 + 3"`
    pub expression: String,
    /// Full-precision result
    pub result: f64,
    /// Position in the session, counting from 1; not reused after eviction
    pub sequence: u64,
}

impl HistoryEntry {
    #[must_use]
    pub const fn new(expression: String, result: f64, sequence: u64) -> Self {
        Self {
            expression,
            result,
            sequence,
        }
    }

    /// `"<expression> = <result>"`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, format_number(self.result))
    }
}

/// Bounded evaluation history
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
    recorded: u64,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a history with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history holding at most `max_entries` (minimum 1)
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
            recorded: 0,
        }
    }

    /// Adds an entry, evicting the oldest when full
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.recorded = self.recorded.max(entry.sequence);
        self.entries.push_back(entry);
    }

    /// Records an evaluation under the next sequence number
    pub fn record(&mut self, expression: &str, result: f64) {
        let sequence = self.recorded + 1;
        self.push(HistoryEntry::new(expression.to_string(), result, sequence));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Drops every entry and restarts numbering
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recorded = 0;
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Serializes the entries (oldest first) to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Restores history from JSON, keeping the newest entries that fit
    pub fn from_json(json: &str, max_entries: usize) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::with_capacity(max_entries);
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }

    /// One `"expr = result"` line per entry, oldest first
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
