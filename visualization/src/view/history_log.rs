//! Bounded, newest-first log of exploration events
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use rotor_core::Coordinate;

/// Entries kept when no capacity is configured
pub const DEFAULT_LOG_CAPACITY: usize = 10;

/// One line in the history panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Strategy id, or the fast-forward completion label
    pub label: String,
    pub position: Coordinate,
    pub loss: f64,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({:.1}, {:.1}) → Loss: {:.3}",
            self.label, self.position.x, self.position.z, self.loss
        )
    }
}

#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend an entry, dropping the oldest beyond capacity
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    /// Rendered lines, newest first
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
