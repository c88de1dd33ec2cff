//! Recently checked passwords.
//!
//! A bounded, most-recent-first list kept in memory for the session only.
//! Re-checking a password moves it to the front instead of duplicating it.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::password::strength::StrengthLevel;
use crate::utils::display::mask_password;

/// Default number of entries kept
pub const HISTORY_CAPACITY: usize = 10;

/// A previously scored password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub password: String,
    pub level: StrengthLevel,
    pub score: u8,
    pub timestamp: DateTime<Utc>,
}

/// Display-safe view of a [`HistoryEntry`]
#[derive(Debug, Clone, Serialize)]
pub struct MaskedHistoryEntry {
    pub password: String,
    pub level: StrengthLevel,
    pub score: u8,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn masked(&self) -> MaskedHistoryEntry {
        MaskedHistoryEntry {
            password: mask_password(&self.password),
            level: self.level,
            score: self.score,
            timestamp: self.timestamp,
        }
    }
}

/// Bounded most-recently-used list of scored passwords
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryStore {
    /// Store keeping at most `capacity` entries
    ///
    /// Only the default capacity is preallocated; larger stores grow on demand.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(HISTORY_CAPACITY)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a scored password at the front, dropping any older entry for
    /// the same password and anything past capacity
    pub fn record(&mut self, password: &str, level: StrengthLevel, score: u8) {
        if let Some(index) = self.entries.iter().position(|e| e.password == password) {
            self.entries.remove(index);
        }

        self.entries.push_front(HistoryEntry {
            password: password.to_string(),
            level,
            score,
            timestamp: Utc::now(),
        });
        self.entries.truncate(self.capacity);

        log::debug!("History holds {} of {} entries", self.entries.len(), self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, most recent first
    pub fn list(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub fn masked(&self) -> Vec<MaskedHistoryEntry> {
        self.list().map(HistoryEntry::masked).collect()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}
