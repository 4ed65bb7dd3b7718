//! Schedule — one pending device action per hour of day.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A pending action: switch the named device on or off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Target device name, matched against the roster at simulation time.
    pub device: String,
    pub turn_on: bool,
}

/// Hour-of-day table with at most one entry per hour; setting an hour that
/// is already taken overwrites the previous entry (last write wins).
///
/// The table itself accepts any `u8` key — the interactive layer is what
/// restricts input to 0–23.
#[derive(Debug, Default)]
pub struct Schedule {
    entries: BTreeMap<u8, ScheduleEntry>,
}

impl Schedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, hour: u8, entry: ScheduleEntry) {
        self.entries.insert(hour, entry);
    }

    #[must_use]
    pub fn get(&self, hour: u8) -> Option<&ScheduleEntry> {
        self.entries.get(&hour)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
