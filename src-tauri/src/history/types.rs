use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::prompt::format_value;

/// One line of conversion history, e.g. `5 meters -> 16.4042 feet`.
///
/// Equality is exact string equality, which is also what de-duplication uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntry(String);

impl HistoryEntry {
    pub fn new(value: f64, from_unit: &str, result_text: &str) -> Self {
        Self(format!("{} {} -> {}", format_value(value), from_unit, result_text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<HistoryEntry> for String {
    fn from(entry: HistoryEntry) -> Self {
        entry.0
    }
}

/// What the history sidebar shows.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    /// Newest first, at most [`super::DISPLAY_LIMIT`] entries.
    pub entries: Vec<HistoryEntry>,
    /// Number of entries recorded this session, including hidden ones.
    pub total: usize,
}
