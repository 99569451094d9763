use tracing::{debug, info};

use super::types::{HistoryEntry, HistoryView};

/// How many entries the sidebar displays.
pub const DISPLAY_LIMIT: usize = 10;

/// In-memory conversion history for one session.
///
/// Newest entries sit at index 0. Nothing is ever removed; the display limit
/// is applied when reading.
#[derive(Debug, Default)]
pub struct ConversionHistory {
    entries: Vec<HistoryEntry>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` at the front unless an identical entry exists.
    /// Returns whether it was inserted.
    pub fn record(&mut self, entry: HistoryEntry) -> bool {
        if self.entries.contains(&entry) {
            debug!("History already contains: {}", entry);
            return false;
        }
        info!("Recording history entry: {}", entry);
        self.entries.insert(0, entry);
        true
    }

    /// The entries that should be displayed, newest first.
    pub fn visible(&self) -> &[HistoryEntry] {
        let end = self.entries.len().min(DISPLAY_LIMIT);
        &self.entries[..end]
    }

    pub fn view(&self) -> HistoryView {
        HistoryView {
            entries: self.visible().to_vec(),
            total: self.entries.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(n as f64, "meters", &format!("{} result", n))
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = ConversionHistory::new();
        assert!(history.is_empty());
        assert!(history.visible().is_empty());
        assert_eq!(history.view().total, 0);
    }

    #[test]
    fn test_record_inserts_at_front() {
        let mut history = ConversionHistory::new();
        assert!(history.record(entry(1)));
        assert!(history.record(entry(2)));

        let visible = history.visible();
        assert_eq!(visible[0], entry(2));
        assert_eq!(visible[1], entry(1));
    }

    #[test]
    fn test_duplicate_not_recorded() {
        let mut history = ConversionHistory::new();
        assert!(history.record(entry(1)));
        assert!(history.record(entry(2)));
        assert!(!history.record(entry(1)));

        assert_eq!(history.len(), 2);
        // Position of the existing entry is unchanged
        assert_eq!(history.visible()[1], entry(1));
    }

    #[test]
    fn test_visible_capped_at_ten() {
        let mut history = ConversionHistory::new();
        for n in 1..=15 {
            history.record(entry(n));
        }

        assert_eq!(history.len(), 15);
        let visible = history.visible();
        assert_eq!(visible.len(), DISPLAY_LIMIT);
        assert_eq!(visible[0], entry(15));
        assert_eq!(visible[9], entry(6));

        let view = history.view();
        assert_eq!(view.entries.len(), DISPLAY_LIMIT);
        assert_eq!(view.total, 15);
    }

    #[test]
    fn test_entry_format() {
        let e = HistoryEntry::new(5.0, "meters", "16.4042 feet");
        assert_eq!(e.as_str(), "5 meters -> 16.4042 feet");

        let e = HistoryEntry::new(1.25, "hours", "75 minutes");
        assert_eq!(e.to_string(), "1.25 hours -> 75 minutes");
    }

    #[test]
    fn test_entry_serializes_as_plain_string() {
        let e = HistoryEntry::new(5.0, "meters", "x");
        assert_eq!(serde_json::to_value(&e).unwrap(), "5 meters -> x");
    }
}
