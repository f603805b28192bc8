//! Bounded, newest-first search history.

use std::collections::VecDeque;

use super::types::SearchHistoryEntry;

/// Ring of the most recent history entries, newest first.
///
/// Single-writer: owned by one [`super::SearchSession`].
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: VecDeque<SearchHistoryEntry>,
    capacity: usize,
}

impl SearchHistory {
    /// Create an empty history holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert `entry` at the front, evicting the oldest on overflow.
    pub fn push(&mut self, entry: SearchHistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
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

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &SearchHistoryEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&SearchHistoryEntry> {
        self.entries.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(i: usize) -> SearchHistoryEntry {
        SearchHistoryEntry {
            id: format!("h{i}"),
            query: format!("query {i}"),
            timestamp: Utc::now(),
            result_id: format!("r{i}"),
        }
    }

    #[test]
    fn newest_first_and_bounded() {
        let mut history = SearchHistory::new(10);
        for i in 0..11 {
            history.push(entry(i));
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.latest().map(|e| e.id.as_str()), Some("h10"));
        assert!(history.iter().all(|e| e.id != "h0"));
        assert_eq!(history.iter().last().map(|e| e.id.as_str()), Some("h1"));
    }

    #[test]
    fn clear_empties() {
        let mut history = SearchHistory::new(3);
        history.push(entry(0));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 3);
    }
}
