//! Rolling history of per-frame recognition results
//!
//! Keeps the last 5 display labels, most recent first, for the history panel.

use std::collections::VecDeque;

/// Number of entries the history panel shows
pub const HISTORY_LEN: usize = 5;

/// Rolling most-recent-first label history
pub struct RecognitionHistory {
    entries: VecDeque<String>,
}

impl RecognitionHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_LEN + 1),
        }
    }

    /// Record this frame's display label, dropping the oldest past capacity.
    pub fn push(&mut self, label: &str) {
        self.entries.push_front(label.to_string());
        self.entries.truncate(HISTORY_LEN);
    }

    /// Labels most recent first
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for RecognitionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first() {
        let mut history = RecognitionHistory::new();
        history.push("A");
        history.push("B");
        assert_eq!(history.labels(), vec!["B", "A"]);
    }

    #[test]
    fn test_capped_at_five() {
        let mut history = RecognitionHistory::new();
        for label in ["a", "b", "c", "d", "e", "f", "g"] {
            history.push(label);
        }
        assert_eq!(history.labels(), vec!["g", "f", "e", "d", "c"]);
    }
}
