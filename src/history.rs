//! Recent query history
//!
//! A capped ring buffer of queries the user has executed. The buffer is fed
//! only by the execute path; the suggestion machinery reads snapshots of it
//! to build request payloads. The cap keeps payloads bounded.

use std::collections::VecDeque;

/// Capped buffer of recently executed queries, oldest first.
#[derive(Debug)]
pub struct RecentQueries {
    entries: VecDeque<String>,
    cap: usize,
}

impl RecentQueries {
    /// Create an empty buffer holding at most `cap` queries.
    pub fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(cap.min(64)),
            cap,
        }
    }

    /// Record an executed query. Blank queries are ignored; when the buffer
    /// is full the oldest entry is evicted.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() || self.cap == 0 {
            return;
        }
        if self.entries.len() == self.cap {
            self.entries.pop_front();
        }
        self.entries.push_back(query.to_string());
    }

    /// Snapshot of the current entries, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
