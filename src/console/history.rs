//! Input history for the console.

const DEFAULT_MAX_SIZE: usize = 100;

/// Accepted input lines, oldest first.
#[derive(Debug)]
pub struct InputHistory {
    entries: Vec<String>,
    max_size: usize,
}

impl Default for InputHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SIZE)
    }
}

impl InputHistory {
    /// Creates a new empty input history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `max_size` entries.
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_size,
        }
    }

    /// Adds an entry to the history.
    /// Skips empty entries and consecutive duplicates.
    pub fn push(&mut self, entry: &str) {
        let entry = entry.trim();

        if entry.is_empty() || self.max_size == 0 {
            return;
        }

        if self.entries.last().map(String::as_str) == Some(entry) {
            return;
        }

        self.entries.push(entry.to_string());

        // Trim to max size (remove oldest)
        if self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(..excess);
        }
    }

    /// Returns the number of entries in history.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a reference to all history entries (oldest first).
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
