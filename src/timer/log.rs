//! The completed-session log.

/// Append-only record of completed session totals, in completion order.
///
/// The session loop records each session's elapsed seconds here when the
/// session is archived (on quit or replacement); the log is read back once,
/// for the exit summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionLog {
    entries: Vec<u64>,
}

impl SessionLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append one completed session's elapsed seconds.
    pub fn record(&mut self, seconds: u64) {
        self.entries.push(seconds);
    }

    /// Recorded totals, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[u64] {
        &self.entries
    }

    /// Number of recorded sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no session has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all recorded seconds.
    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        self.entries.iter().sum()
    }
}
