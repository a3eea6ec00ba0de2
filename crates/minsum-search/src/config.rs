//! Search configuration.

use std::time::Duration;

/// Configuration for the best-first search.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Wall-clock budget measured from the start of the search.
    pub time_budget: Duration,
    /// Number of neighbour expansions between clock checks.
    pub poll_interval: u64,
    /// Largest residual for which an original equation counts as satisfied.
    pub satisfaction_tolerance: f64,
    /// Distance added per unit of negative value in a resolved assignment.
    pub negative_penalty: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(2),
            poll_interval: 1000,
            satisfaction_tolerance: 0.1,
            negative_penalty: 100.0,
        }
    }
}

impl SearchConfig {
    /// Returns a copy with a different time budget.
    #[must_use]
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    /// Returns a copy with a different polling interval.
    ///
    /// An interval of zero is treated as one.
    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: u64) -> Self {
        self.poll_interval = poll_interval.max(1);
        self
    }
}
