//! Search results.

use std::time::Duration;

use minsum_reduce::Assignment;

/// Value reported when no feasible assignment was found.
///
/// Budget exhaustion and genuine infeasibility both report it; callers that
/// need to tell them apart should look at [`SearchOutcome::status`] or widen
/// the budget.
pub const NO_SOLUTION: i64 = i64::MAX;

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// No free variables; the relations were evaluated once.
    Direct,
    /// The open set ran dry.
    Exhausted,
    /// The time budget ran out first.
    BudgetExceeded,
}

/// Result of one search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Smallest total among feasible candidates.
    pub best: Option<i64>,
    /// Full assignment achieving `best`.
    pub assignment: Option<Assignment>,
    /// How the search ended.
    pub status: SearchStatus,
    /// Neighbour expansions performed.
    pub expanded: u64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

impl SearchOutcome {
    /// Returns the best total, or [`NO_SOLUTION`].
    #[must_use]
    pub fn value(&self) -> i64 {
        self.best.unwrap_or(NO_SOLUTION)
    }

    /// Checks if a feasible assignment was found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.best.is_some()
    }
}
