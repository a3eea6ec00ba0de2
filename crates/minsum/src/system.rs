//! End-to-end solving of one equation system.

use std::collections::BTreeMap;

use tracing::debug;

use minsum_core::LinearSystem;
use minsum_reduce::{reduce, Reduction};
use minsum_search::{find_best_values, SearchConfig, SearchStatus, NO_SOLUTION};

use crate::error::SolveError;

/// Result of solving an [`EquationSystem`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Smallest feasible total, if one was found.
    pub total: Option<i64>,
    /// Variable values achieving `total`, when they are known.
    ///
    /// The complementary shortcut fixes the total without fixing the values,
    /// so this is `None` in that case.
    pub values: Option<BTreeMap<String, i64>>,
    /// How the search ended; `None` when the shortcut applied.
    pub status: Option<SearchStatus>,
    /// Number of variables left free by reduction; `None` when the shortcut
    /// applied and no elimination ran.
    pub free: Option<usize>,
}

impl SolveOutcome {
    /// Returns the total, or [`NO_SOLUTION`].
    #[must_use]
    pub fn value(&self) -> i64 {
        self.total.unwrap_or(NO_SOLUTION)
    }
}

/// A linear system together with the configuration used to solve it.
///
/// Solving never mutates the system: every call reduces a fresh copy of the
/// initial equations.
#[derive(Clone, Debug)]
pub struct EquationSystem {
    system: LinearSystem,
    config: SearchConfig,
}

impl EquationSystem {
    /// Builds a system from variable names and an integer matrix whose rows
    /// are coefficients followed by the result.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::System`] if the matrix is rejected.
    pub fn new<S: AsRef<str>>(names: &[S], matrix: &[Vec<i64>]) -> Result<Self, SolveError> {
        Ok(Self::from_system(LinearSystem::from_matrix(names, matrix)?))
    }

    /// Wraps an already validated system with the default configuration.
    #[must_use]
    pub fn from_system(system: LinearSystem) -> Self {
        Self {
            system,
            config: SearchConfig::default(),
        }
    }

    /// Replaces the search configuration.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the initial system.
    #[must_use]
    pub fn system(&self) -> &LinearSystem {
        &self.system
    }

    /// Returns the search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Reduces the system without searching.
    #[must_use]
    pub fn reduce(&self) -> Reduction {
        reduce(&self.system)
    }

    /// Reduces and searches, reporting the best total and its assignment.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Relation`] if the reduced relations cannot be
    /// evaluated.
    pub fn solve(&self) -> Result<SolveOutcome, SolveError> {
        let (relations, free) = match self.reduce() {
            Reduction::Shortcut(total) => {
                return Ok(SolveOutcome {
                    total: Some(total),
                    values: None,
                    status: None,
                    free: None,
                });
            }
            Reduction::Relations { relations, free } => (relations, free),
        };

        let outcome = find_best_values(&self.system, &relations, &free, &self.config)?;
        debug!(
            total = ?outcome.best,
            status = ?outcome.status,
            free = free.len(),
            "system solved"
        );

        Ok(SolveOutcome {
            total: outcome.best,
            values: outcome
                .assignment
                .as_ref()
                .map(|a| a.to_named(self.system.variables())),
            status: Some(outcome.status),
            free: Some(free.len()),
        })
    }

    /// Returns the smallest feasible total, or [`NO_SOLUTION`].
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Relation`] if the reduced relations cannot be
    /// evaluated.
    pub fn sum_of_variables(&self) -> Result<i64, SolveError> {
        Ok(self.solve()?.value())
    }
}
