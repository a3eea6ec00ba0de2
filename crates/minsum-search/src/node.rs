//! Search nodes.
//!
//! A node is one assignment to the free variables. Its identity is the
//! assignment alone; the cost is a cached ranking value and takes no part in
//! equality or hashing, so open/closed membership ignores it.

use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use minsum_core::VarId;
use minsum_reduce::Assignment;

use crate::bounds::VariableBounds;

/// Values of the free variables, in free-variable order.
pub type FreeValues = SmallVec<[i64; 8]>;

/// Cost of a node that has not been ranked yet.
pub const UNKNOWN_COST: i64 = i64::MAX;

/// One candidate assignment to the free variables.
#[derive(Clone, Debug)]
pub struct SearchNode {
    free_values: FreeValues,
    cost: i64,
}

impl SearchNode {
    /// Creates an unranked node.
    #[must_use]
    pub fn new(free_values: FreeValues) -> Self {
        Self {
            free_values,
            cost: UNKNOWN_COST,
        }
    }

    /// Creates the all-zero node over `num_free` variables.
    #[must_use]
    pub fn origin(num_free: usize) -> Self {
        Self::new(SmallVec::from_elem(0, num_free))
    }

    /// Returns the free-variable values.
    #[must_use]
    pub fn free_values(&self) -> &[i64] {
        &self.free_values
    }

    /// Returns the cached cost.
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Replaces the cached cost.
    pub fn set_cost(&mut self, cost: i64) {
        self.cost = cost;
    }

    /// Returns the nodes reached by incrementing one free variable, skipping
    /// increments that would exceed the variable's cap.
    pub fn neighbors<'a>(&'a self, bounds: &'a VariableBounds) -> impl Iterator<Item = Self> + 'a {
        self.free_values
            .iter()
            .enumerate()
            .filter(move |&(position, &value)| bounds.allows(position, value + 1))
            .map(move |(position, _)| {
                let mut free_values = self.free_values.clone();
                free_values[position] += 1;
                Self::new(free_values)
            })
    }

    /// Binds the values to their variables.
    ///
    /// # Panics
    ///
    /// Panics if `free` is shorter than the node.
    #[must_use]
    pub fn to_assignment(&self, free: &[VarId], num_vars: usize) -> Assignment {
        assert!(free.len() >= self.free_values.len());
        Assignment::from_pairs(
            num_vars,
            free.iter().copied().zip(self.free_values.iter().copied()),
        )
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.free_values == other.free_values
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.free_values.hash(state);
    }
}
