//! Dense variable assignments.

use std::collections::BTreeMap;

use minsum_core::{VarId, VariableTable};

/// Integer values for the variables of one system, indexed by [`VarId`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<Option<i64>>,
}

impl Assignment {
    /// Creates an assignment with every variable unresolved.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            values: vec![None; num_vars],
        }
    }

    /// Creates an assignment from `(variable, value)` pairs.
    #[must_use]
    pub fn from_pairs(num_vars: usize, pairs: impl IntoIterator<Item = (VarId, i64)>) -> Self {
        let mut assignment = Self::new(num_vars);
        for (var, value) in pairs {
            assignment.set(var, value);
        }
        assignment
    }

    /// Returns the number of variables this assignment spans.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.values.len()
    }

    /// Returns the value of `var`, if resolved.
    #[must_use]
    pub fn get(&self, var: VarId) -> Option<i64> {
        self.values.get(var.index()).copied().flatten()
    }

    /// Records the value of `var`, growing the assignment if needed.
    pub fn set(&mut self, var: VarId, value: i64) {
        let index = var.index();
        if index >= self.values.len() {
            self.values.resize(index + 1, None);
        }
        self.values[index] = Some(value);
    }

    /// Checks if `var` has a value.
    #[must_use]
    pub fn is_resolved(&self, var: VarId) -> bool {
        self.get(var).is_some()
    }

    /// Checks if every variable has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Returns all values densely, or `None` while any variable is unresolved.
    #[must_use]
    pub fn values(&self) -> Option<Vec<i64>> {
        self.values.iter().copied().collect()
    }

    /// Iterates over resolved `(variable, value)` pairs in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, i64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((VarId::from_index(i)?, (*v)?)))
    }

    /// Returns the sum of all resolved values, saturating at the `i64` range.
    #[must_use]
    pub fn sum(&self) -> i64 {
        self.iter().fold(0, |acc, (_, v)| acc.saturating_add(v))
    }

    /// Checks if any resolved value is negative.
    #[must_use]
    pub fn has_negative(&self) -> bool {
        self.iter().any(|(_, v)| v < 0)
    }

    /// Returns the sum of the negative values (zero or less).
    #[must_use]
    pub fn negative_total(&self) -> i64 {
        self.iter()
            .map(|(_, v)| v)
            .filter(|&v| v < 0)
            .fold(0, i64::saturating_add)
    }

    /// Resolves handles back to names.
    ///
    /// Variables without a name in `table` are skipped.
    #[must_use]
    pub fn to_named(&self, table: &VariableTable) -> BTreeMap<String, i64> {
        self.iter()
            .filter_map(|(var, value)| table.name(var).map(|name| (name.to_owned(), value)))
            .collect()
    }
}
