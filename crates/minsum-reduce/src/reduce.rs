//! Gaussian reduction engine.
//!
//! Each round picks a pivot equation and variable, rewrites the variable as a
//! [`VariableRelation`] over the variables still present, substitutes it out
//! of every other equation and drops its column. Rounds stop when no
//! equations remain or any equation has become trivial (all coefficients
//! zero). The variables left over are free and are chosen by search.
//!
//! State is threaded explicitly: [`ReductionState::eliminate`] consumes one
//! generation and returns the next, so the initial system is never touched.

use tracing::{debug, trace};

use minsum_core::tolerance;
use minsum_core::{Equation, LinearSystem, VarId};

use crate::relation::{VariableRelation, Weights};
use crate::shortcut::complementary_total;

/// Outcome of reducing a system.
#[derive(Clone, Debug, PartialEq)]
pub enum Reduction {
    /// A complementary pair fixed the total directly.
    Shortcut(i64),
    /// Relations for eliminated variables and the variables left free.
    Relations {
        /// Relations in elimination order.
        relations: Vec<VariableRelation>,
        /// Variables not eliminated, in their original order.
        free: Vec<VarId>,
    },
}

/// Pivot chosen for one elimination round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pivot {
    /// Index of the pivot equation in the working list.
    pub row: usize,
    /// Column of the pivot variable in the working list.
    pub col: usize,
}

/// One generation of the working equations and variables.
///
/// `equations[i].coefficients()` is index-aligned with `variables`.
#[derive(Clone, Debug, PartialEq)]
pub struct ReductionState {
    equations: Vec<Equation>,
    variables: Vec<VarId>,
}

impl ReductionState {
    /// Creates the first generation from a system, with duplicates removed.
    #[must_use]
    pub fn from_system(system: &LinearSystem) -> Self {
        Self {
            equations: dedup(system.equations().to_vec()),
            variables: system.variables().ids(),
        }
    }

    /// Returns the working equations.
    #[must_use]
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// Returns the working variables.
    #[must_use]
    pub fn variables(&self) -> &[VarId] {
        &self.variables
    }

    /// Checks if no further round can run.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.equations.is_empty() || self.equations.iter().any(Equation::is_trivial)
    }

    /// Chooses the next pivot.
    ///
    /// The pivot equation has the smallest result (first one on ties); the
    /// pivot variable is its first non-zero coefficient.
    #[must_use]
    pub fn pivot(&self) -> Option<Pivot> {
        let (row, equation) = self
            .equations
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.result().total_cmp(&b.result()))?;
        let col = equation.first_nonzero()?;
        Some(Pivot { row, col })
    }

    /// Eliminates the pivot variable, returning the next generation and the
    /// relation that defines the eliminated variable.
    ///
    /// # Panics
    ///
    /// Panics if `pivot` does not address a non-zero coefficient of this
    /// generation.
    #[must_use]
    pub fn eliminate(self, pivot: Pivot) -> (Self, VariableRelation) {
        let Pivot { row, col } = pivot;
        let pivot_eq = &self.equations[row];
        let pivot_coef = pivot_eq.coefficient(col);
        assert!(!tolerance::is_zero(pivot_coef), "pivot coefficient is zero");

        let weights: Weights = pivot_eq
            .coefficients()
            .iter()
            .enumerate()
            .filter(|&(k, &c)| k != col && !tolerance::is_zero(c))
            .map(|(k, &c)| (self.variables[k], -c / pivot_coef))
            .collect();
        let relation = VariableRelation::new(
            self.variables[col],
            weights,
            pivot_eq.result() / pivot_coef,
        );

        let equations = self
            .equations
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .map(|(_, eq)| {
                let c = eq.coefficient(col);
                if tolerance::is_zero(c) {
                    eq.without_column(col)
                } else {
                    eq.scaled_sub(pivot_eq, c / pivot_coef).without_column(col)
                }
            })
            .collect();

        let mut variables = self.variables;
        variables.remove(col);

        let next = Self {
            equations: dedup(equations),
            variables,
        };
        (next, relation)
    }
}

/// Reduces a system to relations over free variables.
///
/// The complementary-pair shortcut is consulted on the initial generation
/// only. Reduced equations no longer mention eliminated variables, so a pair
/// found later would miss their share of the total.
#[must_use]
pub fn reduce(system: &LinearSystem) -> Reduction {
    let mut state = ReductionState::from_system(system);

    if let Some(total) = complementary_total(&state.equations, state.variables.len()) {
        debug!(total, "complementary equations fix the total");
        return Reduction::Shortcut(total);
    }

    let mut relations = Vec::new();
    while !state.is_exhausted() {
        let Some(pivot) = state.pivot() else {
            break;
        };
        let (next, relation) = state.eliminate(pivot);
        trace!(%relation, "eliminated variable");
        relations.push(relation);
        state = next;
    }

    debug!(
        eliminated = relations.len(),
        free = state.variables.len(),
        leftover = state.equations.len(),
        "reduction finished"
    );

    Reduction::Relations {
        relations,
        free: state.variables,
    }
}

/// Removes approximate duplicates, keeping the first occurrence.
fn dedup(equations: Vec<Equation>) -> Vec<Equation> {
    let mut unique: Vec<Equation> = Vec::with_capacity(equations.len());
    for equation in equations {
        if !unique.iter().any(|u| u.approx_eq(&equation)) {
            unique.push(equation);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(names: &[&str], matrix: &[Vec<i64>]) -> LinearSystem {
        LinearSystem::from_matrix(names, matrix).unwrap()
    }

    #[test]
    fn test_from_system_dedups() {
        let s = system(&["x", "y"], &[vec![1, 1, 5], vec![1, 1, 5], vec![1, 0, 2]]);
        let state = ReductionState::from_system(&s);
        assert_eq!(state.equations().len(), 2);
        assert_eq!(state.variables().len(), 2);
    }

    #[test]
    fn test_pivot_smallest_result_first_tie() {
        let s = system(
            &["a", "b", "c"],
            &[vec![0, 1, 1, 4], vec![0, 0, 1, 2], vec![1, 1, 0, 2]],
        );
        let state = ReductionState::from_system(&s);
        // rows 1 and 2 tie on result 2; row 1 comes first, its first non-zero is column 2
        assert_eq!(state.pivot(), Some(Pivot { row: 1, col: 2 }));
    }

    #[test]
    fn test_eliminate_builds_relation() {
        let s = system(&["x", "y"], &[vec![1, 1, 5], vec![1, -1, 1]]);
        let state = ReductionState::from_system(&s);
        let pivot = state.pivot().unwrap();
        assert_eq!(pivot, Pivot { row: 1, col: 0 });

        let (next, relation) = state.eliminate(pivot);
        // x = y + 1
        assert_eq!(relation.variable, VarId::new(0));
        assert_eq!(relation.weights.as_slice(), &[(VarId::new(1), 1.0)]);
        assert_eq!(relation.constant, 1.0);

        // (x + y = 5) - (x - y = 1) leaves 2y = 4
        assert_eq!(next.variables(), &[VarId::new(1)]);
        assert_eq!(next.equations(), &[Equation::new([2.0], 4.0)]);
    }

    #[test]
    fn test_reduce_unique_solution() {
        let s = system(&["x", "y"], &[vec![1, 1, 5], vec![1, -1, 1]]);
        let Reduction::Relations { relations, free } = reduce(&s) else {
            panic!("expected relations");
        };
        assert_eq!(relations.len(), 2);
        assert!(free.is_empty());
    }

    #[test]
    fn test_reduce_leaves_free_variables() {
        let s = system(&["a", "b", "c"], &[vec![1, 1, 1, 10]]);
        let Reduction::Relations { relations, free } = reduce(&s) else {
            panic!("expected relations");
        };
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].variable, VarId::new(0));
        assert_eq!(free, vec![VarId::new(1), VarId::new(2)]);
    }

    #[test]
    fn test_reduce_stops_on_trivial_equation() {
        // x = 3 and x = 4: substituting leaves 0 = 1
        let s = system(&["x"], &[vec![1, 3], vec![1, 4]]);
        let Reduction::Relations { relations, free } = reduce(&s) else {
            panic!("expected relations");
        };
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].constant, 3.0);
        assert!(free.is_empty());
    }

    #[test]
    fn test_reduce_shortcut() {
        let s = system(&["a", "b", "c"], &[vec![1, 0, 1, 4], vec![0, 1, 0, 6]]);
        assert_eq!(reduce(&s), Reduction::Shortcut(10));
    }

    #[test]
    fn test_initial_system_untouched() {
        let s = system(&["x", "y"], &[vec![1, 1, 5], vec![1, -1, 1]]);
        let before = s.equations().to_vec();
        let _ = reduce(&s);
        assert_eq!(s.equations(), before.as_slice());
    }
}
