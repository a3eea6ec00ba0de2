//! Variable relations and their solver.
//!
//! A [`VariableRelation`] records `x = Σ wᵢ·yᵢ + c` for a variable `x`
//! eliminated during reduction. The `yᵢ` were still present when `x` was
//! eliminated, so they are either free or eliminated later; evaluating the
//! relations latest-first always succeeds for a set built by reduction.

use std::fmt;

use num_traits::ToPrimitive;
use smallvec::SmallVec;
use tracing::error;

use minsum_core::VarId;

use crate::assignment::Assignment;
use crate::error::RelationError;

/// Affine weights of a relation, in variable order of the generation it was
/// built from.
pub type Weights = SmallVec<[(VarId, f64); 8]>;

/// Defines an eliminated variable as an affine function of others.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableRelation {
    /// The eliminated variable.
    pub variable: VarId,
    /// `(variable, weight)` pairs of the right-hand side.
    pub weights: Weights,
    /// Constant term.
    pub constant: f64,
}

impl VariableRelation {
    /// Creates a new relation.
    #[must_use]
    pub fn new(variable: VarId, weights: Weights, constant: f64) -> Self {
        Self {
            variable,
            weights,
            constant,
        }
    }

    /// Iterates over the variables this relation reads.
    pub fn inputs(&self) -> impl Iterator<Item = VarId> + '_ {
        self.weights.iter().map(|&(var, _)| var)
    }

    /// Checks if every input has a value in `values`.
    #[must_use]
    pub fn is_resolvable(&self, values: &Assignment) -> bool {
        self.inputs().all(|var| values.is_resolved(var))
    }

    /// Evaluates the right-hand side.
    ///
    /// Returns `None` while any input is unresolved.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate(&self, values: &Assignment) -> Option<f64> {
        let mut total = self.constant;
        for &(var, weight) in &self.weights {
            total += weight * values.get(var)? as f64;
        }
        Some(total)
    }
}

impl fmt::Display for VariableRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} =", self.variable)?;
        for (i, (var, weight)) in self.weights.iter().enumerate() {
            if i > 0 {
                write!(f, " +")?;
            }
            write!(f, " {weight}*{var}")?;
        }
        if self.constant < 0.0 {
            write!(f, " - {}", -self.constant)
        } else {
            write!(f, " + {}", self.constant)
        }
    }
}

/// Reconstructs a full assignment from values of the free variables.
///
/// Each round evaluates a relation whose inputs are all resolved and rounds
/// it to the nearest integer, halves towards positive infinity. The outcome
/// does not depend on the order of `relations`.
///
/// # Errors
///
/// Returns [`RelationError::Unresolvable`] if relations remain but none of
/// them can be evaluated.
pub fn solve_relations(
    relations: &[VariableRelation],
    free: &Assignment,
) -> Result<Assignment, RelationError> {
    let mut values = free.clone();
    let mut pending: Vec<&VariableRelation> = relations.iter().collect();

    while !pending.is_empty() {
        let Some(position) = pending.iter().position(|r| r.is_resolvable(&values)) else {
            let pending: Vec<VarId> = pending.iter().map(|r| r.variable).collect();
            error!(?pending, "relation graph has no resolvable relation");
            return Err(RelationError::Unresolvable { pending });
        };

        let relation = pending.swap_remove(position);
        let value = relation
            .evaluate(&values)
            .and_then(|v| round_half_up(v).to_i64())
            .unwrap_or(i64::MAX);
        values.set(relation.variable, value);
    }

    Ok(values)
}

/// Rounds to the nearest integer, with halves going towards positive
/// infinity (`-0.5` becomes `0`, `2.5` becomes `3`).
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
