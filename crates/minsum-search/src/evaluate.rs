//! Node evaluation.
//!
//! Every measure goes through the relation solver: a node only fixes the
//! free variables, the rest are reconstructed before anything is checked
//! against the original equations.

use num_traits::ToPrimitive;

use minsum_core::{LinearSystem, VarId};
use minsum_reduce::{solve_relations, Assignment, RelationError, VariableRelation};

use crate::config::SearchConfig;
use crate::node::{SearchNode, UNKNOWN_COST};

/// Resolves and measures search nodes against the original system.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator<'a> {
    system: &'a LinearSystem,
    relations: &'a [VariableRelation],
    free: &'a [VarId],
    config: &'a SearchConfig,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator.
    #[must_use]
    pub fn new(
        system: &'a LinearSystem,
        relations: &'a [VariableRelation],
        free: &'a [VarId],
        config: &'a SearchConfig,
    ) -> Self {
        Self {
            system,
            relations,
            free,
            config,
        }
    }

    /// Returns the free variables, in node order.
    #[must_use]
    pub fn free(&self) -> &'a [VarId] {
        self.free
    }

    /// Reconstructs every variable from the node's free values.
    ///
    /// # Errors
    ///
    /// Propagates [`RelationError`] from the relation solver.
    pub fn resolve(&self, node: &SearchNode) -> Result<Assignment, RelationError> {
        let free = node.to_assignment(self.free, self.system.num_vars());
        solve_relations(self.relations, &free)
    }

    /// Sum of every variable: the quantity being minimised.
    ///
    /// # Errors
    ///
    /// Propagates [`RelationError`] from the relation solver.
    pub fn objective(&self, node: &SearchNode) -> Result<i64, RelationError> {
        Ok(self.resolve(node)?.sum())
    }

    /// Infeasibility of a node.
    ///
    /// The summed absolute residual of the original equations plus
    /// `negative_penalty` per unit of negative value. Zero for feasible nodes.
    ///
    /// # Errors
    ///
    /// Propagates [`RelationError`] from the relation solver.
    #[allow(clippy::cast_precision_loss)]
    pub fn distance(&self, node: &SearchNode) -> Result<i64, RelationError> {
        let assignment = self.resolve(node)?;
        let Some(values) = assignment.values() else {
            return Ok(UNKNOWN_COST);
        };

        let residual = self.system.total_residual(&values);
        let penalty = assignment.negative_total() as f64 * -self.config.negative_penalty;
        Ok((residual + penalty).to_i64().unwrap_or(UNKNOWN_COST))
    }

    /// Checks a node for feasibility.
    ///
    /// # Errors
    ///
    /// Propagates [`RelationError`] from the relation solver.
    pub fn is_feasible(&self, node: &SearchNode) -> Result<bool, RelationError> {
        Ok(self.is_feasible_assignment(&self.resolve(node)?))
    }

    /// Checks a resolved assignment: every variable non-negative and every
    /// original equation satisfied within `satisfaction_tolerance`.
    #[must_use]
    pub fn is_feasible_assignment(&self, assignment: &Assignment) -> bool {
        if assignment.has_negative() {
            return false;
        }
        assignment.values().is_some_and(|values| {
            self.system
                .is_satisfied_by(&values, self.config.satisfaction_tolerance)
        })
    }
}
