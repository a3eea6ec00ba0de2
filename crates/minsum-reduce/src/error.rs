//! Errors raised while evaluating relations.

use minsum_core::VarId;
use thiserror::Error;

/// Errors from the relation solver.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RelationError {
    /// Relations remain but none of them has all of its inputs resolved.
    ///
    /// Reduction never builds such a relation set; seeing this means the
    /// relation graph was assembled by hand or is cyclic.
    #[error("no resolvable relation among {} pending: {pending:?}", pending.len())]
    Unresolvable {
        /// Variables whose relations could not be evaluated.
        pending: Vec<VarId>,
    },
}
