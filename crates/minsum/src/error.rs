//! Errors surfaced by the facade.

use minsum_core::SystemError;
use minsum_reduce::RelationError;
use thiserror::Error;

use crate::machine::MachineError;

/// Errors from building or solving a system.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The input matrix was rejected.
    #[error("invalid system: {0}")]
    System(#[from] SystemError),

    /// The relations built by reduction could not be evaluated.
    #[error("internal reduction failure: {0}")]
    Relation(#[from] RelationError),

    /// A machine description was rejected.
    #[error("invalid machine: {0}")]
    Machine(#[from] MachineError),
}
