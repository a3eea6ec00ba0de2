//! Errors raised while building a linear system.

use thiserror::Error;

/// Errors that reject an input matrix at construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SystemError {
    /// The matrix has no rows.
    #[error("system has no equations")]
    NoEquations,

    /// A row is not one coefficient per variable followed by the result.
    #[error("row {row} has {found} entries, expected {expected} (one per variable plus the result)")]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of variables plus one.
        expected: usize,
        /// Entries actually present in the row.
        found: usize,
    },

    /// The same name appears twice in the variable list.
    #[error("variable `{0}` is declared more than once")]
    DuplicateVariable(String),
}
