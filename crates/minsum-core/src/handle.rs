//! Variable handles.
//!
//! A [`VarId`] is the declaration index of a variable in its
//! [`VariableTable`](crate::VariableTable). The index never changes while
//! reduction drops columns from the working equations, so relations and
//! assignments keep naming the same variable across every generation.

use std::fmt;

/// Declaration index of a variable.
///
/// Ordering follows declaration order, which is also the column order of the
/// initial system.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(u32);

impl VarId {
    /// Wraps a declaration index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Wraps a column index, or `None` if it does not fit in 32 bits.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Returns the column of this variable in the initial system.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var({})", self.0)
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
