//! Upper bounds for free variables.
//!
//! Summing every original equation gives `Σ sₖ·xₖ = S`. With non-negative
//! variables, no single `xₖ` can usefully exceed `S / sₖ`, and no variable of
//! an indicator system can exceed the largest right-hand side. The bound is
//! deliberately slack: it only caps how wide the search may spread.

use smallvec::SmallVec;

use minsum_core::tolerance;
use minsum_core::{LinearSystem, VarId};

/// Inclusive caps for each free variable, in free-variable order.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableBounds {
    caps: SmallVec<[f64; 8]>,
}

impl VariableBounds {
    /// Computes caps for `free` from the aggregate of `system`.
    ///
    /// A variable that the aggregate does not mention is capped by the
    /// largest right-hand side alone.
    #[must_use]
    pub fn new(system: &LinearSystem, free: &[VarId]) -> Self {
        let summed = system.summed_equation();
        let max_result = system.max_result();

        let caps = free
            .iter()
            .map(|var| {
                let coefficient = summed.coefficient(var.index());
                if tolerance::is_zero(coefficient) {
                    max_result
                } else {
                    (summed.result() / coefficient + 1.0).min(max_result)
                }
            })
            .collect();

        Self { caps }
    }

    /// Creates bounds from explicit caps.
    #[must_use]
    pub fn from_caps(caps: impl IntoIterator<Item = f64>) -> Self {
        Self {
            caps: caps.into_iter().collect(),
        }
    }

    /// Returns the cap of the free variable at `position`.
    #[must_use]
    pub fn cap(&self, position: usize) -> f64 {
        self.caps[position]
    }

    /// Checks if the free variable at `position` may take `value`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn allows(&self, position: usize, value: i64) -> bool {
        self.caps
            .get(position)
            .is_some_and(|&cap| value as f64 <= cap)
    }

    /// Returns the number of bounded variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.caps.len()
    }

    /// Returns true if no variables are bounded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }
}
