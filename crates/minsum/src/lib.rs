//! # minsum
//!
//! Finds the smallest total of non-negative integer variables that satisfies
//! an under-determined system of linear equations.
//!
//! ## Features
//!
//! - **Symbolic reduction**: Gaussian-style elimination into affine relations
//! - **Complementary shortcut**: totals read straight off two equations
//! - **Time-boxed search**: best-first search over the free variables
//! - **Button machines**: joltage counters wired to buttons, solved in bulk
//!
//! ## Quick Start
//!
//! ```rust
//! use minsum::prelude::*;
//!
//! // x + y = 5, x - y = 1
//! let system = EquationSystem::new(&["x", "y"], &[vec![1, 1, 5], vec![1, -1, 1]]).unwrap();
//! assert_eq!(system.sum_of_variables().unwrap(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub use minsum_core as core;
pub use minsum_reduce as reduce;
pub use minsum_search as search;

pub mod error;
pub mod machine;
pub mod system;

pub use error::SolveError;
pub use machine::{fewest_presses, Machine, MachineError};
pub use minsum_search::NO_SOLUTION;
pub use system::{EquationSystem, SolveOutcome};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::SolveError;
    pub use crate::machine::{fewest_presses, Machine};
    pub use crate::system::{EquationSystem, SolveOutcome};
    pub use minsum_core::{Equation, LinearSystem, VarId};
    pub use minsum_reduce::{Assignment, Reduction, VariableRelation};
    pub use minsum_search::{SearchConfig, SearchStatus, NO_SOLUTION};
}
