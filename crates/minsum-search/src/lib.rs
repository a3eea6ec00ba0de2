//! # minsum-search
//!
//! Best-first search over assignments to the free variables left by
//! reduction, looking for the feasible assignment with the smallest total.
//!
//! This crate provides:
//! - Per-variable search bounds derived from the aggregate system
//! - Search nodes with identity over free-variable values only
//! - An evaluator that resolves nodes through the relation solver
//! - A wall-clock bounded search loop
//!
//! ## Budget
//!
//! The search is a heuristic. It polls the clock every
//! [`SearchConfig::poll_interval`] neighbour expansions and stops once
//! [`SearchConfig::time_budget`] has passed, returning the best candidate seen
//! so far. [`NO_SOLUTION`] is returned when nothing feasible was found.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod best_first;
pub mod bounds;
pub mod config;
pub mod evaluate;
pub mod node;
pub mod outcome;

pub use best_first::find_best_values;
pub use bounds::VariableBounds;
pub use config::SearchConfig;
pub use evaluate::Evaluator;
pub use node::{FreeValues, SearchNode, UNKNOWN_COST};
pub use outcome::{SearchOutcome, SearchStatus, NO_SOLUTION};

#[cfg(test)]
mod proptests;
