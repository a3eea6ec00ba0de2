//! # minsum-reduce
//!
//! Symbolic reduction of under-determined linear systems.
//!
//! This crate provides:
//! - Gaussian-style elimination that rewrites one variable per round as an
//!   affine relation over the variables that remain
//! - The complementary-pair shortcut that reads the total sum straight off two
//!   equations
//! - A relation solver that reconstructs a full assignment from values of the
//!   free variables
//!
//! ## Pipeline
//!
//! ```text
//! LinearSystem ──reduce──▶ Reduction::Shortcut(total)
//!                      └─▶ Reduction::Relations { relations, free }
//!                                   │
//!                 free values ──────┴──solve_relations──▶ Assignment
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assignment;
pub mod reduce;
pub mod relation;

mod error;
mod shortcut;

pub use assignment::Assignment;
pub use error::RelationError;
pub use reduce::{reduce, Reduction, ReductionState};
pub use relation::{solve_relations, VariableRelation, Weights};
pub use shortcut::complementary_total;

#[cfg(test)]
mod proptests;
