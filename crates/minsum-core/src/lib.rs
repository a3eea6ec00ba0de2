//! # minsum-core
//!
//! Core data model for the minsum linear-system solver.
//!
//! This crate provides:
//! - Type-safe 32-bit variable handles
//! - Interning of variable names into handles
//! - Linear equations with inline coefficient storage
//! - Validated linear systems built from integer matrices
//!
//! ## Conventions
//!
//! - Handles are assigned densely in declaration order, so `VarId::index`
//!   is also the coefficient column of the initial system.
//! - All elimination arithmetic is `f64`; comparisons against zero go through
//!   [`tolerance`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod equation;
pub mod error;
pub mod handle;
pub mod intern;
pub mod system;
pub mod tolerance;

pub use equation::{Coefficients, Equation};
pub use error::SystemError;
pub use handle::VarId;
pub use intern::VariableTable;
pub use system::LinearSystem;
pub use tolerance::EPSILON;
