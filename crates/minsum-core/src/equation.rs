//! Linear equations.
//!
//! An [`Equation`] is `Σ coefficients[k]·x_k = result`, with coefficients
//! index-aligned to the variable list of the generation it belongs to. Small
//! systems dominate, so coefficients are stored inline.

use std::fmt;
use std::ops::{Add, Sub};

use smallvec::SmallVec;

use crate::tolerance;

/// Inline storage for equation coefficients.
pub type Coefficients = SmallVec<[f64; 16]>;

/// One linear equation over an ordered variable list.
#[derive(Clone, Debug, PartialEq)]
pub struct Equation {
    /// Coefficients, one per variable of the current generation.
    coefficients: Coefficients,
    /// Right-hand-side constant.
    result: f64,
}

impl Equation {
    /// Creates an equation from coefficients and a result.
    #[must_use]
    pub fn new(coefficients: impl IntoIterator<Item = f64>, result: f64) -> Self {
        Self {
            coefficients: coefficients.into_iter().collect(),
            result,
        }
    }

    /// Creates an equation from an integer matrix row.
    ///
    /// The last entry is the result; everything before it is a coefficient.
    /// Returns `None` for an empty row.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_row(row: &[i64]) -> Option<Self> {
        let (&result, coefficients) = row.split_last()?;
        Some(Self::new(
            coefficients.iter().map(|&c| c as f64),
            result as f64,
        ))
    }

    /// Returns the coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the coefficient at `index`.
    #[must_use]
    pub fn coefficient(&self, index: usize) -> f64 {
        self.coefficients[index]
    }

    /// Returns the right-hand-side constant.
    #[must_use]
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Returns the number of variables this equation spans.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns the index of the first non-zero coefficient.
    #[must_use]
    pub fn first_nonzero(&self) -> Option<usize> {
        self.coefficients.iter().position(|&c| !tolerance::is_zero(c))
    }

    /// Checks if every coefficient is zero.
    ///
    /// A trivial equation constrains nothing (or is inconsistent when its
    /// result is non-zero) and can never supply a pivot.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.first_nonzero().is_none()
    }

    /// Structural equality within [`tolerance::EPSILON`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.coefficients.len() == other.coefficients.len()
            && tolerance::approx_eq(self.result, other.result)
            && self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .all(|(&a, &b)| tolerance::approx_eq(a, b))
    }

    /// Returns `self - ratio * pivot`, snapping near-zero entries to zero.
    ///
    /// # Panics
    ///
    /// Panics if the equations span a different number of variables.
    #[must_use]
    pub fn scaled_sub(&self, pivot: &Self, ratio: f64) -> Self {
        assert_eq!(self.num_vars(), pivot.num_vars());

        Self {
            coefficients: self
                .coefficients
                .iter()
                .zip(&pivot.coefficients)
                .map(|(&c, &p)| tolerance::snap(c - ratio * p))
                .collect(),
            result: tolerance::snap(self.result - ratio * pivot.result),
        }
    }

    /// Returns a copy with the column at `index` removed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn without_column(&self, index: usize) -> Self {
        let mut coefficients = self.coefficients.clone();
        coefficients.remove(index);
        Self {
            coefficients,
            result: self.result,
        }
    }

    /// Evaluates the left-hand side against dense variable values.
    ///
    /// # Panics
    ///
    /// Panics if `values` is shorter than the coefficient list.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate(&self, values: &[i64]) -> f64 {
        assert!(values.len() >= self.coefficients.len());
        self.coefficients
            .iter()
            .zip(values)
            .map(|(&c, &v)| c * v as f64)
            .sum()
    }

    /// Returns `|lhs(values) - result|`.
    #[must_use]
    pub fn residual(&self, values: &[i64]) -> f64 {
        (self.evaluate(values) - self.result).abs()
    }
}

impl Add for &Equation {
    type Output = Equation;

    fn add(self, other: Self) -> Equation {
        assert_eq!(self.num_vars(), other.num_vars());

        Equation {
            coefficients: self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .map(|(a, b)| a + b)
                .collect(),
            result: self.result + other.result,
        }
    }
}

impl Sub for &Equation {
    type Output = Equation;

    fn sub(self, other: Self) -> Equation {
        assert_eq!(self.num_vars(), other.num_vars());

        Equation {
            coefficients: self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .map(|(a, b)| a - b)
                .collect(),
            result: self.result - other.result,
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, " = {}", self.result)
    }
}
