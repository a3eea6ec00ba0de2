//! Validated linear systems.
//!
//! A [`LinearSystem`] is the immutable initial generation of a problem: the
//! declared variables and the equations exactly as they were handed in.
//! Reduction works on copies; this value is kept for correctness checks.

use crate::equation::Equation;
use crate::error::SystemError;
use crate::intern::VariableTable;

/// An immutable system of linear equations over named variables.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    variables: VariableTable,
    equations: Vec<Equation>,
}

impl LinearSystem {
    /// Builds a system from variable names and an integer matrix.
    ///
    /// Each row holds one coefficient per variable followed by the result.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError`] if the matrix is empty, a row has the wrong
    /// length, or a variable name is declared twice.
    pub fn from_matrix<S: AsRef<str>>(
        names: &[S],
        matrix: &[Vec<i64>],
    ) -> Result<Self, SystemError> {
        if matrix.is_empty() {
            return Err(SystemError::NoEquations);
        }

        let mut variables = VariableTable::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if variables.id(name).is_some() {
                return Err(SystemError::DuplicateVariable(name.to_owned()));
            }
            variables.intern(name);
        }

        let expected = names.len() + 1;
        let equations = matrix
            .iter()
            .enumerate()
            .map(|(row, entries)| {
                if entries.len() == expected {
                    Equation::from_row(entries).ok_or(SystemError::NoEquations)
                } else {
                    Err(SystemError::RowLength {
                        row,
                        expected,
                        found: entries.len(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            variables,
            equations,
        })
    }

    /// Returns the declared variables.
    #[must_use]
    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Returns the equations in input order.
    #[must_use]
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// Returns the number of declared variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Returns the coefficient-wise sum of every equation.
    #[must_use]
    pub fn summed_equation(&self) -> Equation {
        let zero = Equation::new(std::iter::repeat(0.0).take(self.num_vars()), 0.0);
        self.equations.iter().fold(zero, |acc, eq| &acc + eq)
    }

    /// Returns the largest right-hand side.
    #[must_use]
    pub fn max_result(&self) -> f64 {
        self.equations
            .iter()
            .map(Equation::result)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Checks every equation against dense values within `tolerance`.
    #[must_use]
    pub fn is_satisfied_by(&self, values: &[i64], tolerance: f64) -> bool {
        self.equations
            .iter()
            .all(|eq| eq.residual(values) < tolerance)
    }

    /// Returns the summed absolute residual of every equation.
    #[must_use]
    pub fn total_residual(&self, values: &[i64]) -> f64 {
        self.equations.iter().map(|eq| eq.residual(values)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::VarId;

    fn two_by_two() -> LinearSystem {
        LinearSystem::from_matrix(&["x", "y"], &[vec![1, 1, 5], vec![1, -1, 1]]).unwrap()
    }

    #[test]
    fn test_from_matrix() {
        let system = two_by_two();
        assert_eq!(system.num_vars(), 2);
        assert_eq!(system.equations().len(), 2);
        assert_eq!(system.variables().id("y"), Some(VarId::new(1)));
        assert_eq!(system.equations()[1], Equation::new([1.0, -1.0], 1.0));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = LinearSystem::from_matrix(&["x", "y"], &[vec![1, 1, 5], vec![1, 1]]).unwrap_err();
        assert_eq!(
            err,
            SystemError::RowLength {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        let err = LinearSystem::from_matrix(&["x", "x"], &[vec![1, 1, 5]]).unwrap_err();
        assert_eq!(err, SystemError::DuplicateVariable("x".to_string()));

        let err = LinearSystem::from_matrix(&["x"], &[]).unwrap_err();
        assert_eq!(err, SystemError::NoEquations);
    }

    #[test]
    fn test_summed_equation() {
        let system = two_by_two();
        assert_eq!(system.summed_equation(), Equation::new([2.0, 0.0], 6.0));
        assert_eq!(system.max_result(), 5.0);
    }

    #[test]
    fn test_satisfaction() {
        let system = two_by_two();
        assert!(system.is_satisfied_by(&[3, 2], 0.1));
        assert!(!system.is_satisfied_by(&[2, 3], 0.1));
        // |5 - 5| + |-1 - 1|
        assert_eq!(system.total_residual(&[2, 3]), 2.0);
    }
}
