//! Complementary-pair shortcut.
//!
//! If two equations have coefficient vectors that add up to all ones, then
//! their sum reads `x₀ + x₁ + … + xₙ = rᵢ + rⱼ`: the total is fixed and no
//! search is needed.

use num_traits::ToPrimitive;

use minsum_core::tolerance;
use minsum_core::Equation;

/// Returns `rᵢ + rⱼ` for the first complementary pair `(i, j)`, `i ≠ j`.
///
/// The check only applies while more than one variable remains.
#[must_use]
pub fn complementary_total(equations: &[Equation], num_vars: usize) -> Option<i64> {
    if num_vars <= 1 {
        return None;
    }

    for (i, a) in equations.iter().enumerate() {
        for (j, b) in equations.iter().enumerate() {
            if i != j && are_complementary(a, b) {
                return (a.result() + b.result()).round().to_i64();
            }
        }
    }
    None
}

fn are_complementary(a: &Equation, b: &Equation) -> bool {
    a.num_vars() == b.num_vars()
        && a
            .coefficients()
            .iter()
            .zip(b.coefficients())
            .all(|(&x, &y)| tolerance::approx_eq(x + y, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complementary_pair() {
        let equations = vec![
            Equation::new([1.0, 1.0, 0.0], 7.0),
            Equation::new([1.0, 0.0, 1.0], 4.0),
            Equation::new([0.0, 1.0, 0.0], 6.0),
        ];
        // rows 1 and 2 partition the variables
        assert_eq!(complementary_total(&equations, 3), Some(10));
    }

    #[test]
    fn test_no_pair() {
        let equations = vec![
            Equation::new([1.0, 1.0], 5.0),
            Equation::new([1.0, -1.0], 1.0),
        ];
        assert_eq!(complementary_total(&equations, 2), None);
    }

    #[test]
    fn test_single_variable_never_fires() {
        let equations = vec![Equation::new([1.0], 3.0), Equation::new([0.0], 0.0)];
        assert_eq!(complementary_total(&equations, 1), None);
    }

    #[test]
    fn test_equation_is_not_its_own_complement() {
        let equations = vec![Equation::new([0.5, 0.5], 3.0)];
        assert_eq!(complementary_total(&equations, 2), None);
    }
}
