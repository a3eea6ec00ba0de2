//! Property-based tests for the search.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;

    use minsum_core::LinearSystem;
    use minsum_reduce::{reduce, Reduction};

    use crate::{find_best_values, SearchConfig, SearchStatus};

    // Indicator systems A·x = b with a known non-negative solution x
    fn consistent_system() -> impl Strategy<Value = (Vec<Vec<i64>>, Vec<i64>)> {
        (1usize..=4, 1usize..=3).prop_flat_map(|(num_vars, num_rows)| {
            (
                prop::collection::vec(prop::collection::vec(0i64..=1, num_vars), num_rows),
                prop::collection::vec(0i64..6, num_vars),
            )
        })
    }

    fn build(coefficients: &[Vec<i64>], solution: &[i64]) -> LinearSystem {
        let names: Vec<String> = (0..solution.len()).map(|i| format!("v{i}")).collect();
        let matrix: Vec<Vec<i64>> = coefficients
            .iter()
            .map(|row| {
                let result = row.iter().zip(solution).map(|(a, x)| a * x).sum();
                let mut row = row.clone();
                row.push(result);
                row
            })
            .collect();
        LinearSystem::from_matrix(&names, &matrix).unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn accepted_candidates_are_feasible((coefficients, solution) in consistent_system()) {
            let system = build(&coefficients, &solution);
            let config = SearchConfig::default().with_time_budget(Duration::from_millis(300));

            let Reduction::Relations { relations, free } = reduce(&system) else {
                return Ok(());
            };
            let outcome = find_best_values(&system, &relations, &free, &config).unwrap();

            if let Some(assignment) = &outcome.assignment {
                prop_assert!(!assignment.has_negative());
                let values = assignment.values().unwrap();
                prop_assert!(system.is_satisfied_by(&values, config.satisfaction_tolerance));
                prop_assert_eq!(outcome.best, Some(assignment.sum()));
            }

            // every variable is boxed by the aggregate, so a finished search
            // has seen an assignment at least as good as the planted one
            if outcome.status != SearchStatus::BudgetExceeded {
                prop_assert!(outcome.value() <= solution.iter().sum::<i64>());
            }
        }
    }
}
