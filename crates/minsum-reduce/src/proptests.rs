//! Property-based tests for reduction and relation solving.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use minsum_core::{LinearSystem, VarId};

    use crate::{reduce, solve_relations, Assignment, Reduction};

    // Indicator systems A·x = b with a known non-negative solution x
    fn consistent_system() -> impl Strategy<Value = (Vec<Vec<i64>>, Vec<i64>)> {
        (1usize..=5, 1usize..=4).prop_flat_map(|(num_vars, num_rows)| {
            (
                prop::collection::vec(prop::collection::vec(0i64..=1, num_vars), num_rows),
                prop::collection::vec(0i64..10, num_vars),
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

    fn free_values(free: &[VarId], solution: &[i64]) -> Assignment {
        Assignment::from_pairs(
            solution.len(),
            free.iter().map(|&var| (var, solution[var.index()])),
        )
    }

    proptest! {
        #[test]
        fn reduction_reproduces_known_solution((coefficients, solution) in consistent_system()) {
            let system = build(&coefficients, &solution);

            match reduce(&system) {
                Reduction::Shortcut(total) => {
                    prop_assert_eq!(total, solution.iter().sum::<i64>());
                }
                Reduction::Relations { relations, free } => {
                    let values = solve_relations(&relations, &free_values(&free, &solution)).unwrap();
                    let values = values.values().unwrap();
                    prop_assert_eq!(&values, &solution);
                    prop_assert!(system.is_satisfied_by(&values, 1e-6));
                }
            }
        }

        #[test]
        fn free_and_eliminated_partition_variables((coefficients, solution) in consistent_system()) {
            let system = build(&coefficients, &solution);

            if let Reduction::Relations { relations, free } = reduce(&system) {
                let mut seen: Vec<VarId> = relations.iter().map(|r| r.variable).collect();
                seen.extend(free.iter().copied());
                seen.sort();
                let before = seen.len();
                seen.dedup();
                prop_assert_eq!(before, seen.len());
                prop_assert_eq!(seen, system.variables().ids());
            }
        }

        #[test]
        fn relation_order_does_not_matter((coefficients, solution) in consistent_system()) {
            let system = build(&coefficients, &solution);

            if let Reduction::Relations { relations, free } = reduce(&system) {
                let free = free_values(&free, &solution);
                let forward = solve_relations(&relations, &free).unwrap();

                let mut reversed = relations.clone();
                reversed.reverse();
                prop_assert_eq!(&forward, &solve_relations(&reversed, &free).unwrap());

                let mut rotated = relations;
                if !rotated.is_empty() {
                    rotated.rotate_left(1);
                }
                prop_assert_eq!(&forward, &solve_relations(&rotated, &free).unwrap());
            }
        }
    }
}
