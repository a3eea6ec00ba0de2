//! Best-first search over free-variable assignments.
//!
//! The open set is a min-heap on `(cost, insertion order)`, which pops the
//! first-inserted node among those of least cost. The origin is ranked by its
//! objective; every other node enters the open set ranked by its distance, so
//! feasible nodes (distance zero) are expanded before infeasible ones.
//!
//! Neighbours are admitted when the current node's cost does not exceed the
//! neighbour's stored cost. A fresh neighbour stores
//! [`UNKNOWN_COST`](crate::node::UNKNOWN_COST), so in
//! practice every neighbour not already open or closed is admitted: the
//! expansion is near-greedy rather than an admissible A*.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use minsum_core::{LinearSystem, VarId};
use minsum_reduce::{Assignment, RelationError, VariableRelation};

use crate::bounds::VariableBounds;
use crate::config::SearchConfig;
use crate::evaluate::Evaluator;
use crate::node::SearchNode;
use crate::outcome::{SearchOutcome, SearchStatus};

/// A node waiting in the open set.
#[derive(Clone, Debug)]
struct OpenEntry {
    cost: i64,
    sequence: u64,
    node: SearchNode,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.sequence == other.sequence
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost, then by insertion order
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Search state for one invocation.
struct BestFirstSearch<'a> {
    evaluator: Evaluator<'a>,
    bounds: VariableBounds,
    config: &'a SearchConfig,
    open: BinaryHeap<OpenEntry>,
    in_open: FxHashSet<SearchNode>,
    closed: FxHashSet<SearchNode>,
    best: Option<(i64, Assignment)>,
    sequence: u64,
    expanded: u64,
    started: Instant,
}

impl<'a> BestFirstSearch<'a> {
    fn new(evaluator: Evaluator<'a>, bounds: VariableBounds, config: &'a SearchConfig) -> Self {
        Self {
            evaluator,
            bounds,
            config,
            open: BinaryHeap::new(),
            in_open: FxHashSet::default(),
            closed: FxHashSet::default(),
            best: None,
            sequence: 0,
            expanded: 0,
            started: Instant::now(),
        }
    }

    fn push(&mut self, node: SearchNode) {
        self.in_open.insert(node.clone());
        self.open.push(OpenEntry {
            cost: node.cost(),
            sequence: self.sequence,
            node,
        });
        self.sequence += 1;
    }

    fn record(&mut self, cost: i64, assignment: Assignment) {
        let improves = self.best.as_ref().map_or(true, |(best, _)| cost < *best);
        if improves {
            debug!(cost, expanded = self.expanded, "new best candidate");
            self.best = Some((cost, assignment));
        }
    }

    fn budget_exceeded(&self) -> bool {
        self.expanded % self.config.poll_interval.max(1) == 0
            && self.started.elapsed() > self.config.time_budget
    }

    fn run(mut self) -> Result<SearchOutcome, RelationError> {
        let mut origin = SearchNode::origin(self.evaluator.free().len());
        origin.set_cost(self.evaluator.objective(&origin)?);
        self.push(origin);

        while let Some(OpenEntry { node: mut current, .. }) = self.open.pop() {
            self.in_open.remove(&current);

            let assignment = self.evaluator.resolve(&current)?;
            if self.evaluator.is_feasible_assignment(&assignment) {
                let cost = assignment.sum();
                current.set_cost(cost);
                self.record(cost, assignment);
            }
            self.closed.insert(current.clone());

            let neighbors: Vec<SearchNode> = current.neighbors(&self.bounds).collect();
            for mut neighbor in neighbors {
                if self.closed.contains(&neighbor) {
                    continue;
                }

                self.expanded += 1;
                if self.budget_exceeded() {
                    warn!(
                        expanded = self.expanded,
                        budget = ?self.config.time_budget,
                        solved = self.best.is_some(),
                        "search budget exceeded"
                    );
                    return Ok(self.finish(SearchStatus::BudgetExceeded));
                }

                if self.in_open.contains(&neighbor) || current.cost() > neighbor.cost() {
                    continue;
                }
                neighbor.set_cost(self.evaluator.distance(&neighbor)?);
                self.push(neighbor);
            }
        }

        Ok(self.finish(SearchStatus::Exhausted))
    }

    fn finish(self, status: SearchStatus) -> SearchOutcome {
        let elapsed = self.started.elapsed();
        let (best, assignment) = match self.best {
            Some((cost, assignment)) => (Some(cost), Some(assignment)),
            None => (None, None),
        };
        debug!(?status, ?best, expanded = self.expanded, ?elapsed, "search finished");

        SearchOutcome {
            best,
            assignment,
            status,
            expanded: self.expanded,
            elapsed,
        }
    }
}

/// Finds the smallest total over feasible assignments of `free`.
///
/// `relations` and `free` come from reducing `system`. With no free variables
/// the relations are evaluated once and checked directly.
///
/// # Errors
///
/// Returns [`RelationError`] if the relations cannot be evaluated, which
/// only happens for relation sets not produced by reduction.
pub fn find_best_values(
    system: &LinearSystem,
    relations: &[VariableRelation],
    free: &[VarId],
    config: &SearchConfig,
) -> Result<SearchOutcome, RelationError> {
    let evaluator = Evaluator::new(system, relations, free, config);

    if free.is_empty() {
        let started = Instant::now();
        let assignment = evaluator.resolve(&SearchNode::origin(0))?;
        let feasible = evaluator.is_feasible_assignment(&assignment);
        debug!(feasible, "no free variables, evaluated relations directly");

        return Ok(SearchOutcome {
            best: feasible.then(|| assignment.sum()),
            assignment: feasible.then_some(assignment),
            status: SearchStatus::Direct,
            expanded: 0,
            elapsed: started.elapsed(),
        });
    }

    let bounds = VariableBounds::new(system, free);
    debug!(free = free.len(), ?bounds, "starting best-first search");

    BestFirstSearch::new(evaluator, bounds, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use minsum_reduce::{reduce, Reduction};
    use smallvec::smallvec;

    use crate::outcome::NO_SOLUTION;

    fn search(names: &[&str], matrix: &[Vec<i64>], config: &SearchConfig) -> SearchOutcome {
        let system = LinearSystem::from_matrix(names, matrix).unwrap();
        let Reduction::Relations { relations, free } = reduce(&system) else {
            panic!("expected relations");
        };
        find_best_values(&system, &relations, &free, config).unwrap()
    }

    #[test]
    fn test_open_entry_ordering() {
        let entry = |cost, sequence| OpenEntry {
            cost,
            sequence,
            node: SearchNode::origin(0),
        };
        let mut heap = BinaryHeap::new();
        heap.push(entry(5, 0));
        heap.push(entry(2, 1));
        heap.push(entry(2, 2));
        heap.push(entry(9, 3));

        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|e| e.sequence)).collect();
        assert_eq!(order, vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_direct_unique_solution() {
        let outcome = search(
            &["x", "y"],
            &[vec![1, 1, 5], vec![1, -1, 1]],
            &SearchConfig::default(),
        );
        assert_eq!(outcome.status, SearchStatus::Direct);
        assert_eq!(outcome.value(), 5);
        assert_eq!(outcome.assignment.unwrap().values(), Some(vec![3, 2]));
    }

    #[test]
    fn test_direct_inconsistent() {
        let outcome = search(&["x"], &[vec![1, 3], vec![1, 4]], &SearchConfig::default());
        assert_eq!(outcome.status, SearchStatus::Direct);
        assert_eq!(outcome.value(), NO_SOLUTION);
        assert!(outcome.assignment.is_none());
    }

    #[test]
    fn test_single_equation_over_three_variables() {
        let outcome = search(&["a", "b", "c"], &[vec![1, 1, 1, 10]], &SearchConfig::default());
        assert_eq!(outcome.status, SearchStatus::Exhausted);
        assert_eq!(outcome.value(), 10);

        let assignment = outcome.assignment.unwrap();
        assert!(!assignment.has_negative());
        assert_eq!(assignment.sum(), 10);
    }

    #[test]
    fn test_free_variable_changes_total() {
        // a + b = 4, b + c = 6: total = 10 - b, so b should be as large as
        // feasibility allows (b = 4)
        let outcome = search(
            &["a", "b", "c"],
            &[vec![1, 1, 0, 4], vec![0, 1, 1, 6]],
            &SearchConfig::default(),
        );
        assert_eq!(outcome.value(), 6);
        assert_eq!(outcome.assignment.unwrap().values(), Some(vec![0, 4, 2]));
    }

    fn cyclic_relations() -> Vec<VariableRelation> {
        // x = y and y = x: neither can be evaluated first
        vec![
            VariableRelation::new(VarId::new(0), smallvec![(VarId::new(1), 1.0)], 0.0),
            VariableRelation::new(VarId::new(1), smallvec![(VarId::new(0), 1.0)], 0.0),
        ]
    }

    #[test]
    fn test_cyclic_relations_surface_as_error() {
        let system = LinearSystem::from_matrix(&["x", "y", "z"], &[vec![1, 1, 1, 3]]).unwrap();
        let config = SearchConfig::default();
        let expected = RelationError::Unresolvable {
            pending: vec![VarId::new(0), VarId::new(1)],
        };

        // with a free variable the origin fails to resolve
        let err = find_best_values(&system, &cyclic_relations(), &[VarId::new(2)], &config)
            .unwrap_err();
        assert_eq!(err, expected);

        // without one the direct evaluation fails the same way
        let err = find_best_values(&system, &cyclic_relations(), &[], &config).unwrap_err();
        assert_eq!(err, expected);
    }

    #[test]
    fn test_budget_bounds_runtime() {
        // parity makes a + … + e = 100 and 2a + … + 2e = 201 inconsistent,
        // but reduction only notices a trivial row and leaves four free
        // variables with a large box to explore
        let config = SearchConfig::default()
            .with_time_budget(Duration::from_millis(50))
            .with_poll_interval(100);
        let started = Instant::now();
        let outcome = search(
            &["a", "b", "c", "d", "e"],
            &[vec![1, 1, 1, 1, 1, 100], vec![2, 2, 2, 2, 2, 201]],
            &config,
        );

        assert_eq!(outcome.status, SearchStatus::BudgetExceeded);
        assert_eq!(outcome.value(), NO_SOLUTION);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
