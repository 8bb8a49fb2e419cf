//! Exhaustive backtracking search over groundings of action schemes.
//!
//! The solver enumerates every action sequence reachable without revisiting
//! a state on the current path, collects all goal-satisfying sequences and
//! returns the shortest. Exploration order is deterministic: schemes in
//! declaration order, symbol tuples in lexicographic order over the
//! name-sorted universe, depth first. Ties in solution length are broken by
//! discovery order in that enumeration.
//!
//! The branching factor is `|symbols|^arity` per scheme with no memoization
//! across branches, so the engine is only suitable for small symbol
//! universes.

use crate::strips::action::GroundAction;
use crate::strips::error::PlanningError;
use crate::strips::plan::Plan;
use crate::strips::state::WorldState;
use crate::strips::symbol::{Symbol, SymbolTuple};
use crate::strips::task::PlanningTask;
use itertools::Itertools;
use tracing::{debug, info};

/// Optional deployment-level cutoffs. Both default to unbounded; exceeding
/// a limit prunes further expansion, it is not an error, so a bounded
/// search still reports the best solution it discovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum plan-prefix length a branch may reach.
    pub max_depth: Option<usize>,
    /// Maximum number of nodes expanded across the whole search.
    pub max_expanded_nodes: Option<usize>,
}

/// Search counters, logged through `tracing` when the search finishes.
#[derive(Debug)]
pub struct SearchStatistics {
    expanded_nodes: usize,
    generated_actions: usize,
    pruned_cycles: usize,
    solutions_found: usize,
    search_start_time: std::time::Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_actions: 0,
            pruned_cycles: 0,
            solutions_found: 0,
            search_start_time: std::time::Instant::now(),
        }
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
    }

    fn increment_generated_actions(&mut self) {
        self.generated_actions += 1;
    }

    fn increment_pruned_cycles(&mut self) {
        self.pruned_cycles += 1;
    }

    fn increment_solutions_found(&mut self) {
        self.solutions_found += 1;
    }

    fn finalise_search(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_actions = self.generated_actions,
            pruned_cycles = self.pruned_cycles,
            solutions_found = self.solutions_found,
            search_duration = self.search_start_time.elapsed().as_secs_f64()
        );
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// All ordered tuples of length `arity` over `universe`, with repetition
/// and no distinctness constraint between positions: `|universe|^arity`
/// tuples, in lexicographic order. A zero-arity request is a programmer
/// error.
pub fn symbol_tuples(
    arity: usize,
    universe: &[Symbol],
) -> Result<Vec<SymbolTuple>, PlanningError> {
    if arity == 0 {
        return Err(PlanningError::ZeroArityGrounding);
    }

    Ok((0..arity)
        .map(|_| universe.iter().copied())
        .multi_cartesian_product()
        .map(SymbolTuple::from_vec)
        .collect())
}

/// The backtracking planner over a [`PlanningTask`].
#[derive(Debug, Clone, Default)]
pub struct Solver {
    limits: SearchLimits,
}

impl Solver {
    pub fn new() -> Self {
        Self {
            limits: SearchLimits::default(),
        }
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Runs the exhaustive search and returns the shortest solution, or
    /// `None` when no action sequence reaches the goal. Errors only signal
    /// malformed schemes or corrupted states, never an unsolvable task.
    pub fn get_best_solution(
        &self,
        task: &PlanningTask,
    ) -> Result<Option<Plan>, PlanningError> {
        // The symbol universe is derived from the start state alone, sorted
        // by name so that tuple enumeration is reproducible.
        let universe = task.start().symbols();

        let mut statistics = SearchStatistics::new();
        let mut solutions: Vec<Plan> = Vec::new();
        self.explore(
            task,
            &universe,
            task.start().clone(),
            Vec::new(),
            Vec::new(),
            &mut solutions,
            &mut statistics,
        )?;
        statistics.finalise_search();

        // Stable sort: the first-discovered solution wins among equal lengths.
        solutions.sort_by_key(Plan::len);
        Ok(solutions.into_iter().next())
    }

    /// One node of the search: `state` reached via `prefix`, with `path`
    /// holding every state on the branch so far. Each recursive call gets
    /// its own copies of path and prefix, so sibling branches never alias.
    #[allow(clippy::too_many_arguments)]
    fn explore(
        &self,
        task: &PlanningTask,
        universe: &[Symbol],
        state: WorldState,
        path: Vec<WorldState>,
        prefix: Vec<GroundAction>,
        solutions: &mut Vec<Plan>,
        statistics: &mut SearchStatistics,
    ) -> Result<(), PlanningError> {
        if task.goal().is_satisfied(&state) {
            debug!(length = prefix.len(), "solution found");
            statistics.increment_solutions_found();
            solutions.push(Plan::new(prefix));
            return Ok(());
        }

        // Prune branches that revisit a state already on this path; this is
        // what keeps reversible actions from recursing forever.
        if path.contains(&state) {
            statistics.increment_pruned_cycles();
            return Ok(());
        }

        if let Some(max_depth) = self.limits.max_depth {
            if prefix.len() >= max_depth {
                return Ok(());
            }
        }
        if let Some(max_expanded) = self.limits.max_expanded_nodes {
            if statistics.expanded_nodes() >= max_expanded {
                return Ok(());
            }
        }

        statistics.increment_expanded_nodes();
        let mut path = path;
        path.push(state.clone());

        for (schema_index, scheme) in task.schemes().iter().enumerate() {
            for symbols in symbol_tuples(scheme.arity(), universe)? {
                if !scheme.can_apply(&symbols, &state)? {
                    continue;
                }
                statistics.increment_generated_actions();

                let successor = scheme.apply(&symbols, &state)?;
                let mut next_prefix = prefix.clone();
                next_prefix.push(GroundAction::new(schema_index, symbols.iter().copied()));

                self.explore(
                    task,
                    universe,
                    successor,
                    path.clone(),
                    next_prefix,
                    solutions,
                    statistics,
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::gift_errand_task;
    use crate::strips::fact::Fact;
    use crate::strips::goal::Goal;
    use crate::strips::predicate::PredicateType;

    fn sym(name: &str) -> Symbol {
        Symbol::new(name)
    }

    #[test]
    fn symbol_tuples_enumerates_with_repetition() {
        let universe = [sym("Father"), sym("Home"), sym("Postoffice")];

        assert_eq!(symbol_tuples(1, &universe).unwrap().len(), 3);
        assert_eq!(symbol_tuples(2, &universe).unwrap().len(), 9);
        assert_eq!(symbol_tuples(3, &universe).unwrap().len(), 27);

        let pairs = symbol_tuples(2, &universe).unwrap();
        assert_eq!(pairs[0].as_slice(), [sym("Father"), sym("Father")]);
        assert_eq!(pairs[1].as_slice(), [sym("Father"), sym("Home")]);
        assert_eq!(pairs[8].as_slice(), [sym("Postoffice"), sym("Postoffice")]);
    }

    #[test]
    fn zero_arity_grounding_is_rejected() {
        assert!(matches!(
            symbol_tuples(0, &[sym("Father")]),
            Err(PlanningError::ZeroArityGrounding)
        ));
    }

    #[test]
    fn shortest_gift_errand_plan_has_four_steps() {
        let task = gift_errand_task();
        let plan = Solver::new().get_best_solution(&task).unwrap().unwrap();

        assert_eq!(plan.len(), 4);
        assert_eq!(
            plan.to_string(&task),
            "Go(Father, Home, Postoffice)\n\
             PickUp(Father, Present, Postoffice)\n\
             Go(Father, Postoffice, Home)\n\
             Wrap(Father, Present)"
        );
    }

    #[test]
    fn replaying_the_solution_reaches_the_goal() {
        let task = gift_errand_task();
        let plan = Solver::new().get_best_solution(&task).unwrap().unwrap();

        let mut state = task.start().clone();
        for action in plan.steps() {
            let scheme = &task.schemes()[action.schema_index];
            assert!(scheme.can_apply(&action.symbols, &state).unwrap());
            state = scheme.apply(&action.symbols, &state).unwrap();
        }

        assert!(task.goal().is_satisfied(&state));
    }

    #[test]
    fn unreachable_goal_reports_no_solution() {
        let base = gift_errand_task();
        // Home is never declared an object, so it can never be wrapped.
        let task = PlanningTask::new(
            base.schemes().to_vec(),
            base.start().clone(),
            Goal::new([Fact::new(PredicateType::new("Wrapped", 1), [sym("Home")])]),
        );

        assert_eq!(Solver::new().get_best_solution(&task).unwrap(), None);
    }

    #[test]
    fn satisfied_start_state_yields_the_empty_plan() {
        let base = gift_errand_task();
        let task = PlanningTask::new(
            base.schemes().to_vec(),
            base.start().clone(),
            Goal::new([Fact::new(
                PredicateType::new("At", 2),
                [sym("Father"), sym("Home")],
            )]),
        );

        let plan = Solver::new().get_best_solution(&task).unwrap().unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn depth_limit_prunes_the_search() {
        let task = gift_errand_task();
        let solver = Solver::with_limits(SearchLimits {
            max_depth: Some(3),
            max_expanded_nodes: None,
        });

        assert_eq!(solver.get_best_solution(&task).unwrap(), None);
    }

    #[test]
    fn node_limit_prunes_the_search() {
        let task = gift_errand_task();
        let solver = Solver::with_limits(SearchLimits {
            max_depth: None,
            max_expanded_nodes: Some(0),
        });

        assert_eq!(solver.get_best_solution(&task).unwrap(), None);
    }

    #[test]
    fn deep_enough_depth_limit_still_finds_the_plan() {
        let task = gift_errand_task();
        let solver = Solver::with_limits(SearchLimits {
            max_depth: Some(4),
            max_expanded_nodes: None,
        });

        let plan = solver.get_best_solution(&task).unwrap().unwrap();
        assert_eq!(plan.len(), 4);
    }
}
