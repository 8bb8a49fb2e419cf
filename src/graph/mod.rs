//! The explicit-state-graph planner: a finite set of named states with
//! hand-declared transition edges, searched by the same backtracking style
//! as the STRIPS solver but with no grounding and no frame problem. States
//! and actions are plain named values; only identity and equality matter.

use internment::Intern;
use std::fmt::{self, Debug, Display, Formatter};
use thiserror::Error;
use tracing::debug;

/// A named world state of the transition system.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphState {
    name: Intern<String>,
}

impl GraphState {
    pub fn new(name: &str) -> Self {
        Self {
            name: Intern::new(name.to_owned()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name.as_ref()
    }
}

impl Display for GraphState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Debug for GraphState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "GraphState({})", self.name())
    }
}

/// A named action labelling transition edges.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphAction {
    name: Intern<String>,
}

impl GraphAction {
    pub fn new(name: &str) -> Self {
        Self {
            name: Intern::new(name.to_owned()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name.as_ref()
    }
}

impl Display for GraphAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Debug for GraphAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "GraphAction({})", self.name())
    }
}

/// One declared edge: executing `action` in `from` leads to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: GraphState,
    pub to: GraphState,
    pub action: GraphAction,
}

impl Transition {
    pub fn new(from: GraphState, to: GraphState, action: GraphAction) -> Self {
        Self { from, to, action }
    }
}

/// The domain: states, actions and the declared edges between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionSystem {
    states: Vec<GraphState>,
    actions: Vec<GraphAction>,
    transitions: Vec<Transition>,
}

impl TransitionSystem {
    pub fn new(
        states: Vec<GraphState>,
        actions: Vec<GraphAction>,
        transitions: Vec<Transition>,
    ) -> Self {
        Self {
            states,
            actions,
            transitions,
        }
    }

    pub fn states(&self) -> &[GraphState] {
        &self.states
    }

    pub fn actions(&self) -> &[GraphAction] {
        &self.actions
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn transitions_from(&self, state: GraphState) -> impl Iterator<Item = &Transition> {
        self.transitions
            .iter()
            .filter(move |transition| transition.from == state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("no transition for action {action} in state {state}")]
    NoTransition { state: String, action: String },

    #[error("{count} transitions for action {action} in state {state}, expected exactly one")]
    AmbiguousTransition {
        state: String,
        action: String,
        count: usize,
    },
}

/// The planning problem: a transition system, a start state and the set of
/// states that count as goals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPlanningTask {
    system: TransitionSystem,
    start: GraphState,
    goal_states: Vec<GraphState>,
}

impl GraphPlanningTask {
    pub fn new(system: TransitionSystem, start: GraphState, goal_states: Vec<GraphState>) -> Self {
        Self {
            system,
            start,
            goal_states,
        }
    }

    pub fn system(&self) -> &TransitionSystem {
        &self.system
    }

    pub fn start(&self) -> GraphState {
        self.start
    }

    pub fn goal_states(&self) -> &[GraphState] {
        &self.goal_states
    }
}

/// Backtracking solver over declared edges. Enumerates every path that does
/// not revisit a state, then picks the shortest goal-reaching action
/// sequence; ties go to the first discovered in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphSolver;

impl GraphSolver {
    pub fn new() -> Self {
        Self
    }

    pub fn get_best_solution(&self, task: &GraphPlanningTask) -> Option<Vec<GraphAction>> {
        if task.goal_states().contains(&task.start()) {
            return Some(vec![]);
        }

        let mut solutions: Vec<Vec<GraphAction>> = Vec::new();
        self.explore(task, task.start(), vec![task.start()], vec![], &mut solutions);
        debug!(solutions_found = solutions.len());

        solutions.sort_by_key(Vec::len);
        solutions.into_iter().next()
    }

    fn explore(
        &self,
        task: &GraphPlanningTask,
        current: GraphState,
        visited: Vec<GraphState>,
        actions_so_far: Vec<GraphAction>,
        solutions: &mut Vec<Vec<GraphAction>>,
    ) {
        for transition in task.system().transitions_from(current) {
            if visited.contains(&transition.to) {
                continue;
            }

            let mut next_actions = actions_so_far.clone();
            next_actions.push(transition.action);

            if task.goal_states().contains(&transition.to) {
                solutions.push(next_actions);
                continue;
            }

            let mut next_visited = visited.clone();
            next_visited.push(transition.to);
            self.explore(task, transition.to, next_visited, next_actions, solutions);
        }
    }

    /// Replays a single action: exactly one edge must match `(state, action)`.
    pub fn apply_transition(
        &self,
        system: &TransitionSystem,
        action: GraphAction,
        state: GraphState,
    ) -> Result<GraphState, TransitionError> {
        let matching: Vec<&Transition> = system
            .transitions_from(state)
            .filter(|transition| transition.action == action)
            .collect();

        match matching.as_slice() {
            [transition] => Ok(transition.to),
            [] => Err(TransitionError::NoTransition {
                state: state.to_string(),
                action: action.to_string(),
            }),
            _ => Err(TransitionError::AmbiguousTransition {
                state: state.to_string(),
                action: action.to_string(),
                count: matching.len(),
            }),
        }
    }
}
