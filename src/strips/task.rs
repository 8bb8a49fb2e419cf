use crate::strips::action_scheme::ActionScheme;
use crate::strips::goal::Goal;
use crate::strips::state::WorldState;

/// Bundles a planning problem: the domain's action schemes, the start world
/// and the goal description. Read-only during search. Scheme order is
/// significant: the solver expands schemes in declaration order, which is
/// part of its deterministic tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanningTask {
    schemes: Vec<ActionScheme>,
    start: WorldState,
    goal: Goal,
}

impl PlanningTask {
    pub fn new(schemes: Vec<ActionScheme>, start: WorldState, goal: Goal) -> Self {
        Self {
            schemes,
            start,
            goal,
        }
    }

    pub fn schemes(&self) -> &[ActionScheme] {
        &self.schemes
    }

    pub fn start(&self) -> &WorldState {
        &self.start
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }
}

#[cfg(test)]
mod tests {
    use crate::demos::gift_errand_task;

    #[test]
    fn gift_errand_task_shape() {
        let task = gift_errand_task();

        assert_eq!(task.schemes().len(), 3);
        assert_eq!(task.start().len(), 6);
        assert_eq!(task.goal().facts().len(), 3);
        assert!(!task.goal().is_satisfied(task.start()));
    }
}
