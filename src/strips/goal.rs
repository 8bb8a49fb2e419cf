use crate::strips::fact::Fact;
use crate::strips::state::WorldState;

/// The goal of a planning task: a set of positive facts that must all hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    facts: Vec<Fact>,
}

impl Goal {
    pub fn new(facts: impl IntoIterator<Item = Fact>) -> Self {
        Self {
            facts: facts.into_iter().collect(),
        }
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Subset test: every goal fact must be an element of the state. Extra
    /// facts in the state never block satisfaction.
    pub fn is_satisfied(&self, state: &WorldState) -> bool {
        self.facts.iter().all(|fact| state.contains(fact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strips::predicate::PredicateType;
    use crate::strips::symbol::Symbol;

    fn at(agent: &str, place: &str) -> Fact {
        Fact::new(
            PredicateType::new("At", 2),
            [Symbol::new(agent), Symbol::new(place)],
        )
    }

    #[test]
    fn satisfied_by_exact_state() {
        let goal = Goal::new([at("Father", "Home")]);
        let state = WorldState::new([at("Father", "Home")]);

        assert!(goal.is_satisfied(&state));
    }

    #[test]
    fn extra_facts_do_not_block() {
        let goal = Goal::new([at("Father", "Home")]);
        let state = WorldState::new([at("Father", "Home"), at("Present", "Postoffice")]);

        assert!(goal.is_satisfied(&state));
    }

    #[test]
    fn missing_fact_blocks() {
        let goal = Goal::new([at("Father", "Home"), at("Present", "Home")]);
        let state = WorldState::new([at("Father", "Home")]);

        assert!(!goal.is_satisfied(&state));
    }

    #[test]
    fn empty_goal_is_trivially_satisfied() {
        let goal = Goal::new([]);
        assert!(goal.is_satisfied(&WorldState::default()));
    }
}
