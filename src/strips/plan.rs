//! A plan is a sequence of grounded actions that transforms the start state
//! into one satisfying the goal. This module provides the [`Plan`] struct,
//! which represents a discovered solution.

use crate::strips::action::GroundAction;
use crate::strips::task::PlanningTask;
use std::ops::Deref;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<GroundAction>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<GroundAction>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[GroundAction] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn to_string(&self, task: &PlanningTask) -> String {
        self.steps
            .iter()
            .map(|action| action.to_string(task))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl IntoIterator for Plan {
    type Item = GroundAction;
    type IntoIter = std::vec::IntoIter<GroundAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [GroundAction];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
