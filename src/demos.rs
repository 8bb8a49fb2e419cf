//! Hardcoded demo domains, shared by the `planner` binary and the tests.
//!
//! Both describe the same errand: a father is at home, a present is waiting
//! at the post office, and the goal is to be back home holding the wrapped
//! present. The STRIPS rendition grounds parameterized schemes over
//! symbols; the graph rendition spells out every world state by hand.

use crate::graph::{
    GraphAction, GraphPlanningTask, GraphState, Transition, TransitionSystem,
};
use crate::strips::{
    ActionScheme, Fact, Goal, PlanningTask, PredicateType, SchemaPredicate, Symbol, WorldState,
};

/// The gift errand as a STRIPS task.
///
/// The `¬Has` and `¬Wrapped` preconditions are carried as written in the
/// domain even though states never hold negative facts, which makes them
/// vacuously satisfied; see [`crate::strips::ActionScheme::can_apply`].
pub fn gift_errand_task() -> PlanningTask {
    let father = Symbol::new("Father");
    let present = Symbol::new("Present");
    let home = Symbol::new("Home");
    let postoffice = Symbol::new("Postoffice");

    let at = PredicateType::new("At", 2);
    let has = PredicateType::new("Has", 2);
    let wrapped = PredicateType::new("Wrapped", 1);
    let is_agent = PredicateType::new("IsAgent", 1);
    let is_location = PredicateType::new("IsLocation", 1);
    let is_object = PredicateType::new("IsObject", 1);

    let go = ActionScheme::new(
        SchemaPredicate::positive(PredicateType::new("Go", 3), &["agt", "from", "to"]),
        vec![
            SchemaPredicate::positive(at, &["agt", "from"]),
            SchemaPredicate::positive(is_agent, &["agt"]),
            SchemaPredicate::positive(is_location, &["from"]),
            SchemaPredicate::positive(is_location, &["to"]),
        ],
        vec![
            SchemaPredicate::positive(at, &["agt", "to"]),
            SchemaPredicate::negative(at, &["agt", "from"]),
        ],
    );

    let pick_up = ActionScheme::new(
        SchemaPredicate::positive(PredicateType::new("PickUp", 3), &["agt", "obj", "from"]),
        vec![
            SchemaPredicate::positive(at, &["agt", "from"]),
            SchemaPredicate::positive(at, &["obj", "from"]),
            SchemaPredicate::negative(has, &["agt", "obj"]),
            SchemaPredicate::positive(is_agent, &["agt"]),
            SchemaPredicate::positive(is_object, &["obj"]),
            SchemaPredicate::positive(is_location, &["from"]),
        ],
        vec![
            SchemaPredicate::positive(has, &["agt", "obj"]),
            SchemaPredicate::negative(has, &["obj", "from"]),
        ],
    );

    let wrap = ActionScheme::new(
        SchemaPredicate::positive(PredicateType::new("Wrap", 2), &["agt", "obj"]),
        vec![
            SchemaPredicate::positive(has, &["agt", "obj"]),
            SchemaPredicate::negative(wrapped, &["obj"]),
            SchemaPredicate::positive(is_agent, &["agt"]),
            SchemaPredicate::positive(is_object, &["obj"]),
        ],
        vec![SchemaPredicate::positive(wrapped, &["obj"])],
    );

    let start = WorldState::new([
        Fact::new(at, [father, home]),
        Fact::new(at, [present, postoffice]),
        Fact::new(is_agent, [father]),
        Fact::new(is_location, [home]),
        Fact::new(is_location, [postoffice]),
        Fact::new(is_object, [present]),
    ]);

    let goal = Goal::new([
        Fact::new(at, [father, home]),
        Fact::new(wrapped, [present]),
        Fact::new(has, [father, present]),
    ]);

    PlanningTask::new(vec![go, pick_up, wrap], start, goal)
}

/// The gift errand as an explicit transition system: six hand-enumerated
/// world states, four actions and every legal edge between them (including
/// the self-loops of actions that change nothing).
pub fn gift_errand_graph_task() -> GraphPlanningTask {
    let go_to_po = GraphAction::new("Go to PO");
    let go_home = GraphAction::new("Go home");
    let pick_up_present = GraphAction::new("Pick up present");
    let wrap_present = GraphAction::new("Wrap present");

    let s1 = GraphState::new("At home, present at PO, present unwrapped");
    let s2 = GraphState::new("At PO, present at PO, present unwrapped");
    let s3 = GraphState::new("At PO, got present, present unwrapped");
    let s4 = GraphState::new("At home, got present, present unwrapped");
    let s5 = GraphState::new("At home, got present, present wrapped");
    let s6 = GraphState::new("At PO, got present, present wrapped");

    let transitions = vec![
        Transition::new(s1, s1, go_home),
        Transition::new(s1, s2, go_to_po),
        Transition::new(s2, s2, go_to_po),
        Transition::new(s2, s1, go_home),
        Transition::new(s2, s3, pick_up_present),
        Transition::new(s3, s3, go_to_po),
        Transition::new(s3, s4, go_home),
        Transition::new(s3, s6, wrap_present),
        Transition::new(s4, s4, go_home),
        Transition::new(s4, s3, go_to_po),
        Transition::new(s4, s5, wrap_present),
        Transition::new(s5, s5, go_home),
        Transition::new(s5, s6, go_to_po),
        Transition::new(s6, s6, go_to_po),
        Transition::new(s6, s5, go_home),
    ];

    let system = TransitionSystem::new(
        vec![s1, s2, s3, s4, s5, s6],
        vec![go_to_po, go_home, pick_up_present, wrap_present],
        transitions,
    );

    GraphPlanningTask::new(system, s1, vec![s5])
}
