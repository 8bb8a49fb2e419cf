//! The STRIPS planning core: world facts over interned symbols,
//! parameterized action schemes, frame-safe effect application and an
//! exhaustive backtracking solver.

mod action;
mod action_scheme;
mod error;
mod fact;
mod goal;
mod plan;
mod predicate;
mod solver;
mod state;
mod symbol;
mod task;

pub use action::GroundAction;
pub use action_scheme::ActionScheme;
pub use error::PlanningError;
pub use fact::Fact;
pub use goal::Goal;
pub use plan::Plan;
pub use predicate::{Binding, Polarity, PredicateType, SchemaPredicate};
pub use solver::{symbol_tuples, SearchLimits, SearchStatistics, Solver};
pub use state::WorldState;
pub use symbol::{Symbol, SymbolTuple, Variable, TYPICAL_ARITY};
pub use task::PlanningTask;
