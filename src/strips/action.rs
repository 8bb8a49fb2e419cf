use crate::strips::symbol::{Symbol, SymbolTuple};
use crate::strips::task::PlanningTask;

/// One grounded step of a plan: an action scheme of the task plus the
/// symbol tuple it was instantiated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundAction {
    /// Index of the scheme in the task's scheme list.
    pub schema_index: usize,
    /// Symbols instantiating the scheme's variables, in signature order.
    pub symbols: SymbolTuple,
}

impl GroundAction {
    pub fn new(schema_index: usize, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            schema_index,
            symbols: symbols.into_iter().collect(),
        }
    }

    pub fn to_string(&self, task: &PlanningTask) -> String {
        task.schemes()[self.schema_index].render_call(&self.symbols)
    }
}
