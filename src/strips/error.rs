use thiserror::Error;

/// Fatal planning errors. Every variant signals a programming or modeling
/// bug, never a search outcome: an exhausted search reports `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    /// A symbol tuple was grounded against a scheme with a different arity.
    #[error("action {scheme} expects {expected} symbols, got {found}")]
    ArityMismatch {
        scheme: String,
        expected: usize,
        found: usize,
    },

    /// A scheme references an undeclared variable, or a variable list does
    /// not match its predicate type's arity.
    #[error("invalid scheme definition for {predicate}: {detail}")]
    InvalidSchemeDefinition { predicate: String, detail: String },

    /// `apply` was invoked on a state that does not satisfy the scheme's
    /// preconditions. The solver always gates `apply` behind `can_apply`.
    #[error("preconditions of {action} do not hold in the given state")]
    PreconditionNotMet { action: String },

    /// `apply` was invoked on a state containing a negative fact. States
    /// only ever hold positive facts; this means an earlier apply was buggy.
    #[error("state contains the negative fact {fact}")]
    NegativeFactInvariantViolation { fact: String },

    /// More than one state fact matched a single `(type, symbols)` pattern.
    #[error("{count} facts match the pattern {pattern}")]
    AmbiguousFact { pattern: String, count: usize },

    /// Groundings of length zero were requested.
    #[error("cannot enumerate symbol tuples of length zero")]
    ZeroArityGrounding,
}
