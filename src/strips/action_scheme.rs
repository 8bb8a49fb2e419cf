use crate::strips::error::PlanningError;
use crate::strips::fact::Fact;
use crate::strips::predicate::{Binding, SchemaPredicate};
use crate::strips::state::WorldState;
use crate::strips::symbol::Symbol;

/// A parameterized action: an identifying predicate naming the action and
/// its variables, the preconditions that gate it and the effects it causes.
/// Grounding the variables with concrete symbols turns the scheme into one
/// executable action instance.
///
/// Schemes are defined once per domain and never mutated. Every variable
/// referenced by a precondition or effect must be declared by the
/// signature; this is validated lazily when the scheme is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionScheme {
    signature: SchemaPredicate,
    preconditions: Vec<SchemaPredicate>,
    effects: Vec<SchemaPredicate>,
}

impl ActionScheme {
    pub fn new(
        signature: SchemaPredicate,
        preconditions: Vec<SchemaPredicate>,
        effects: Vec<SchemaPredicate>,
    ) -> Self {
        Self {
            signature,
            preconditions,
            effects,
        }
    }

    pub fn name(&self) -> &'static str {
        self.signature.ty().name()
    }

    /// Number of symbols a grounding of this scheme takes.
    pub fn arity(&self) -> usize {
        self.signature.variables().len()
    }

    pub fn signature(&self) -> &SchemaPredicate {
        &self.signature
    }

    pub fn preconditions(&self) -> &[SchemaPredicate] {
        &self.preconditions
    }

    pub fn effects(&self) -> &[SchemaPredicate] {
        &self.effects
    }

    /// Zips the signature's variables with `symbols` positionally.
    fn binding(&self, symbols: &[Symbol]) -> Result<Binding, PlanningError> {
        if symbols.len() != self.arity() {
            return Err(PlanningError::ArityMismatch {
                scheme: self.name().to_owned(),
                expected: self.arity(),
                found: symbols.len(),
            });
        }

        Ok(self
            .signature
            .variables()
            .iter()
            .copied()
            .zip(symbols.iter().copied())
            .collect())
    }

    /// Checks the scheme's own consistency: the signature's variable count
    /// matches its type's arity, and every precondition and effect only
    /// uses declared variables with the right count for its own type.
    pub fn validate(&self) -> Result<(), PlanningError> {
        if self.signature.variables().len() != self.signature.ty().arity() {
            return Err(PlanningError::InvalidSchemeDefinition {
                predicate: self.signature.ty().to_string(),
                detail: format!(
                    "signature declares {} variables, expected {}",
                    self.signature.variables().len(),
                    self.signature.ty().arity()
                ),
            });
        }

        for predicate in self.preconditions.iter().chain(self.effects.iter()) {
            if predicate.variables().len() != predicate.ty().arity() {
                return Err(PlanningError::InvalidSchemeDefinition {
                    predicate: predicate.ty().to_string(),
                    detail: format!(
                        "variable list has length {}, expected {}",
                        predicate.variables().len(),
                        predicate.ty().arity()
                    ),
                });
            }
            for variable in predicate.variables() {
                if !self.signature.variables().contains(variable) {
                    return Err(PlanningError::InvalidSchemeDefinition {
                        predicate: predicate.ty().to_string(),
                        detail: format!(
                            "variable {} is not declared by the signature of {}",
                            variable,
                            self.name()
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    /// Whether the action grounded with `symbols` is legal in `state`: each
    /// precondition, grounded through the binding, must agree with the
    /// state. A precondition is satisfied iff its polarity matches whether
    /// a fact with the same `(type, symbols)` and polarity exists. States
    /// never hold negative facts, so a negative precondition never finds a
    /// match and is always satisfied. No side effects; an action without
    /// preconditions is always applicable.
    pub fn can_apply(&self, symbols: &[Symbol], state: &WorldState) -> Result<bool, PlanningError> {
        let binding = self.binding(symbols)?;

        for precondition in &self.preconditions {
            let candidate = precondition.ground(&binding)?;
            let found = state
                .match_fact(candidate.ty(), candidate.symbols(), candidate.polarity())?
                .is_some();

            if precondition.polarity().is_positive() != found {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Computes the successor state of executing this action grounded with
    /// `symbols` in `state`. The input state must be positive-only and must
    /// satisfy the preconditions; the scheme itself is re-validated here.
    ///
    /// Frame resolution: every state fact whose `(type, symbols)` pattern
    /// is not contradicted by an opposite-polarity effect passes through
    /// unchanged; grounded effects are added on top; negative outcomes
    /// represent deletion and are dropped rather than stored, so the
    /// successor is positive-only again. Pure function, the input state is
    /// untouched.
    pub fn apply(&self, symbols: &[Symbol], state: &WorldState) -> Result<WorldState, PlanningError> {
        self.validate()?;
        let binding = self.binding(symbols)?;

        if let Some(fact) = state.first_negative_fact() {
            return Err(PlanningError::NegativeFactInvariantViolation {
                fact: fact.to_string(),
            });
        }

        if !self.can_apply(symbols, state)? {
            return Err(PlanningError::PreconditionNotMet {
                action: self.render_call(symbols),
            });
        }

        // Ground every effect, reusing the existing fact when the state
        // already holds one with the same pattern and polarity.
        let mut effect_facts: Vec<Fact> = Vec::with_capacity(self.effects.len());
        for effect in &self.effects {
            let target = effect.ground(&binding)?;
            let produced =
                match state.match_fact(target.ty(), target.symbols(), target.polarity())? {
                    Some(existing) => existing.clone(),
                    None => target,
                };
            effect_facts.push(produced);
        }

        let untouched: Vec<Fact> = state
            .facts()
            .filter(|fact| {
                !effect_facts.iter().any(|effect| {
                    effect.same_pattern(fact.ty(), fact.symbols())
                        && effect.polarity() != fact.polarity()
                })
            })
            .cloned()
            .collect();

        Ok(untouched
            .into_iter()
            .chain(effect_facts)
            .filter(Fact::is_positive)
            .collect())
    }

    /// Renders a grounded call of this scheme, e.g. `Go(Father, Home, Postoffice)`.
    pub fn render_call(&self, symbols: &[Symbol]) -> String {
        format!(
            "{}({})",
            self.name(),
            symbols
                .iter()
                .map(Symbol::name)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
