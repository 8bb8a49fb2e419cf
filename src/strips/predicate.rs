use crate::strips::error::PlanningError;
use crate::strips::fact::Fact;
use crate::strips::symbol::{Symbol, SymbolTuple, Variable};
use internment::Intern;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};

/// A named relation schema with a fixed arity, e.g. `At/2`. Identity is the
/// `(name, arity)` pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PredicateType {
    name: Intern<String>,
    arity: usize,
}

impl PredicateType {
    pub fn new(name: &str, arity: usize) -> Self {
        debug_assert!(arity >= 1, "predicate types must have arity >= 1");
        Self {
            name: Intern::new(name.to_owned()),
            arity,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name.as_ref()
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl Display for PredicateType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.name(), self.arity)
    }
}

impl Debug for PredicateType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "PredicateType({}/{})", self.name(), self.arity)
    }
}

/// Whether a predicate states that a fact holds or that it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    #[inline(always)]
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Positive)
    }

    #[inline(always)]
    pub fn opposite(&self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// The substitution mapping an action scheme's variables to concrete
/// symbols for one invocation. Built by positional zip, used once, dropped.
pub type Binding = HashMap<Variable, Symbol>;

/// A [`PredicateType`] applied to an ordered list of variable names, with a
/// polarity. Schema predicates make up an action scheme's signature,
/// preconditions and effects; grounding one through a [`Binding`] yields a
/// [`Fact`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaPredicate {
    ty: PredicateType,
    variables: Vec<Variable>,
    polarity: Polarity,
}

impl SchemaPredicate {
    pub fn new(ty: PredicateType, variables: Vec<Variable>, polarity: Polarity) -> Self {
        Self {
            ty,
            variables,
            polarity,
        }
    }

    pub fn positive(ty: PredicateType, variables: &[&str]) -> Self {
        Self::new(
            ty,
            variables.iter().copied().map(Variable::new).collect(),
            Polarity::Positive,
        )
    }

    pub fn negative(ty: PredicateType, variables: &[&str]) -> Self {
        Self::new(
            ty,
            variables.iter().copied().map(Variable::new).collect(),
            Polarity::Negative,
        )
    }

    pub fn ty(&self) -> PredicateType {
        self.ty
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Substitutes every variable through `binding` to produce a ground
    /// fact carrying this predicate's polarity. The variable list must
    /// match the type's declared arity and every variable must be bound;
    /// both are scheme-definition errors, checked lazily here.
    pub fn ground(&self, binding: &Binding) -> Result<Fact, PlanningError> {
        if self.variables.len() != self.ty.arity() {
            return Err(PlanningError::InvalidSchemeDefinition {
                predicate: self.ty.to_string(),
                detail: format!(
                    "variable list has length {}, expected {}",
                    self.variables.len(),
                    self.ty.arity()
                ),
            });
        }

        let mut symbols = SymbolTuple::new();
        for variable in &self.variables {
            match binding.get(variable) {
                Some(&symbol) => symbols.push(symbol),
                None => {
                    return Err(PlanningError::InvalidSchemeDefinition {
                        predicate: self.ty.to_string(),
                        detail: format!("variable {} is not bound", variable),
                    })
                }
            }
        }

        Ok(Fact::with_polarity(self.ty, symbols, self.polarity))
    }
}

impl Display for SchemaPredicate {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if !self.polarity.is_positive() {
            write!(f, "¬")?;
        }
        write!(
            f,
            "{}({})",
            self.ty.name(),
            self.variables
                .iter()
                .map(Variable::name)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(pairs: &[(&str, &str)]) -> Binding {
        pairs
            .iter()
            .map(|&(v, s)| (Variable::new(v), Symbol::new(s)))
            .collect()
    }

    #[test]
    fn predicate_type_identity_is_name_and_arity() {
        assert_eq!(PredicateType::new("At", 2), PredicateType::new("At", 2));
        assert_ne!(PredicateType::new("At", 2), PredicateType::new("At", 3));
        assert_ne!(PredicateType::new("At", 2), PredicateType::new("Has", 2));
        assert_eq!(PredicateType::new("At", 2).to_string(), "At/2");
    }

    #[test]
    fn ground_substitutes_positionally() {
        let at = PredicateType::new("At", 2);
        let schema = SchemaPredicate::positive(at, &["agt", "from"]);
        let fact = schema
            .ground(&binding(&[("agt", "Father"), ("from", "Home")]))
            .unwrap();

        assert_eq!(fact.ty(), at);
        assert_eq!(fact.symbols(), [Symbol::new("Father"), Symbol::new("Home")]);
        assert!(fact.is_positive());
    }

    #[test]
    fn ground_keeps_the_schema_polarity() {
        let at = PredicateType::new("At", 2);
        let schema = SchemaPredicate::negative(at, &["agt", "from"]);
        let fact = schema
            .ground(&binding(&[("agt", "Father"), ("from", "Home")]))
            .unwrap();

        assert!(!fact.is_positive());
    }

    #[test]
    fn ground_rejects_unbound_variables() {
        let at = PredicateType::new("At", 2);
        let schema = SchemaPredicate::positive(at, &["agt", "from"]);
        let result = schema.ground(&binding(&[("agt", "Father")]));

        assert!(matches!(
            result,
            Err(PlanningError::InvalidSchemeDefinition { .. })
        ));
    }

    #[test]
    fn ground_rejects_arity_mismatch_with_type() {
        let at = PredicateType::new("At", 2);
        let schema = SchemaPredicate::positive(at, &["agt"]);
        let result = schema.ground(&binding(&[("agt", "Father")]));

        assert!(matches!(
            result,
            Err(PlanningError::InvalidSchemeDefinition { .. })
        ));
    }
}
