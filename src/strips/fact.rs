use crate::strips::predicate::{Polarity, PredicateType};
use crate::strips::symbol::{Symbol, SymbolTuple};
use std::fmt::{self, Display, Formatter};

/// A [`PredicateType`] applied to concrete symbols: one unit of world
/// truth, e.g. `At(Father, Home)`. Facts held by a [`crate::strips::WorldState`]
/// are always positive; negative facts only occur transiently as grounded
/// deletion effects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact {
    ty: PredicateType,
    symbols: SymbolTuple,
    polarity: Polarity,
}

impl Fact {
    /// A positive fact, the common case.
    pub fn new(ty: PredicateType, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self::with_polarity(ty, symbols, Polarity::Positive)
    }

    pub fn with_polarity(
        ty: PredicateType,
        symbols: impl IntoIterator<Item = Symbol>,
        polarity: Polarity,
    ) -> Self {
        Self {
            ty,
            symbols: symbols.into_iter().collect(),
            polarity,
        }
    }

    pub fn ty(&self) -> PredicateType {
        self.ty
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    #[inline(always)]
    pub fn is_positive(&self) -> bool {
        self.polarity.is_positive()
    }

    /// True if `other` names the same `(type, symbols)` pair, regardless of
    /// polarity. This is the matching rule both precondition checking and
    /// effect application are built on.
    pub fn same_pattern(&self, ty: PredicateType, symbols: &[Symbol]) -> bool {
        self.ty == ty && self.symbols.as_slice() == symbols
    }
}

impl Display for Fact {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if !self.is_positive() {
            write!(f, "¬")?;
        }
        write!(
            f,
            "{}({})",
            self.ty.name(),
            self.symbols
                .iter()
                .map(Symbol::name)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_father_home() -> Fact {
        Fact::new(
            PredicateType::new("At", 2),
            [Symbol::new("Father"), Symbol::new("Home")],
        )
    }

    #[test]
    fn facts_are_positive_by_default() {
        assert!(at_father_home().is_positive());
    }

    #[test]
    fn equality_includes_polarity() {
        let positive = at_father_home();
        let negative = Fact::with_polarity(
            positive.ty(),
            positive.symbols().iter().copied(),
            Polarity::Negative,
        );

        assert_ne!(positive, negative);
        assert!(positive.same_pattern(negative.ty(), negative.symbols()));
    }

    #[test]
    fn pattern_match_requires_type_and_symbols() {
        let fact = at_father_home();
        let at = PredicateType::new("At", 2);
        let has = PredicateType::new("Has", 2);
        let father_home = [Symbol::new("Father"), Symbol::new("Home")];
        let father_po = [Symbol::new("Father"), Symbol::new("Postoffice")];

        assert!(fact.same_pattern(at, &father_home));
        assert!(!fact.same_pattern(has, &father_home));
        assert!(!fact.same_pattern(at, &father_po));
    }

    #[test]
    fn display_marks_negative_facts() {
        let fact = at_father_home();
        assert_eq!(fact.to_string(), "At(Father, Home)");

        let negated =
            Fact::with_polarity(fact.ty(), fact.symbols().iter().copied(), Polarity::Negative);
        assert_eq!(negated.to_string(), "¬At(Father, Home)");
    }
}
