use crate::strips::error::PlanningError;
use crate::strips::fact::Fact;
use crate::strips::predicate::{Polarity, PredicateType};
use crate::strips::symbol::Symbol;
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

/// The set of currently-true ground facts, under the closed-world
/// assumption: a fact not present is false. States are values: applying an
/// action builds a fresh state and never mutates the input, so the solver
/// can detect cycles by plain equality comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldState {
    facts: HashSet<Fact>,
}

impl WorldState {
    pub fn new(facts: impl IntoIterator<Item = Fact>) -> Self {
        Self {
            facts: facts.into_iter().collect(),
        }
    }

    pub fn facts(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    /// The symbol universe of this state: every symbol appearing in any
    /// fact, sorted by name and deduplicated. A pure function of the state;
    /// there is no process-wide symbol registry.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self
            .facts
            .iter()
            .flat_map(|fact| fact.symbols().iter().copied())
            .collect();
        symbols.sort();
        symbols.dedup();
        symbols
    }

    /// Any negative fact in the state breaks the positivity invariant.
    pub fn first_negative_fact(&self) -> Option<&Fact> {
        self.facts.iter().find(|fact| !fact.is_positive())
    }

    /// Looks up the fact matching the `(type, symbols)` pattern. More than
    /// one pattern match means the state itself is inconsistent and is
    /// reported as [`PlanningError::AmbiguousFact`]. The single match is
    /// returned only when its polarity equals `polarity`.
    pub fn match_fact(
        &self,
        ty: PredicateType,
        symbols: &[Symbol],
        polarity: Polarity,
    ) -> Result<Option<&Fact>, PlanningError> {
        let mut matches = self.facts.iter().filter(|f| f.same_pattern(ty, symbols));

        let first = matches.next();
        let rest = matches.count();
        if rest > 0 {
            return Err(PlanningError::AmbiguousFact {
                pattern: format!(
                    "{}({})",
                    ty.name(),
                    symbols
                        .iter()
                        .map(Symbol::name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                count: rest + 1,
            });
        }

        Ok(first.filter(|f| f.polarity() == polarity))
    }
}

impl FromIterator<Fact> for WorldState {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Display for WorldState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut rendered: Vec<String> = self.facts.iter().map(Fact::to_string).collect();
        rendered.sort();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> PredicateType {
        PredicateType::new("At", 2)
    }

    fn father_home() -> Fact {
        Fact::new(at(), [Symbol::new("Father"), Symbol::new("Home")])
    }

    #[test]
    fn symbols_are_sorted_and_deduplicated() {
        let state = WorldState::new([
            father_home(),
            Fact::new(at(), [Symbol::new("Present"), Symbol::new("Home")]),
        ]);

        assert_eq!(
            state.symbols(),
            vec![
                Symbol::new("Father"),
                Symbol::new("Home"),
                Symbol::new("Present")
            ]
        );
    }

    #[test]
    fn equality_is_set_equality() {
        let a = WorldState::new([
            father_home(),
            Fact::new(at(), [Symbol::new("Present"), Symbol::new("Home")]),
        ]);
        let b = WorldState::new([
            Fact::new(at(), [Symbol::new("Present"), Symbol::new("Home")]),
            father_home(),
        ]);

        assert_eq!(a, b);
    }

    #[test]
    fn match_fact_requires_equal_polarity() {
        let state = WorldState::new([father_home()]);
        let symbols = [Symbol::new("Father"), Symbol::new("Home")];

        let positive = state.match_fact(at(), &symbols, Polarity::Positive).unwrap();
        assert_eq!(positive, Some(&father_home()));

        let negative = state.match_fact(at(), &symbols, Polarity::Negative).unwrap();
        assert_eq!(negative, None);
    }

    #[test]
    fn match_fact_misses_other_patterns() {
        let state = WorldState::new([father_home()]);
        let symbols = [Symbol::new("Father"), Symbol::new("Postoffice")];

        let result = state.match_fact(at(), &symbols, Polarity::Positive).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn two_polarities_of_one_pattern_are_ambiguous() {
        let fact = father_home();
        let negated = Fact::with_polarity(
            fact.ty(),
            fact.symbols().iter().copied(),
            Polarity::Negative,
        );
        let state = WorldState::new([fact, negated]);
        let symbols = [Symbol::new("Father"), Symbol::new("Home")];

        let result = state.match_fact(at(), &symbols, Polarity::Positive);
        assert!(matches!(
            result,
            Err(PlanningError::AmbiguousFact { count: 2, .. })
        ));
    }

    #[test]
    fn negative_fact_probe() {
        let healthy = WorldState::new([father_home()]);
        assert!(healthy.first_negative_fact().is_none());

        let corrupted = WorldState::new([Fact::with_polarity(
            at(),
            [Symbol::new("Father"), Symbol::new("Home")],
            Polarity::Negative,
        )]);
        assert!(corrupted.first_negative_fact().is_some());
    }
}
