use internment::Intern;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

/// Most predicates and action signatures take only a handful of arguments,
/// so symbol tuples are stored inline.
pub const TYPICAL_ARITY: usize = 4;

/// A tuple of [`Symbol`]s, as carried by ground facts and grounded actions.
pub type SymbolTuple = SmallVec<[Symbol; TYPICAL_ARITY]>;

/// An opaque named constant identifying a domain object, e.g. `Father`.
/// Symbols are interned: copies are cheap and equality is by name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    inner: Intern<String>,
}

impl Symbol {
    pub fn new(name: &str) -> Self {
        Self {
            inner: Intern::new(name.to_owned()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.as_ref()
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// This custom implementation hides the internment details from the user.
impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Symbol({})", self.name())
    }
}

/// A variable name used inside an action scheme, e.g. `agt`. Kept distinct
/// from [`Symbol`] so that schema-side names and ground objects can never be
/// mixed up in a binding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    inner: Intern<String>,
}

impl Variable {
    pub fn new(name: &str) -> Self {
        Self {
            inner: Intern::new(name.to_owned()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.as_ref()
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Debug for Variable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Variable({})", self.name())
    }
}
