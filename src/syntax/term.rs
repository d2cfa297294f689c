//! First-order terms: constants, variables and function applications.

use std::collections::HashSet;
use std::fmt;

use super::signature::Function;
use super::sort::{LanguageId, Sort, Value};

/// A constant: a concrete value tagged with its sort.
///
/// Equality and hashing are structural over (value, sort), so two constants
/// built independently from the same declaration are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Constant {
    value: Value,
    sort: Sort,
}

impl Constant {
    pub(crate) fn new(value: Value, sort: Sort) -> Self {
        Constant { value, sort }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    pub fn language(&self) -> LanguageId {
        self.sort.language()
    }

    /// The integer this constant denotes, if it is numeric.
    pub fn as_int(&self) -> Option<i64> {
        match self.value {
            Value::Int(i) => Some(i),
            Value::Symbol(_) => None,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A sorted variable. Variables are never bound to a value by themselves;
/// they are replaced by applying a substitution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var {
    name: String,
    sort: Sort,
}

impl Var {
    pub fn new(name: impl Into<String>, sort: Sort) -> Self {
        Var {
            name: name.into(),
            sort,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}

/// A first-order term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Constant(Constant),
    Var(Var),
    /// Compound term: f(t1, ..., tn)
    App(Function, Vec<Term>),
}

impl Term {
    /// Create a compound term.
    pub fn app(function: &Function, args: Vec<Term>) -> Self {
        Term::App(function.clone(), args)
    }

    /// The sort this term denotes an element of.
    pub fn sort(&self) -> &Sort {
        match self {
            Term::Constant(c) => c.sort(),
            Term::Var(v) => v.sort(),
            Term::App(f, _) => f.codomain(),
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Term::App(..))
    }

    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Term::Constant(c) => Some(c),
            _ => None,
        }
    }

    /// Collect all variables occurring in this term.
    pub fn variables(&self) -> HashSet<Var> {
        let mut set = HashSet::new();
        self.collect_variables(&mut set);
        set
    }

    pub(crate) fn collect_variables(&self, acc: &mut HashSet<Var>) {
        match self {
            Term::Constant(_) => {}
            Term::Var(v) => {
                acc.insert(v.clone());
            }
            Term::App(_, args) => {
                for arg in args {
                    arg.collect_variables(acc);
                }
            }
        }
    }

    /// Check if this term contains no variables.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Constant(_) => true,
            Term::Var(_) => false,
            Term::App(_, args) => args.iter().all(Term::is_ground),
        }
    }
}

impl From<Constant> for Term {
    fn from(c: Constant) -> Self {
        Term::Constant(c)
    }
}

impl From<&Constant> for Term {
    fn from(c: &Constant) -> Self {
        Term::Constant(c.clone())
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<&Var> for Term {
    fn from(v: &Var) -> Self {
        Term::Var(v.clone())
    }
}

pub(crate) fn write_args<T: fmt::Display>(f: &mut fmt::Formatter<'_>, args: &[T]) -> fmt::Result {
    write!(f, "(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    write!(f, ")")
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(c) => write!(f, "{}", c),
            Term::Var(v) => write!(f, "{}", v),
            Term::App(sym, args) => {
                write!(f, "{}", sym.name())?;
                write_args(f, args)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Language;

    fn setup() -> (Language, Sort, Function) {
        let mut lang = Language::new("terms");
        let block = lang.sort("block", None).unwrap();
        let int = lang.integer_sort();
        let weight = lang.function("weight", &[block.clone()], &int).unwrap();
        (lang, block, weight)
    }

    #[test]
    fn test_constant_equality_is_structural() {
        let (mut lang, block, _) = setup();
        let a = lang.constant("a", &block).unwrap();
        let again = lang.cast(&block, Value::from("a")).unwrap();
        assert_eq!(a, again);
    }

    #[test]
    fn test_app_sort_is_codomain() {
        let (mut lang, block, weight) = setup();
        let a = lang.constant("a", &block).unwrap();
        let t = Term::app(&weight, vec![a.into()]);
        assert_eq!(t.sort(), &lang.integer_sort());
        assert!(t.is_compound());
    }

    #[test]
    fn test_variables_nested_and_deduplicated() {
        let (lang, block, weight) = setup();
        let x = lang.variable("x", &block);
        let t = Term::app(&weight, vec![Term::app(&weight, vec![x.clone().into()])]);
        let vars = t.variables();
        assert_eq!(vars.len(), 1);
        assert!(vars.contains(&x));
        assert!(!t.is_ground());
    }

    #[test]
    fn test_constant_is_ground() {
        let (mut lang, block, _) = setup();
        let a: Term = lang.constant("a", &block).unwrap().into();
        assert!(a.is_ground());
        assert!(a.variables().is_empty());
    }

    #[test]
    fn test_display() {
        let (mut lang, block, weight) = setup();
        let a = lang.constant("a", &block).unwrap();
        let x = lang.variable("x", &block);
        assert_eq!(Term::app(&weight, vec![a.into()]).to_string(), "weight(a)");
        assert_eq!(Term::from(x).to_string(), "?x");
    }
}
