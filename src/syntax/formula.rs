//! First-order formulas over sorted atoms.

use std::collections::HashSet;
use std::fmt;

use super::signature::Predicate;
use super::term::{write_args, Term, Var};

/// A predicate application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom {
    pub predicate: Predicate,
    pub args: Vec<Term>,
}

impl Atom {
    pub fn new(predicate: &Predicate, args: Vec<Term>) -> Self {
        Atom {
            predicate: predicate.clone(),
            args,
        }
    }

    /// Collect all variables in this atom.
    pub fn variables(&self) -> HashSet<Var> {
        let mut set = HashSet::new();
        for arg in &self.args {
            arg.collect_variables(&mut set);
        }
        set
    }

    pub fn is_ground(&self) -> bool {
        self.args.iter().all(Term::is_ground)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.predicate.name())?;
        write_args(f, &self.args)
    }
}

/// A first-order formula.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Formula {
    #[default]
    Tautology,
    Contradiction,
    Atom(Atom),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Forall(Var, Box<Formula>),
    Exists(Var, Box<Formula>),
}

impl Formula {
    pub fn atom(predicate: &Predicate, args: Vec<Term>) -> Self {
        Formula::Atom(Atom::new(predicate, args))
    }

    pub fn negation(inner: Formula) -> Self {
        Formula::Not(Box::new(inner))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn forall(var: Var, body: Formula) -> Self {
        Formula::Forall(var, Box::new(body))
    }

    pub fn exists(var: Var, body: Formula) -> Self {
        Formula::Exists(var, Box::new(body))
    }

    /// Fold a list of conjuncts; the empty conjunction is `Tautology`.
    pub fn conjunction(conjuncts: impl IntoIterator<Item = Formula>) -> Self {
        conjuncts
            .into_iter()
            .reduce(Formula::and)
            .unwrap_or(Formula::Tautology)
    }

    /// Variables not captured by an enclosing quantifier.
    pub fn free_variables(&self) -> HashSet<Var> {
        let mut set = HashSet::new();
        self.collect_free_variables(&mut set);
        set
    }

    fn collect_free_variables(&self, acc: &mut HashSet<Var>) {
        match self {
            Formula::Tautology | Formula::Contradiction => {}
            Formula::Atom(atom) => {
                for arg in &atom.args {
                    arg.collect_variables(acc);
                }
            }
            Formula::Not(inner) => inner.collect_free_variables(acc),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) => {
                l.collect_free_variables(acc);
                r.collect_free_variables(acc);
            }
            Formula::Forall(v, body) | Formula::Exists(v, body) => {
                let mut inner = HashSet::new();
                body.collect_free_variables(&mut inner);
                inner.remove(v);
                acc.extend(inner);
            }
        }
    }
}

impl From<Atom> for Formula {
    fn from(atom: Atom) -> Self {
        Formula::Atom(atom)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Tautology => write!(f, "T"),
            Formula::Contradiction => write!(f, "F"),
            Formula::Atom(a) => write!(f, "{}", a),
            Formula::Not(inner) => write!(f, "not {}", inner),
            Formula::And(l, r) => write!(f, "({} and {})", l, r),
            Formula::Or(l, r) => write!(f, "({} or {})", l, r),
            Formula::Implies(l, r) => write!(f, "({} -> {})", l, r),
            Formula::Forall(v, body) => write!(f, "forall {} : {}", v, body),
            Formula::Exists(v, body) => write!(f, "exists {} : {}", v, body),
        }
    }
}
