//! Substitution: mapping variables to terms, applied across terms and formulas.

use std::collections::{HashMap, HashSet};

use crate::syntax::{Atom, Constant, Formula, Term, Var};

/// A substitution mapping variables to terms.
///
/// During grounding every binding maps a schema parameter to a constant drawn
/// from its sort's domain, but the substitution itself accepts any term.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    bindings: HashMap<Var, Term>,
}

impl Substitution {
    /// Create an empty substitution (identity).
    pub fn empty() -> Self {
        Substitution {
            bindings: HashMap::new(),
        }
    }

    /// Create a substitution with a single binding.
    pub fn singleton(var: Var, term: impl Into<Term>) -> Self {
        let mut subst = Substitution::empty();
        subst.bind(var, term);
        subst
    }

    /// Pair up variables and constants position by position.
    pub fn from_pairs<'a>(
        vars: impl IntoIterator<Item = &'a Var>,
        values: impl IntoIterator<Item = &'a Constant>,
    ) -> Self {
        let bindings = vars
            .into_iter()
            .cloned()
            .zip(values.into_iter().cloned().map(Term::Constant))
            .collect();
        Substitution { bindings }
    }

    /// Add a binding to this substitution.
    pub fn bind(&mut self, var: Var, term: impl Into<Term>) {
        self.bindings.insert(var, term.into());
    }

    /// Look up a variable in this substitution.
    pub fn lookup(&self, var: &Var) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// A copy of this substitution without a binding for `var`.
    ///
    /// Used when descending under a quantifier that rebinds `var`.
    pub fn without(&self, var: &Var) -> Substitution {
        let mut bindings = self.bindings.clone();
        bindings.remove(var);
        Substitution { bindings }
    }

    pub fn domain(&self) -> HashSet<&Var> {
        self.bindings.keys().collect()
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&Var, &Term)> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Apply this substitution to a term.
    pub fn apply_to_term(&self, term: &Term) -> Term {
        match term {
            Term::Var(var) => match self.bindings.get(var) {
                Some(t) => t.clone(),
                None => term.clone(),
            },
            Term::Constant(_) => term.clone(),
            Term::App(fn_sym, args) => {
                let new_args: Vec<Term> = args.iter().map(|arg| self.apply_to_term(arg)).collect();
                Term::App(fn_sym.clone(), new_args)
            }
        }
    }
}

/// Tree rewriting and free-variable collection, implemented once per node kind.
pub trait Substitute: Sized {
    /// Return a copy with every free occurrence of a bound variable replaced.
    fn apply_subst(&self, subst: &Substitution) -> Self;

    /// Variables occurring free in this node.
    fn free_variables(&self) -> HashSet<Var>;

    fn is_ground(&self) -> bool {
        self.free_variables().is_empty()
    }
}

impl Substitute for Term {
    fn apply_subst(&self, subst: &Substitution) -> Self {
        subst.apply_to_term(self)
    }

    fn free_variables(&self) -> HashSet<Var> {
        self.variables()
    }

    fn is_ground(&self) -> bool {
        Term::is_ground(self)
    }
}

impl Substitute for Atom {
    fn apply_subst(&self, subst: &Substitution) -> Self {
        Atom {
            predicate: self.predicate.clone(),
            args: self.args.iter().map(|a| subst.apply_to_term(a)).collect(),
        }
    }

    fn free_variables(&self) -> HashSet<Var> {
        self.variables()
    }
}

impl Substitute for Formula {
    fn apply_subst(&self, subst: &Substitution) -> Self {
        match self {
            Formula::Tautology | Formula::Contradiction => self.clone(),
            Formula::Atom(atom) => Formula::Atom(atom.apply_subst(subst)),
            Formula::Not(inner) => Formula::negation(inner.apply_subst(subst)),
            Formula::And(l, r) => Formula::and(l.apply_subst(subst), r.apply_subst(subst)),
            Formula::Or(l, r) => Formula::or(l.apply_subst(subst), r.apply_subst(subst)),
            Formula::Implies(l, r) => {
                Formula::implies(l.apply_subst(subst), r.apply_subst(subst))
            }
            Formula::Forall(v, body) => {
                Formula::forall(v.clone(), body.apply_subst(&subst.without(v)))
            }
            Formula::Exists(v, body) => {
                Formula::exists(v.clone(), body.apply_subst(&subst.without(v)))
            }
        }
    }

    fn free_variables(&self) -> HashSet<Var> {
        Formula::free_variables(self)
    }
}

impl<T: Substitute> Substitute for Vec<T> {
    fn apply_subst(&self, subst: &Substitution) -> Self {
        self.iter().map(|x| x.apply_subst(subst)).collect()
    }

    fn free_variables(&self) -> HashSet<Var> {
        self.iter().flat_map(|x| x.free_variables()).collect()
    }
}
