//! Evaluation of ground terms and formulas in a model.

use super::error::ModelError;
use super::model::Model;
use crate::subst::{Substitute, Substitution};
use crate::syntax::{Constant, Formula, Term, Var};

impl Model {
    /// Denotation of a ground term.
    pub fn evaluate(&self, term: &Term) -> Result<Constant, ModelError> {
        match term {
            Term::Constant(c) => Ok(c.clone()),
            Term::Var(_) => Err(ModelError::NotGround(term.to_string())),
            Term::App(function, args) => {
                let point = args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.value(function, point)
            }
        }
    }

    /// Truth of a closed formula. Quantifiers range over the finite domain of
    /// the bound variable's sort.
    pub fn satisfies(&self, formula: &Formula) -> Result<bool, ModelError> {
        match formula {
            Formula::Tautology => Ok(true),
            Formula::Contradiction => Ok(false),
            Formula::Atom(atom) => {
                let point = atom
                    .args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.holds(&atom.predicate, point)
            }
            Formula::Not(inner) => Ok(!self.satisfies(inner)?),
            Formula::And(l, r) => Ok(self.satisfies(l)? && self.satisfies(r)?),
            Formula::Or(l, r) => Ok(self.satisfies(l)? || self.satisfies(r)?),
            Formula::Implies(l, r) => Ok(!self.satisfies(l)? || self.satisfies(r)?),
            Formula::Forall(var, body) => {
                for instance in self.instances(var, body)? {
                    if !self.satisfies(&instance)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Formula::Exists(var, body) => {
                for instance in self.instances(var, body)? {
                    if self.satisfies(&instance)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    fn instances(&self, var: &Var, body: &Formula) -> Result<Vec<Formula>, ModelError> {
        let domain = self.language().domain(var.sort())?;
        Ok(domain
            .into_iter()
            .map(|c| body.apply_subst(&Substitution::singleton(var.clone(), c)))
            .collect())
    }
}
