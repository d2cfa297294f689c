//! Enumeration of the substitutions that instantiate a schema's parameters.

use crate::subst::Substitution;
use crate::syntax::{Constant, Language, Term, Var};

use super::error::GroundingError;

/// The instantiation space of a parameter list.
///
/// `domains[i]` is the ordered domain of `variables[i]`; bindings are the
/// Cartesian product of the domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instantiation {
    /// Number of bindings (product of domain sizes, saturating).
    pub cardinality: u64,
    pub variables: Vec<Var>,
    pub domains: Vec<Vec<Constant>>,
}

/// Compute the instantiation space of `parameters`.
///
/// Constants contribute nothing; each distinct variable contributes its sort's
/// domain as one axis, in parameter order.
pub fn enumerate(language: &Language, parameters: &[Term]) -> Result<Instantiation, GroundingError> {
    let mut variables = Vec::new();
    let mut domains = Vec::new();
    let mut cardinality: u64 = 1;
    for param in parameters {
        match param {
            Term::Constant(_) => continue,
            Term::Var(var) => {
                if variables.contains(var) {
                    continue;
                }
                if language.is_builtin(var.sort()) {
                    return Err(GroundingError::UnableToGround {
                        term: var.to_string(),
                        reason: format!(
                            "term is of builtin sort '{}', domain is too large",
                            var.sort()
                        ),
                    });
                }
                let domain = language.domain(var.sort())?;
                cardinality = cardinality.saturating_mul(domain.len() as u64);
                variables.push(var.clone());
                domains.push(domain);
            }
            Term::App(..) => {
                return Err(GroundingError::UnableToGround {
                    term: param.to_string(),
                    reason: "grounding of nested compound parameters is not supported".to_string(),
                })
            }
        }
    }
    Ok(Instantiation {
        cardinality,
        variables,
        domains,
    })
}

impl Instantiation {
    /// Iterate over all bindings, varying the last variable fastest.
    pub fn bindings(&self) -> Bindings<'_> {
        Bindings {
            instantiation: self,
            odometer: vec![0; self.variables.len()],
            exhausted: self.domains.iter().any(Vec::is_empty),
        }
    }
}

/// Odometer walk over the Cartesian product of an [`Instantiation`].
#[derive(Debug, Clone)]
pub struct Bindings<'a> {
    instantiation: &'a Instantiation,
    odometer: Vec<usize>,
    exhausted: bool,
}

impl<'a> Iterator for Bindings<'a> {
    type Item = Substitution;

    fn next(&mut self) -> Option<Substitution> {
        if self.exhausted {
            return None;
        }
        let inst = self.instantiation;
        let values = self
            .odometer
            .iter()
            .zip(&inst.domains)
            .map(|(&i, domain)| &domain[i]);
        let subst = Substitution::from_pairs(&inst.variables, values);

        // Advance, carrying from the last position.
        self.exhausted = true;
        for pos in (0..self.odometer.len()).rev() {
            self.odometer[pos] += 1;
            if self.odometer[pos] < inst.domains[pos].len() {
                self.exhausted = false;
                break;
            }
            self.odometer[pos] = 0;
        }
        Some(subst)
    }
}
