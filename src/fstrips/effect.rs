//! Action effects.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::subst::{Substitute, Substitution};
use crate::syntax::{Atom, Formula, Term, Var};

/// An effect whose structure was rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid effect '{effect}': {reason}")]
pub struct InvalidEffectError {
    pub effect: String,
    pub reason: String,
}

/// Direction of a choice effect's objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Optimization {
    Minimize,
    Maximize,
}

impl fmt::Display for Optimization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optimization::Minimize => write!(f, "minimize"),
            Optimization::Maximize => write!(f, "maximize"),
        }
    }
}

/// `lhs := rhs`, where `lhs` is a compound term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionalEffect {
    lhs: Term,
    rhs: Term,
    condition: Formula,
}

impl FunctionalEffect {
    pub fn lhs(&self) -> &Term {
        &self.lhs
    }

    pub fn rhs(&self) -> &Term {
        &self.rhs
    }

    pub fn condition(&self) -> &Formula {
        &self.condition
    }
}

/// Choose values for `variables` optimizing `objective` subject to `constraints`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChoiceEffect {
    kind: Optimization,
    objective: Term,
    variables: Vec<Term>,
    constraints: Formula,
}

impl ChoiceEffect {
    pub fn kind(&self) -> Optimization {
        self.kind
    }

    pub fn objective(&self) -> &Term {
        &self.objective
    }

    pub fn variables(&self) -> &[Term] {
        &self.variables
    }

    pub fn constraints(&self) -> &Formula {
        &self.constraints
    }
}

/// A state change produced by an action.
///
/// Every variant except `Universal` carries a guard formula; the effect only
/// applies in states where the guard holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Effect {
    Add {
        atom: Atom,
        condition: Formula,
    },
    Delete {
        atom: Atom,
        condition: Formula,
    },
    Functional(FunctionalEffect),
    Logical {
        formula: Formula,
        condition: Formula,
    },
    /// Opaque external computation reading `inputs` and writing `outputs`.
    Procedural {
        inputs: Vec<Term>,
        outputs: Vec<Term>,
    },
    Choice(ChoiceEffect),
    /// Sub-effects quantified over `variables`.
    Universal {
        variables: Vec<Var>,
        effects: Vec<Effect>,
    },
}

impl Effect {
    pub fn add(atom: Atom) -> Self {
        Effect::add_if(atom, Formula::Tautology)
    }

    pub fn add_if(atom: Atom, condition: Formula) -> Self {
        Effect::Add { atom, condition }
    }

    pub fn delete(atom: Atom) -> Self {
        Effect::delete_if(atom, Formula::Tautology)
    }

    pub fn delete_if(atom: Atom, condition: Formula) -> Self {
        Effect::Delete { atom, condition }
    }

    pub fn assign(lhs: Term, rhs: Term) -> Result<Self, InvalidEffectError> {
        Effect::assign_if(lhs, rhs, Formula::Tautology)
    }

    /// Functional assignment; the left-hand side must be a compound term.
    pub fn assign_if(lhs: Term, rhs: Term, condition: Formula) -> Result<Self, InvalidEffectError> {
        if !lhs.is_compound() {
            return Err(InvalidEffectError {
                effect: format!("{} := {}", lhs, rhs),
                reason: format!("left hand side '{}' needs to be a functional term", lhs),
            });
        }
        Ok(Effect::Functional(FunctionalEffect {
            lhs,
            rhs,
            condition,
        }))
    }

    pub fn logical(formula: Formula) -> Self {
        Effect::logical_if(formula, Formula::Tautology)
    }

    pub fn logical_if(formula: Formula, condition: Formula) -> Self {
        Effect::Logical { formula, condition }
    }

    /// Procedural effect; every input and output must be a compound term.
    pub fn procedural(
        inputs: Vec<Term>,
        outputs: Vec<Term>,
    ) -> Result<Self, InvalidEffectError> {
        let loose = inputs.iter().chain(&outputs).find(|t| !t.is_compound()).cloned();
        let effect = Effect::Procedural { inputs, outputs };
        match loose {
            Some(term) => Err(InvalidEffectError {
                effect: effect.to_string(),
                reason: format!("'{}' needs to be a functional term", term),
            }),
            None => Ok(effect),
        }
    }

    /// Choice effect; the objective must be a compound term.
    pub fn choice(
        kind: Optimization,
        objective: Term,
        variables: Vec<Term>,
        constraints: Formula,
    ) -> Result<Self, InvalidEffectError> {
        let effect = ChoiceEffect {
            kind,
            objective,
            variables,
            constraints,
        };
        let reason = if !effect.objective.is_compound() {
            format!("objective '{}' needs to be a functional term", effect.objective)
        } else if let Some(term) = effect.variables.iter().find(|t| !t.is_compound()) {
            format!("choice variable '{}' needs to be a functional term", term)
        } else {
            return Ok(Effect::Choice(effect));
        };
        Err(InvalidEffectError {
            effect: Effect::Choice(effect).to_string(),
            reason,
        })
    }

    pub fn universal(variables: Vec<Var>, effects: Vec<Effect>) -> Self {
        Effect::Universal { variables, effects }
    }

    /// The guard of this effect. Universal effects have none of their own.
    pub fn condition(&self) -> Option<&Formula> {
        static ALWAYS: Formula = Formula::Tautology;
        match self {
            Effect::Add { condition, .. }
            | Effect::Delete { condition, .. }
            | Effect::Logical { condition, .. } => Some(condition),
            Effect::Functional(eff) => Some(&eff.condition),
            Effect::Choice(eff) => Some(&eff.constraints),
            Effect::Procedural { .. } => Some(&ALWAYS),
            Effect::Universal { .. } => None,
        }
    }
}

impl Substitute for Effect {
    fn apply_subst(&self, subst: &Substitution) -> Self {
        match self {
            Effect::Add { atom, condition } => Effect::Add {
                atom: atom.apply_subst(subst),
                condition: condition.apply_subst(subst),
            },
            Effect::Delete { atom, condition } => Effect::Delete {
                atom: atom.apply_subst(subst),
                condition: condition.apply_subst(subst),
            },
            Effect::Functional(eff) => Effect::Functional(FunctionalEffect {
                lhs: eff.lhs.apply_subst(subst),
                rhs: eff.rhs.apply_subst(subst),
                condition: eff.condition.apply_subst(subst),
            }),
            Effect::Logical { formula, condition } => Effect::Logical {
                formula: formula.apply_subst(subst),
                condition: condition.apply_subst(subst),
            },
            Effect::Procedural { inputs, outputs } => Effect::Procedural {
                inputs: inputs.apply_subst(subst),
                outputs: outputs.apply_subst(subst),
            },
            Effect::Choice(eff) => Effect::Choice(ChoiceEffect {
                kind: eff.kind,
                objective: eff.objective.apply_subst(subst),
                variables: eff.variables.apply_subst(subst),
                constraints: eff.constraints.apply_subst(subst),
            }),
            Effect::Universal { variables, effects } => {
                let mut inner = subst.clone();
                for v in variables {
                    inner = inner.without(v);
                }
                Effect::Universal {
                    variables: variables.clone(),
                    effects: effects.apply_subst(&inner),
                }
            }
        }
    }

    fn free_variables(&self) -> HashSet<Var> {
        match self {
            Effect::Add { atom, condition } | Effect::Delete { atom, condition } => {
                let mut vars = atom.variables();
                vars.extend(condition.free_variables());
                vars
            }
            Effect::Functional(eff) => {
                let mut vars = eff.lhs.variables();
                vars.extend(eff.rhs.variables());
                vars.extend(eff.condition.free_variables());
                vars
            }
            Effect::Logical { formula, condition } => {
                let mut vars = formula.free_variables();
                vars.extend(condition.free_variables());
                vars
            }
            Effect::Procedural { inputs, outputs } => {
                let mut vars = inputs.free_variables();
                vars.extend(outputs.free_variables());
                vars
            }
            Effect::Choice(eff) => {
                let mut vars = eff.objective.variables();
                vars.extend(eff.variables.free_variables());
                vars.extend(eff.constraints.free_variables());
                vars
            }
            Effect::Universal { variables, effects } => {
                let mut vars = effects.free_variables();
                for v in variables {
                    vars.remove(v);
                }
                vars
            }
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Add { atom, condition } => write!(f, "({} -> ADD({}))", condition, atom),
            Effect::Delete { atom, condition } => write!(f, "({} -> DEL({}))", condition, atom),
            Effect::Functional(eff) => {
                write!(f, "({} -> {} := {})", eff.condition, eff.lhs, eff.rhs)
            }
            Effect::Logical { formula, condition } => write!(f, "({} -> {})", condition, formula),
            Effect::Procedural { inputs, outputs } => {
                write!(f, "(in: {}, out: {})", join(inputs), join(outputs))
            }
            Effect::Choice(eff) => write!(
                f,
                "({} {}, vars: {} subject to: {})",
                eff.kind,
                eff.objective,
                join(&eff.variables),
                eff.constraints
            ),
            Effect::Universal { variables, effects } => {
                write!(f, "forall ({}) : ({})", join(variables), join(effects))
            }
        }
    }
}
