//! Actions: lifted schemas and their ground instances.

use std::fmt;

use crate::model::{Model, ModelError};
use crate::subst::Substitute;
use crate::syntax::{Formula, Term};

use super::effect::Effect;

/// An action with a precondition and an ordered list of effects.
///
/// A schema lists its parameters; each is either a constant (already bound)
/// or a variable (free). Ground actions have no parameters and contain no
/// free variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    pub name: String,
    pub parameters: Vec<Term>,
    pub precondition: Formula,
    pub effects: Vec<Effect>,
}

impl Action {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Term>,
        precondition: Formula,
        effects: Vec<Effect>,
    ) -> Self {
        Action {
            name: name.into(),
            parameters,
            precondition,
            effects,
        }
    }

    /// Check if the precondition and every effect are free of variables.
    pub fn is_ground(&self) -> bool {
        self.precondition.is_ground() && self.effects.iter().all(Substitute::is_ground)
    }

    /// Whether the precondition of this ground action holds in `model`.
    pub fn is_applicable(&self, model: &Model) -> Result<bool, ModelError> {
        model.satisfies(&self.precondition)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        crate::syntax::write_args(f, &self.parameters)?;
        write!(f, " pre: {}", self.precondition)?;
        for eff in &self.effects {
            write!(f, " {}", eff)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::syntax::{Atom, Language};

    #[test]
    fn test_is_applicable_evaluates_precondition() {
        let mut lang = Language::new("act");
        let block = lang.sort("block", None).unwrap();
        let clear = lang.predicate("clear", &[block.clone()]).unwrap();
        let a = lang.constant("a", &block).unwrap();
        let mut model = Model::new(Arc::new(lang));

        let pickup = Action::new(
            "pickup",
            vec![],
            Formula::atom(&clear, vec![a.clone().into()]),
            vec![Effect::delete(Atom::new(&clear, vec![a.clone().into()]))],
        );
        assert!(pickup.is_ground());
        assert!(!pickup.is_applicable(&model).unwrap());
        model.add(&clear, [&a]).unwrap();
        assert!(pickup.is_applicable(&model).unwrap());
    }

    #[test]
    fn test_schema_with_variables_is_not_ground() {
        let mut lang = Language::new("act");
        let block = lang.sort("block", None).unwrap();
        let clear = lang.predicate("clear", &[block.clone()]).unwrap();
        let x = lang.variable("x", &block);
        let schema = Action::new(
            "pickup",
            vec![x.clone().into()],
            Formula::atom(&clear, vec![x.clone().into()]),
            vec![],
        );
        assert!(!schema.is_ground());
        assert_eq!(schema.to_string(), "pickup(?x) pre: clear(?x)");
    }
}
