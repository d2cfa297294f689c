//! Planning problems: a language, an initial state and action schemas.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::model::{Model, ModelError};
use crate::syntax::{Constant, Formula, Language, LanguageError, Term};

use super::action::Action;
use super::effect::Optimization;

/// Plan quality criterion: an expression to minimize or maximize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Metric {
    pub expression: Term,
    pub kind: Optimization,
}

impl Metric {
    pub fn new(kind: Optimization, expression: Term) -> Self {
        Metric { expression, kind }
    }

    /// Value of the metric expression in `state`.
    pub fn evaluate(&self, state: &Model) -> Result<Constant, ModelError> {
        state.evaluate(&self.expression)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.kind, self.expression)
    }
}

/// A planning problem over a fixed language.
#[derive(Debug, Clone)]
pub struct Problem {
    pub name: String,
    language: Arc<Language>,
    pub init: Model,
    pub goal: Formula,
    pub metric: Option<Metric>,
    actions: IndexMap<String, Action>,
}

impl Problem {
    /// Create a problem with an empty initial state, a trivial goal and no
    /// metric.
    pub fn new(name: impl Into<String>, language: Arc<Language>) -> Self {
        Problem {
            name: name.into(),
            init: Model::new(Arc::clone(&language)),
            language,
            goal: Formula::Tautology,
            metric: None,
            actions: IndexMap::new(),
        }
    }

    pub fn language(&self) -> &Arc<Language> {
        &self.language
    }

    /// Register an action schema. Schema names are unique.
    pub fn add_action(&mut self, action: Action) -> Result<(), LanguageError> {
        if self.actions.contains_key(&action.name) {
            return Err(LanguageError::DuplicateSymbol(action.name));
        }
        self.actions.insert(action.name.clone(), action);
        Ok(())
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }

    /// Action schemas in registration order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.values()
    }
}
