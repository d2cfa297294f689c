//! The interpretation store: extensional meanings of functions and predicates.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use super::error::ModelError;
use super::extension::{Element, ExtensionalFunctionDefinition, Point};
use crate::syntax::{
    Constant, Function, Language, LanguageId, Predicate, Signature, Sort, Term, Value,
};

/// A first-order model over a fixed language.
///
/// Functions are partial: reading a point that was never set is an error.
/// Predicates are closed-world: a tuple that was never added does not hold.
#[derive(Debug, Clone)]
pub struct Model {
    language: Arc<Language>,
    functions: IndexMap<Signature, ExtensionalFunctionDefinition>,
    predicates: IndexMap<Signature, IndexSet<Point>>,
}

impl Model {
    /// Create an empty model of the given language.
    pub fn new(language: Arc<Language>) -> Self {
        Model {
            language,
            functions: IndexMap::new(),
            predicates: IndexMap::new(),
        }
    }

    pub fn language(&self) -> &Arc<Language> {
        &self.language
    }

    // === Functions ===

    /// Set the value of `function` at `point`, overwriting any previous value.
    pub fn set<I>(
        &mut self,
        function: &Function,
        point: I,
        value: impl Into<Element>,
    ) -> Result<(), ModelError>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.check_symbol(function.name(), function.language())?;
        let point = self.check_point(function.name(), function.domain(), point)?;
        let value = self.check_element(function.codomain(), value.into())?;
        trace!(function = %function, %point, %value, "set function value");
        self.functions
            .entry(function.signature())
            .or_default()
            .set(point, value);
        Ok(())
    }

    /// Set the value of a compound term whose arguments are all constants.
    pub fn set_term(&mut self, term: &Term, value: impl Into<Element>) -> Result<(), ModelError> {
        let (function, args) = match term {
            Term::App(f, args) => (f, args),
            _ => {
                return Err(ModelError::Semantic(format!(
                    "only compound terms can be assigned a value, got '{}'",
                    term
                )))
            }
        };
        let mut point = Vec::with_capacity(args.len());
        for arg in args {
            match arg {
                Term::Constant(c) => point.push(c.clone()),
                _ => {
                    return Err(ModelError::Semantic(format!(
                        "arguments of '{}' need to be constants",
                        term
                    )))
                }
            }
        }
        self.set(function, point, value)
    }

    /// The value of `function` at `point`.
    pub fn value<I>(&self, function: &Function, point: I) -> Result<Constant, ModelError>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.check_symbol(function.name(), function.language())?;
        let point = self.check_point(function.name(), function.domain(), point)?;
        self.functions
            .get(&function.signature())
            .and_then(|def| def.get(&point))
            .cloned()
            .ok_or_else(|| ModelError::UndefinedPoint {
                function: function.to_string(),
                point: point.to_string(),
            })
    }

    /// The table defining `function`, if any point of it was set.
    pub fn definition(&self, function: &Function) -> Option<&ExtensionalFunctionDefinition> {
        self.functions.get(&function.signature())
    }

    // === Predicates ===

    /// Add `point` to the extension of `predicate`. Adding twice is a no-op.
    pub fn add<I>(&mut self, predicate: &Predicate, point: I) -> Result<(), ModelError>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.check_symbol(predicate.name(), predicate.language())?;
        let point = self.check_point(predicate.name(), predicate.domain(), point)?;
        trace!(predicate = %predicate, %point, "add tuple");
        self.predicates
            .entry(predicate.signature())
            .or_default()
            .insert(point);
        Ok(())
    }

    /// Remove `point` from the extension of `predicate`; it must be present.
    pub fn remove<I>(&mut self, predicate: &Predicate, point: I) -> Result<(), ModelError>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.check_symbol(predicate.name(), predicate.language())?;
        let point = self.check_point(predicate.name(), predicate.domain(), point)?;
        let removed = self
            .predicates
            .get_mut(&predicate.signature())
            .map(|ext| ext.shift_remove(&point))
            .unwrap_or(false);
        if !removed {
            return Err(ModelError::MissingTuple {
                predicate: predicate.to_string(),
                point: point.to_string(),
            });
        }
        trace!(predicate = %predicate, %point, "remove tuple");
        Ok(())
    }

    /// Whether `point` is in the extension of `predicate`.
    pub fn holds<I>(&self, predicate: &Predicate, point: I) -> Result<bool, ModelError>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.check_symbol(predicate.name(), predicate.language())?;
        let point = self.check_point(predicate.name(), predicate.domain(), point)?;
        Ok(self
            .predicates
            .get(&predicate.signature())
            .map(|ext| ext.contains(&point))
            .unwrap_or(false))
    }

    /// Tuples in the extension of `predicate`, in insertion order.
    pub fn extension(&self, predicate: &Predicate) -> impl Iterator<Item = &Point> {
        self.predicates
            .get(&predicate.signature())
            .into_iter()
            .flat_map(|ext| ext.iter())
    }

    // === Validation ===

    fn check_symbol(&self, name: &str, language: LanguageId) -> Result<(), ModelError> {
        if language != self.language.id() {
            return Err(ModelError::LanguageMismatch {
                element: name.to_string(),
                found: language,
                expected: self.language.id(),
            });
        }
        Ok(())
    }

    fn check_point<I>(&self, symbol: &str, sorts: &[Sort], point: I) -> Result<Point, ModelError>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        let elements: Vec<Element> = point.into_iter().map(Into::into).collect();
        if elements.len() != sorts.len() {
            return Err(ModelError::ArityMismatch {
                symbol: symbol.to_string(),
                expected: sorts.len(),
                found: elements.len(),
            });
        }
        let checked = elements
            .into_iter()
            .zip(sorts)
            .map(|(element, expected)| self.check_element(expected, element))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Point::new(checked))
    }

    fn check_element(&self, expected: &Sort, element: Element) -> Result<Constant, ModelError> {
        let constant = match element {
            Element::Constant(c) => c,
            Element::Raw(value) => self.language.cast(expected, value)?,
        };
        if constant.language() != self.language.id() {
            return Err(ModelError::LanguageMismatch {
                element: constant.to_string(),
                found: constant.language(),
                expected: self.language.id(),
            });
        }
        // A language clone shares its id, so the id alone does not prove membership.
        if let Value::Symbol(name) = constant.value() {
            if self.language.get_constant(name).ok().as_ref() != Some(&constant) {
                return Err(ModelError::UndeclaredElement {
                    element: constant.to_string(),
                    language: self.language.name().to_string(),
                });
            }
        }
        if !self.language.is_subtype(constant.sort(), expected) {
            return Err(ModelError::SortMismatch {
                element: constant.to_string(),
                found: constant.sort().to_string(),
                expected: expected.to_string(),
            });
        }
        Ok(constant)
    }
}
