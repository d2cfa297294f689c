//! The first-order language: declared sorts, objects and symbols.
//!
//! A [`Language`] answers the type questions the rest of the crate asks:
//! whether a sort is builtin, subtyping, finite domain enumeration and casting
//! raw values into constants. All tables preserve declaration order so that
//! domain enumeration is deterministic.

use indexmap::IndexMap;
use thiserror::Error;

use super::signature::{Function, Predicate};
use super::sort::{LanguageId, Sort, Value};
use super::term::{Constant, Var};

pub const OBJECT: &str = "object";
pub const INTEGER: &str = "Integer";
pub const NATURAL: &str = "Natural";

/// Error raised while declaring or querying a language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("symbol '{0}' is already declared")]
    DuplicateSymbol(String),
    #[error("undefined sort '{0}'")]
    UndefinedSort(String),
    #[error("undefined symbol '{0}'")]
    UndefinedSymbol(String),
    #[error("sort '{sort}' belongs to language {found}, not {expected}")]
    ForeignSort {
        sort: String,
        found: LanguageId,
        expected: LanguageId,
    },
    #[error("sort '{sort}' is builtin: {reason}")]
    BuiltinSort { sort: String, reason: &'static str },
    #[error("cannot cast '{value}' to sort '{sort}'")]
    InvalidCast { value: String, sort: String },
}

#[derive(Debug, Clone)]
struct SortDecl {
    parent: Option<String>,
    builtin: bool,
}

/// A sorted first-order language.
#[derive(Debug, Clone)]
pub struct Language {
    id: LanguageId,
    name: String,
    sorts: IndexMap<String, SortDecl>,
    constants: IndexMap<String, Constant>,
    functions: IndexMap<String, Function>,
    predicates: IndexMap<String, Predicate>,
}

impl Language {
    /// Create a language with the predeclared `object`, `Integer` and
    /// `Natural` sorts.
    pub fn new(name: impl Into<String>) -> Self {
        let mut sorts = IndexMap::new();
        sorts.insert(
            OBJECT.to_string(),
            SortDecl {
                parent: None,
                builtin: false,
            },
        );
        sorts.insert(
            INTEGER.to_string(),
            SortDecl {
                parent: None,
                builtin: true,
            },
        );
        sorts.insert(
            NATURAL.to_string(),
            SortDecl {
                parent: Some(INTEGER.to_string()),
                builtin: true,
            },
        );
        Language {
            id: LanguageId::fresh(),
            name: name.into(),
            sorts,
            constants: IndexMap::new(),
            functions: IndexMap::new(),
            predicates: IndexMap::new(),
        }
    }

    pub fn id(&self) -> LanguageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn object_sort(&self) -> Sort {
        Sort::new(self.id, OBJECT)
    }

    pub fn integer_sort(&self) -> Sort {
        Sort::new(self.id, INTEGER)
    }

    pub fn natural_sort(&self) -> Sort {
        Sort::new(self.id, NATURAL)
    }

    // === Sorts ===

    /// Declare a user sort. Without a parent it becomes a subtype of `object`.
    pub fn sort(&mut self, name: &str, parent: Option<&Sort>) -> Result<Sort, LanguageError> {
        if self.sorts.contains_key(name) {
            return Err(LanguageError::DuplicateSymbol(name.to_string()));
        }
        let parent = match parent {
            Some(p) => {
                self.check_sort(p)?;
                if self.is_builtin(p) {
                    return Err(LanguageError::BuiltinSort {
                        sort: p.name().to_string(),
                        reason: "user sorts cannot extend builtin sorts",
                    });
                }
                p.name().to_string()
            }
            None => OBJECT.to_string(),
        };
        self.sorts.insert(
            name.to_string(),
            SortDecl {
                parent: Some(parent),
                builtin: false,
            },
        );
        Ok(Sort::new(self.id, name))
    }

    pub fn get_sort(&self, name: &str) -> Result<Sort, LanguageError> {
        if self.sorts.contains_key(name) {
            Ok(Sort::new(self.id, name))
        } else {
            Err(LanguageError::UndefinedSort(name.to_string()))
        }
    }

    /// Check that `sort` is declared in this language.
    pub fn check_sort(&self, sort: &Sort) -> Result<(), LanguageError> {
        if sort.language() != self.id {
            return Err(LanguageError::ForeignSort {
                sort: sort.name().to_string(),
                found: sort.language(),
                expected: self.id,
            });
        }
        if !self.sorts.contains_key(sort.name()) {
            return Err(LanguageError::UndefinedSort(sort.name().to_string()));
        }
        Ok(())
    }

    /// Builtin sorts have unbounded domains and cannot be enumerated.
    pub fn is_builtin(&self, sort: &Sort) -> bool {
        sort.language() == self.id
            && self
                .sorts
                .get(sort.name())
                .map(|decl| decl.builtin)
                .unwrap_or(false)
    }

    pub fn parent(&self, sort: &Sort) -> Option<Sort> {
        if sort.language() != self.id {
            return None;
        }
        self.sorts
            .get(sort.name())
            .and_then(|decl| decl.parent.as_ref())
            .map(|p| Sort::new(self.id, p.as_str()))
    }

    /// Reflexive, transitive subtype check.
    pub fn is_subtype(&self, sub: &Sort, sup: &Sort) -> bool {
        if sub.language() != self.id || sup.language() != self.id {
            return false;
        }
        let mut current = Some(sub.name());
        while let Some(name) = current {
            if name == sup.name() {
                return true;
            }
            current = self
                .sorts
                .get(name)
                .and_then(|decl| decl.parent.as_deref());
        }
        false
    }

    /// Enumerate the finite domain of a non-builtin sort, in declaration order.
    pub fn domain(&self, sort: &Sort) -> Result<Vec<Constant>, LanguageError> {
        self.check_sort(sort)?;
        if self.is_builtin(sort) {
            return Err(LanguageError::BuiltinSort {
                sort: sort.name().to_string(),
                reason: "domain is not enumerable",
            });
        }
        Ok(self
            .constants
            .values()
            .filter(|c| self.is_subtype(c.sort(), sort))
            .cloned()
            .collect())
    }

    /// Turn a raw value into a constant of the given sort.
    pub fn cast(&self, sort: &Sort, value: Value) -> Result<Constant, LanguageError> {
        self.check_sort(sort)?;
        let invalid = |value: &Value| LanguageError::InvalidCast {
            value: value.to_string(),
            sort: sort.name().to_string(),
        };
        if self.is_builtin(sort) {
            let n = match &value {
                Value::Int(i) => *i,
                Value::Symbol(s) => s.trim().parse::<i64>().map_err(|_| invalid(&value))?,
            };
            if self.is_subtype(sort, &self.natural_sort()) && n < 0 {
                return Err(invalid(&value));
            }
            return Ok(Constant::new(Value::Int(n), sort.clone()));
        }
        match &value {
            Value::Symbol(name) => match self.constants.get(name) {
                Some(c) if self.is_subtype(c.sort(), sort) => Ok(c.clone()),
                _ => Err(invalid(&value)),
            },
            Value::Int(_) => Err(invalid(&value)),
        }
    }

    // === Objects and symbols ===

    /// Declare a named object of a non-builtin sort.
    pub fn constant(&mut self, name: &str, sort: &Sort) -> Result<Constant, LanguageError> {
        self.check_sort(sort)?;
        if self.is_builtin(sort) {
            return Err(LanguageError::BuiltinSort {
                sort: sort.name().to_string(),
                reason: "objects of builtin sorts are obtained by casting",
            });
        }
        if self.constants.contains_key(name) {
            return Err(LanguageError::DuplicateSymbol(name.to_string()));
        }
        let c = Constant::new(Value::Symbol(name.to_string()), sort.clone());
        self.constants.insert(name.to_string(), c.clone());
        Ok(c)
    }

    pub fn get_constant(&self, name: &str) -> Result<Constant, LanguageError> {
        self.constants
            .get(name)
            .cloned()
            .ok_or_else(|| LanguageError::UndefinedSymbol(name.to_string()))
    }

    pub fn constants(&self) -> impl Iterator<Item = &Constant> {
        self.constants.values()
    }

    pub fn function(
        &mut self,
        name: &str,
        domain: &[Sort],
        codomain: &Sort,
    ) -> Result<Function, LanguageError> {
        if self.functions.contains_key(name) || self.predicates.contains_key(name) {
            return Err(LanguageError::DuplicateSymbol(name.to_string()));
        }
        for s in domain.iter().chain(std::iter::once(codomain)) {
            self.check_sort(s)?;
        }
        let f = Function::new(self.id, name, domain.to_vec(), codomain.clone());
        self.functions.insert(name.to_string(), f.clone());
        Ok(f)
    }

    pub fn get_function(&self, name: &str) -> Result<Function, LanguageError> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| LanguageError::UndefinedSymbol(name.to_string()))
    }

    pub fn predicate(&mut self, name: &str, domain: &[Sort]) -> Result<Predicate, LanguageError> {
        if self.functions.contains_key(name) || self.predicates.contains_key(name) {
            return Err(LanguageError::DuplicateSymbol(name.to_string()));
        }
        for s in domain {
            self.check_sort(s)?;
        }
        let p = Predicate::new(self.id, name, domain.to_vec());
        self.predicates.insert(name.to_string(), p.clone());
        Ok(p)
    }

    pub fn get_predicate(&self, name: &str) -> Result<Predicate, LanguageError> {
        self.predicates
            .get(name)
            .cloned()
            .ok_or_else(|| LanguageError::UndefinedSymbol(name.to_string()))
    }

    /// Create a variable of the given sort.
    pub fn variable(&self, name: &str, sort: &Sort) -> Var {
        Var::new(name, sort.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks() -> (Language, Sort, Sort) {
        let mut lang = Language::new("blocks");
        let thing = lang.sort("thing", None).unwrap();
        let block = lang.sort("block", Some(&thing)).unwrap();
        (lang, thing, block)
    }

    #[test]
    fn test_builtin_sorts_predeclared() {
        let lang = Language::new("l");
        assert!(lang.is_builtin(&lang.integer_sort()));
        assert!(lang.is_builtin(&lang.natural_sort()));
        assert!(!lang.is_builtin(&lang.object_sort()));
        assert!(lang.is_subtype(&lang.natural_sort(), &lang.integer_sort()));
    }

    #[test]
    fn test_subtype_is_reflexive_and_transitive() {
        let (lang, thing, block) = blocks();
        let object = lang.object_sort();
        assert!(lang.is_subtype(&block, &block));
        assert!(lang.is_subtype(&block, &thing));
        assert!(lang.is_subtype(&block, &object));
        assert!(!lang.is_subtype(&thing, &block));
        assert_eq!(lang.parent(&block), Some(thing));
    }

    #[test]
    fn test_duplicate_sort_rejected() {
        let (mut lang, _, _) = blocks();
        assert_eq!(
            lang.sort("block", None),
            Err(LanguageError::DuplicateSymbol("block".into()))
        );
    }

    #[test]
    fn test_domain_includes_subtypes_in_declaration_order() {
        let (mut lang, thing, block) = blocks();
        let a = lang.constant("a", &block).unwrap();
        let t = lang.constant("t", &thing).unwrap();
        let b = lang.constant("b", &block).unwrap();
        assert_eq!(lang.domain(&block).unwrap(), vec![a.clone(), b.clone()]);
        assert_eq!(lang.domain(&thing).unwrap(), vec![a, t, b]);
    }

    #[test]
    fn test_domain_of_builtin_sort_fails() {
        let lang = Language::new("l");
        assert!(matches!(
            lang.domain(&lang.integer_sort()),
            Err(LanguageError::BuiltinSort { .. })
        ));
    }

    #[test]
    fn test_cast_integers() {
        let lang = Language::new("l");
        let c = lang.cast(&lang.integer_sort(), Value::Int(-3)).unwrap();
        assert_eq!(c.as_int(), Some(-3));
        let parsed = lang.cast(&lang.integer_sort(), Value::from("42")).unwrap();
        assert_eq!(parsed.as_int(), Some(42));
        assert!(lang.cast(&lang.natural_sort(), Value::Int(-1)).is_err());
    }

    #[test]
    fn test_cast_symbol_resolves_declared_object() {
        let (mut lang, thing, block) = blocks();
        let a = lang.constant("a", &block).unwrap();
        assert_eq!(lang.cast(&thing, Value::from("a")).unwrap(), a);
        assert!(lang.cast(&block, Value::from("zzz")).is_err());
        assert!(lang.cast(&block, Value::Int(1)).is_err());
    }

    #[test]
    fn test_foreign_sort_rejected() {
        let (mut lang, _, _) = blocks();
        let other = Language::new("other");
        let foreign = other.object_sort();
        assert!(matches!(
            lang.constant("x", &foreign),
            Err(LanguageError::ForeignSort { .. })
        ));
    }

    #[test]
    fn test_builtin_sort_cannot_get_objects() {
        let mut lang = Language::new("l");
        let int = lang.integer_sort();
        assert!(lang.constant("one", &int).is_err());
    }

    #[test]
    fn test_function_and_predicate_share_namespace() {
        let (mut lang, _, block) = blocks();
        lang.predicate("clear", &[block.clone()]).unwrap();
        assert!(lang.function("clear", &[block.clone()], &block).is_err());
        assert!(lang.get_function("clear").is_err());
    }
}
