//! Function and predicate symbols and their signatures.

use std::fmt;

use super::sort::{LanguageId, Sort};

/// The typed shape identifying a symbol.
///
/// For functions the codomain is the last entry of `sorts`, so a signature
/// compares equal exactly when name, arity and every sort agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature {
    pub language: LanguageId,
    pub name: String,
    pub sorts: Vec<Sort>,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.sorts.len())
    }
}

/// A function symbol: name, argument sorts and codomain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Function {
    language: LanguageId,
    name: String,
    domain: Vec<Sort>,
    codomain: Sort,
}

impl Function {
    pub(crate) fn new(
        language: LanguageId,
        name: impl Into<String>,
        domain: Vec<Sort>,
        codomain: Sort,
    ) -> Self {
        Function {
            language,
            name: name.into(),
            domain,
            codomain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn arity(&self) -> usize {
        self.domain.len()
    }

    pub fn domain(&self) -> &[Sort] {
        &self.domain
    }

    pub fn codomain(&self) -> &Sort {
        &self.codomain
    }

    pub fn signature(&self) -> Signature {
        let mut sorts = self.domain.clone();
        sorts.push(self.codomain.clone());
        Signature {
            language: self.language,
            name: self.name.clone(),
            sorts,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity())
    }
}

/// A predicate symbol: name and argument sorts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Predicate {
    language: LanguageId,
    name: String,
    domain: Vec<Sort>,
}

impl Predicate {
    pub(crate) fn new(language: LanguageId, name: impl Into<String>, domain: Vec<Sort>) -> Self {
        Predicate {
            language,
            name: name.into(),
            domain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn arity(&self) -> usize {
        self.domain.len()
    }

    pub fn domain(&self) -> &[Sort] {
        &self.domain
    }

    pub fn signature(&self) -> Signature {
        Signature {
            language: self.language,
            name: self.name.clone(),
            sorts: self.domain.clone(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity())
    }
}
