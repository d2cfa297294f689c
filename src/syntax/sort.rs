//! Sorts and raw values.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_LANGUAGE_ID: AtomicU32 = AtomicU32::new(0);

/// Identity of a [`Language`](super::Language) instance.
///
/// Two languages built from identical declarations are still distinct: symbols
/// of one cannot be used to read or write a model of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageId(u32);

impl LanguageId {
    pub(crate) fn fresh() -> Self {
        LanguageId(NEXT_LANGUAGE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A sort (type) of a first-order language.
///
/// Sorts are identified by name within their language. Whether a sort is
/// builtin, and which sorts it is a subtype of, is answered by the language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sort {
    language: LanguageId,
    name: String,
}

impl Sort {
    pub(crate) fn new(language: LanguageId, name: impl Into<String>) -> Self {
        Sort {
            language,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The denotation carried by a constant.
///
/// Objects of user sorts are symbols; builtin numeric sorts carry integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    Symbol(String),
    Int(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Symbol(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Symbol(s)
    }
}
