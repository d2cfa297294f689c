//! Errors raised by the interpretation store.

use thiserror::Error;

use crate::syntax::{LanguageError, LanguageId};

/// Error during a model read or write.
///
/// Every variant is attributable to caller-provided data and names the
/// offending symbol or element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("arity mismatch for '{symbol}': expected {expected} elements, got {found}")]
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },
    #[error("'{element}' belongs to language {found}, but the model is over language {expected}")]
    LanguageMismatch {
        element: String,
        found: LanguageId,
        expected: LanguageId,
    },
    #[error("'{element}' is not declared in language '{language}'")]
    UndeclaredElement { element: String, language: String },
    #[error("'{element}' has sort '{found}', which is not a subtype of '{expected}'")]
    SortMismatch {
        element: String,
        found: String,
        expected: String,
    },
    #[error("function '{function}' is undefined at point {point}")]
    UndefinedPoint { function: String, point: String },
    #[error("tuple {point} is not in the extension of '{predicate}'")]
    MissingTuple { predicate: String, point: String },
    #[error("cannot evaluate non-ground expression '{0}'")]
    NotGround(String),
    #[error("semantic error: {0}")]
    Semantic(String),
    #[error(transparent)]
    Language(#[from] LanguageError),
}
