//! Errors raised while grounding action schemas.

use thiserror::Error;

use crate::subst::FreeVariableError;
use crate::syntax::LanguageError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroundingError {
    /// A parameter cannot be enumerated: its sort is builtin, or it is not a
    /// plain constant or variable.
    #[error("unable to ground '{term}': {reason}")]
    UnableToGround { term: String, reason: String },
    #[error("schema '{schema}' has {cardinality} instantiations, above the limit of {limit}")]
    TooManyInstantiations {
        schema: String,
        cardinality: u64,
        limit: u64,
    },
    /// A variable survived substitution: the schema mentions a variable that
    /// is not among its parameters.
    #[error("schema '{schema}' is not closed under its parameters: {source}")]
    FreeVariables {
        schema: String,
        #[source]
        source: FreeVariableError,
    },
    #[error(transparent)]
    Language(#[from] LanguageError),
}
