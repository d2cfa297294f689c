//! Closure check run after a grounding substitution.

use std::fmt;

use thiserror::Error;

use super::substitution::Substitute;

/// A variable survived substitution.
///
/// This means the node referenced a variable outside the parameter list it was
/// instantiated from; it is a defect in the input, not a recoverable state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("free variables [{}] remain in '{node}'", .variables.join(", "))]
pub struct FreeVariableError {
    pub node: String,
    pub variables: Vec<String>,
}

/// Certify that `node` has no free variables.
pub fn ensure_ground<T: Substitute + fmt::Display>(node: &T) -> Result<(), FreeVariableError> {
    let free = node.free_variables();
    if free.is_empty() {
        return Ok(());
    }
    let mut variables: Vec<String> = free.iter().map(|v| v.to_string()).collect();
    variables.sort();
    Err(FreeVariableError {
        node: node.to_string(),
        variables,
    })
}
