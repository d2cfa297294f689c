//! Substitution of variables and the closure check used by grounding.

mod closure;
mod substitution;

pub use closure::{ensure_ground, FreeVariableError};
pub use substitution::{Substitute, Substitution};
