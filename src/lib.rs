//! fstrips: first-order interpretations and naive grounding of action schemas.
//!
//! This crate implements typed models of sorted first-order languages and a
//! grounder that compiles parameterized Functional STRIPS action schemas into
//! ground actions by enumerating every binding of their free parameters.

pub mod fstrips;
pub mod grounding;
pub mod model;
pub mod subst;
pub mod syntax;

pub use fstrips::{Action, Effect, InvalidEffectError, Metric, Optimization, Problem};
pub use grounding::{Grounder, GroundingConfig, GroundingError};
pub use model::{Model, ModelError};

#[cfg(test)]
mod tests;
