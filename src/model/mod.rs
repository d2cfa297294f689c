//! Interpretations (models) of a first-order language.

mod error;
mod evaluate;
mod extension;
#[allow(clippy::module_inception)]
mod model;

pub use error::ModelError;
pub use extension::{Element, ExtensionalFunctionDefinition, Point};
pub use model::Model;
