//! Naive grounding of action schemas.
//!
//! Each schema's free parameters are enumerated over their sorts' finite
//! domains; every binding yields one ground action whose precondition and
//! effects are certified to be free of variables.

mod config;
mod error;
mod grounder;
mod instantiation;

pub use config::{FailurePolicy, GroundingConfig};
pub use error::GroundingError;
pub use grounder::{instantiate, Grounder, GroundingReport, SchemaReport};
pub use instantiation::{enumerate, Bindings, Instantiation};
