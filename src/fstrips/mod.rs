//! Functional STRIPS: effects, actions and problems.

mod action;
mod effect;
mod problem;

pub use action::Action;
pub use effect::{ChoiceEffect, Effect, FunctionalEffect, InvalidEffectError, Optimization};
pub use problem::{Metric, Problem};
