//! Naive grounding: one ground action per binding of each schema.

use std::fmt;

use tracing::{debug, info, warn};

use crate::fstrips::{Action, Problem};
use crate::subst::{ensure_ground, Substitute, Substitution};
use crate::syntax::Language;

use super::config::{FailurePolicy, GroundingConfig};
use super::error::GroundingError;
use super::instantiation::{enumerate, Instantiation};

/// Per-schema outcome of a grounding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    pub schema: String,
    pub instantiations: u64,
}

/// Summary of a grounding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundingReport {
    /// Schemas that were grounded, in input order.
    pub grounded: Vec<SchemaReport>,
    /// Schemas dropped under [`FailurePolicy::SkipSchema`].
    pub skipped: Vec<(String, GroundingError)>,
}

impl GroundingReport {
    /// Total number of ground actions produced.
    pub fn total(&self) -> u64 {
        self.grounded.iter().map(|r| r.instantiations).sum()
    }
}

/// Grounds action schemas by exhaustive enumeration of their parameters.
#[derive(Debug, Clone, Default)]
pub struct Grounder {
    config: GroundingConfig,
    actions_generated: u64,
}

impl Grounder {
    pub fn new(config: GroundingConfig) -> Self {
        Grounder {
            config,
            actions_generated: 0,
        }
    }

    pub fn config(&self) -> &GroundingConfig {
        &self.config
    }

    /// Running count of ground actions produced by this grounder.
    pub fn actions_generated(&self) -> u64 {
        self.actions_generated
    }

    /// Ground every schema of `problem`, returning the ground actions in
    /// generation order.
    pub fn ground(
        &mut self,
        problem: &Problem,
    ) -> Result<(Vec<Action>, GroundingReport), GroundingError> {
        let mut actions = Vec::new();
        let report = self.ground_into(problem.language(), problem.actions(), &mut actions)?;
        Ok((actions, report))
    }

    /// Ground `schemas` in order, appending the ground actions to `out`.
    ///
    /// Under [`FailurePolicy::Abort`] the first error ends the run; actions
    /// already appended stay in `out`. Under [`FailurePolicy::SkipSchema`] the
    /// failing schema's partial output is removed and the run continues.
    pub fn ground_into<'s>(
        &mut self,
        language: &Language,
        schemas: impl IntoIterator<Item = &'s Action>,
        out: &mut Vec<Action>,
    ) -> Result<GroundingReport, GroundingError> {
        let mut report = GroundingReport::default();
        for schema in schemas {
            let start = out.len();
            match self.ground_schema(language, schema, out) {
                Ok(count) => {
                    self.actions_generated += count;
                    report.grounded.push(SchemaReport {
                        schema: schema.name.clone(),
                        instantiations: count,
                    });
                }
                Err(err) => match self.config.on_failure {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::SkipSchema => {
                        warn!(schema = %schema.name, error = %err, "skipping schema");
                        out.truncate(start);
                        report.skipped.push((schema.name.clone(), err));
                    }
                },
            }
        }
        info!(
            grounded = report.grounded.len(),
            skipped = report.skipped.len(),
            actions = report.total(),
            "grounding finished"
        );
        Ok(report)
    }

    /// Ground a single schema, appending one action per binding to `out`.
    pub fn ground_schema(
        &self,
        language: &Language,
        schema: &Action,
        out: &mut Vec<Action>,
    ) -> Result<u64, GroundingError> {
        let instantiation = enumerate(language, &schema.parameters)?;
        debug!(
            schema = %schema.name,
            variables = instantiation.variables.len(),
            cardinality = instantiation.cardinality,
            "enumerated schema"
        );
        self.check_limit(schema, &instantiation)?;

        let mut produced = 0;
        for binding in instantiation.bindings() {
            out.push(instantiate(schema, &binding)?);
            produced += 1;
        }
        Ok(produced)
    }

    fn check_limit(
        &self,
        schema: &Action,
        instantiation: &Instantiation,
    ) -> Result<(), GroundingError> {
        match self.config.max_instantiations {
            Some(limit) if instantiation.cardinality > limit => {
                Err(GroundingError::TooManyInstantiations {
                    schema: schema.name.clone(),
                    cardinality: instantiation.cardinality,
                    limit,
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Grounder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Actions generated: {}", self.actions_generated)
    }
}

/// Build the ground action for one binding, certifying that nothing free
/// remains in the precondition or any effect.
pub fn instantiate(schema: &Action, binding: &Substitution) -> Result<Action, GroundingError> {
    let closed = |source| GroundingError::FreeVariables {
        schema: schema.name.clone(),
        source,
    };
    let precondition = schema.precondition.apply_subst(binding);
    ensure_ground(&precondition).map_err(closed)?;
    let mut effects = Vec::with_capacity(schema.effects.len());
    for effect in &schema.effects {
        let effect = effect.apply_subst(binding);
        ensure_ground(&effect).map_err(closed)?;
        effects.push(effect);
    }
    Ok(Action::new(schema.name.clone(), Vec::new(), precondition, effects))
}
