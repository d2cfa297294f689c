//! Grounding configuration.

use serde::{Deserialize, Serialize};

/// What to do when a schema cannot be grounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the whole run at the first failing schema.
    #[default]
    Abort,
    /// Drop the failing schema's output, record the error and continue.
    SkipSchema,
}

/// Configuration for a [`Grounder`](super::Grounder).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundingConfig {
    /// Reject schemas with more instantiations than this before any
    /// substitution work (None for unlimited)
    pub max_instantiations: Option<u64>,
    pub on_failure: FailurePolicy,
}

impl GroundingConfig {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_aborts_without_limit() {
        let config = GroundingConfig::default();
        assert_eq!(config.max_instantiations, None);
        assert_eq!(config.on_failure, FailurePolicy::Abort);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = GroundingConfig::from_json(r#"{"max_instantiations": 100}"#).unwrap();
        assert_eq!(config.max_instantiations, Some(100));
        assert_eq!(config.on_failure, FailurePolicy::Abort);

        let config = GroundingConfig::from_json(r#"{"on_failure": "skip_schema"}"#).unwrap();
        assert_eq!(config.on_failure, FailurePolicy::SkipSchema);
        assert_eq!(config.max_instantiations, None);
    }

    #[test]
    fn test_from_json_rejects_unknown_policy() {
        assert!(GroundingConfig::from_json(r#"{"on_failure": "retry"}"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = GroundingConfig {
            max_instantiations: Some(7),
            on_failure: FailurePolicy::SkipSchema,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GroundingConfig::from_json(&json).unwrap(), config);
    }
}
