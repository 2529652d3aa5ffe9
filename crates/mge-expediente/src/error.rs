//! # Case-File Errors
//!
//! Every validation failure, coherence or level-structural, surfaces as
//! [`ExpedienteError::Inconsistency`]. The [`InconsistencyRule`] tag lets
//! callers tell rules apart without matching on message text.

use mge_core::MgeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The family of rule a case file violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InconsistencyRule {
    /// A sub-entity belongs to a different electoral process.
    ProcessMismatch,
    /// A sub-entity belongs to a different state.
    StateMismatch,
    /// Federal and local districts supplied together where the level forbids it.
    DistrictCoexistence,
    /// The focal collection does not hold the number of entries the level requires.
    Cardinality,
    /// A collection the level does not admit is non-empty.
    ForbiddenCollection,
    /// A sub-entity references a unit other than the declared focus.
    CrossReference,
}

impl InconsistencyRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProcessMismatch => "process_mismatch",
            Self::StateMismatch => "state_mismatch",
            Self::DistrictCoexistence => "district_coexistence",
            Self::Cardinality => "cardinality",
            Self::ForbiddenCollection => "forbidden_collection",
            Self::CrossReference => "cross_reference",
        }
    }
}

impl std::fmt::Display for InconsistencyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while assembling a case file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpedienteError {
    /// The supplied entities do not form a coherent case file.
    #[error("aggregate inconsistency: {message}")]
    Inconsistency {
        /// Which rule was violated.
        rule: InconsistencyRule,
        /// Human-readable description naming the conflicting identifiers.
        message: String,
    },

    /// A case-file manifest could not be parsed.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// A leaf value was malformed.
    #[error(transparent)]
    Core(#[from] MgeError),
}

impl ExpedienteError {
    pub(crate) fn inconsistency(rule: InconsistencyRule, message: impl Into<String>) -> Self {
        Self::Inconsistency {
            rule,
            message: message.into(),
        }
    }

    /// Whether this is an aggregate inconsistency (as opposed to a parse failure).
    pub fn is_inconsistency(&self) -> bool {
        matches!(self, Self::Inconsistency { .. })
    }

    /// The violated rule, for inconsistencies.
    pub fn rule(&self) -> Option<InconsistencyRule> {
        match self {
            Self::Inconsistency { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconsistency_display() {
        let err = ExpedienteError::inconsistency(
            InconsistencyRule::Cardinality,
            "level precinct requires exactly one ElectoralSection, got 0",
        );
        assert_eq!(
            err.to_string(),
            "aggregate inconsistency: level precinct requires exactly one ElectoralSection, got 0"
        );
        assert!(err.is_inconsistency());
        assert_eq!(err.rule(), Some(InconsistencyRule::Cardinality));
    }

    #[test]
    fn test_manifest_error_is_not_inconsistency() {
        let err = ExpedienteError::Manifest("bad yaml".to_string());
        assert!(!err.is_inconsistency());
        assert_eq!(err.rule(), None);
    }

    #[test]
    fn test_core_error_converts() {
        let err: ExpedienteError = MgeError::Parse("unknown geographic level".to_string()).into();
        assert_eq!(err.to_string(), "parse error: unknown geographic level");
    }
}
