use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Condition, ResourceBundle};

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Raised once, at knowledge-store load time. The store never serves
/// queries in an inconsistent state; per-query operations are total and
/// have no error path of their own.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Knowledge data load failed ({0}): {1}")]
    Load(String, String),

    #[error("Knowledge data parse failed ({0}): {1}")]
    Parse(String, String),

    #[error("Duplicate condition id: {0}")]
    DuplicateCondition(String),

    #[error("Keyword '{keyword}' references unknown condition id: {condition_id}")]
    UnknownCondition {
        keyword: String,
        condition_id: String,
    },

    #[error("Keyword '{0}' maps to no condition ids")]
    EmptyKeyword(String),

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}

// ---------------------------------------------------------------------------
// Query results
// ---------------------------------------------------------------------------

/// A condition paired with its confidence percentage for one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionMatch {
    pub condition: Condition,
    /// Bounded confidence, always in 60..=95.
    pub confidence: u8,
}

/// A knowledge pattern whose phrase overlap met the majority threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterMatch {
    pub pattern: String,
    pub bundles: Vec<ResourceBundle>,
}

/// Everything the presentation layer renders for one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    /// First-seen analyzer order, each entry annotated with its score.
    pub matches: Vec<ConditionMatch>,
    pub clusters: Vec<ClusterMatch>,
    /// General-health tips, filled only when no condition matched.
    pub guidance: Vec<String>,
    pub processing_time_ms: u64,
}

impl TriageReport {
    pub fn is_no_match(&self) -> bool {
        self.matches.is_empty()
    }
}
