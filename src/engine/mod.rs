//! The symptom-to-condition matching and scoring engine.
//!
//! Pure, synchronous functions over an immutable [`store::KnowledgeStore`]:
//! the analyzer finds candidate conditions, the scorer bounds each with a
//! confidence percentage, and the pattern matcher surfaces knowledge
//! clusters. [`engine::TriageEngine`] glues the three together for callers
//! that want a single report.

pub mod analyzer;
pub mod engine;
pub mod guidance;
pub mod patterns;
pub mod scorer;
pub mod store;
pub mod types;

pub use analyzer::analyze_symptoms;
pub use engine::TriageEngine;
pub use patterns::match_patterns;
pub use scorer::{score_match, MAX_SCORE, MIN_SCORE, NEUTRAL_SCORE, SEVERE_FLOOR};
pub use store::{KeywordEntry, KnowledgeStore, PatternEntry};
pub use types::{ClusterMatch, ConditionMatch, ConfigError, TriageReport};
