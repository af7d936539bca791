//! symptica — deterministic symptom-to-condition matching for health
//! information apps.
//!
//! Given free-text user-entered symptoms, the engine identifies plausible
//! conditions from a fixed knowledge base, ranks them with a bounded
//! confidence score, and separately surfaces knowledge clusters
//! (specialist/article/video bundles) keyed by multi-symptom patterns.
//! Not a diagnostic system: no learning, no persistence, no medical
//! guarantees — every result is reproducible from the static data tables.
//!
//! ```
//! use symptica::TriageEngine;
//!
//! let engine = TriageEngine::with_builtin()?;
//! let report = engine.triage("runny nose and cough");
//! for m in &report.matches {
//!     println!("{} ({}%)", m.condition.name, m.confidence);
//! }
//! # Ok::<(), symptica::ConfigError>(())
//! ```

pub mod engine;
pub mod models;

pub use engine::{
    analyze_symptoms, match_patterns, score_match, ClusterMatch, ConditionMatch, ConfigError,
    KeywordEntry, KnowledgeStore, PatternEntry, TriageEngine, TriageReport,
};
pub use models::{Condition, ResourceBundle, Severity, VideoRef};
