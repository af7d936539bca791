use std::time::Instant;

use super::analyzer::analyze_symptoms;
use super::guidance::general_health_tips;
use super::patterns::match_patterns;
use super::scorer::score_match;
use super::store::KnowledgeStore;
use super::types::{ClusterMatch, ConditionMatch, ConfigError, TriageReport};

/// Convenience orchestrator over one knowledge store: runs the analyzer,
/// annotates each candidate with its score, runs the pattern matcher, and
/// assembles the report the presentation layer renders.
///
/// Every call is a pure function of `(store, query)`; the engine holds no
/// per-query state and is safe to share across concurrent callers.
pub struct TriageEngine {
    store: KnowledgeStore,
}

impl TriageEngine {
    pub fn new(store: KnowledgeStore) -> Self {
        Self { store }
    }

    /// Engine over the knowledge base bundled with the crate.
    pub fn with_builtin() -> Result<Self, ConfigError> {
        Ok(Self::new(KnowledgeStore::builtin()?))
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Analyze one query and produce both result sets.
    ///
    /// Condition matches keep the analyzer's first-seen order; scoring
    /// annotates, it does not reorder. When nothing matched, `guidance`
    /// carries the general-health tips for the neutral no-match state.
    pub fn triage(&self, query: &str) -> TriageReport {
        let start = Instant::now();

        let matches: Vec<ConditionMatch> = analyze_symptoms(&self.store, query)
            .into_iter()
            .map(|condition| ConditionMatch {
                confidence: score_match(condition, query),
                condition: condition.clone(),
            })
            .collect();

        let clusters: Vec<ClusterMatch> = match_patterns(&self.store, query)
            .into_iter()
            .map(|entry| ClusterMatch {
                pattern: entry.pattern.clone(),
                bundles: entry.bundles.clone(),
            })
            .collect();

        let guidance = if matches.is_empty() {
            general_health_tips()
                .iter()
                .map(|t| t.to_string())
                .collect()
        } else {
            Vec::new()
        };

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            conditions = matches.len(),
            clusters = clusters.len(),
            no_match = matches.is_empty(),
            processing_ms = processing_time_ms,
            "Triage complete"
        );

        TriageReport {
            matches,
            clusters,
            guidance,
            processing_time_ms,
        }
    }
}
