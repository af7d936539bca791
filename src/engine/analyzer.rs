//! Free-text symptom analysis: turns a user query into a deduplicated,
//! order-stable list of candidate conditions.

use crate::models::Condition;

use super::store::KnowledgeStore;

/// Scan the keyword index against `query` and return every condition a
/// contained keyword maps to, in first-seen order, each exactly once.
///
/// Matching is plain substring containment over the lowercased query:
/// "cough" matches inside "coughing". This over-matches on purpose —
/// missing a relevant condition is worse than an extra false positive in
/// an informational tool. An empty result is not an error; it signals
/// "no confident match" and the caller renders a neutral state.
pub fn analyze_symptoms<'a>(store: &'a KnowledgeStore, query: &str) -> Vec<&'a Condition> {
    let normalized = query.to_lowercase();
    if normalized.trim().is_empty() {
        return Vec::new();
    }

    // First-insertion order with set semantics over ids.
    let mut ordered_ids: Vec<&str> = Vec::new();
    for entry in store.keywords() {
        if !normalized.contains(entry.keyword.as_str()) {
            continue;
        }
        for id in &entry.condition_ids {
            if !ordered_ids.contains(&id.as_str()) {
                ordered_ids.push(id);
            }
        }
    }

    tracing::debug!(candidates = ordered_ids.len(), "Symptom analysis complete");

    ordered_ids
        .into_iter()
        .filter_map(|id| store.condition(id))
        .collect()
}
