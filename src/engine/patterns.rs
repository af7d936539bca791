//! Majority-overlap matching of multi-symptom knowledge patterns.

use super::store::{KnowledgeStore, PatternEntry};

/// Return every pattern whose phrase overlap with `query` meets the
/// majority threshold, in the store's pattern order.
///
/// Each pattern key is split on commas into trimmed, non-empty lowercase
/// phrases; the pattern matches when at least `ceil(phrases / 2)` of them
/// occur as substrings of the lowercased query. A user does not have to
/// name every phrase in a cluster, but one stray-word coincidence is not
/// enough. Patterns with no phrases after trimming never match.
pub fn match_patterns<'a>(store: &'a KnowledgeStore, query: &str) -> Vec<&'a PatternEntry> {
    let normalized = query.to_lowercase();

    let mut matched = Vec::new();
    for entry in store.patterns() {
        let phrases: Vec<&str> = entry
            .pattern
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if phrases.is_empty() {
            continue;
        }

        let hits = phrases
            .iter()
            .filter(|p| normalized.contains(&p.to_lowercase()))
            .count();
        let threshold = phrases.len().div_ceil(2);
        if hits >= threshold {
            matched.push(entry);
        }
    }

    tracing::debug!(clusters = matched.len(), "Pattern matching complete");

    matched
}
