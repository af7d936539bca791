//! Bounded confidence scoring for a condition against a query.

use crate::models::Condition;

/// Scores never reach full certainty nor drop to negligible: the tool is
/// informational, not diagnostic.
pub const MIN_SCORE: u8 = 60;
pub const MAX_SCORE: u8 = 95;
/// Fixed score for contexts with no live query text (featured displays).
pub const NEUTRAL_SCORE: u8 = 75;
/// Severe conditions are never shown with artificially low confidence.
pub const SEVERE_FLOOR: u8 = 85;
const EXACT_BONUS: u32 = 10;

/// Compute the confidence percentage for `condition` against `query`.
///
/// Each whitespace-delimited query word counts as matched if it equals a
/// symptom phrase exactly (an exact match, rewarded with a bonus on top
/// of its base contribution) or shares a substring relation with one
/// (partial). The base is the matched-word ratio; the total is clamped
/// into `[MIN_SCORE, MAX_SCORE]` and then raised to `SEVERE_FLOOR` for
/// severe conditions. Pure and deterministic.
pub fn score_match(condition: &Condition, query: &str) -> u8 {
    if query.trim().is_empty() {
        return NEUTRAL_SCORE;
    }

    let normalized = query.to_lowercase();
    let words: Vec<&str> = normalized.split_whitespace().collect();

    let mut matched = 0u32;
    let mut exact = 0u32;
    for word in &words {
        if condition.symptoms.iter().any(|s| s == word) {
            matched += 1;
            exact += 1;
        } else if condition
            .symptoms
            .iter()
            .any(|s| s.contains(word) || word.contains(s.as_str()))
        {
            matched += 1;
        }
    }

    let base = (100.0 * matched as f64 / words.len().max(1) as f64).round() as u32;
    let boosted = base + EXACT_BONUS * exact;

    let clamped = boosted.clamp(MIN_SCORE as u32, MAX_SCORE as u32) as u8;
    if condition.severity.is_severe() {
        clamped.max(SEVERE_FLOOR)
    } else {
        clamped
    }
}
