use serde::{Deserialize, Serialize};

use super::enums::Severity;

/// One knowledge-base entry: a medical condition and its associated guidance.
///
/// Conditions are loaded once at startup and never mutated. `id` is the
/// stable identifier the keyword index refers to; it must be unique within
/// a `KnowledgeStore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub category: String,
    pub severity: Severity,
    pub description: String,
    /// Lowercase symptom phrases. Order is display order only.
    pub symptoms: Vec<String>,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
    pub home_remedies: Vec<String>,
    pub educational_videos: Vec<VideoRef>,
}

/// Link to an external educational video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRef {
    pub title: String,
    /// External platform id; the presentation layer builds the URL.
    pub video_id: String,
}
