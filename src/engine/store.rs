use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::{Condition, ResourceBundle, Severity, VideoRef};

use super::types::ConfigError;

/// One keyword-index entry: a lowercase symptom phrase and the condition
/// ids it is diagnostic for. Entries keep their load order; the analyzer
/// scans them in exactly this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub condition_ids: Vec<String>,
}

/// One knowledge-pattern entry: a comma-joined set of lowercase symptom
/// phrases and the resource bundles it unlocks. Entries keep their load
/// order; the pattern matcher scans them in exactly this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub pattern: String,
    pub bundles: Vec<ResourceBundle>,
}

/// Immutable in-memory knowledge base: condition table, keyword index,
/// and pattern table. Built once at startup, validated on construction,
/// then shared freely across threads (no interior mutability).
#[derive(Debug)]
pub struct KnowledgeStore {
    conditions: Vec<Condition>,
    by_id: HashMap<String, usize>,
    keywords: Vec<KeywordEntry>,
    patterns: Vec<PatternEntry>,
}

impl KnowledgeStore {
    /// Validated construction. Fails if a condition id appears twice, a
    /// keyword maps to no ids, or a keyword references an id with no
    /// condition entry. Patterns are deliberately not cross-checked: a
    /// bundle may name a condition the table has no entry for.
    pub fn from_parts(
        conditions: Vec<Condition>,
        keywords: Vec<KeywordEntry>,
        patterns: Vec<PatternEntry>,
    ) -> Result<Self, ConfigError> {
        let mut by_id = HashMap::with_capacity(conditions.len());
        for (idx, condition) in conditions.iter().enumerate() {
            if by_id.insert(condition.id.clone(), idx).is_some() {
                return Err(ConfigError::DuplicateCondition(condition.id.clone()));
            }
        }

        for entry in &keywords {
            if entry.condition_ids.is_empty() {
                return Err(ConfigError::EmptyKeyword(entry.keyword.clone()));
            }
            for id in &entry.condition_ids {
                if !by_id.contains_key(id) {
                    return Err(ConfigError::UnknownCondition {
                        keyword: entry.keyword.clone(),
                        condition_id: id.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            conditions = conditions.len(),
            keywords = keywords.len(),
            patterns = patterns.len(),
            "Knowledge store validated"
        );

        Ok(Self {
            conditions,
            by_id,
            keywords,
            patterns,
        })
    }

    /// Load the knowledge base from a resources directory containing
    /// `conditions.json`, `keyword_index.json`, and `knowledge_patterns.json`.
    pub fn load(resources_dir: &Path) -> Result<Self, ConfigError> {
        let conditions: Vec<Condition> = read_json(&resources_dir.join("conditions.json"))?;
        let keywords: Vec<KeywordEntry> = read_json(&resources_dir.join("keyword_index.json"))?;
        let patterns: Vec<PatternEntry> =
            read_json(&resources_dir.join("knowledge_patterns.json"))?;
        Self::from_parts(conditions, keywords, patterns)
    }

    /// Load the knowledge base bundled with the crate.
    pub fn builtin() -> Result<Self, ConfigError> {
        let conditions: Vec<Condition> = parse_json(
            "conditions.json",
            include_str!("../../resources/conditions.json"),
        )?;
        let keywords: Vec<KeywordEntry> = parse_json(
            "keyword_index.json",
            include_str!("../../resources/keyword_index.json"),
        )?;
        let patterns: Vec<PatternEntry> = parse_json(
            "knowledge_patterns.json",
            include_str!("../../resources/knowledge_patterns.json"),
        )?;
        Self::from_parts(conditions, keywords, patterns)
    }

    /// Create a small store for tests (no file I/O).
    pub fn load_test() -> Self {
        let conditions = vec![
            test_condition("common_cold", "Common Cold", Severity::Mild, &[
                "runny nose", "sneezing", "sore throat", "cough",
            ]),
            test_condition("flu", "Influenza (Flu)", Severity::Moderate, &[
                "fever", "chills", "body aches", "cough", "runny nose",
            ]),
            test_condition("covid19", "COVID-19", Severity::ModerateSevere, &[
                "fever", "cough", "shortness of breath", "loss of taste",
            ]),
            test_condition("asthma", "Asthma", Severity::ModerateSevere, &[
                "wheezing", "shortness of breath", "cough",
            ]),
            test_condition("pneumonia", "Pneumonia", Severity::Severe, &[
                "high fever", "chest pain", "shortness of breath",
            ]),
            test_condition("arthritis", "Arthritis", Severity::Moderate, &[
                "joint pain", "stiffness",
            ]),
        ];

        let keywords = vec![
            keyword("runny nose", &["common_cold", "flu"]),
            keyword("cough", &["common_cold", "flu", "covid19", "asthma"]),
            keyword("fever", &["flu", "covid19", "pneumonia"]),
            keyword("shortness of breath", &["covid19", "asthma", "pneumonia"]),
            keyword("wheezing", &["asthma"]),
            keyword("joint pain", &["arthritis"]),
            keyword("chest pain", &["pneumonia"]),
        ];

        let patterns = vec![
            PatternEntry {
                pattern: "fever, cough, shortness of breath".into(),
                bundles: vec![ResourceBundle {
                    condition: "COVID-19".into(),
                    specialists: vec!["Infectious Disease Specialist".into()],
                    articles: vec!["COVID-19: symptoms, testing, and recovery".into()],
                    videos: vec!["Understanding COVID-19".into()],
                }],
            },
            PatternEntry {
                pattern: "joint pain, stiffness, swelling".into(),
                bundles: vec![ResourceBundle {
                    condition: "Arthritis".into(),
                    specialists: vec!["Rheumatologist".into()],
                    articles: vec!["Exercise for painful joints".into()],
                    videos: vec!["Living well with arthritis".into()],
                }],
            },
        ];

        Self::from_parts(conditions, keywords, patterns)
            .expect("test knowledge base is consistent")
    }

    /// Look up a condition by id.
    pub fn condition(&self, id: &str) -> Option<&Condition> {
        self.by_id.get(id).map(|&idx| &self.conditions[idx])
    }

    /// All conditions, in load order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Keyword index in its defined iteration order.
    pub fn keywords(&self) -> &[KeywordEntry] {
        &self.keywords
    }

    /// Pattern table in its defined iteration order.
    pub fn patterns(&self) -> &[PatternEntry] {
        &self.patterns
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(path.display().to_string(), e.to_string()))?;
    parse_json(&path.display().to_string(), &raw)
}

fn parse_json<T: serde::de::DeserializeOwned>(source: &str, raw: &str) -> Result<T, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::Parse(source.to_string(), e.to_string()))
}

fn test_condition(id: &str, name: &str, severity: Severity, symptoms: &[&str]) -> Condition {
    Condition {
        id: id.into(),
        name: name.into(),
        category: "Test".into(),
        severity,
        description: format!("{name} test entry"),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        recommendations: vec!["Rest and drink plenty of fluids".into()],
        warnings: vec![],
        home_remedies: vec![],
        educational_videos: vec![VideoRef {
            title: format!("{name} explained"),
            video_id: "dQw4w9WgXcQ".into(),
        }],
    }
}

fn keyword(kw: &str, ids: &[&str]) -> KeywordEntry {
    KeywordEntry {
        keyword: kw.into(),
        condition_ids: ids.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_loads_and_validates() {
        let store = KnowledgeStore::builtin().unwrap();
        assert!(!store.conditions().is_empty());
        assert!(!store.keywords().is_empty());
        assert!(!store.patterns().is_empty());
        assert!(store.condition("common_cold").is_some());
    }

    #[test]
    fn builtin_severities_span_the_scale() {
        let store = KnowledgeStore::builtin().unwrap();
        for severity in [Severity::Mild, Severity::Moderate, Severity::Severe] {
            assert!(
                store.conditions().iter().any(|c| c.severity == severity),
                "no {} condition in builtin data",
                severity.as_str()
            );
        }
    }

    #[test]
    fn duplicate_condition_id_rejected() {
        let conditions = vec![
            test_condition("flu", "Influenza", Severity::Moderate, &["fever"]),
            test_condition("flu", "Influenza again", Severity::Moderate, &["fever"]),
        ];
        let err = KnowledgeStore::from_parts(conditions, vec![], vec![]).unwrap_err();
        match err {
            ConfigError::DuplicateCondition(id) => assert_eq!(id, "flu"),
            other => panic!("Expected DuplicateCondition, got: {:?}", other),
        }
    }

    #[test]
    fn dangling_keyword_rejected() {
        let conditions = vec![test_condition("flu", "Influenza", Severity::Moderate, &["fever"])];
        let keywords = vec![keyword("fever", &["flu", "dengue"])];
        let err = KnowledgeStore::from_parts(conditions, keywords, vec![]).unwrap_err();
        match err {
            ConfigError::UnknownCondition {
                keyword,
                condition_id,
            } => {
                assert_eq!(keyword, "fever");
                assert_eq!(condition_id, "dengue");
            }
            other => panic!("Expected UnknownCondition, got: {:?}", other),
        }
    }

    #[test]
    fn empty_keyword_mapping_rejected() {
        let conditions = vec![test_condition("flu", "Influenza", Severity::Moderate, &["fever"])];
        let keywords = vec![keyword("fever", &[])];
        let err = KnowledgeStore::from_parts(conditions, keywords, vec![]).unwrap_err();
        match err {
            ConfigError::EmptyKeyword(kw) => assert_eq!(kw, "fever"),
            other => panic!("Expected EmptyKeyword, got: {:?}", other),
        }
    }

    #[test]
    fn patterns_may_reference_unknown_conditions() {
        let conditions = vec![test_condition("flu", "Influenza", Severity::Moderate, &["fever"])];
        let patterns = vec![PatternEntry {
            pattern: "chest pain, dizziness".into(),
            bundles: vec![ResourceBundle {
                condition: "Heart Disease".into(),
                specialists: vec!["Cardiologist".into()],
                articles: vec![],
                videos: vec![],
            }],
        }];
        assert!(KnowledgeStore::from_parts(conditions, vec![], patterns).is_ok());
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["conditions.json", "keyword_index.json", "knowledge_patterns.json"] {
            let bundled = match name {
                "conditions.json" => include_str!("../../resources/conditions.json"),
                "keyword_index.json" => include_str!("../../resources/keyword_index.json"),
                _ => include_str!("../../resources/knowledge_patterns.json"),
            };
            std::fs::write(dir.path().join(name), bundled).unwrap();
        }

        let store = KnowledgeStore::load(dir.path()).unwrap();
        assert!(store.condition("pneumonia").is_some());
    }

    #[test]
    fn load_missing_directory_fails_with_load_error() {
        let err = KnowledgeStore::load(Path::new("/nonexistent/resources")).unwrap_err();
        match err {
            ConfigError::Load(path, _) => assert!(path.contains("conditions.json")),
            other => panic!("Expected Load, got: {:?}", other),
        }
    }

    #[test]
    fn invalid_severity_fails_at_parse() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("conditions.json"),
            r#"[{
                "id": "flu", "name": "Flu", "category": "Respiratory",
                "severity": "apocalyptic", "description": "",
                "symptoms": [], "recommendations": [], "warnings": [],
                "home_remedies": [], "educational_videos": []
            }]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("keyword_index.json"), "[]").unwrap();
        std::fs::write(dir.path().join("knowledge_patterns.json"), "[]").unwrap();

        let err = KnowledgeStore::load(dir.path()).unwrap_err();
        match err {
            ConfigError::Parse(source, detail) => {
                assert!(source.contains("conditions.json"));
                assert!(detail.contains("apocalyptic") || detail.contains("variant"));
            }
            other => panic!("Expected Parse, got: {:?}", other),
        }
    }

    #[test]
    fn iteration_order_is_load_order() {
        let store = KnowledgeStore::load_test();
        let keys: Vec<&str> = store.keywords().iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keys[0], "runny nose");
        assert_eq!(keys[1], "cough");
    }
}
