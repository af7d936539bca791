use serde::{Deserialize, Serialize};

use crate::engine::types::ConfigError;

/// Clinical severity of a condition. Variants are declared mildest-first so
/// `Severity::Severe` compares greatest.
///
/// Severity drives two things downstream: the badge color picked by the
/// presentation layer and the confidence floor applied by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Mild,
    MildModerate,
    Moderate,
    ModerateSevere,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::MildModerate => "mild-moderate",
            Self::Moderate => "moderate",
            Self::ModerateSevere => "moderate-severe",
            Self::Severe => "severe",
        }
    }

    pub fn is_severe(&self) -> bool {
        matches!(self, Self::Severe)
    }

    /// Hex color the presentation layer uses for severity badges.
    pub fn display_color(&self) -> &'static str {
        match self {
            Self::Mild => "#48bb78",
            Self::MildModerate => "#a0c45a",
            Self::Moderate => "#ecc94b",
            Self::ModerateSevere => "#ed8936",
            Self::Severe => "#e53e3e",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mild" => Ok(Self::Mild),
            "mild-moderate" => Ok(Self::MildModerate),
            "moderate" => Ok(Self::Moderate),
            "moderate-severe" => Ok(Self::ModerateSevere),
            "severe" => Ok(Self::Severe),
            _ => Err(ConfigError::InvalidEnum {
                field: "severity".into(),
                value: s.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Mild < Severity::MildModerate);
        assert!(Severity::MildModerate < Severity::Moderate);
        assert!(Severity::Moderate < Severity::ModerateSevere);
        assert!(Severity::ModerateSevere < Severity::Severe);
    }

    #[test]
    fn severity_str_round_trip() {
        for s in [
            Severity::Mild,
            Severity::MildModerate,
            Severity::Moderate,
            Severity::ModerateSevere,
            Severity::Severe,
        ] {
            assert_eq!(Severity::from_str(s.as_str()).unwrap(), s);
        }
    }

    #[test]
    fn severity_invalid_value() {
        let err = Severity::from_str("critical").unwrap_err();
        match err {
            ConfigError::InvalidEnum { field, value } => {
                assert_eq!(field, "severity");
                assert_eq!(value, "critical");
            }
            other => panic!("Expected InvalidEnum, got: {:?}", other),
        }
    }

    #[test]
    fn severity_serde_kebab_case() {
        let json = serde_json::to_string(&Severity::ModerateSevere).unwrap();
        assert_eq!(json, "\"moderate-severe\"");
        let back: Severity = serde_json::from_str("\"mild-moderate\"").unwrap();
        assert_eq!(back, Severity::MildModerate);
    }

    #[test]
    fn severity_serde_rejects_unknown() {
        assert!(serde_json::from_str::<Severity>("\"terminal\"").is_err());
    }

    #[test]
    fn only_severe_is_severe() {
        assert!(Severity::Severe.is_severe());
        assert!(!Severity::ModerateSevere.is_severe());
    }
}
