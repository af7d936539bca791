use serde::{Deserialize, Serialize};

/// Specialist/article/video bundle attached to a knowledge pattern.
///
/// `condition` is a display name and is independent of the `Condition`
/// table: a bundle may reference a condition the store has no entry for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceBundle {
    pub condition: String,
    pub specialists: Vec<String>,
    pub articles: Vec<String>,
    pub videos: Vec<String>,
}
