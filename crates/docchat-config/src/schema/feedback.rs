use serde::{Deserialize, Serialize};

/// Labels shown once a message has been judged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub helpful_label: String,
    pub not_helpful_label: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            helpful_label: "Marked as helpful".into(),
            not_helpful_label: "Marked as not helpful".into(),
        }
    }
}
