//! Document upload limits.

use serde::{Deserialize, Serialize};

/// Client-side checks applied before a document is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Valid range: 1-100.
    pub max_file_size_mb: u32,
    /// Lowercase extensions without the dot.
    pub allowed_extensions: Vec<String>,
}

impl UploadConfig {
    pub fn max_file_size_bytes(&self) -> u64 {
        u64::from(self.max_file_size_mb) * 1024 * 1024
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 10,
            allowed_extensions: vec!["txt".into(), "pdf".into(), "docx".into()],
        }
    }
}
