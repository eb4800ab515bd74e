//! Backend connection configuration.

use serde::{Deserialize, Serialize};

/// Where the chat/upload/feedback server lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL; the `/api/*` routes are appended to it.
    pub base_url: String,
    /// Valid range: 1-120.
    pub connect_timeout_secs: u32,
    /// Valid range: 1-600.
    pub request_timeout_secs: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
