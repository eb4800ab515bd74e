//! Configuration schema types for docchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod backend;
mod feedback;
mod system;
mod upload;

pub use backend::*;
pub use feedback::*;
pub use system::*;
pub use upload::*;

use serde::{Deserialize, Serialize};

/// Root configuration for docchat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct DocchatConfig {
    pub backend: BackendConfig,
    pub upload: UploadConfig,
    pub feedback: FeedbackConfig,
    pub logging: LoggingConfig,
}
