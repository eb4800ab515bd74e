//! Conversation core for docchat.
//!
//! Provides the conversation session and its collaborators:
//! - `ConversationSession`: ordered message log, in-flight request
//!   tracking, and feedback correlation
//! - `BackendClient`: chat, document upload and feedback transport
//! - `Presenter`: rendering surface notified on every state change
//! - `HttpBackendClient`: reqwest implementation of `BackendClient`

pub mod http;
pub mod markup;
pub mod message;
pub mod presenter;
pub mod session;

use std::path::Path;

use async_trait::async_trait;

pub use http::{HttpBackendClient, HttpBackendConfig};
pub use message::{FeedbackRecord, Message, MessageId, PendingRequest, RequestId, RequestKind, Role};
pub use presenter::Presenter;
pub use session::{Completion, ConversationSession, SessionError};

/// Transport for the three backend operations.
///
/// Implementations must be shareable across the session's in-flight
/// requests; the session holds them as `Arc<dyn BackendClient>`.
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn send_chat(&self, text: &str) -> Result<ChatReply, BackendError>;

    async fn send_upload(&self, file: &FileHandle) -> Result<UploadReply, BackendError>;

    async fn send_feedback(&self, feedback: &FeedbackPayload) -> Result<(), BackendError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub display_text: String,
    /// Set when the backend distinguishes the unformatted payload from the
    /// rendered one.
    pub raw_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReply {
    pub filename: String,
    pub summary: String,
    /// Set only when the summary may receive feedback.
    pub raw_summary: Option<String>,
    /// Leading excerpt of the extracted document text.
    pub preview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackPayload {
    /// Text of the user message that opened the exchange, when known.
    pub prompt: Option<String>,
    pub display_text: String,
    pub raw_text: String,
    pub helpful: bool,
}

/// A document selected for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name)
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl FileHandle {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk, naming it after the final path component.
    ///
    /// Files larger than `max_bytes` are refused from their metadata, before
    /// any content is loaded.
    pub async fn read(path: &Path, max_bytes: u64) -> std::io::Result<Self> {
        let size = tokio::fs::metadata(path).await?.len();
        if size > max_bytes {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("file is {size} bytes, limit is {max_bytes}"),
            ));
        }
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, bytes })
    }

    /// Lowercased extension, if the name has one.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend answered with an error message.
    #[error("{0}")]
    Api(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    /// Refused before sending (size, type or name checks).
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Timeout")]
    Timeout,
}

impl From<BackendError> for docchat_common::DocchatError {
    fn from(err: BackendError) -> Self {
        docchat_common::DocchatError::Backend(err.to_string())
    }
}
