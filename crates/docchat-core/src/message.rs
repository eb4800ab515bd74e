//! Conversation log entries and the bookkeeping records attached to them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a message within one session. Assigned in append order,
/// starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a backend request within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// Local failure summaries (backend errors rendered into the log).
    Error,
}

/// One entry in the conversation log. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub display_text: String,
    /// Unformatted backend payload. Only set on assistant replies that may
    /// receive feedback.
    pub raw_text: Option<String>,
    /// Zero-based position in the log.
    pub created_at: u64,
    /// The user message that opened the exchange this message answers.
    pub reply_to: Option<MessageId>,
}

impl Message {
    /// Assistant message with non-empty raw content.
    pub fn is_feedback_eligible(&self) -> bool {
        self.role == Role::Assistant && self.raw_text.as_deref().is_some_and(|raw| !raw.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Chat,
    Upload,
    Feedback,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Chat => "chat",
            RequestKind::Upload => "upload",
            RequestKind::Feedback => "feedback",
        }
    }
}

/// An outstanding backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub kind: RequestKind,
    /// For chat and upload: the user message whose reply is awaited.
    /// For feedback: the assistant message being judged.
    pub correlated_message_id: Option<MessageId>,
}

/// A user's judgment on an assistant message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub message_id: MessageId,
    pub helpful: bool,
    pub submitted: bool,
}
