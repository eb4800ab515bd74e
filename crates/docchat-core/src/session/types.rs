//! Session result types and the internal shape of in-flight requests.

use futures_util::future::BoxFuture;

use crate::message::{MessageId, PendingRequest, RequestId};
use crate::{BackendError, ChatReply, UploadReply};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("message {0} does not exist or cannot receive feedback")]
    InvalidMessage(MessageId),
    #[error("feedback for message {0} was already submitted")]
    AlreadySubmitted(MessageId),
}

impl From<SessionError> for docchat_common::DocchatError {
    fn from(err: SessionError) -> Self {
        docchat_common::DocchatError::Session(err.to_string())
    }
}

/// What happened when an outstanding request resolved.
#[derive(Debug)]
pub struct Completion {
    pub request: PendingRequest,
    /// Messages appended as a result, in append order.
    pub appended: Vec<MessageId>,
    /// The backend failure, if the request failed.
    pub error: Option<BackendError>,
}

impl Completion {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Backend result carried back to the session.
pub(super) enum Outcome {
    Chat(Result<ChatReply, BackendError>),
    Upload {
        file_name: String,
        result: Result<UploadReply, BackendError>,
    },
    Feedback(Result<(), BackendError>),
}

pub(super) type InFlight = BoxFuture<'static, (RequestId, Outcome)>;
