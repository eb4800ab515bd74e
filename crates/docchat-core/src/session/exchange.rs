//! Submitting user actions and applying backend completions.

use std::sync::Arc;

use docchat_common::Notification;
use futures_util::StreamExt;
use tracing::{debug, warn};

use crate::message::{MessageId, PendingRequest, RequestId, RequestKind, Role};
use crate::presenter::Presenter;
use crate::{ChatReply, FeedbackPayload, FeedbackRecord, FileHandle, UploadReply};

use super::manager::ConversationSession;
use super::types::{Completion, Outcome, SessionError};

impl<P: Presenter> ConversationSession<P> {
    /// Append the user's text and send it to the chat backend.
    ///
    /// Whitespace-only input is ignored and returns `None`. The reply is
    /// appended later, by `next_completion`.
    pub fn submit_user_text(&mut self, text: &str) -> Option<RequestId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let user_id = self.append(Role::User, text.to_string(), None, None);
        let backend = Arc::clone(&self.backend);
        let text = text.to_string();

        let request_id = self.track(RequestKind::Chat, Some(user_id), move |request_id| {
            Box::pin(async move {
                let result = backend.send_chat(&text).await;
                (request_id, Outcome::Chat(result))
            })
        });
        debug!(session = %self.id.short(), request = %request_id, "Chat request issued");
        Some(request_id)
    }

    /// Announce the upload in the log and send the document to the backend.
    pub fn submit_file(&mut self, file: FileHandle) -> RequestId {
        let user_id = self.append(
            Role::User,
            format!("Uploading {}...", file.name),
            None,
            None,
        );
        let backend = Arc::clone(&self.backend);

        let request_id = self.track(RequestKind::Upload, Some(user_id), move |request_id| {
            Box::pin(async move {
                let result = backend.send_upload(&file).await;
                (
                    request_id,
                    Outcome::Upload {
                        file_name: file.name,
                        result,
                    },
                )
            })
        });
        debug!(session = %self.id.short(), request = %request_id, "Upload request issued");
        request_id
    }

    /// Record the user's judgment on an assistant reply and report it.
    ///
    /// The record is marked submitted before the backend call resolves and
    /// stays submitted whatever the outcome.
    pub fn submit_feedback(
        &mut self,
        message_id: MessageId,
        helpful: bool,
    ) -> Result<RequestId, SessionError> {
        let message = self
            .message(message_id)
            .filter(|m| m.is_feedback_eligible())
            .ok_or(SessionError::InvalidMessage(message_id))?;

        if self.feedback.get(&message_id).is_some_and(|r| r.submitted) {
            return Err(SessionError::AlreadySubmitted(message_id));
        }

        let payload = FeedbackPayload {
            prompt: message
                .reply_to
                .and_then(|id| self.message(id))
                .map(|m| m.display_text.clone()),
            display_text: message.display_text.clone(),
            raw_text: message.raw_text.clone().unwrap_or_default(),
            helpful,
        };

        self.feedback.insert(
            message_id,
            FeedbackRecord {
                message_id,
                helpful,
                submitted: true,
            },
        );
        let label = if helpful {
            &self.helpful_label
        } else {
            &self.not_helpful_label
        };
        self.presenter
            .on_feedback_state_changed(message_id, true, label);

        let backend = Arc::clone(&self.backend);
        let request_id = self.track(RequestKind::Feedback, Some(message_id), move |request_id| {
            Box::pin(async move {
                let result = backend.send_feedback(&payload).await;
                (request_id, Outcome::Feedback(result))
            })
        });
        debug!(
            session = %self.id.short(),
            request = %request_id,
            message = %message_id,
            helpful,
            "Feedback request issued"
        );
        Ok(request_id)
    }

    /// Wait for the next outstanding request to finish and apply it.
    ///
    /// Requests are applied in completion order. Returns `None` when nothing
    /// is outstanding. Cancel-safe: dropping the future before it resolves
    /// loses no result.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        loop {
            let (request_id, outcome) = self.in_flight.next().await?;
            match self.pending.remove(&request_id) {
                Some(request) => return Some(self.apply(request, outcome)),
                None => warn!(request = %request_id, "Completion for unknown request dropped"),
            }
        }
    }

    /// Apply completions until no request is outstanding.
    pub async fn run_until_idle(&mut self) -> Vec<Completion> {
        let mut completions = Vec::new();
        while let Some(completion) = self.next_completion().await {
            completions.push(completion);
        }
        completions
    }

    fn apply(&mut self, request: PendingRequest, outcome: Outcome) -> Completion {
        let reply_to = request.correlated_message_id;
        let (appended, error) = match outcome {
            Outcome::Chat(Ok(reply)) => (self.apply_chat_reply(reply, reply_to), None),
            Outcome::Chat(Err(err)) => {
                warn!(session = %self.id.short(), request = %request.id, error = %err, "Chat request failed");
                self.presenter.on_diagnostic(RequestKind::Chat, &err.to_string());
                let id = self.append(Role::Error, format!("Error: {err}"), None, reply_to);
                (vec![id], Some(err))
            }
            Outcome::Upload {
                result: Ok(reply), ..
            } => (self.apply_upload_reply(reply, reply_to), None),
            Outcome::Upload {
                file_name,
                result: Err(err),
            } => {
                warn!(session = %self.id.short(), request = %request.id, error = %err, "Upload request failed");
                self.presenter.on_diagnostic(RequestKind::Upload, &err.to_string());
                let id = self.append(
                    Role::Error,
                    format!("Error: could not process {file_name}"),
                    None,
                    reply_to,
                );
                (vec![id], Some(err))
            }
            Outcome::Feedback(Ok(())) => {
                debug!(session = %self.id.short(), request = %request.id, "Feedback delivered");
                (Vec::new(), None)
            }
            Outcome::Feedback(Err(err)) => {
                warn!(session = %self.id.short(), request = %request.id, error = %err, "Feedback request failed");
                self.presenter.on_notice(Notification::warning(
                    "Feedback not delivered",
                    err.to_string(),
                ));
                (Vec::new(), Some(err))
            }
        };

        Completion {
            request,
            appended,
            error,
        }
    }

    fn apply_chat_reply(&mut self, reply: ChatReply, reply_to: Option<MessageId>) -> Vec<MessageId> {
        let raw = reply
            .raw_text
            .unwrap_or_else(|| reply.display_text.clone());
        vec![self.append(Role::Assistant, reply.display_text, Some(raw), reply_to)]
    }

    fn apply_upload_reply(
        &mut self,
        reply: UploadReply,
        reply_to: Option<MessageId>,
    ) -> Vec<MessageId> {
        let mut header = format!("Processed {}", reply.filename);
        if let Some(preview) = reply.preview.filter(|p| !p.trim().is_empty()) {
            header.push_str("\n\nPreview:\n");
            header.push_str(&preview);
        }

        let header_id = self.append(Role::Assistant, header, None, reply_to);
        let summary_id = self.append(Role::Assistant, reply.summary, reply.raw_summary, reply_to);
        vec![header_id, summary_id]
    }
}

