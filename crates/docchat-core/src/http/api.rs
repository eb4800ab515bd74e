//! BackendClient trait implementation for HttpBackendClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{BackendClient, BackendError, ChatReply, FeedbackPayload, FileHandle, UploadReply};

use super::client::HttpBackendClient;
use super::wire;

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn send_chat(&self, text: &str) -> Result<ChatReply, BackendError> {
        let url = self.endpoint("chat");
        debug!(%url, chars = text.len(), "Chat request");

        let request = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "message": text }));
        let body = self.execute(request).await?;
        wire::parse_chat_reply(&body)
    }

    async fn send_upload(&self, file: &FileHandle) -> Result<UploadReply, BackendError> {
        wire::validate_upload(
            file,
            self.config.max_upload_bytes,
            &self.config.allowed_extensions,
        )?;

        let url = self.endpoint("upload");
        debug!(%url, file = %file.name, size = file.bytes.len(), "Upload request");

        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(wire::mime_for(file))
            .map_err(|e| BackendError::Rejected(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let body = self.execute(self.http.post(&url).multipart(form)).await?;
        wire::parse_upload_reply(&body, &file.name)
    }

    async fn send_feedback(&self, feedback: &FeedbackPayload) -> Result<(), BackendError> {
        let url = self.endpoint("feedback");
        debug!(%url, helpful = feedback.helpful, "Feedback request");

        let request = self.http.post(&url).json(&wire::feedback_body(feedback));
        self.execute(request).await?;
        Ok(())
    }
}
