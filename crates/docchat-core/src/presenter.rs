//! Rendering surface driven by the session.

use docchat_common::Notification;

use crate::message::{Message, MessageId, RequestKind};

/// Receives every state change of a `ConversationSession`, synchronously
/// and in the order the changes are applied.
pub trait Presenter: Send {
    /// Called once per new message, in append order.
    fn on_message_appended(&mut self, message: &Message);

    /// Called when feedback for `message_id` becomes submitted, so the
    /// surface can stop offering feedback for it.
    fn on_feedback_state_changed(&mut self, message_id: MessageId, submitted: bool, label: &str);

    /// Transient notice that is not part of the conversation log.
    fn on_notice(&mut self, _notice: Notification) {}

    /// Full failure detail for a backend request, for diagnostics only.
    fn on_diagnostic(&mut self, _kind: RequestKind, _detail: &str) {}
}
