//! Session struct, construction, and read access to its state.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use docchat_common::SessionId;
use futures_util::stream::FuturesUnordered;
use tracing::info;

use crate::message::{FeedbackRecord, Message, MessageId, PendingRequest, RequestId, RequestKind, Role};
use crate::presenter::Presenter;
use crate::BackendClient;

use super::types::InFlight;

const DEFAULT_HELPFUL_LABEL: &str = "Marked as helpful";
const DEFAULT_NOT_HELPFUL_LABEL: &str = "Marked as not helpful";

/// One user-facing conversation.
///
/// All mutation goes through `&mut self`, so there is never more than one
/// change to the log in progress. Backend calls run as futures owned by the
/// session and are applied by `next_completion` in the order they finish.
pub struct ConversationSession<P: Presenter> {
    pub(super) id: SessionId,
    pub(super) backend: Arc<dyn BackendClient>,
    pub(super) presenter: P,
    /// Append-only log.
    pub(super) messages: Vec<Message>,
    pub(super) feedback: HashMap<MessageId, FeedbackRecord>,
    pub(super) pending: BTreeMap<RequestId, PendingRequest>,
    pub(super) in_flight: FuturesUnordered<InFlight>,
    pub(super) next_message_id: u64,
    pub(super) next_request_id: u64,
    pub(super) helpful_label: String,
    pub(super) not_helpful_label: String,
}

impl<P: Presenter> ConversationSession<P> {
    pub fn new(backend: Arc<dyn BackendClient>, presenter: P) -> Self {
        let id = SessionId::new();
        info!(session = %id.short(), "Conversation started");
        Self {
            id,
            backend,
            presenter,
            messages: Vec::new(),
            feedback: HashMap::new(),
            pending: BTreeMap::new(),
            in_flight: FuturesUnordered::new(),
            next_message_id: 1,
            next_request_id: 1,
            helpful_label: DEFAULT_HELPFUL_LABEL.to_string(),
            not_helpful_label: DEFAULT_NOT_HELPFUL_LABEL.to_string(),
        }
    }

    /// Labels passed to the presenter once feedback is submitted.
    pub fn with_feedback_labels(
        mut self,
        helpful: impl Into<String>,
        not_helpful: impl Into<String>,
    ) -> Self {
        self.helpful_label = helpful.into();
        self.not_helpful_label = not_helpful.into();
        self
    }

    pub fn session_id(&self) -> &SessionId {
        &self.id
    }

    /// The full log in append order. Cheap to call repeatedly; the log
    /// only ever grows.
    pub fn history(&self) -> impl Iterator<Item = &Message> + Clone + '_ {
        self.messages.iter()
    }

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        // Ids are dense and start at 1, so the id doubles as an index.
        let index = usize::try_from(id.0.checked_sub(1)?).ok()?;
        self.messages.get(index).filter(|m| m.id == id)
    }

    pub fn feedback(&self, id: MessageId) -> Option<&FeedbackRecord> {
        self.feedback.get(&id)
    }

    /// Outstanding requests, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &PendingRequest> + '_ {
        self.pending.values()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Append a message and notify the presenter.
    pub(super) fn append(
        &mut self,
        role: Role,
        display_text: String,
        raw_text: Option<String>,
        reply_to: Option<MessageId>,
    ) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;

        let message = Message {
            id,
            role,
            display_text,
            raw_text,
            created_at: self.messages.len() as u64,
            reply_to,
        };
        self.messages.push(message);
        if let Some(appended) = self.messages.last() {
            self.presenter.on_message_appended(appended);
        }
        id
    }

    /// Register an outstanding request and queue the call built by `start`.
    pub(super) fn track(
        &mut self,
        kind: RequestKind,
        correlated_message_id: Option<MessageId>,
        start: impl FnOnce(RequestId) -> InFlight,
    ) -> RequestId {
        let id = RequestId(self.next_request_id);
        self.next_request_id += 1;

        self.pending.insert(
            id,
            PendingRequest {
                id,
                kind,
                correlated_message_id,
            },
        );
        self.in_flight.push(start(id));
        id
    }
}
