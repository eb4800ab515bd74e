//! Conversation session management.
//!
//! A `ConversationSession` holds the append-only message log, the set of
//! outstanding backend requests, and the feedback records attached to
//! assistant replies.

mod exchange;
mod manager;
mod types;


pub use manager::ConversationSession;
pub use types::{Completion, SessionError};
