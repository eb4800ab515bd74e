//! HTTP transport for the chat/upload/feedback backend.
//!
//! Implements `BackendClient` against the backend's JSON routes:
//! `POST /api/chat`, `POST /api/upload` (multipart) and `POST /api/feedback`.

mod api;
mod client;
mod config;
mod wire;

pub use client::HttpBackendClient;
pub use config::HttpBackendConfig;
