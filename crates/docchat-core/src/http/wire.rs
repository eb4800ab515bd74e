//! Request bodies, response decoding and pre-send checks.
//!
//! Kept free of I/O so the backend's JSON contract can be tested directly.

use serde_json::Value;

use crate::markup;
use crate::{BackendError, ChatReply, FeedbackPayload, FileHandle, UploadReply};

/// Decode a response body. The backend reports failures as
/// `{"error": "..."}`, usually with a 4xx/5xx status.
pub(super) fn interpret(status: u16, body: &str) -> Result<Value, BackendError> {
    if status == 429 {
        return Err(BackendError::RateLimited);
    }

    let parsed = serde_json::from_str::<Value>(body);
    let success = (200..300).contains(&status);

    match parsed {
        Ok(json) => {
            if let Some(message) = json.get("error").and_then(Value::as_str) {
                return Err(BackendError::Api(message.to_string()));
            }
            if !success {
                return Err(BackendError::Api(format!("HTTP {status}")));
            }
            Ok(json)
        }
        Err(_) if !success => Err(BackendError::Api(format!("HTTP {status}: {}", body.trim()))),
        Err(e) => Err(BackendError::Parse(e.to_string())),
    }
}

/// `response` is markup; `raw`, when present, is the unformatted text.
/// A body with only `raw` gets rendered locally.
pub(super) fn parse_chat_reply(body: &Value) -> Result<ChatReply, BackendError> {
    let (display_text, raw_text) = display_and_raw(body)?;
    Ok(ChatReply {
        display_text,
        raw_text,
    })
}

pub(super) fn parse_upload_reply(body: &Value, file_name: &str) -> Result<UploadReply, BackendError> {
    let (summary, raw_summary) = display_and_raw(body)?;
    let filename = body
        .get("filename")
        .and_then(Value::as_str)
        .unwrap_or(file_name)
        .to_string();
    let preview = body
        .get("preview")
        .and_then(Value::as_str)
        .map(String::from);

    Ok(UploadReply {
        filename,
        summary,
        raw_summary,
        preview,
    })
}

fn display_and_raw(body: &Value) -> Result<(String, Option<String>), BackendError> {
    let response = body.get("response").and_then(Value::as_str);
    let raw = body.get("raw").and_then(Value::as_str).map(String::from);

    match (response, raw) {
        (Some(response), raw) => Ok((response.to_string(), raw)),
        (None, Some(raw)) => Ok((markup::render(&raw), Some(raw))),
        (None, None) => Err(BackendError::Parse("no 'response' field in reply".into())),
    }
}

pub(super) fn feedback_body(feedback: &FeedbackPayload) -> Value {
    serde_json::json!({
        "query": feedback.prompt.as_deref().unwrap_or_default(),
        "response": feedback.display_text,
        "raw_response": feedback.raw_text,
        "helpful": feedback.helpful,
    })
}

/// Reject documents the backend would refuse anyway.
pub(super) fn validate_upload(
    file: &FileHandle,
    max_bytes: u64,
    allowed_extensions: &[String],
) -> Result<(), BackendError> {
    if file.name.trim().is_empty() {
        return Err(BackendError::Rejected("empty filename".into()));
    }

    let allowed = file
        .extension()
        .is_some_and(|ext| allowed_extensions.iter().any(|a| *a == ext));
    if !allowed {
        return Err(BackendError::Rejected(format!(
            "unsupported file type: {} (allowed: {})",
            file.name,
            allowed_extensions.join(", ")
        )));
    }

    if file.bytes.len() as u64 > max_bytes {
        return Err(BackendError::Rejected(format!(
            "{} is {} bytes, limit is {max_bytes}",
            file.name,
            file.bytes.len()
        )));
    }
    Ok(())
}

pub(super) fn mime_for(file: &FileHandle) -> &'static str {
    match file.extension().as_deref() {
        Some("txt") => "text/plain",
        Some("pdf") => "application/pdf",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["txt".into(), "pdf".into(), "docx".into()]
    }

    #[test]
    fn interpret_success_body() {
        let json = interpret(200, r#"{"response": "Hi"}"#).unwrap();
        assert_eq!(json["response"], "Hi");
    }

    #[test]
    fn interpret_error_field_wins() {
        let err = interpret(400, r#"{"error": "Empty message"}"#).unwrap_err();
        assert!(matches!(err, BackendError::Api(ref m) if m == "Empty message"));

        let err = interpret(200, r#"{"error": "quota exceeded"}"#).unwrap_err();
        assert!(matches!(err, BackendError::Api(ref m) if m == "quota exceeded"));
    }

    #[test]
    fn interpret_non_json_failure_keeps_status() {
        let err = interpret(502, "Bad Gateway\n").unwrap_err();
        assert!(matches!(err, BackendError::Api(ref m) if m == "HTTP 502: Bad Gateway"));
    }

    #[test]
    fn interpret_rate_limit() {
        assert!(matches!(interpret(429, ""), Err(BackendError::RateLimited)));
    }

    #[test]
    fn interpret_garbage_success_is_parse_error() {
        assert!(matches!(interpret(200, "<html>"), Err(BackendError::Parse(_))));
    }

    #[test]
    fn chat_reply_without_raw() {
        let reply = parse_chat_reply(&serde_json::json!({"response": "<em>x</em>"})).unwrap();
        assert_eq!(reply.display_text, "<em>x</em>");
        assert_eq!(reply.raw_text, None);
    }

    #[test]
    fn chat_reply_with_only_raw_is_rendered() {
        let reply = parse_chat_reply(&serde_json::json!({"raw": "**x**"})).unwrap();
        assert_eq!(reply.display_text, "<strong>x</strong>");
        assert_eq!(reply.raw_text.as_deref(), Some("**x**"));
    }

    #[test]
    fn chat_reply_missing_fields() {
        assert!(matches!(
            parse_chat_reply(&serde_json::json!({"status": "ok"})),
            Err(BackendError::Parse(_))
        ));
    }

    #[test]
    fn upload_reply_falls_back_to_local_name() {
        let body = serde_json::json!({"response": "summary", "preview": "first lines..."});
        let reply = parse_upload_reply(&body, "doc.pdf").unwrap();
        assert_eq!(reply.filename, "doc.pdf");
        assert_eq!(reply.summary, "summary");
        assert_eq!(reply.raw_summary, None);
        assert_eq!(reply.preview.as_deref(), Some("first lines..."));
    }

    #[test]
    fn feedback_body_fields() {
        let body = feedback_body(&FeedbackPayload {
            prompt: None,
            display_text: "<em>a</em>".into(),
            raw_text: "*a*".into(),
            helpful: false,
        });
        assert_eq!(
            body,
            serde_json::json!({
                "query": "",
                "response": "<em>a</em>",
                "raw_response": "*a*",
                "helpful": false,
            })
        );
    }

    #[test]
    fn upload_checks() {
        let ok = FileHandle::new("Notes.TXT", vec![0; 10]);
        assert!(validate_upload(&ok, 10, &allowed()).is_ok());

        let too_big = FileHandle::new("notes.txt", vec![0; 11]);
        assert!(matches!(
            validate_upload(&too_big, 10, &allowed()),
            Err(BackendError::Rejected(_))
        ));

        let wrong_type = FileHandle::new("image.png", vec![0; 1]);
        let err = validate_upload(&wrong_type, 10, &allowed()).unwrap_err();
        assert!(err.to_string().contains("unsupported file type"));

        let unnamed = FileHandle::new("  ", vec![0; 1]);
        assert!(validate_upload(&unnamed, 10, &allowed()).is_err());
    }

    #[test]
    fn mime_types() {
        assert_eq!(mime_for(&FileHandle::new("a.pdf", vec![])), "application/pdf");
        assert_eq!(mime_for(&FileHandle::new("a.txt", vec![])), "text/plain");
        assert_eq!(mime_for(&FileHandle::new("a.bin", vec![])), "application/octet-stream");
    }
}
