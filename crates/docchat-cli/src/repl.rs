//! Interactive loop: reads commands from stdin while applying backend
//! completions as they arrive.

use std::io::Write;
use std::path::PathBuf;

use docchat_common::Notification;
use docchat_core::{ConversationSession, FileHandle, MessageId, Presenter};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::presenter::TerminalPresenter;

pub const HELP: &str = "type a message to chat (start it with // to send a leading /), \
/upload <path>, /feedback <id> yes|no, /history, /quit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Chat(String),
    Upload(PathBuf),
    Feedback { message_id: MessageId, helpful: bool },
    History,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Ok(Command::Chat(line.to_string()));
    };
    if rest.starts_with('/') {
        return Ok(Command::Chat(rest.to_string()));
    }

    let (name, args) = rest
        .split_once(char::is_whitespace)
        .map(|(n, a)| (n, a.trim()))
        .unwrap_or((rest, ""));
    // Absolute paths read as text, not commands.
    if name.contains('/') {
        return Ok(Command::Chat(trimmed.to_string()));
    }

    match name {
        "upload" => {
            if args.is_empty() {
                return Err("usage: /upload <path>".into());
            }
            Ok(Command::Upload(PathBuf::from(args)))
        }
        "feedback" => {
            let mut parts = args.split_whitespace();
            let id = parts
                .next()
                .and_then(|s| s.parse::<u64>().ok())
                .ok_or("usage: /feedback <id> yes|no")?;
            let helpful = match parts.next() {
                Some("yes" | "y" | "+") => true,
                Some("no" | "n" | "-") => false,
                _ => return Err("usage: /feedback <id> yes|no".into()),
            };
            Ok(Command::Feedback {
                message_id: MessageId(id),
                helpful,
            })
        }
        "history" => Ok(Command::History),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: /{other}")),
    }
}

/// Run until `/quit` or end of input. On end of input, outstanding requests
/// are allowed to finish first.
pub async fn run<W: Write + Send>(
    session: &mut ConversationSession<TerminalPresenter<W>>,
    max_upload_bytes: u64,
) -> docchat_common::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    session.run_until_idle().await;
                    break;
                };
                if !handle_line(session, &line, max_upload_bytes).await {
                    break;
                }
            }
            Some(completion) = session.next_completion(), if session.has_pending() => {
                debug!(
                    request = %completion.request.id,
                    kind = completion.request.kind.as_str(),
                    ok = completion.is_success(),
                    "Request completed"
                );
            }
        }
    }
    Ok(())
}

/// Apply one input line. Returns `false` when the user asked to quit.
///
/// Uploads over `max_upload_bytes` are refused without reading the file.
pub async fn handle_line<W: Write + Send>(
    session: &mut ConversationSession<TerminalPresenter<W>>,
    line: &str,
    max_upload_bytes: u64,
) -> bool {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(usage) => {
            session
                .presenter_mut()
                .on_notice(Notification::warning("Invalid command", usage));
            return true;
        }
    };

    match command {
        Command::Chat(text) => {
            session.submit_user_text(&text);
        }
        Command::Upload(path) => match FileHandle::read(&path, max_upload_bytes).await {
            Ok(file) => {
                session.submit_file(file);
            }
            Err(e) => session.presenter_mut().on_notice(Notification::error(
                "Cannot read file",
                format!("{}: {e}", path.display()),
            )),
        },
        Command::Feedback {
            message_id,
            helpful,
        } => {
            if let Err(e) = session.submit_feedback(message_id, helpful) {
                session
                    .presenter_mut()
                    .on_notice(Notification::warning("Feedback refused", e.to_string()));
            }
        }
        Command::History => {
            let messages: Vec<_> = session.history().cloned().collect();
            for message in &messages {
                session.presenter_mut().render_message(message);
            }
        }
        Command::Help => session
            .presenter_mut()
            .on_notice(Notification::info("Commands", HELP)),
        Command::Quit => return false,
    }
    true
}
