//! Line-oriented rendering of the conversation for a terminal.

use std::fmt;
use std::io::Write;

use docchat_common::{Notification, NotificationLevel};
use docchat_core::{markup, Message, MessageId, Presenter, RequestKind, Role};

pub struct TerminalPresenter<W: Write> {
    out: W,
    show_diagnostics: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, show_diagnostics: bool) -> Self {
        Self {
            out,
            show_diagnostics,
        }
    }

    /// Print one message. Assistant markup is flattened to plain text.
    pub fn render_message(&mut self, message: &Message) {
        let id = message.id;
        match message.role {
            Role::User => self.line(format_args!("[{id}] you: {}", message.display_text)),
            Role::Assistant => {
                let text = markup::to_plain(&message.display_text);
                self.line(format_args!("[{id}] assistant: {text}"));
                if message.is_feedback_eligible() {
                    self.line(format_args!("    (rate it: /feedback {id} yes|no)"));
                }
            }
            Role::Error => self.line(format_args!("[{id}] error: {}", message.display_text)),
        }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{args}").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn on_message_appended(&mut self, message: &Message) {
        self.render_message(message);
    }

    fn on_feedback_state_changed(&mut self, message_id: MessageId, submitted: bool, label: &str) {
        if submitted {
            self.line(format_args!("[{message_id}] {label}"));
        }
    }

    fn on_notice(&mut self, notice: Notification) {
        let marker = match notice.level {
            NotificationLevel::Info => "*",
            NotificationLevel::Warning => "!",
            NotificationLevel::Error => "!!",
        };
        self.line(format_args!("{marker} {}: {}", notice.title, notice.body));
    }

    fn on_diagnostic(&mut self, kind: RequestKind, detail: &str) {
        if self.show_diagnostics {
            self.line(format_args!("    {} failure: {detail}", kind.as_str()));
        }
    }
}
