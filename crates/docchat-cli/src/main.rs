mod boot;
mod cli;
mod presenter;
mod repl;

use std::sync::Arc;

use docchat_common::Notification;
use docchat_config::DocchatConfig;
use docchat_core::{ConversationSession, HttpBackendClient, Presenter};

use crate::presenter::TerminalPresenter;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Log from the start so config loading is visible; the config file's
    // level is applied once it is read, unless --log-level was given.
    let logging = boot::init_logging(args.log_level.as_deref().unwrap_or("info"));

    let config = match docchat_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            DocchatConfig::default()
        }
    };
    if args.log_level.is_none() {
        logging.set_level(config.logging.level.as_directive());
    }

    let backend_config = boot::backend_config(&config, args.base_url.as_deref());
    let max_upload_bytes = backend_config.max_upload_bytes;
    tracing::info!(base_url = %backend_config.base_url, "docchat starting");

    let client = match HttpBackendClient::new(backend_config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build backend client");
            std::process::exit(1);
        }
    };

    let presenter = TerminalPresenter::new(std::io::stdout(), args.show_diagnostics);
    let mut session = ConversationSession::new(Arc::new(client), presenter).with_feedback_labels(
        config.feedback.helpful_label.as_str(),
        config.feedback.not_helpful_label.as_str(),
    );
    session
        .presenter_mut()
        .on_notice(Notification::info("docchat", repl::HELP));

    if let Err(e) = repl::run(&mut session, max_upload_bytes).await {
        tracing::error!(error = %e, "Session ended with an error");
        std::process::exit(1);
    }

    tracing::info!(
        session = %session.session_id().short(),
        messages = session.len(),
        "docchat exiting"
    );
}
