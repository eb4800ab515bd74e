//! Startup wiring: logging, and mapping config onto the backend client.

use std::time::Duration;

use docchat_config::DocchatConfig;
use docchat_core::HttpBackendConfig;
use tracing::warn;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const LOG_TARGETS: [&str; 3] = ["docchat_cli", "docchat_core", "docchat_config"];

/// Handle on the installed subscriber's filter.
pub struct Logging {
    handle: reload::Handle<EnvFilter, Registry>,
}

impl Logging {
    /// Swap in a new level spec, e.g. the one from the config file.
    pub fn set_level(&self, spec: &str) {
        let (filter, rejected) = log_filter(spec);
        if let Err(e) = self.handle.reload(filter) {
            warn!(error = %e, "Failed to apply log level");
            return;
        }
        report_rejected(&rejected);
    }
}

/// Build the log filter: `RUST_LOG` plus `spec`.
///
/// `spec` is a comma-separated list. Bare levels (`debug`, `WARNING`) apply
/// to this workspace's crates; `target=level` entries are added as given.
/// Entries that do not parse are returned; if no bare level parses, the
/// workspace crates log at `info`.
pub fn log_filter(spec: &str) -> (EnvFilter, Vec<String>) {
    let mut filter = EnvFilter::from_default_env();
    let mut rejected = Vec::new();
    let mut level = None;

    for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if part.contains('=') {
            match part.parse::<Directive>() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(_) => rejected.push(part.to_string()),
            }
            continue;
        }
        let name = match part.to_ascii_lowercase().as_str() {
            "warning" => "warn".to_string(),
            other => other.to_string(),
        };
        match name.parse::<LevelFilter>() {
            Ok(parsed) => level = Some(parsed),
            Err(_) => rejected.push(part.to_string()),
        }
    }

    let level = level.unwrap_or(LevelFilter::INFO);
    for target in LOG_TARGETS {
        if let Ok(directive) = format!("{target}={level}").parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    (filter, rejected)
}

fn report_rejected(rejected: &[String]) {
    for entry in rejected {
        warn!(directive = %entry, "Ignoring invalid log directive");
    }
}

/// Install the stderr subscriber. Stdout is reserved for the conversation.
pub fn init_logging(spec: &str) -> Logging {
    let (filter, rejected) = log_filter(spec);
    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    report_rejected(&rejected);
    Logging { handle }
}

pub fn backend_config(config: &DocchatConfig, base_url: Option<&str>) -> HttpBackendConfig {
    let base_url = base_url.unwrap_or(&config.backend.base_url);
    HttpBackendConfig::new(base_url)
        .with_timeouts(
            Duration::from_secs(u64::from(config.backend.connect_timeout_secs)),
            Duration::from_secs(u64::from(config.backend.request_timeout_secs)),
        )
        .with_max_upload_bytes(config.upload.max_file_size_bytes())
        .with_allowed_extensions(config.upload.allowed_extensions.iter().cloned())
}
