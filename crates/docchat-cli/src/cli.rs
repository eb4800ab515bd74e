use std::path::PathBuf;

use clap::Parser;

/// docchat: chat with a document-analysis backend from the terminal.
#[derive(Parser, Debug)]
#[command(name = "docchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend base URL override (e.g. http://127.0.0.1:5000).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print backend failure details under error lines.
    #[arg(long)]
    pub show_diagnostics: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
