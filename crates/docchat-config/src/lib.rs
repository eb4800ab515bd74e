//! docchat configuration system.
//!
//! TOML-based configuration with full validation. Every section uses
//! serde defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docchat_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config.backend.base_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    BackendConfig, DocchatConfig, FeedbackConfig, LogLevel, LoggingConfig, UploadConfig,
};

use std::path::Path;

use docchat_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a commented template written on first run. An
/// explicit path must exist. The result is validated either way.
pub fn load_config(path: Option<&Path>) -> Result<DocchatConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
