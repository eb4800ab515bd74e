//! Full configuration validation.
//!
//! Collects every range and format problem into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::DocchatConfig;
use docchat_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DocchatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_backend(&mut errors, config);
    validate_upload(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_backend(errors: &mut Vec<String>, config: &DocchatConfig) {
    let backend = &config.backend;
    if !(backend.base_url.starts_with("http://") || backend.base_url.starts_with("https://")) {
        errors.push(format!(
            "backend.base_url = {:?} must start with http:// or https://",
            backend.base_url
        ));
    }
    validate_range(
        errors,
        "backend.connect_timeout_secs",
        backend.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "backend.request_timeout_secs",
        backend.request_timeout_secs,
        1,
        600,
    );
}

fn validate_upload(errors: &mut Vec<String>, config: &DocchatConfig) {
    let upload = &config.upload;
    validate_range(errors, "upload.max_file_size_mb", upload.max_file_size_mb, 1, 100);

    if upload.allowed_extensions.is_empty() {
        errors.push("upload.allowed_extensions must not be empty".into());
    }
    for ext in &upload.allowed_extensions {
        if ext.is_empty() || ext.starts_with('.') {
            errors.push(format!(
                "upload.allowed_extensions entry {ext:?} must be a bare extension like \"pdf\""
            ));
        }
    }
}
