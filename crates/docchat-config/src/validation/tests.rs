use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&DocchatConfig::default()).is_ok());
}

#[test]
fn non_http_base_url_rejected() {
    let mut config = DocchatConfig::default();
    config.backend.base_url = "ftp://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.base_url"));
}

#[test]
fn timeouts_out_of_range_rejected() {
    let mut config = DocchatConfig::default();
    config.backend.connect_timeout_secs = 0;
    config.backend.request_timeout_secs = 601;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.connect_timeout_secs = 0"));
    assert!(err.contains("backend.request_timeout_secs = 601"));
}

#[test]
fn upload_limits_checked() {
    let mut config = DocchatConfig::default();
    config.upload.max_file_size_mb = 500;
    config.upload.allowed_extensions = vec![".pdf".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("upload.max_file_size_mb = 500"));
    assert!(err.contains("\".pdf\""));
}

#[test]
fn empty_extension_list_rejected() {
    let mut config = DocchatConfig::default();
    config.upload.allowed_extensions.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("must not be empty"));
}

#[test]
fn all_errors_are_collected() {
    let mut config = DocchatConfig::default();
    config.backend.base_url = String::new();
    config.upload.max_file_size_mb = 0;
    match validate(&config) {
        Err(ConfigError::ValidationError(msg)) => {
            assert_eq!(msg.matches("; ").count(), 1);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
