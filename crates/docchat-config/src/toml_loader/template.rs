/// Default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r##"# docchat configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[backend]
# base_url = "http://127.0.0.1:5000"
# connect_timeout_secs = 10     # 1-120
# request_timeout_secs = 120    # 1-600

[upload]
# max_file_size_mb = 10         # 1-100
# allowed_extensions = ["txt", "pdf", "docx"]

[feedback]
# helpful_label = "Marked as helpful"
# not_helpful_label = "Marked as not helpful"

[logging]
# level = "INFO"                # DEBUG | INFO | WARNING | ERROR
"##
}
