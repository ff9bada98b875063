// tests/config_test.rs
use npub::config::{load_config, Config};
use npub::PublishError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[branch]
release = "main"

[publish]
delay_secs = 0
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.branch.release, "main");
    assert_eq!(config.branch.remote, "origin");
    assert_eq!(config.publish.delay_secs, 0);
    assert_eq!(config.publish.precheck_script, "npub:precheck");
    assert_eq!(config.git, Config::default().git);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = load_config(Some("/nonexistent/npub.toml")).unwrap_err();
    assert!(matches!(err, PublishError::Config(_)));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[publish]\ndelay_secs = \"soon\"\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("cannot parse"));
}
