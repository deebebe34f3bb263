use super::*;
use crate::config::constants::{LOG_FILE_PATH, STORE_FILE_PATH};

#[test]
fn test_load_configuration() {
    let config = load_configuration("./testdata/config.toml").expect("failed to load config");

    assert_eq!(config.general.verbose, true);
    assert_eq!(
        config.general.welcome_message.as_deref(),
        Some("Hello! What are we tracking today?")
    );

    let log = &config.log;
    assert_eq!(log.level.as_deref(), Some("debug"));

    let log_filters = log.filters.as_deref().unwrap_or_default();
    assert_eq!(log_filters.len(), 1);
    assert_eq!(log_filters[0].module.as_deref(), Some("goaltrack::storage"));
    assert_eq!(log_filters[0].level.as_deref(), Some("trace"));

    let log_file = &log.file;
    assert_eq!(log_file.path, "/var/log/goaltrack.log");
    assert_eq!(log_file.append, true);

    assert_eq!(config.storage.path(), "/var/lib/goaltrack/goals.json");
}

#[test]
fn test_empty_configuration_uses_defaults() {
    let config: Configuration = toml::from_str("").expect("failed to parse empty config");

    assert_eq!(config.general.verbose, false);
    assert_eq!(config.log.level.as_deref(), Some("info"));
    assert_eq!(config.log.file.path, LOG_FILE_PATH);
    assert_eq!(config.log.file.append, false);
    assert_eq!(config.storage.path(), STORE_FILE_PATH);
}

#[test]
fn test_load_configuration_missing_file() {
    let err = load_configuration("./testdata/no-such-config.toml").unwrap_err();
    assert!(err.to_string().contains("no-such-config.toml"));
}
