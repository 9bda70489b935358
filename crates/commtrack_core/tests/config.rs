use commtrack_core::config::MAX_REPORT_WINDOW_DAYS;
use commtrack_core::{ConfigError, TrackerConfig};
use std::path::PathBuf;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TrackerConfig::load(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, TrackerConfig::default());
    assert_eq!(config.report_window_days, 30);
    assert_eq!(config.recent_history_limit, 5);
    assert_eq!(config.state_key, "communication-tracker-storage");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commtrack.toml");
    std::fs::write(
        &path,
        "db_path = \"/var/lib/commtrack/tracker.sqlite3\"\nreport_window_days = 90\n",
    )
    .unwrap();

    let config = TrackerConfig::load(&path).unwrap();

    assert_eq!(config.db_path, PathBuf::from("/var/lib/commtrack/tracker.sqlite3"));
    assert_eq!(config.report_window_days, 90);
    assert_eq!(config.methods_key, "communication-methods-storage");
    assert_eq!(config.log_dir, None);
}

#[test]
fn invalid_values_are_rejected() {
    let err = TrackerConfig::from_toml_str("report_window_days = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = TrackerConfig::from_toml_str("state_key = \"same\"\nmethods_key = \"same\"")
        .unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = TrackerConfig::from_toml_str("report_window_days = \"thirty\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn storage_keys_follow_config() {
    let config = TrackerConfig::from_toml_str("state_key = \"a\"\nmethods_key = \"b\"").unwrap();
    let keys = config.storage_keys();
    assert_eq!(keys.state_key, "a");
    assert_eq!(keys.methods_key, "b");
}

#[test]
fn report_window_is_bounded() {
    let config =
        TrackerConfig::from_toml_str(&format!("report_window_days = {MAX_REPORT_WINDOW_DAYS}"))
            .unwrap();
    assert_eq!(config.report_window_days, MAX_REPORT_WINDOW_DAYS);

    let err = TrackerConfig::from_toml_str("report_window_days = 4294967295").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("report_window_days"));
}
