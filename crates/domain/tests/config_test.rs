use host_monitor_domain::config::monitor::MAX_POLL_INTERVAL_SECS;
use host_monitor_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.tracker.offline_timeout_secs, 300);
    assert_eq!(config.tracker.offline_timeout(), Duration::from_secs(300));
    assert_eq!(config.tracker.queue_capacity, 128);
    assert_eq!(config.monitor.arp_path, "/proc/net/arp");
    assert_eq!(config.monitor.poll_interval_secs, 15);
    assert!(config.monitor.interface.is_none());
    assert!(config.monitor.vendor_db_path.is_none());
    assert!(config.monitor.print_table);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_file_uses_defaults() {
    let toml_str = r#"
        [tracker]
        offline_timeout_secs = 60

        [monitor]
        interface = "eth0"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.tracker.offline_timeout_secs, 60);
    assert_eq!(config.tracker.queue_capacity, 128);
    assert_eq!(config.monitor.interface.as_deref(), Some("eth0"));
    assert_eq!(config.monitor.poll_interval_secs, 15);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_load_from_explicit_path_with_overrides() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
[tracker]
offline_timeout_secs = 120

[monitor]
poll_interval_secs = 30
"#,
    )
    .unwrap();
    file.flush().unwrap();

    let overrides = CliOverrides {
        interface: Some("wlan0".to_string()),
        poll_interval_secs: Some(5),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    let config = Config::load(file.path().to_str(), overrides).unwrap();
    assert_eq!(config.tracker.offline_timeout_secs, 120);
    assert_eq!(config.monitor.poll_interval_secs, 5);
    assert_eq!(config.monitor.interface.as_deref(), Some("wlan0"));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_load_missing_file_fails() {
    let result = Config::load(Some("/nonexistent/host-monitor.toml"), CliOverrides::default());
    assert!(result.is_err());
}

#[test]
fn test_config_load_invalid_toml_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[tracker\noffline_timeout_secs = ").unwrap();
    file.flush().unwrap();

    let result = Config::load(file.path().to_str(), CliOverrides::default());
    assert!(result.is_err());
}

#[test]
fn test_config_validation_rejects_zero_values() {
    let mut config = Config::default();
    config.tracker.offline_timeout_secs = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.tracker.queue_capacity = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.monitor.poll_interval_secs = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.monitor.arp_path = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_bounds_poll_interval() {
    let mut config = Config::default();
    config.monitor.poll_interval_secs = MAX_POLL_INTERVAL_SECS;
    assert!(config.validate().is_ok());

    config.monitor.poll_interval_secs = MAX_POLL_INTERVAL_SECS + 1;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    config.monitor.poll_interval_secs = u64::MAX;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_load_rejects_huge_poll_interval_override() {
    let config = Config::load(
        None,
        CliOverrides {
            poll_interval_secs: Some(u64::MAX),
            ..Default::default()
        },
    )
    .unwrap();

    assert!(config.validate().is_err());
}

#[test]
fn test_config_save_and_reload() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();

    let mut config = Config::default();
    config.tracker.offline_timeout_secs = 42;
    config.monitor.vendor_db_path = Some("/usr/share/nmap/nmap-mac-prefixes".to_string());
    config.save(path).unwrap();

    let reloaded = Config::load(Some(path), CliOverrides::default()).unwrap();
    assert_eq!(reloaded.tracker.offline_timeout_secs, 42);
    assert_eq!(
        reloaded.monitor.vendor_db_path.as_deref(),
        Some("/usr/share/nmap/nmap-mac-prefixes")
    );
}
