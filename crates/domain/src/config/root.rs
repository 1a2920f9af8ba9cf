use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::monitor::{MonitorConfig, MAX_POLL_INTERVAL_SECS};
use super::tracker::TrackerConfig;

const LOCAL_CONFIG_PATH: &str = "host-monitor.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/host-monitor/config.toml";

/// Main configuration structure for Host Monitor
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Presence tracker tuning (offline timeout, notification queue)
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// ARP polling and host table display
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. host-monitor.toml in current directory
    /// 3. /etc/host-monitor/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(interface) = overrides.interface {
            self.monitor.interface = Some(interface);
        }
        if let Some(path) = overrides.arp_path {
            self.monitor.arp_path = path;
        }
        if let Some(secs) = overrides.poll_interval_secs {
            self.monitor.poll_interval_secs = secs;
        }
        if let Some(path) = overrides.vendor_db_path {
            self.monitor.vendor_db_path = Some(path);
        }
        if let Some(secs) = overrides.offline_timeout_secs {
            self.tracker.offline_timeout_secs = secs;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tracker.offline_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Offline timeout cannot be 0".to_string(),
            ));
        }

        if self.tracker.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "Notification queue capacity cannot be 0".to_string(),
            ));
        }

        if self.monitor.poll_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Poll interval cannot be 0".to_string(),
            ));
        }

        if self.monitor.poll_interval_secs > MAX_POLL_INTERVAL_SECS {
            return Err(ConfigError::Validation(format!(
                "Poll interval cannot exceed {} seconds",
                MAX_POLL_INTERVAL_SECS
            )));
        }

        if self.monitor.arp_path.trim().is_empty() {
            return Err(ConfigError::Validation("ARP path is empty".to_string()));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub interface: Option<String>,
    pub arp_path: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub offline_timeout_secs: Option<u64>,
    pub vendor_db_path: Option<String>,
    pub log_level: Option<String>,
}
