//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `sproutd.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use sprout_adapter_mqtt::MqttConfig;
use sprout_domain::error::ValidationError;
use sprout_domain::policy::{ActuationPolicy, Comparison};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// MQTT transport settings.
    pub mqtt: MqttConfig,
    /// Actuation policy settings.
    pub policy: PolicyConfig,
    /// Raw-reading persistence settings.
    pub recorder: RecorderConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Actuation policy configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Decision boundary for the sensor value.
    pub threshold: f64,
    /// Which side of the threshold triggers (`below` or `above`).
    pub comparison: Comparison,
    /// Seconds the actuator stays on.
    pub hold_secs: u64,
    /// Seconds to wait after turning off before re-evaluating.
    pub cooldown_secs: u64,
}

/// CSV persistence configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Whether to append each reading to a CSV file.
    pub csv_enabled: bool,
    /// Path of the CSV file.
    pub csv_path: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl PolicyConfig {
    /// Build the validated domain policy from this section.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a non-finite threshold or zero
    /// hold duration.
    pub fn build(&self) -> Result<ActuationPolicy, ValidationError> {
        ActuationPolicy::new(
            self.threshold,
            self.comparison,
            std::time::Duration::from_secs(self.hold_secs),
            std::time::Duration::from_secs(self.cooldown_secs),
        )
    }
}

impl Config {
    /// Load configuration from `sproutd.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting policy fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("sproutd.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SPROUTD_BROKER") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.mqtt.broker_host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.mqtt.broker_port = port;
                }
            } else {
                self.mqtt.broker_host = val;
            }
        }
        if let Ok(val) = std::env::var("SPROUTD_DEVICE_ID") {
            if let Ok(id) = val.parse() {
                self.mqtt.device_id = id;
            }
        }
        if let Ok(val) = std::env::var("SPROUTD_THRESHOLD") {
            if let Ok(threshold) = val.parse() {
                self.policy.threshold = threshold;
            }
        }
        if let Ok(val) = std::env::var("SPROUTD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.policy.build()?;
        Ok(())
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            threshold: 15.0,
            comparison: Comparison::Below,
            hold_secs: 5,
            cooldown_secs: 20,
        }
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            csv_enabled: false,
            csv_path: "readings.csv".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sproutd=info,sprout=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration")]
    Validation(#[from] ValidationError),
}
