//! Terminal configuration
//!
//! Lives in `<config dir>/muthur/config.toml`. Every field has a default, so
//! a missing file or a partial one is fine.

use crate::TerminalError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "muthur";
const CONFIG_FILE: &str = "config.toml";

/// Where a loaded [`Config`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub alerts: AlertSettings,

    #[serde(default)]
    pub login: LoginSettings,

    #[serde(default)]
    pub terminal: TerminalSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Background and SCAN alert behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSettings {
    /// Seconds between periodic alert rolls
    #[serde(default = "default_alert_interval")]
    pub interval_secs: u64,

    /// Chance that a periodic roll raises an alert (0.0-1.0)
    #[serde(default = "default_periodic_chance")]
    pub periodic_chance: f64,

    /// Chance that SCAN picks up an alert (0.0-1.0)
    #[serde(default = "default_scan_chance")]
    pub scan_chance: f64,
}

fn default_alert_interval() -> u64 {
    45
}

fn default_periodic_chance() -> f64 {
    0.3
}

fn default_scan_chance() -> f64 {
    crate::mainframe::DEFAULT_SCAN_ALERT_CHANCE
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_alert_interval(),
            periodic_chance: default_periodic_chance(),
            scan_chance: default_scan_chance(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginSettings {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Simulated authentication delay
    #[serde(default = "default_auth_delay")]
    pub auth_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    crate::mainframe::login::DEFAULT_MAX_ATTEMPTS
}

fn default_auth_delay() -> u64 {
    1500
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            auth_delay_ms: default_auth_delay(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalSettings {
    /// Simulated processing time per command
    #[serde(default = "default_processing_delay")]
    pub processing_delay_ms: u64,

    /// Lines kept in the scrollback
    #[serde(default = "default_max_output_lines")]
    pub max_output_lines: usize,
}

fn default_processing_delay() -> u64 {
    300
}

fn default_max_output_lines() -> usize {
    500
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay(),
            max_output_lines: default_max_output_lines(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file; the system temp dir is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

impl Config {
    /// `<config dir>/muthur/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, TerminalError> {
        Self::load_from(path).map(|(config, _)| config)
    }

    /// Like [`Config::load`], also reporting where the values came from
    pub fn load_from(path: &Path) -> Result<(Self, ConfigSource), TerminalError> {
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults));
        }

        let contents = fs::read_to_string(path).map_err(|source| TerminalError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| TerminalError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok((config.sanitized(), ConfigSource::File(path.to_path_buf())))
    }

    /// Clamp values into the ranges the terminal can use
    pub fn sanitized(mut self) -> Self {
        self.alerts.periodic_chance = clamp_chance(self.alerts.periodic_chance);
        self.alerts.scan_chance = clamp_chance(self.alerts.scan_chance);
        self.alerts.interval_secs = self.alerts.interval_secs.max(1);
        self.login.max_attempts = self.login.max_attempts.max(1);
        self.terminal.max_output_lines = self.terminal.max_output_lines.max(1);
        self
    }

    pub fn to_toml(&self) -> Result<String, TerminalError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn clamp_chance(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
