//! Application configuration management
//!
//! Handles loading and saving user preferences:
//! - Appearance (dark mode)
//! - Toast and simulation timings
//! - Profile details shown on the Profile tab

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};

/// Configurable keys, as named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    DarkMode,
    ToastDuration,
    HealthTick,
    RefreshDelay,
    ProfileName,
    ProfileEmail,
}

impl ConfigField {
    /// Name used on the command line
    pub fn key(&self) -> &'static str {
        match self {
            ConfigField::DarkMode => "dark-mode",
            ConfigField::ToastDuration => "toast-duration",
            ConfigField::HealthTick => "health-tick",
            ConfigField::RefreshDelay => "refresh-delay",
            ConfigField::ProfileName => "profile-name",
            ConfigField::ProfileEmail => "profile-email",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Start in dark mode
    #[serde(default)]
    pub dark_mode: bool,

    /// How long a toast stays visible, in milliseconds
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,

    /// Interval between simulated sensor ticks, in seconds
    #[serde(default = "default_health_tick")]
    pub health_tick_secs: u64,

    /// Simulated latency of a health refresh, in milliseconds
    #[serde(default = "default_refresh_delay")]
    pub refresh_delay_ms: u64,

    /// Name shown on the profile card
    #[serde(default = "default_profile_name")]
    pub profile_name: String,

    /// Email shown on the profile card
    #[serde(default = "default_profile_email")]
    pub profile_email: String,
}

fn default_toast_duration() -> u64 {
    3000
}

fn default_health_tick() -> u64 {
    5
}

fn default_refresh_delay() -> u64 {
    1500
}

fn default_profile_name() -> String {
    "John Doe".to_string()
}

fn default_profile_email() -> String {
    "john.doe@example.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: false,
            toast_duration_ms: default_toast_duration(),
            health_tick_secs: default_health_tick(),
            refresh_delay_ms: default_refresh_delay(),
            profile_name: default_profile_name(),
            profile_email: default_profile_email(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file, or defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        tracing::info!(path = %path.display(), "config saved");

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "fitness-rs", "fitness-rs")
            .ok_or_else(|| FitError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// The override path when given, the default location otherwise
    pub fn resolve_path(path_override: Option<&Path>) -> Result<PathBuf> {
        match path_override {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_path(),
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Health tick interval, never shorter than one second
    pub fn health_tick(&self) -> Duration {
        Duration::from_secs(self.health_tick_secs.max(1))
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    /// Current value of a field, formatted for display
    pub fn get(&self, field: ConfigField) -> String {
        match field {
            ConfigField::DarkMode => self.dark_mode.to_string(),
            ConfigField::ToastDuration => self.toast_duration_ms.to_string(),
            ConfigField::HealthTick => self.health_tick_secs.to_string(),
            ConfigField::RefreshDelay => self.refresh_delay_ms.to_string(),
            ConfigField::ProfileName => self.profile_name.clone(),
            ConfigField::ProfileEmail => self.profile_email.clone(),
        }
    }

    /// Parse and store a value for a field
    pub fn set(&mut self, field: ConfigField, value: &str) -> Result<()> {
        let value = value.trim();
        match field {
            ConfigField::DarkMode => self.dark_mode = parse_bool(field, value)?,
            ConfigField::ToastDuration => self.toast_duration_ms = parse_u64(field, value)?,
            ConfigField::HealthTick => self.health_tick_secs = parse_u64(field, value)?,
            ConfigField::RefreshDelay => self.refresh_delay_ms = parse_u64(field, value)?,
            ConfigField::ProfileName => self.profile_name = non_empty(field, value)?,
            ConfigField::ProfileEmail => self.profile_email = non_empty(field, value)?,
        }
        Ok(())
    }

    /// Restore a field to its default value
    pub fn reset(&mut self, field: ConfigField) {
        let defaults = Config::default();
        match field {
            ConfigField::DarkMode => self.dark_mode = defaults.dark_mode,
            ConfigField::ToastDuration => self.toast_duration_ms = defaults.toast_duration_ms,
            ConfigField::HealthTick => self.health_tick_secs = defaults.health_tick_secs,
            ConfigField::RefreshDelay => self.refresh_delay_ms = defaults.refresh_delay_ms,
            ConfigField::ProfileName => self.profile_name = defaults.profile_name,
            ConfigField::ProfileEmail => self.profile_email = defaults.profile_email,
        }
    }

    /// Up to two initials from the profile name, for the avatar
    pub fn initials(&self) -> String {
        self.profile_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

fn parse_bool(field: ConfigField, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(FitError::InvalidInput(format!(
            "Invalid value '{}' for {}. Use true or false.",
            value,
            field.key()
        ))),
    }
}

fn parse_u64(field: ConfigField, value: &str) -> Result<u64> {
    value.parse::<u64>().map_err(|_| {
        FitError::InvalidInput(format!(
            "Invalid value '{}' for {}. Expected a whole number.",
            value,
            field.key()
        ))
    })
}

fn non_empty(field: ConfigField, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(FitError::InvalidInput(format!(
            "{} cannot be empty",
            field.key()
        )));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.dark_mode);
        assert_eq!(config.toast_duration(), Duration::from_millis(3000));
        assert_eq!(config.health_tick(), Duration::from_secs(5));
        assert_eq!(config.refresh_delay(), Duration::from_millis(1500));
        assert_eq!(config.initials(), "JD");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("dark_mode = true\n").unwrap();
        assert!(config.dark_mode);
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.profile_name, "John Doe");
    }

    #[test]
    fn test_set_get_reset() {
        let mut config = Config::default();
        config.set(ConfigField::DarkMode, "on").unwrap();
        config.set(ConfigField::RefreshDelay, "250").unwrap();
        config.set(ConfigField::ProfileName, "ada lovelace").unwrap();

        assert_eq!(config.get(ConfigField::DarkMode), "true");
        assert_eq!(config.get(ConfigField::RefreshDelay), "250");
        assert_eq!(config.initials(), "AL");

        assert!(config.set(ConfigField::HealthTick, "soon").is_err());
        assert!(config.set(ConfigField::ProfileEmail, "  ").is_err());

        config.reset(ConfigField::DarkMode);
        assert!(!config.dark_mode);
    }

    #[test]
    fn test_health_tick_floor() {
        let config = Config {
            health_tick_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.health_tick(), Duration::from_secs(1));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set(ConfigField::ToastDuration, "1200").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
