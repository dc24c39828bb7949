//! CLI command definitions using clap
//!
//! Defines the command structure for the `fit` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::config::ConfigField;

/// fitness-rs - Fitness Tracker TUI
///
/// Log workouts, plan sessions and watch simulated health stats.
/// Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "fit", version, about, long_about = None)]
pub struct Cli {
    /// Seed for the simulated health data
    #[arg(long, global = true, env = "FIT_SEED")]
    pub seed: Option<u64>,

    /// Use this configuration file instead of the default location
    #[arg(long, global = true, env = "FIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config(ConfigArgs),

    /// Print the starting workouts, schedule and health snapshot
    Summary {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },

    /// Reset a configuration value to its default
    Reset {
        /// Configuration key
        key: ConfigKey,
    },
}

/// Available configuration keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Start in dark mode (true/false)
    #[value(name = "dark-mode")]
    DarkMode,

    /// Toast visibility in milliseconds
    #[value(name = "toast-duration")]
    ToastDuration,

    /// Seconds between simulated sensor readings
    #[value(name = "health-tick")]
    HealthTick,

    /// Simulated refresh latency in milliseconds
    #[value(name = "refresh-delay")]
    RefreshDelay,

    /// Name shown on the Profile tab
    #[value(name = "profile-name")]
    ProfileName,

    /// Email shown on the Profile tab
    #[value(name = "profile-email")]
    ProfileEmail,
}

impl From<ConfigKey> for ConfigField {
    fn from(key: ConfigKey) -> Self {
        match key {
            ConfigKey::DarkMode => ConfigField::DarkMode,
            ConfigKey::ToastDuration => ConfigField::ToastDuration,
            ConfigKey::HealthTick => ConfigField::HealthTick,
            ConfigKey::RefreshDelay => ConfigField::RefreshDelay,
            ConfigKey::ProfileName => ConfigField::ProfileName,
            ConfigKey::ProfileEmail => ConfigField::ProfileEmail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["fit", "--seed", "7", "--dark"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        assert!(cli.dark);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::try_parse_from(["fit", "config", "set", "dark-mode", "true"]).unwrap();
        match cli.command {
            Some(Commands::Config(ConfigArgs {
                command: ConfigCommand::Set { key, value },
            })) => {
                assert_eq!(key, ConfigKey::DarkMode);
                assert_eq!(value, "true");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_key_names_match_config_fields() {
        for key in ConfigKey::value_variants() {
            let name = key.to_possible_value().unwrap();
            assert_eq!(name.get_name(), ConfigField::from(*key).key());
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Cli::try_parse_from(["fit", "config", "get", "shoe-size"]).is_err());
    }
}
