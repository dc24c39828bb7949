//! Configuration CLI command handlers

use std::path::Path;

use crate::cli::commands::ConfigCommand;
use crate::core::config::{Config, ConfigField};
use crate::error::Result;

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand, path_override: Option<&Path>) -> Result<()> {
    let path = Config::resolve_path(path_override)?;
    match command {
        ConfigCommand::Set { key, value } => handle_set(&path, key.into(), &value),
        ConfigCommand::Get { key } => handle_get(&path, key.into()),
        ConfigCommand::Reset { key } => handle_reset(&path, key.into()),
    }
}

/// Handle setting a configuration value
fn handle_set(path: &Path, field: ConfigField, value: &str) -> Result<()> {
    let mut config = Config::load_from(path)?;
    config.set(field, value)?;
    config.save_to(path)?;

    println!("{} set to: {}", field.key(), config.get(field));
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(path: &Path, field: ConfigField) -> Result<()> {
    let config = Config::load_from(path)?;
    println!("{}", config.get(field));
    Ok(())
}

/// Handle resetting a configuration value
fn handle_reset(path: &Path, field: ConfigField) -> Result<()> {
    let mut config = Config::load_from(path)?;
    config.reset(field);
    config.save_to(path)?;

    println!("{} reset to default: {}", field.key(), config.get(field));
    Ok(())
}
