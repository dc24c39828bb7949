//! CLI module for fitness-rs
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod commands;
pub mod config;
pub mod summary;

pub use commands::{Cli, Commands};
