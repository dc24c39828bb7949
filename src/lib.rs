//! fitness-rs - A terminal fitness tracker
//!
//! This library provides both CLI and TUI interfaces for a fitness demo:
//! locally held workout logs, a workout schedule, simulated health
//! statistics and a profile screen with a dark-mode toggle.

pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use error::{FitError, Result};
