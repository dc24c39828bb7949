//! Terminal User Interface module
//!
//! This module contains the ratatui-based TUI implementation.

pub mod app;
pub mod event;
pub mod form;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
