//! Core functionality for fitness-rs
//!
//! This module contains the UI-independent logic:
//! - Workout and schedule records plus the sample data
//! - The in-memory store and its validation rules
//! - Simulated health statistics
//! - The single-slot toast state machine
//! - Randomness and id generation
//! - Application configuration

pub mod config;
pub mod health;
pub mod models;
pub mod random;
pub mod store;
pub mod toast;

pub use config::Config;
pub use health::HealthStats;
pub use models::{ScheduleInput, ScheduledWorkout, Workout, WorkoutInput};
pub use random::{IdSequence, RandomSource, SeededRandom};
pub use store::FitnessStore;
pub use toast::{Toast, ToastKind, ToastSlot};
