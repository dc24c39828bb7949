//! In-memory state container for the tracker
//!
//! Holds the workout log, the schedule and the health snapshot, and owns
//! the rules by which form input is validated and merged into them.
//! Nothing here is persisted.

use chrono::Local;

use crate::core::health::HealthStats;
use crate::core::models::{
    seed_schedule, seed_workouts, ScheduleInput, ScheduledWorkout, Workout, WorkoutInput,
    WORKOUT_EMOJIS,
};
use crate::core::random::{IdSequence, RandomSource};
use crate::error::{FitError, Result};

/// Workout log, schedule and health snapshot
pub struct FitnessStore {
    workouts: Vec<Workout>,
    schedule: Vec<ScheduledWorkout>,
    stats: HealthStats,
    /// Set while a simulated refresh is pending
    refresh_in_flight: bool,
    workout_ids: IdSequence,
    schedule_ids: IdSequence,
    rng: Box<dyn RandomSource>,
}

impl FitnessStore {
    /// Store pre-filled with the sample data
    pub fn seeded(rng: Box<dyn RandomSource>) -> Self {
        Self::with_data(seed_workouts(), seed_schedule(), rng)
    }

    /// Store holding the given records
    pub fn with_data(
        workouts: Vec<Workout>,
        schedule: Vec<ScheduledWorkout>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let workout_ids = IdSequence::after(workouts.iter().map(|w| w.id));
        let schedule_ids = IdSequence::after(schedule.iter().map(|s| s.id));
        Self {
            workouts,
            schedule,
            stats: HealthStats::baseline(),
            refresh_in_flight: false,
            workout_ids,
            schedule_ids,
            rng,
        }
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn schedule(&self) -> &[ScheduledWorkout] {
        &self.schedule
    }

    pub fn stats(&self) -> &HealthStats {
        &self.stats
    }

    /// Sum of calories over all logged workouts
    pub fn total_calories(&self) -> u64 {
        self.workouts.iter().map(|w| u64::from(w.calories)).sum()
    }

    /// Sum of durations over all logged workouts
    pub fn total_minutes(&self) -> u64 {
        self.workouts
            .iter()
            .map(|w| u64::from(w.duration_minutes))
            .sum()
    }

    /// Validate and append a workout
    pub fn add_workout(&mut self, input: &WorkoutInput) -> Result<&Workout> {
        let name = input.name.trim();
        let duration = input.duration.trim();
        let calories = input.calories.trim();

        if name.is_empty() || duration.is_empty() || calories.is_empty() {
            tracing::debug!("workout rejected: missing fields");
            return Err(FitError::MissingFields);
        }

        let duration_minutes = parse_positive("Duration", duration)?;
        let calories = parse_positive("Calories", calories)?;

        let workout = Workout {
            id: self.workout_ids.next_id(),
            name: name.to_string(),
            duration_minutes,
            calories,
            emoji: self.pick_emoji(),
            logged_at: Local::now(),
        };
        tracing::info!(id = workout.id, name = %workout.name, "workout logged");

        self.workouts.push(workout);
        Ok(&self.workouts[self.workouts.len() - 1])
    }

    /// Validate and append a scheduled workout
    pub fn schedule_workout(&mut self, input: &ScheduleInput) -> Result<&ScheduledWorkout> {
        let workout_name = input.workout_name.trim();
        let day = input.day.trim();
        let time = input.time.trim();

        if workout_name.is_empty() || day.is_empty() || time.is_empty() {
            tracing::debug!("schedule rejected: missing fields");
            return Err(FitError::MissingFields);
        }

        let entry = ScheduledWorkout {
            id: self.schedule_ids.next_id(),
            workout_name: workout_name.to_string(),
            day: day.to_string(),
            time: time.to_string(),
            emoji: self.pick_emoji(),
        };
        tracing::info!(id = entry.id, name = %entry.workout_name, day = %entry.day, "workout scheduled");

        self.schedule.push(entry);
        Ok(&self.schedule[self.schedule.len() - 1])
    }

    /// Periodic simulated sensor reading
    pub fn tick_health(&mut self) {
        self.stats.nudge(self.rng.as_mut());
        tracing::trace!(steps = self.stats.steps, bpm = self.stats.heart_rate_bpm, "health tick");
    }

    /// Mark a refresh as started. Returns false, and changes nothing, when
    /// one is already pending.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refresh_in_flight {
            tracing::debug!("refresh ignored: already in flight");
            return false;
        }
        self.refresh_in_flight = true;
        tracing::info!("health refresh started");
        true
    }

    /// Complete the pending refresh by redrawing the whole snapshot.
    /// Returns `None` when no refresh was pending.
    pub fn finish_refresh(&mut self) -> Option<&HealthStats> {
        if !self.refresh_in_flight {
            return None;
        }
        self.stats = HealthStats::randomized(self.rng.as_mut());
        debug_assert!(self.stats.is_valid());
        self.refresh_in_flight = false;
        tracing::info!(steps = self.stats.steps, "health refresh finished");
        Some(&self.stats)
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh_in_flight
    }

    fn pick_emoji(&mut self) -> &'static str {
        WORKOUT_EMOJIS[self.rng.index(WORKOUT_EMOJIS.len()) % WORKOUT_EMOJIS.len()]
    }
}

impl std::fmt::Debug for FitnessStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FitnessStore")
            .field("workouts", &self.workouts.len())
            .field("schedule", &self.schedule.len())
            .field("stats", &self.stats)
            .field("refresh_in_flight", &self.refresh_in_flight)
            .finish_non_exhaustive()
    }
}

fn parse_positive(field: &'static str, raw: &str) -> Result<u32> {
    match raw.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(FitError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}
