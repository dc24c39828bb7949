//! Workout and schedule records
//!
//! Includes the raw form inputs the store validates and the fixed sample
//! data every session starts from.

use chrono::{DateTime, Local};
use serde::Serialize;

/// Emojis a new entry may be decorated with
pub const WORKOUT_EMOJIS: [&str; 8] = ["🏃", "🧘", "💪", "🚴", "🏊", "⛹️", "🤸", "🧗"];

/// A completed, logged exercise session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    pub id: u64,
    pub name: String,
    pub duration_minutes: u32,
    pub calories: u32,
    pub emoji: &'static str,
    /// When the entry was added (display only)
    pub logged_at: DateTime<Local>,
}

/// A planned session tied to a day and time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledWorkout {
    pub id: u64,
    pub workout_name: String,
    pub day: String,
    pub time: String,
    pub emoji: &'static str,
}

/// Raw "Add Workout" form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutInput {
    pub name: String,
    pub duration: String,
    pub calories: String,
}

impl WorkoutInput {
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        calories: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            calories: calories.into(),
        }
    }
}

/// Raw "Schedule Workout" form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleInput {
    pub workout_name: String,
    pub day: String,
    pub time: String,
}

impl ScheduleInput {
    pub fn new(
        workout_name: impl Into<String>,
        day: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            workout_name: workout_name.into(),
            day: day.into(),
            time: time.into(),
        }
    }
}

/// Sample workouts every session starts with
pub fn seed_workouts() -> Vec<Workout> {
    let now = Local::now();
    [
        (1, "Morning Run", 30, 250, "🏃"),
        (2, "Yoga Session", 45, 150, "🧘"),
        (3, "Weight Training", 60, 400, "💪"),
    ]
    .into_iter()
    .map(|(id, name, duration_minutes, calories, emoji)| Workout {
        id,
        name: name.to_string(),
        duration_minutes,
        calories,
        emoji,
        logged_at: now,
    })
    .collect()
}

/// Sample schedule every session starts with
pub fn seed_schedule() -> Vec<ScheduledWorkout> {
    [
        (1, "Morning Run", "Monday", "07:00 AM", "🏃"),
        (2, "Yoga Session", "Wednesday", "06:00 PM", "🧘"),
        (3, "Weight Training", "Friday", "05:30 PM", "💪"),
    ]
    .into_iter()
    .map(|(id, workout_name, day, time, emoji)| ScheduledWorkout {
        id,
        workout_name: workout_name.to_string(),
        day: day.to_string(),
        time: time.to_string(),
        emoji,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_workouts() {
        let workouts = seed_workouts();
        assert_eq!(workouts.len(), 3);
        assert_eq!(workouts.iter().map(|w| w.calories).sum::<u32>(), 800);
        assert_eq!(workouts.iter().map(|w| w.duration_minutes).sum::<u32>(), 135);
        assert!(workouts.iter().all(|w| WORKOUT_EMOJIS.contains(&w.emoji)));
    }

    #[test]
    fn test_seed_schedule_ids_unique() {
        let schedule = seed_schedule();
        let mut ids: Vec<u64> = schedule.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(schedule[0].day, "Monday");
    }
}
