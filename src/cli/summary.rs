//! `fit summary`: a non-interactive look at the starting data

use serde::Serialize;

use crate::core::health::HealthStats;
use crate::core::models::{ScheduledWorkout, Workout};
use crate::core::random::RandomSource;
use crate::core::store::FitnessStore;
use crate::error::Result;

/// Serializable view of the store
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub workouts: &'a [Workout],
    pub schedule: &'a [ScheduledWorkout],
    pub total_calories: u64,
    pub total_minutes: u64,
    pub health: &'a HealthStats,
}

impl<'a> Summary<'a> {
    pub fn from_store(store: &'a FitnessStore) -> Self {
        Self {
            workouts: store.workouts(),
            schedule: store.schedule(),
            total_calories: store.total_calories(),
            total_minutes: store.total_minutes(),
            health: store.stats(),
        }
    }

    /// Human-readable report
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("Today's Workouts\n");
        for workout in self.workouts {
            out.push_str(&format!(
                "  {} {:<16} {:>4} min {:>5} cal\n",
                workout.emoji, workout.name, workout.duration_minutes, workout.calories
            ));
        }
        out.push_str(&format!(
            "  Total: {} cal, {} min, {} workouts\n\n",
            self.total_calories,
            self.total_minutes,
            self.workouts.len()
        ));

        out.push_str("Schedule\n");
        for entry in self.schedule {
            out.push_str(&format!(
                "  {} {:<16} {:<10} {}\n",
                entry.emoji, entry.workout_name, entry.day, entry.time
            ));
        }

        let health = self.health;
        out.push_str("\nHealth\n");
        out.push_str(&format!("  Steps:           {}\n", health.steps));
        out.push_str(&format!("  Distance:        {:.1} km\n", health.distance_km));
        out.push_str(&format!("  Heart rate:      {} bpm\n", health.heart_rate_bpm));
        out.push_str(&format!("  Active minutes:  {}\n", health.active_minutes));
        out.push_str(&format!("  Calories burned: {}\n", health.calories_burned));
        out.push_str(&format!("  Sleep:           {:.1} h\n", health.sleep_hours));
        out
    }
}

/// Handle the summary command
pub fn handle_summary(rng: Box<dyn RandomSource>, json: bool) -> Result<()> {
    let store = FitnessStore::seeded(rng);
    let summary = Summary::from_store(&store);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::SeededRandom;

    fn store() -> FitnessStore {
        FitnessStore::seeded(Box::new(SeededRandom::from_seed(3)))
    }

    #[test]
    fn test_text_contains_totals() {
        let store = store();
        let text = Summary::from_store(&store).render_text();
        assert!(text.contains("Total: 800 cal, 135 min, 3 workouts"));
        assert!(text.contains("Morning Run"));
        assert!(text.contains("8432"));
    }

    #[test]
    fn test_json_shape() {
        let store = store();
        let value = serde_json::to_value(Summary::from_store(&store)).unwrap();
        assert_eq!(value["total_calories"], 800);
        assert_eq!(value["total_minutes"], 135);
        assert_eq!(value["workouts"].as_array().unwrap().len(), 3);
        assert_eq!(value["schedule"][1]["day"], "Wednesday");
        assert_eq!(value["health"]["heart_rate_bpm"], 72);
    }
}
