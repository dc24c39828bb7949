//! Simulated health statistics
//!
//! There is no real sensor behind these numbers. A periodic tick nudges
//! the snapshot and an explicit refresh redraws it around fixed baselines.

use serde::Serialize;

use crate::core::random::RandomSource;

/// Baseline step count
pub const BASE_STEPS: u32 = 8432;
/// Baseline distance in kilometres
pub const BASE_DISTANCE_KM: f64 = 6.2;
/// Baseline resting heart rate
pub const BASE_HEART_RATE: u32 = 72;
/// Baseline active minutes
pub const BASE_ACTIVE_MINUTES: u32 = 45;
/// Baseline calories burned
pub const BASE_CALORIES: u32 = 420;
/// Baseline sleep in hours
pub const BASE_SLEEP_HOURS: f64 = 7.5;

/// Steps added by one tick, inclusive
const TICK_STEPS: (u32, u32) = (1, 12);
/// Heart-rate band redrawn on each tick, inclusive
const TICK_HEART_RATE: (u32, u32) = (68, 82);
/// Heart-rate band used by a full refresh, inclusive
const REFRESH_HEART_RATE: (u32, u32) = (65, 85);

/// Latest snapshot of activity and vitals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthStats {
    pub steps: u32,
    pub distance_km: f64,
    pub heart_rate_bpm: u32,
    pub active_minutes: u32,
    pub calories_burned: u32,
    pub sleep_hours: f64,
}

impl HealthStats {
    /// Snapshot at the fixed baselines
    pub fn baseline() -> Self {
        Self {
            steps: BASE_STEPS,
            distance_km: BASE_DISTANCE_KM,
            heart_rate_bpm: BASE_HEART_RATE,
            active_minutes: BASE_ACTIVE_MINUTES,
            calories_burned: BASE_CALORIES,
            sleep_hours: BASE_SLEEP_HOURS,
        }
    }

    /// Fresh snapshot anchored on the baselines
    pub fn randomized(rng: &mut dyn RandomSource) -> Self {
        Self {
            steps: BASE_STEPS + rng.between(0, 2000),
            distance_km: BASE_DISTANCE_KM + rng.between_f64(0.0, 1.5),
            heart_rate_bpm: rng.between(REFRESH_HEART_RATE.0, REFRESH_HEART_RATE.1),
            active_minutes: BASE_ACTIVE_MINUTES + rng.between(0, 30),
            calories_burned: BASE_CALORIES + rng.between(0, 200),
            sleep_hours: 6.5 + rng.between_f64(0.0, 2.0),
        }
    }

    /// Periodic sensor tick: a few more steps and a new heart-rate reading
    pub fn nudge(&mut self, rng: &mut dyn RandomSource) {
        self.steps = self
            .steps
            .saturating_add(rng.between(TICK_STEPS.0, TICK_STEPS.1));
        self.heart_rate_bpm = rng.between(TICK_HEART_RATE.0, TICK_HEART_RATE.1);
    }

    /// All fields are non-negative
    pub fn is_valid(&self) -> bool {
        self.distance_km >= 0.0 && self.sleep_hours >= 0.0
    }
}

impl Default for HealthStats {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::{MockRandomSource, SeededRandom};

    #[test]
    fn test_nudge_only_moves_steps_up() {
        let mut rng = SeededRandom::from_seed(3);
        let mut stats = HealthStats::baseline();

        for _ in 0..100 {
            let before = stats.steps;
            stats.nudge(&mut rng);
            assert!(stats.steps > before);
            assert!(stats.steps - before <= 12);
            assert!((68..=82).contains(&stats.heart_rate_bpm));
        }
        assert_eq!(stats.sleep_hours, BASE_SLEEP_HOURS);
    }

    #[test]
    fn test_nudge_saturates() {
        let mut rng = MockRandomSource::new();
        rng.expect_between().returning(|_, high| high);

        let mut stats = HealthStats {
            steps: u32::MAX - 1,
            ..HealthStats::baseline()
        };
        stats.nudge(&mut rng);
        assert_eq!(stats.steps, u32::MAX);
        assert_eq!(stats.heart_rate_bpm, 82);
    }

    #[test]
    fn test_randomized_is_anchored_on_baseline() {
        let mut rng = MockRandomSource::new();
        rng.expect_between().returning(|low, _| low);
        rng.expect_between_f64().returning(|low, _| low);

        let stats = HealthStats::randomized(&mut rng);
        assert_eq!(stats.steps, BASE_STEPS);
        assert_eq!(stats.distance_km, BASE_DISTANCE_KM);
        assert_eq!(stats.heart_rate_bpm, 65);
        assert_eq!(stats.active_minutes, BASE_ACTIVE_MINUTES);
        assert_eq!(stats.calories_burned, BASE_CALORIES);
        assert_eq!(stats.sleep_hours, 6.5);
    }

    #[test]
    fn test_randomized_stays_non_negative() {
        let mut rng = SeededRandom::from_seed(99);
        for _ in 0..200 {
            let stats = HealthStats::randomized(&mut rng);
            assert!(stats.is_valid());
            assert!(stats.steps >= BASE_STEPS && stats.steps <= BASE_STEPS + 2000);
        }
    }
}
