// Shared fixtures for the integration tests
#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use fitplan::models::{
    ActivityCategory, ExistingSport, FitnessPillar, Intensity, SportFlexibility, TimePreference,
    UserProfile, WeekDay,
};
use fitplan::{EngineConfig, ExerciseCatalog, FixedClock, RegenerationPolicy, TrainingEngine};
use std::sync::Once;

static INIT: Once = Once::new();

/// Route engine logs through the test harness; `RUST_LOG=debug` to see them
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Monday 2024-01-01
pub fn plan_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub fn engine_on(today: NaiveDate, seed: u64, policy: RegenerationPolicy) -> TrainingEngine {
    init_test_logging();
    TrainingEngine::new(
        ExerciseCatalog::builtin(),
        EngineConfig::default().with_seed(seed).with_policy(policy),
    )
    .with_clock(FixedClock::on(today))
}

pub fn engine(seed: u64) -> TrainingEngine {
    engine_on(plan_start(), seed, RegenerationPolicy::FutureOnly)
}

pub fn profile(available: &[u8], sessions_per_week: u32, weeks: u32) -> UserProfile {
    UserProfile {
        full_name: "Alex Doe".to_string(),
        email: "alex@example.com".to_string(),
        fitness_pillars: vec![
            FitnessPillar::new("strength", "Strength", 5),
            FitnessPillar::new("cardio", "Cardio", 4),
            FitnessPillar::new("mobility", "Mobility", 2),
        ],
        time_preference: TimePreference {
            plan_duration: weeks,
            sessions_per_week,
        },
        available_days: WeekDay::week(available),
        onboarding_completed: true,
        ..Default::default()
    }
}

pub fn sport(days: &[u8], duration: u32, flexibility: SportFlexibility) -> ExistingSport {
    ExistingSport {
        id: "football".to_string(),
        name: "Sunday League".to_string(),
        category: ActivityCategory::Sports,
        frequency: days.len() as u32,
        duration,
        days: days.to_vec(),
        flexibility,
        intensity: Intensity::High,
        description: None,
    }
}

pub fn weekday_id(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}
