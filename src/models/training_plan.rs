use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::exercise::WorkoutExercise;
use super::progress::ExerciseProgress;
use super::user_profile::{TimePreference, TrainingGoal};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    /// Numeric weight used when averaging a week's intensity
    pub fn score(&self) -> f64 {
        match self {
            Intensity::Low => 1.0,
            Intensity::Medium => 2.0,
            Intensity::High => 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyWorkout {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    pub duration: u32, // minutes, post-estimation
    pub intensity: Intensity,
    pub exercises: Vec<WorkoutExercise>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgress {
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub completed_workouts: u32,
    pub total_workouts: u32,
    pub total_minutes: u32,
    pub average_intensity: f64,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub goals: Vec<TrainingGoal>,
    pub time_preference: TimePreference,
    #[serde(default)]
    pub available_days: Vec<u8>,
    #[serde(default)]
    pub daily_workouts: Vec<DailyWorkout>,
    #[serde(default)]
    pub weekly_progress: Vec<WeeklyProgress>,
    #[serde(default = "default_current_week")]
    pub current_week: u32,
    #[serde(default)]
    pub exercise_progress: Vec<ExerciseProgress>,
}

fn default_current_week() -> u32 {
    1
}

impl TrainingPlan {
    pub fn workout(&self, workout_id: &str) -> Option<&DailyWorkout> {
        self.daily_workouts.iter().find(|w| w.id == workout_id)
    }

    pub fn workouts_on(&self, date: NaiveDate) -> Vec<&DailyWorkout> {
        self.daily_workouts.iter().filter(|w| w.date == date).collect()
    }

    pub fn progress_for(&self, exercise_id: &str) -> Option<&ExerciseProgress> {
        self.exercise_progress
            .iter()
            .find(|p| p.exercise_id == exercise_id)
    }

    /// 1-based plan week containing `date`; dates before the start count as week 1
    pub fn week_number_of(&self, date: NaiveDate) -> u32 {
        let elapsed = (date - self.start_date).num_days().max(0);
        (elapsed / 7) as u32 + 1
    }
}
