use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completion history for one catalog exercise (keyed by template id, not instance id)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProgress {
    pub exercise_id: String,
    pub exercise_name: String,
    #[serde(default)]
    pub sessions: Vec<ExerciseSession>,
    #[serde(default)]
    pub personal_best: Option<PersonalBest>,
}

impl ExerciseProgress {
    pub fn new(exercise_id: &str, exercise_name: &str) -> Self {
        Self {
            exercise_id: exercise_id.to_string(),
            exercise_name: exercise_name.to_string(),
            sessions: Vec::new(),
            personal_best: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSession {
    pub date: NaiveDate,
    pub sets: Vec<SetData>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub rpe: Option<u8>, // Rate of Perceived Exertion (1-10)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetData {
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub duration: Option<u32>,
    pub completed: bool,
    #[serde(default)]
    pub rest_time: Option<u32>,
}

/// Best value ever recorded, tracked independently per metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBest {
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub duration: Option<u32>,
    pub date: NaiveDate,
}
