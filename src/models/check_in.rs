use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyCheckIn {
    pub id: Uuid,
    pub date: NaiveDate,
    pub week_number: u32,
    pub responses: CheckInResponses,
    pub adjustments_made: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponses {
    pub satisfaction: u8,     // 1-5
    pub difficulty_level: u8, // 1-5
    pub time_commitment: TimeCommitment,
    #[serde(default)]
    pub focus_adjustments: Vec<FocusAdjustment>,
    pub session_duration_preference: SessionDurationPreference,
    #[serde(default)]
    pub additional_feedback: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TimeCommitment {
    TooShort,
    JustRight,
    TooLong,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionDurationPreference {
    Shorter,
    Same,
    Longer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FocusAdjustment {
    pub pillar_id: String,
    pub new_importance: u8,
}

/// What the user submits; id, date and week number are assigned on submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckInSubmission {
    pub responses: CheckInResponses,
    pub adjustments_made: bool,
}
