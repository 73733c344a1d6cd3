use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::check_in::WeeklyCheckIn;
use super::training_plan::Intensity;

pub const BODYWEIGHT_EQUIPMENT_ID: &str = "bodyweight";

/// Importance assumed for a selected pillar that never received a rating
pub const DEFAULT_PILLAR_IMPORTANCE: u8 = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub goals: Vec<TrainingGoal>,
    #[serde(default)]
    pub fitness_pillars: Vec<FitnessPillar>,
    #[serde(default)]
    pub selected_sport: Option<SportChoice>,
    #[serde(default)]
    pub time_preference: TimePreference,
    #[serde(default)]
    pub habit_level: HabitLevel,
    #[serde(default)]
    pub available_days: Vec<WeekDay>,
    #[serde(default)]
    pub blackout_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub limitations: Vec<PhysicalLimitation>,
    #[serde(default)]
    pub existing_sports: Vec<ExistingSport>,
    #[serde(default = "default_equipment")]
    pub available_equipment: Vec<Equipment>,
    #[serde(default)]
    pub onboarding_completed: bool,
    #[serde(default)]
    pub weekly_check_ins: Vec<WeeklyCheckIn>,
    #[serde(default)]
    pub last_check_in_prompt: Option<DateTime<Utc>>,
    #[serde(default)]
    pub manual_activities: Vec<ManualActivity>,
}

fn default_equipment() -> Vec<Equipment> {
    vec![Equipment::bodyweight()]
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            goals: Vec::new(),
            fitness_pillars: Vec::new(),
            selected_sport: None,
            time_preference: TimePreference::default(),
            habit_level: HabitLevel::default(),
            available_days: Vec::new(),
            blackout_dates: Vec::new(),
            limitations: Vec::new(),
            existing_sports: Vec::new(),
            available_equipment: default_equipment(),
            onboarding_completed: false,
            weekly_check_ins: Vec::new(),
            last_check_in_prompt: None,
            manual_activities: Vec::new(),
        }
    }
}

impl UserProfile {
    /// Pillars the user opted into; unselected pillars carry no meaningful importance
    pub fn selected_pillars(&self) -> Vec<FitnessPillar> {
        self.fitness_pillars
            .iter()
            .filter(|pillar| pillar.selected)
            .cloned()
            .collect()
    }

    /// Weekday ids (0 = Sunday) marked available, ascending
    pub fn available_day_ids(&self) -> Vec<u8> {
        let mut ids: Vec<u8> = self
            .available_days
            .iter()
            .filter(|day| day.available && day.id <= 6)
            .map(|day| day.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn is_day_available(&self, weekday_id: u8) -> bool {
        self.available_days
            .iter()
            .any(|day| day.id == weekday_id && day.available)
    }

    /// Fill fields that older persisted profiles may lack
    pub fn backfill_defaults(&mut self) {
        if self.available_equipment.is_empty() {
            self.available_equipment = default_equipment();
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingGoal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub importance: Option<u8>, // 1-5, 5 being most important
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FitnessPillar {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub importance: Option<u8>, // 1-5, 5 being most important
    #[serde(default)]
    pub auto_selected: bool, // selected because of the chosen sport
}

impl FitnessPillar {
    pub fn new(id: &str, name: &str, importance: u8) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            selected: true,
            importance: Some(importance),
            auto_selected: false,
        }
    }

    pub fn effective_importance(&self) -> u8 {
        self.importance.unwrap_or(DEFAULT_PILLAR_IMPORTANCE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SportChoice {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommended_pillars: Vec<PillarRecommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PillarRecommendation {
    pub pillar_id: String,
    pub importance: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimePreference {
    pub plan_duration: u32, // weeks
    pub sessions_per_week: u32,
}

impl Default for TimePreference {
    fn default() -> Self {
        Self {
            plan_duration: 4,
            sessions_per_week: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HabitLevel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub change_readiness: u8, // 1-5
}

impl Default for HabitLevel {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            change_readiness: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeekDay {
    pub id: u8, // 0 = Sunday .. 6 = Saturday
    #[serde(default)]
    pub name: String,
    pub available: bool,
}

impl WeekDay {
    pub fn new(id: u8, available: bool) -> Self {
        const NAMES: [&str; 7] = [
            "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
        ];
        Self {
            id,
            name: NAMES.get(id as usize).copied().unwrap_or_default().to_string(),
            available,
        }
    }

    /// A full week where only `available_ids` are trainable
    pub fn week(available_ids: &[u8]) -> Vec<WeekDay> {
        (0..7)
            .map(|id| WeekDay::new(id, available_ids.contains(&id)))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalLimitation {
    pub id: String,
    pub area: String,
    pub severity: LimitationSeverity,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LimitationSeverity {
    Mild,
    Moderate,
    Severe,
}

/// A weekly commitment the user already has; scheduled verbatim
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExistingSport {
    pub id: String,
    pub name: String,
    pub category: ActivityCategory,
    #[serde(default)]
    pub frequency: u32, // times per week
    pub duration: u32, // minutes per session
    pub days: Vec<u8>,
    pub flexibility: SportFlexibility,
    pub intensity: Intensity,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Cardio,
    Strength,
    Flexibility,
    Sports,
    Functional,
}

impl ActivityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Cardio => "cardio",
            ActivityCategory::Strength => "strength",
            ActivityCategory::Flexibility => "flexibility",
            ActivityCategory::Sports => "sports",
            ActivityCategory::Functional => "functional",
        }
    }

    /// Muscle tags stamped on the synthetic exercise of an existing sport session
    pub fn muscle_tags(&self) -> Vec<String> {
        let tags: &[&str] = match self {
            ActivityCategory::Cardio => &["cardiovascular system", "legs", "core"],
            ActivityCategory::Strength => &["full body", "major muscle groups"],
            ActivityCategory::Flexibility => &["full body", "joints", "connective tissue"],
            ActivityCategory::Sports => &["sport-specific muscles", "coordination"],
            ActivityCategory::Functional => &["core", "stabilizers", "movement patterns"],
        };
        tags.iter().map(|tag| tag.to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SportFlexibility {
    Fixed,
    SomewhatFlexible,
    VeryFlexible,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Equipment {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: String::new(),
            description: String::new(),
            available: true,
        }
    }

    pub fn bodyweight() -> Self {
        Self {
            id: BODYWEIGHT_EQUIPMENT_ID.to_string(),
            name: "Bodyweight Only".to_string(),
            category: "functional".to_string(),
            description: "No equipment needed - use your body weight".to_string(),
            available: true,
        }
    }
}

/// Off-plan activity logged by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManualActivity {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityCategory,
    pub duration: u32, // minutes
    pub intensity: Intensity,
    #[serde(default)]
    pub notes: String,
    pub date: NaiveDate,
    pub logged_at: DateTime<Utc>,
}

/// Activity as entered by the user, before an id and log time are assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewManualActivity {
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityCategory,
    pub duration: u32,
    pub intensity: Intensity,
    #[serde(default)]
    pub notes: String,
    pub date: NaiveDate,
}
