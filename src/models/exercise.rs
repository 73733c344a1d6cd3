use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];
}

/// The six fitness dimensions a user can prioritize
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum PillarCategory {
    Cardio,
    Strength,
    Mobility,
    MuscularEndurance,
    BalanceStability,
    Speed,
}

impl PillarCategory {
    pub const ALL: [PillarCategory; 6] = [
        PillarCategory::Cardio,
        PillarCategory::Strength,
        PillarCategory::Mobility,
        PillarCategory::MuscularEndurance,
        PillarCategory::BalanceStability,
        PillarCategory::Speed,
    ];

    /// Catalog key, identical to the pillar id used in profiles
    pub fn key(&self) -> &'static str {
        match self {
            PillarCategory::Cardio => "cardio",
            PillarCategory::Strength => "strength",
            PillarCategory::Mobility => "mobility",
            PillarCategory::MuscularEndurance => "muscular-endurance",
            PillarCategory::BalanceStability => "balance-stability",
            PillarCategory::Speed => "speed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PillarCategory::Cardio => "Cardio",
            PillarCategory::Strength => "Strength",
            PillarCategory::Mobility => "Mobility",
            PillarCategory::MuscularEndurance => "Muscular Endurance",
            PillarCategory::BalanceStability => "Balance & Stability",
            PillarCategory::Speed => "Speed",
        }
    }

    /// Pillars whose catalogs lend variety to a single-pillar session
    pub fn related(&self) -> &'static [PillarCategory] {
        match self {
            PillarCategory::Cardio => &[PillarCategory::MuscularEndurance, PillarCategory::Speed],
            PillarCategory::Strength => &[
                PillarCategory::MuscularEndurance,
                PillarCategory::BalanceStability,
            ],
            PillarCategory::Mobility => &[PillarCategory::BalanceStability],
            PillarCategory::MuscularEndurance => &[PillarCategory::Cardio, PillarCategory::Strength],
            PillarCategory::BalanceStability => &[PillarCategory::Mobility, PillarCategory::Strength],
            PillarCategory::Speed => &[PillarCategory::Cardio, PillarCategory::Strength],
        }
    }

    /// Unknown pillar ids map onto the strength catalog
    pub fn from_pillar_id(id: &str) -> Self {
        id.parse().unwrap_or(PillarCategory::Strength)
    }
}

impl fmt::Display for PillarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for PillarCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PillarCategory::ALL
            .iter()
            .copied()
            .find(|category| category.key() == s)
            .ok_or_else(|| format!("Unknown pillar category: {}", s))
    }
}

/// Immutable catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub instructions: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub duration: Option<u32>, // minutes, or seconds when above 300
    #[serde(default)]
    pub rest_time: Option<u32>, // seconds
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub required_equipment: Vec<String>,
}

impl ExerciseTemplate {
    /// Place a copy of this template into a workout slot
    pub fn instantiate(&self, instance_id: String) -> WorkoutExercise {
        WorkoutExercise {
            id: instance_id,
            template_id: self.id.clone(),
            name: self.name.clone(),
            instructions: self.instructions.clone(),
            difficulty: self.difficulty,
            target_muscles: self.target_muscles.clone(),
            reps: self.reps,
            sets: self.sets,
            duration: self.duration,
            rest_time: self.rest_time,
            weight: self.weight,
            required_equipment: self.required_equipment.clone(),
            completed: false,
            actual_reps: None,
            actual_sets: None,
            actual_weight: None,
            notes: None,
        }
    }
}

/// A catalog exercise placed into one workout, plus what the user actually did
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: String,
    pub template_id: String,
    pub name: String,
    #[serde(default)]
    pub instructions: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub rest_time: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub required_equipment: Vec<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub actual_reps: Option<u32>,
    #[serde(default)]
    pub actual_sets: Option<u32>,
    #[serde(default)]
    pub actual_weight: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial edit of a placed exercise; `None` leaves the field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseUpdate {
    pub reps: Option<u32>,
    pub sets: Option<u32>,
    pub duration: Option<u32>,
    pub rest_time: Option<u32>,
    pub weight: Option<f64>,
    pub completed: Option<bool>,
    pub actual_reps: Option<u32>,
    pub actual_sets: Option<u32>,
    pub actual_weight: Option<f64>,
    pub notes: Option<String>,
}

impl WorkoutExercise {
    pub fn apply(&mut self, update: &ExerciseUpdate) {
        if let Some(reps) = update.reps {
            self.reps = Some(reps);
        }
        if let Some(sets) = update.sets {
            self.sets = Some(sets);
        }
        if let Some(duration) = update.duration {
            self.duration = Some(duration);
        }
        if let Some(rest_time) = update.rest_time {
            self.rest_time = Some(rest_time);
        }
        if let Some(weight) = update.weight {
            self.weight = Some(weight);
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        if let Some(actual_reps) = update.actual_reps {
            self.actual_reps = Some(actual_reps);
        }
        if let Some(actual_sets) = update.actual_sets {
            self.actual_sets = Some(actual_sets);
        }
        if let Some(actual_weight) = update.actual_weight {
            self.actual_weight = Some(actual_weight);
        }
        if let Some(ref notes) = update.notes {
            self.notes = Some(notes.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pillar_category_round_trips_through_pillar_id() {
        for category in PillarCategory::ALL {
            assert_eq!(PillarCategory::from_pillar_id(category.key()), category);
        }
        assert_eq!(PillarCategory::from_pillar_id("yoga"), PillarCategory::Strength);
    }

    #[test]
    fn test_update_only_touches_supplied_fields() {
        let template = ExerciseTemplate {
            id: "push-ups".to_string(),
            name: "Push-ups".to_string(),
            instructions: String::new(),
            difficulty: Difficulty::Beginner,
            target_muscles: vec!["chest".to_string()],
            reps: Some(10),
            sets: Some(3),
            duration: None,
            rest_time: Some(45),
            weight: None,
            required_equipment: Vec::new(),
        };
        let mut exercise = template.instantiate("push-ups_1_0".to_string());

        exercise.apply(&ExerciseUpdate {
            actual_reps: Some(12),
            completed: Some(true),
            ..Default::default()
        });

        assert!(exercise.completed);
        assert_eq!(exercise.actual_reps, Some(12));
        assert_eq!(exercise.reps, Some(10));
        assert_eq!(exercise.template_id, "push-ups");
        assert_eq!(exercise.notes, None);
    }
}
