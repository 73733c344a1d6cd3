// Read-only exercise catalog keyed by pillar category plus fused keys
// such as `cardio-strength` for combined workouts

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::EngineError;
use crate::models::{Difficulty, ExerciseTemplate, PillarCategory};

/// Categories the default fallback pool draws from; a catalog must provide them
const REQUIRED_CATEGORIES: [PillarCategory; 3] = [
    PillarCategory::Strength,
    PillarCategory::Cardio,
    PillarCategory::Mobility,
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ExerciseCatalog {
    categories: BTreeMap<String, Vec<ExerciseTemplate>>,
}

impl ExerciseCatalog {
    /// Parse a catalog from JSON (`{ "cardio": [ ... ], ... }`)
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let catalog: ExerciseCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&contents)?;

        tracing::info!(
            "Loaded exercise catalog from {} ({} categories)",
            path.as_ref().display(),
            catalog.categories.len()
        );

        Ok(catalog)
    }

    fn validate(&self) -> Result<(), EngineError> {
        for category in REQUIRED_CATEGORIES {
            if self.get(category.key()).is_empty() {
                return Err(EngineError::MissingCategory(category.key().to_string()));
            }
        }
        Ok(())
    }

    /// Templates under `key`, empty when the key is unknown
    pub fn get(&self, key: &str) -> &[ExerciseTemplate] {
        self.categories
            .get(key)
            .map(|templates| templates.as_slice())
            .unwrap_or(&[])
    }

    pub fn pillar(&self, category: PillarCategory) -> &[ExerciseTemplate] {
        self.get(category.key())
    }

    pub fn contains(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(|key| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(|templates| templates.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pool used when pillar or equipment filtering leaves nothing to choose from
    pub fn default_pool(&self) -> Vec<ExerciseTemplate> {
        let mut pool = Vec::new();
        pool.extend(self.pillar(PillarCategory::Strength).iter().take(3).cloned());
        pool.extend(self.pillar(PillarCategory::Cardio).iter().take(3).cloned());
        pool.extend(self.pillar(PillarCategory::Mobility).iter().take(2).cloned());
        pool
    }

    /// Built-in catalog shipped with the engine
    pub fn builtin() -> Self {
        let mut categories = BTreeMap::new();

        categories.insert(
            PillarCategory::Cardio.key().to_string(),
            vec![
                reps("jumping-jacks", "Jumping Jacks", Difficulty::Beginner, &["cardiovascular", "full body"], 30, 3, 30, &[]),
                reps("high-knees", "High Knees", Difficulty::Beginner, &["cardiovascular", "quadriceps"], 30, 3, 30, &[]),
                timed("brisk-walk", "Brisk Walk", Difficulty::Beginner, &["cardiovascular", "legs"], 10, 1, 0, &[]),
                reps("mountain-climbers", "Mountain Climbers", Difficulty::Intermediate, &["cardiovascular", "core"], 20, 3, 30, &[]),
                reps("burpees", "Burpees", Difficulty::Intermediate, &["cardiovascular", "full body"], 10, 3, 45, &[]),
                timed("jump-rope-intervals", "Jump Rope Intervals", Difficulty::Intermediate, &["cardiovascular", "calves"], 2, 4, 30, &["jump-rope"]),
                timed("rowing-intervals", "Rowing Intervals", Difficulty::Advanced, &["cardiovascular", "back"], 3, 4, 60, &["rowing-machine"]),
                reps("tuck-jumps", "Tuck Jumps", Difficulty::Advanced, &["cardiovascular", "quadriceps"], 10, 3, 60, &[]),
            ],
        );

        categories.insert(
            PillarCategory::Strength.key().to_string(),
            vec![
                reps("push-ups", "Push-ups", Difficulty::Beginner, &["chest", "shoulders", "triceps"], 10, 3, 45, &[]),
                reps("bodyweight-squats", "Bodyweight Squats", Difficulty::Beginner, &["quadriceps", "glutes"], 15, 3, 45, &[]),
                reps("glute-bridges", "Glute Bridges", Difficulty::Beginner, &["glutes", "hamstrings"], 15, 3, 30, &[]),
                reps("reverse-lunges", "Reverse Lunges", Difficulty::Intermediate, &["quadriceps", "glutes"], 10, 3, 45, &[]),
                reps("dumbbell-rows", "Dumbbell Rows", Difficulty::Intermediate, &["back", "biceps"], 10, 3, 60, &["dumbbells"]),
                reps("dumbbell-shoulder-press", "Dumbbell Shoulder Press", Difficulty::Intermediate, &["shoulders", "triceps"], 10, 3, 60, &["dumbbells"]),
                reps("pull-ups", "Pull-ups", Difficulty::Advanced, &["back", "biceps"], 6, 3, 90, &["pull-up-bar"]),
                reps("slow-tempo-squats", "Slow Tempo Squats", Difficulty::Advanced, &["quadriceps", "glutes", "hamstrings"], 8, 3, 60, &[]),
            ],
        );

        categories.insert(
            PillarCategory::Mobility.key().to_string(),
            vec![
                timed("cat-cow", "Cat-Cow Stretch", Difficulty::Beginner, &["mobility", "spine"], 1, 2, 15, &[]),
                timed("hip-flexor-stretch", "Hip Flexor Stretch", Difficulty::Beginner, &["flexibility", "hips"], 1, 2, 15, &[]),
                timed("worlds-greatest-stretch", "World's Greatest Stretch", Difficulty::Intermediate, &["mobility", "hips", "thoracic spine"], 1, 3, 15, &[]),
                timed("thoracic-rotations", "Thoracic Rotations", Difficulty::Beginner, &["mobility", "thoracic spine"], 1, 2, 15, &[]),
                timed("pigeon-pose", "Pigeon Pose", Difficulty::Intermediate, &["flexibility", "glutes", "hips"], 2, 2, 15, &["yoga-mat"]),
                timed("deep-squat-hold", "Deep Squat Hold", Difficulty::Intermediate, &["mobility", "ankles", "hips"], 1, 3, 20, &[]),
                timed("band-shoulder-dislocates", "Band Shoulder Dislocates", Difficulty::Advanced, &["mobility", "shoulders"], 1, 3, 20, &["resistance-bands"]),
            ],
        );

        categories.insert(
            PillarCategory::MuscularEndurance.key().to_string(),
            vec![
                timed("wall-sit", "Wall Sit", Difficulty::Beginner, &["quadriceps", "glutes"], 1, 3, 45, &[]),
                reps("step-ups", "Step-ups", Difficulty::Beginner, &["quadriceps", "glutes"], 15, 3, 45, &[]),
                timed("plank-hold", "Plank Hold", Difficulty::Intermediate, &["core", "shoulders"], 1, 3, 45, &[]),
                reps("high-rep-push-ups", "High-Rep Push-ups", Difficulty::Intermediate, &["chest", "triceps"], 20, 3, 60, &[]),
                reps("kettlebell-swings", "Kettlebell Swings", Difficulty::Intermediate, &["glutes", "hamstrings", "back"], 20, 3, 60, &["kettlebell"]),
                reps("walking-lunges", "Walking Lunges", Difficulty::Advanced, &["quadriceps", "glutes"], 24, 3, 60, &[]),
            ],
        );

        categories.insert(
            PillarCategory::BalanceStability.key().to_string(),
            vec![
                timed("single-leg-stand", "Single-Leg Stand", Difficulty::Beginner, &["balance", "ankles"], 1, 2, 15, &[]),
                reps("bird-dog", "Bird Dog", Difficulty::Beginner, &["core", "back", "balance"], 10, 3, 30, &[]),
                timed("side-plank", "Side Plank", Difficulty::Intermediate, &["core", "obliques"], 1, 2, 30, &[]),
                reps("single-leg-deadlift", "Single-Leg Deadlift", Difficulty::Intermediate, &["hamstrings", "glutes", "balance"], 8, 3, 45, &[]),
                reps("stability-ball-pass", "Stability Ball Pass", Difficulty::Advanced, &["core", "balance"], 10, 3, 45, &["stability-ball"]),
            ],
        );

        categories.insert(
            PillarCategory::Speed.key().to_string(),
            vec![
                reps("a-skips", "A-Skips", Difficulty::Beginner, &["cardiovascular", "calves"], 20, 3, 45, &[]),
                reps("fast-feet", "Fast Feet", Difficulty::Beginner, &["cardiovascular", "calves"], 30, 3, 45, &[]),
                reps("skater-jumps", "Skater Jumps", Difficulty::Intermediate, &["quadriceps", "glutes"], 12, 3, 45, &[]),
                reps("explosive-broad-jumps", "Explosive Broad Jumps", Difficulty::Advanced, &["quadriceps", "glutes", "hamstrings"], 6, 4, 90, &[]),
                timed("sprint-intervals", "Sprint Intervals", Difficulty::Advanced, &["cardiovascular", "legs"], 1, 6, 60, &[]),
            ],
        );

        categories.insert(
            "cardio-strength".to_string(),
            vec![
                reps("thrusters", "Squat to Press Thrusters", Difficulty::Intermediate, &["quadriceps", "shoulders", "cardiovascular"], 12, 3, 45, &["dumbbells"]),
                reps("burpee-push-ups", "Burpee Push-ups", Difficulty::Advanced, &["chest", "cardiovascular"], 8, 3, 60, &[]),
                reps("jump-squats", "Jump Squats", Difficulty::Intermediate, &["quadriceps", "glutes", "cardiovascular"], 12, 3, 45, &[]),
                reps("plank-jacks", "Plank Jacks", Difficulty::Beginner, &["core", "cardiovascular"], 20, 3, 30, &[]),
                reps("squat-punches", "Squat Punches", Difficulty::Beginner, &["quadriceps", "shoulders", "cardiovascular"], 20, 3, 30, &[]),
            ],
        );

        categories.insert(
            "strength-mobility".to_string(),
            vec![
                reps("cossack-squats", "Cossack Squats", Difficulty::Intermediate, &["quadriceps", "mobility"], 8, 3, 45, &[]),
                reps("inchworm-push-ups", "Inchworm Push-ups", Difficulty::Intermediate, &["chest", "hamstrings", "flexibility"], 8, 3, 45, &[]),
                reps("goblet-squat-pry", "Goblet Squat Pry", Difficulty::Beginner, &["glutes", "mobility"], 10, 2, 30, &["kettlebell"]),
                reps("spiderman-lunges", "Spiderman Lunges", Difficulty::Beginner, &["glutes", "mobility"], 10, 2, 30, &[]),
                reps("slow-jefferson-curls", "Slow Jefferson Curls", Difficulty::Advanced, &["back", "hamstrings", "flexibility"], 6, 3, 60, &[]),
            ],
        );

        categories.insert(
            "balance-strength".to_string(),
            vec![
                reps("pistol-squat-progression", "Pistol Squat Progression", Difficulty::Advanced, &["quadriceps", "glutes", "balance"], 5, 3, 60, &[]),
                reps("bulgarian-split-squats", "Bulgarian Split Squats", Difficulty::Intermediate, &["quadriceps", "glutes", "balance"], 8, 3, 60, &[]),
                reps("single-arm-farmer-march", "Single-Arm Farmer March", Difficulty::Beginner, &["core", "shoulders", "balance"], 20, 3, 45, &["dumbbells"]),
                reps("curtsy-lunges", "Curtsy Lunges", Difficulty::Beginner, &["glutes", "quadriceps", "balance"], 10, 3, 45, &[]),
            ],
        );

        Self { categories }
    }
}

#[allow(clippy::too_many_arguments)]
fn reps(
    id: &str,
    name: &str,
    difficulty: Difficulty,
    muscles: &[&str],
    reps: u32,
    sets: u32,
    rest_time: u32,
    equipment: &[&str],
) -> ExerciseTemplate {
    ExerciseTemplate {
        id: id.to_string(),
        name: name.to_string(),
        instructions: format!("Perform {} sets of {} {} with controlled form.", sets, reps, name.to_lowercase()),
        difficulty,
        target_muscles: muscles.iter().map(|m| m.to_string()).collect(),
        reps: Some(reps),
        sets: Some(sets),
        duration: None,
        rest_time: Some(rest_time),
        weight: None,
        required_equipment: equipment.iter().map(|e| e.to_string()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn timed(
    id: &str,
    name: &str,
    difficulty: Difficulty,
    muscles: &[&str],
    minutes: u32,
    sets: u32,
    rest_time: u32,
    equipment: &[&str],
) -> ExerciseTemplate {
    ExerciseTemplate {
        id: id.to_string(),
        name: name.to_string(),
        instructions: format!("Hold or repeat {} for {} minute(s) per set.", name.to_lowercase(), minutes),
        difficulty,
        target_muscles: muscles.iter().map(|m| m.to_string()).collect(),
        reps: None,
        sets: Some(sets),
        duration: Some(minutes),
        rest_time: Some(rest_time),
        weight: None,
        required_equipment: equipment.iter().map(|e| e.to_string()).collect(),
    }
}
