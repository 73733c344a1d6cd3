use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{FitnessPillar, Intensity, PillarCategory, WorkoutExercise};

const COMBINED_BASE_CHANCE: f64 = 0.25;
const COMBINED_WEEK_BONUS: f64 = 0.05;
const COMBINED_MAX_WEEK_BONUS: f64 = 0.15;
const COMBINED_EVERY_THIRD_DAY_BONUS: f64 = 0.10;
const MULTI_PILLAR_CHANCE: f64 = 0.3;
const TERTIARY_PILLAR_CHANCE: f64 = 0.4;

/// Fused pillar pairs that have a combined catalog entry
pub const KNOWN_COMBINATIONS: [&str; 3] = ["cardio-strength", "strength-mobility", "balance-strength"];
const DEFAULT_COMBINATION: &str = "cardio-strength";

pub const COMBINED_FOCUS_LABEL: &str = "Combined Focus";
pub const GENERAL_FITNESS: &str = "General Fitness";
const FALLBACK_TITLE: &str = "Fitness Focus";

const COMBINED_TITLES: [&str; 12] = [
    "Power & Flow",
    "Strength & Cardio Fusion",
    "Balance & Power",
    "Endurance & Mobility",
    "Athletic Hybrid",
    "Complete Conditioning",
    "Dynamic Duo",
    "Fusion Training",
    "Multi-Modal",
    "Cross Training",
    "Hybrid Power",
    "Total Body Fusion",
];

/// Where a day's exercises come from
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutFocus {
    /// One session drawing on a fused catalog key such as `cardio-strength`
    Combined {
        key: String,
        primary: String,
        secondary: String,
    },
    Single {
        primary: FitnessPillar,
    },
    MultiPillar {
        primary: FitnessPillar,
        secondary: FitnessPillar,
        tertiary: Option<FitnessPillar>,
    },
    /// No selected pillars at all
    General,
}

impl WorkoutFocus {
    pub fn is_combined(&self) -> bool {
        matches!(self, WorkoutFocus::Combined { .. })
    }

    pub fn primary(&self) -> Option<&FitnessPillar> {
        match self {
            WorkoutFocus::Single { primary } | WorkoutFocus::MultiPillar { primary, .. } => {
                Some(primary)
            }
            _ => None,
        }
    }

    /// Short description for logs
    pub fn describe(&self) -> String {
        match self {
            WorkoutFocus::Combined { key, .. } => format!("combined:{}", key),
            WorkoutFocus::Single { primary } => format!("single:{}", primary.id),
            WorkoutFocus::MultiPillar { primary, secondary, tertiary } => match tertiary {
                Some(t) => format!("multi:{}+{}+{}", primary.id, secondary.id, t.id),
                None => format!("multi:{}+{}", primary.id, secondary.id),
            },
            WorkoutFocus::General => "general".to_string(),
        }
    }
}

/// Selected pillars ordered by importance, highest first (stable for ties)
pub fn sort_by_importance(pillars: &[FitnessPillar]) -> Vec<FitnessPillar> {
    let mut sorted = pillars.to_vec();
    sorted.sort_by(|a, b| b.effective_importance().cmp(&a.effective_importance()));
    sorted
}

/// Chance that the day becomes a combined workout; rises over the first weeks
pub fn combined_probability(week_number: u32, day_index: u32) -> f64 {
    let week_bonus = (f64::from(week_number) * COMBINED_WEEK_BONUS).min(COMBINED_MAX_WEEK_BONUS);
    let day_bonus = if day_index % 3 == 0 {
        COMBINED_EVERY_THIRD_DAY_BONUS
    } else {
        0.0
    };
    COMBINED_BASE_CHANCE + week_bonus + day_bonus
}

pub fn should_combine<R: Rng + ?Sized>(
    rng: &mut R,
    pillar_count: usize,
    week_number: u32,
    day_index: u32,
) -> bool {
    if pillar_count < 2 {
        return false;
    }
    rng.gen::<f64>() < combined_probability(week_number, day_index)
}

/// Fused catalog key for the two most important pillars
pub fn combined_key(sorted_pillars: &[FitnessPillar]) -> String {
    let primary = sorted_pillars.first().map(|p| p.id.as_str()).unwrap_or("strength");
    let secondary = sorted_pillars.get(1).map(|p| p.id.as_str()).unwrap_or("cardio");

    let forward = format!("{}-{}", primary, secondary);
    let reverse = format!("{}-{}", secondary, primary);

    if KNOWN_COMBINATIONS.contains(&forward.as_str()) {
        forward
    } else if KNOWN_COMBINATIONS.contains(&reverse.as_str()) {
        reverse
    } else {
        DEFAULT_COMBINATION.to_string()
    }
}

/// Decide the day's focus. `sorted_pillars` must come from `sort_by_importance`.
pub fn select_focus<R: Rng + ?Sized>(
    rng: &mut R,
    sorted_pillars: &[FitnessPillar],
    week_number: u32,
    day_index: u32,
    combined: bool,
) -> WorkoutFocus {
    if sorted_pillars.is_empty() {
        return WorkoutFocus::General;
    }

    if combined && sorted_pillars.len() >= 2 {
        return WorkoutFocus::Combined {
            key: combined_key(sorted_pillars),
            primary: sorted_pillars[0].id.clone(),
            secondary: sorted_pillars[1].id.clone(),
        };
    }

    // Rotate the primary pillar across days and weeks
    let count = sorted_pillars.len();
    let focus_index = (day_index as usize + week_number as usize) % count;
    let primary = sorted_pillars[focus_index].clone();

    if count > 2 && rng.gen::<f64>() < MULTI_PILLAR_CHANCE {
        let secondary = sorted_pillars[(focus_index + 1) % count].clone();
        let tertiary = if rng.gen::<f64>() < TERTIARY_PILLAR_CHANCE {
            Some(sorted_pillars[2].clone())
        } else {
            None
        };
        return WorkoutFocus::MultiPillar {
            primary,
            secondary,
            tertiary,
        };
    }

    WorkoutFocus::Single { primary }
}

fn pillar_titles(pillar_id: &str) -> &'static [&'static str] {
    match pillar_id {
        "cardio" => &[
            "Cardio Blast", "Heart Pumper", "Endurance Builder", "Cardio Crusher", "Rhythm & Flow",
            "Pulse Raiser", "Cardio Storm", "Heart Rate Hero", "Endurance Express", "Cardio Circuit",
            "Beat Drop", "Cardio Ignite", "Pulse Power", "Heart Strong", "Cardio Surge",
        ],
        "strength" => &[
            "Strength Builder", "Power Session", "Muscle Maker", "Strength Focus", "Iron Will",
            "Power Hour", "Strength Stack", "Muscle Mission", "Power Play", "Strength Storm",
            "Muscle Forge", "Power Pump", "Strength Surge", "Iron Core", "Power Drive",
        ],
        "mobility" => &[
            "Flexibility Flow", "Mobility Master", "Range & Flow", "Stretch & Restore", "Fluid Motion",
            "Mobility Magic", "Flow State", "Stretch Session", "Mobility Moment", "Flex Appeal",
            "Range Rider", "Mobility Mix", "Stretch & Strengthen", "Flow Focus", "Mobility Mastery",
        ],
        "muscular-endurance" => &[
            "Endurance Challenge", "Stamina Builder", "Endurance Test", "Staying Power", "Endurance Edge",
            "Stamina Storm", "Endurance Engine", "Marathon Mode", "Stamina Stack", "Endurance Elite",
            "Stamina Surge", "Endurance Express", "Power Endurance", "Stamina Strong", "Endurance Evolution",
        ],
        "balance-stability" => &[
            "Balance & Control", "Stability Focus", "Core & Balance", "Steady & Strong", "Balance Boost",
            "Stability Stack", "Core Control", "Balance Beam", "Stability Storm", "Core Connection",
            "Balance Builder", "Stability Session", "Core & Coordination", "Balance Mastery", "Stability Strong",
        ],
        "speed" => &[
            "Speed & Power", "Quick & Fast", "Explosive Training", "Speed Demon", "Lightning Fast",
            "Speed Storm", "Quick Strike", "Explosive Edge", "Speed Session", "Fast & Furious",
            "Speed Surge", "Quick Fire", "Explosive Power", "Speed Stack", "Lightning Bolt",
        ],
        _ => &[FALLBACK_TITLE],
    }
}

pub fn workout_title<R: Rng + ?Sized>(rng: &mut R, focus: &WorkoutFocus) -> String {
    let choices: &[&str] = match focus {
        WorkoutFocus::Combined { .. } => &COMBINED_TITLES,
        WorkoutFocus::Single { primary } | WorkoutFocus::MultiPillar { primary, .. } => {
            pillar_titles(&primary.id)
        }
        WorkoutFocus::General => return GENERAL_FITNESS.to_string(),
    };

    choices
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_TITLE)
        .to_string()
}

/// Buckets used to label a workout from its exercises' target muscles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuscleBucket {
    Cardio,
    Strength,
    Mobility,
}

impl MuscleBucket {
    pub fn label(&self) -> &'static str {
        match self {
            MuscleBucket::Cardio => "Cardio Focus",
            MuscleBucket::Strength => "Strength Focus",
            MuscleBucket::Mobility => "Mobility Focus",
        }
    }
}

/// Substring vocabulary per bucket; a muscle tag counts toward every bucket it matches
pub const MUSCLE_CLASSIFICATION: [(MuscleBucket, &[&str]); 3] = [
    (MuscleBucket::Cardio, &["cardiovascular"]),
    (
        MuscleBucket::Strength,
        &["chest", "shoulders", "triceps", "back", "biceps", "quadriceps", "glutes", "hamstrings"],
    ),
    (MuscleBucket::Mobility, &["flexibility", "mobility"]),
];

/// Bucket holding strictly more muscle tags than each other bucket, if any
pub fn classify_muscles(exercises: &[WorkoutExercise]) -> Option<MuscleBucket> {
    let counts: Vec<(MuscleBucket, usize)> = MUSCLE_CLASSIFICATION
        .iter()
        .map(|(bucket, vocabulary)| {
            let count = exercises
                .iter()
                .flat_map(|ex| ex.target_muscles.iter())
                .filter(|muscle| vocabulary.iter().any(|word| muscle.contains(word)))
                .count();
            (*bucket, count)
        })
        .collect();

    counts
        .iter()
        .find(|(bucket, count)| {
            *count > 0
                && counts
                    .iter()
                    .filter(|(other, _)| other != bucket)
                    .all(|(_, other_count)| count > other_count)
        })
        .map(|(bucket, _)| *bucket)
}

/// Type label stamped on a generated workout
pub fn workout_type_label(exercises: &[WorkoutExercise], focus: &WorkoutFocus) -> String {
    if focus.is_combined() {
        return COMBINED_FOCUS_LABEL.to_string();
    }

    if let Some(bucket) = classify_muscles(exercises) {
        return bucket.label().to_string();
    }

    match focus.primary() {
        Some(primary) if !primary.name.is_empty() => primary.name.clone(),
        Some(primary) => primary
            .id
            .parse::<PillarCategory>()
            .map(|category| category.display_name().to_string())
            .unwrap_or_else(|_| GENERAL_FITNESS.to_string()),
        None => GENERAL_FITNESS.to_string(),
    }
}

/// Prescribed intensity from behavioural readiness for change.
/// Lower readiness maps to higher intensity.
pub fn intensity_for_readiness(change_readiness: u8) -> Intensity {
    if change_readiness >= 4 {
        Intensity::Low
    } else if change_readiness >= 2 {
        Intensity::Medium
    } else {
        Intensity::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, ExerciseTemplate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pillars() -> Vec<FitnessPillar> {
        vec![
            FitnessPillar::new("mobility", "Mobility", 2),
            FitnessPillar::new("strength", "Strength", 5),
            FitnessPillar::new("cardio", "Cardio", 4),
        ]
    }

    fn exercise_with(muscles: &[&str]) -> WorkoutExercise {
        ExerciseTemplate {
            id: "x".to_string(),
            name: "X".to_string(),
            instructions: String::new(),
            difficulty: Difficulty::Beginner,
            target_muscles: muscles.iter().map(|m| m.to_string()).collect(),
            reps: Some(10),
            sets: Some(1),
            duration: None,
            rest_time: None,
            weight: None,
            required_equipment: Vec::new(),
        }
        .instantiate("x_0".to_string())
    }

    #[test]
    fn test_sort_by_importance() {
        let sorted = sort_by_importance(&pillars());
        let ids: Vec<_> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["strength", "cardio", "mobility"]);
    }

    #[test]
    fn test_combined_probability_bounds() {
        assert!((combined_probability(1, 1) - 0.30).abs() < 1e-9);
        assert!((combined_probability(1, 3) - 0.40).abs() < 1e-9);
        assert!((combined_probability(10, 4) - 0.40).abs() < 1e-9);
        assert!((combined_probability(10, 0) - 0.50).abs() < 1e-9);
    }

    #[test]
    fn test_single_pillar_never_combines() {
        let mut rng = StdRng::seed_from_u64(1);
        for day in 0..50 {
            assert!(!should_combine(&mut rng, 1, 1, day));
        }
    }

    #[test]
    fn test_combined_key_matches_known_pairs() {
        let sorted = sort_by_importance(&pillars());
        assert_eq!(combined_key(&sorted), "cardio-strength");

        let mobility_first = vec![
            FitnessPillar::new("mobility", "Mobility", 5),
            FitnessPillar::new("strength", "Strength", 4),
        ];
        assert_eq!(combined_key(&mobility_first), "strength-mobility");

        let unknown = vec![
            FitnessPillar::new("speed", "Speed", 5),
            FitnessPillar::new("mobility", "Mobility", 4),
        ];
        assert_eq!(combined_key(&unknown), "cardio-strength");
    }

    #[test]
    fn test_focus_rotates_with_day_and_week() {
        let sorted = sort_by_importance(&pillars()[..2]);
        let mut rng = StdRng::seed_from_u64(3);

        let first = select_focus(&mut rng, &sorted, 1, 0, false);
        let second = select_focus(&mut rng, &sorted, 1, 1, false);

        // sorted = [strength, mobility]
        assert_eq!(first.primary().unwrap().id, "mobility");
        assert_eq!(second.primary().unwrap().id, "strength");
    }

    #[test]
    fn test_no_pillars_is_general() {
        let mut rng = StdRng::seed_from_u64(3);
        let focus = select_focus(&mut rng, &[], 1, 0, false);
        assert_eq!(focus, WorkoutFocus::General);
        assert_eq!(workout_title(&mut rng, &focus), GENERAL_FITNESS);
    }

    #[test]
    fn test_titles_come_from_pillar_list() {
        let mut rng = StdRng::seed_from_u64(9);
        let focus = WorkoutFocus::Single {
            primary: FitnessPillar::new("speed", "Speed", 3),
        };
        let title = workout_title(&mut rng, &focus);
        assert!(pillar_titles("speed").contains(&title.as_str()));

        let unknown = WorkoutFocus::Single {
            primary: FitnessPillar::new("yoga", "Yoga", 3),
        };
        assert_eq!(workout_title(&mut rng, &unknown), "Fitness Focus");
    }

    #[test]
    fn test_type_label_majority() {
        let focus = WorkoutFocus::Single {
            primary: FitnessPillar::new("speed", "Speed", 3),
        };

        let strength = vec![exercise_with(&["chest", "triceps"]), exercise_with(&["cardiovascular"])];
        assert_eq!(workout_type_label(&strength, &focus), "Strength Focus");

        let tie = vec![exercise_with(&["chest"]), exercise_with(&["mobility"])];
        assert_eq!(workout_type_label(&tie, &focus), "Speed");

        let combined = WorkoutFocus::Combined {
            key: "cardio-strength".to_string(),
            primary: "cardio".to_string(),
            secondary: "strength".to_string(),
        };
        assert_eq!(workout_type_label(&strength, &combined), COMBINED_FOCUS_LABEL);
    }

    #[test]
    fn test_intensity_inversion() {
        assert_eq!(intensity_for_readiness(5), Intensity::Low);
        assert_eq!(intensity_for_readiness(4), Intensity::Low);
        assert_eq!(intensity_for_readiness(3), Intensity::Medium);
        assert_eq!(intensity_for_readiness(2), Intensity::Medium);
        assert_eq!(intensity_for_readiness(1), Intensity::High);
    }
}
