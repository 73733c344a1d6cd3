use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

use crate::catalog::ExerciseCatalog;
use crate::models::{
    ActivityCategory, Difficulty, Equipment, ExerciseTemplate, PillarCategory, WorkoutExercise,
    BODYWEIGHT_EQUIPMENT_ID,
};

use super::duration_estimator::estimate_exercise_minutes;
use super::workout_focus_service::WorkoutFocus;

const MIN_EXERCISES: usize = 3;
const MAX_EXERCISES: usize = 8;
const MAX_SELECTION_ATTEMPTS: usize = 30;
const DURATION_SLACK_MINUTES: u32 = 15;
const RELATED_PILLAR_CHANCE: f64 = 0.3;
const VARIETY_SAMPLE: usize = 2;

/// Equipment ids the user can train with; bodyweight is always present
pub fn available_equipment_ids(equipment: &[Equipment]) -> HashSet<String> {
    let mut ids: HashSet<String> = equipment
        .iter()
        .filter(|item| item.available)
        .map(|item| item.id.clone())
        .collect();
    ids.insert(BODYWEIGHT_EQUIPMENT_ID.to_string());
    ids
}

pub fn is_performable(template: &ExerciseTemplate, available: &HashSet<String>) -> bool {
    template
        .required_equipment
        .iter()
        .all(|required| available.contains(required))
}

/// Keep only exercises whose every required item is available
pub fn filter_by_equipment(
    pool: &[ExerciseTemplate],
    available: &HashSet<String>,
) -> Vec<ExerciseTemplate> {
    pool.iter()
        .filter(|template| is_performable(template, available))
        .cloned()
        .collect()
}

/// Exercises per regular session for a target length
pub fn exercise_count_for(target_minutes: u32) -> usize {
    ((target_minutes / 6) as usize).clamp(MIN_EXERCISES, MAX_EXERCISES)
}

/// Exercises in a complementary session for the minutes left after existing sports
pub fn complementary_exercise_count(remaining_minutes: u32) -> usize {
    ((remaining_minutes / 10) as usize).clamp(2, 4)
}

fn dedupe_by_id(pool: Vec<ExerciseTemplate>) -> Vec<ExerciseTemplate> {
    let mut seen = HashSet::new();
    pool.into_iter()
        .filter(|template| seen.insert(template.id.clone()))
        .collect()
}

/// Builds candidate pools from the catalog and picks a varied, time-boxed set
pub struct ExerciseSelectionService<'a> {
    catalog: &'a ExerciseCatalog,
}

impl<'a> ExerciseSelectionService<'a> {
    pub fn new(catalog: &'a ExerciseCatalog) -> Self {
        Self { catalog }
    }

    fn pillar_templates(&self, pillar_id: &str) -> &'a [ExerciseTemplate] {
        self.catalog.pillar(PillarCategory::from_pillar_id(pillar_id))
    }

    /// Candidate templates for a focus, before equipment filtering
    pub fn build_pool<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        focus: &WorkoutFocus,
    ) -> Vec<ExerciseTemplate> {
        let mut pool = Vec::new();

        match focus {
            WorkoutFocus::Combined {
                key,
                primary,
                secondary,
            } => {
                if self.catalog.contains(key) {
                    pool.extend_from_slice(self.catalog.get(key));
                } else {
                    pool.extend_from_slice(self.pillar_templates(primary));
                    pool.extend_from_slice(self.pillar_templates(secondary));
                }
            }
            WorkoutFocus::MultiPillar {
                primary,
                secondary,
                tertiary,
            } => {
                pool.extend_from_slice(self.pillar_templates(&primary.id));
                pool.extend_from_slice(self.pillar_templates(&secondary.id));
                if let Some(tertiary) = tertiary {
                    pool.extend(
                        self.pillar_templates(&tertiary.id)
                            .iter()
                            .take(VARIETY_SAMPLE)
                            .cloned(),
                    );
                }
            }
            WorkoutFocus::Single { primary } => {
                let category = PillarCategory::from_pillar_id(&primary.id);
                pool.extend_from_slice(self.catalog.pillar(category));

                // A little variety from neighbouring pillars
                for related in category.related() {
                    if rng.gen::<f64>() < RELATED_PILLAR_CHANCE {
                        pool.extend(
                            self.catalog
                                .pillar(*related)
                                .iter()
                                .take(VARIETY_SAMPLE)
                                .cloned(),
                        );
                    }
                }
            }
            WorkoutFocus::General => {}
        }

        dedupe_by_id(pool)
    }

    /// Apply the equipment filter and top up from the default pool when fewer
    /// than three usable templates remain
    pub fn resolve_pool(
        &self,
        pool: Vec<ExerciseTemplate>,
        available: &HashSet<String>,
    ) -> Vec<ExerciseTemplate> {
        let mut resolved = filter_by_equipment(&pool, available);
        if resolved.len() >= MIN_EXERCISES {
            return resolved;
        }

        debug!(
            "Exercise pool has {} usable templates, topping up from default pool",
            resolved.len()
        );

        let default_pool = self.catalog.default_pool();
        let usable_default = filter_by_equipment(&default_pool, available);
        if usable_default.is_empty() {
            resolved.extend(default_pool);
        } else {
            resolved.extend(usable_default);
        }

        dedupe_by_id(resolved)
    }

    /// Pool for a complementary session next to an existing sport
    pub fn complementary_pool(&self, category: ActivityCategory) -> Vec<ExerciseTemplate> {
        let pool = match category {
            ActivityCategory::Cardio => [
                self.catalog.pillar(PillarCategory::Mobility),
                self.catalog.pillar(PillarCategory::BalanceStability),
            ]
            .concat(),
            ActivityCategory::Strength => self
                .catalog
                .pillar(PillarCategory::Cardio)
                .iter()
                .filter(|template| template.difficulty == Difficulty::Beginner)
                .cloned()
                .collect(),
            ActivityCategory::Flexibility => [
                self.catalog.pillar(PillarCategory::MuscularEndurance),
                self.catalog.pillar(PillarCategory::BalanceStability),
            ]
            .concat(),
            ActivityCategory::Sports | ActivityCategory::Functional => [
                self.catalog.pillar(PillarCategory::BalanceStability),
                self.catalog.pillar(PillarCategory::Mobility),
            ]
            .concat(),
        };

        dedupe_by_id(pool)
    }

    /// Pick up to `target_count` exercises spread across difficulties while
    /// keeping the running estimate within `target_minutes + 15`. Short
    /// selections are topped up to at least three from the rest of the pool.
    pub fn select<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        pool: &[ExerciseTemplate],
        target_count: usize,
        target_minutes: u32,
        day_stamp: i64,
    ) -> Vec<WorkoutExercise> {
        select_varied(
            rng,
            pool,
            target_count,
            target_minutes,
            day_stamp,
            target_count.max(MIN_EXERCISES),
        )
    }

    /// Like `select`, but never tops up beyond `target_count`
    pub fn select_complementary<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        pool: &[ExerciseTemplate],
        target_count: usize,
        target_minutes: u32,
        day_stamp: i64,
    ) -> Vec<WorkoutExercise> {
        select_varied(rng, pool, target_count, target_minutes, day_stamp, target_count)
    }
}

fn difficulty_quota(difficulty: Difficulty, target_count: usize) -> usize {
    match difficulty {
        Difficulty::Beginner | Difficulty::Intermediate => (target_count * 2).div_ceil(5),
        Difficulty::Advanced => target_count / 5,
    }
}

fn instance_id(template: &ExerciseTemplate, day_stamp: i64, position: usize) -> String {
    format!("{}_{}_{}", template.id, day_stamp, position)
}

fn select_varied<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[ExerciseTemplate],
    target_count: usize,
    target_minutes: u32,
    day_stamp: i64,
    fill_to: usize,
) -> Vec<WorkoutExercise> {
    let mut selected: Vec<WorkoutExercise> = Vec::with_capacity(fill_to);
    let mut used_ids: HashSet<&str> = HashSet::new();
    let mut current_minutes = 0;
    let mut attempts = 0;
    let budget = target_minutes + DURATION_SLACK_MINUTES;

    'difficulties: for difficulty in Difficulty::ALL {
        let bucket: Vec<&ExerciseTemplate> = pool
            .iter()
            .filter(|template| template.difficulty == difficulty)
            .collect();
        let quota = difficulty_quota(difficulty, target_count);
        let mut picked = 0;

        while picked < quota && !bucket.is_empty() && attempts < MAX_SELECTION_ATTEMPTS {
            if selected.len() >= target_count {
                break 'difficulties;
            }
            attempts += 1;

            let Some(&candidate) = bucket.choose(rng) else {
                break;
            };
            if used_ids.contains(candidate.id.as_str()) {
                continue;
            }

            let exercise = candidate.instantiate(instance_id(candidate, day_stamp, selected.len()));
            let minutes = estimate_exercise_minutes(&exercise);
            if current_minutes + minutes <= budget {
                used_ids.insert(candidate.id.as_str());
                selected.push(exercise);
                current_minutes += minutes;
                picked += 1;
            }
        }
    }

    if selected.len() < fill_to {
        let mut remaining: Vec<&ExerciseTemplate> = pool
            .iter()
            .filter(|template| !used_ids.contains(template.id.as_str()))
            .collect();
        remaining.shuffle(rng);

        for template in remaining {
            if selected.len() >= fill_to {
                break;
            }
            if !used_ids.insert(template.id.as_str()) {
                continue;
            }
            let exercise = template.instantiate(instance_id(template, day_stamp, selected.len()));
            selected.push(exercise);
        }
    }

    selected
}
