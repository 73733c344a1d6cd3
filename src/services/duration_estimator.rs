use crate::models::{Difficulty, WorkoutExercise};

const WARM_UP_MINUTES: u32 = 5;
const EMPTY_WORKOUT_MINUTES: u32 = 30;
const FALLBACK_EXERCISE_SECONDS: f64 = 180.0;
const DEFAULT_TIMED_REST_SECONDS: u32 = 30;
const DEFAULT_REP_REST_SECONDS: u32 = 45;

/// Wall-clock minutes for one exercise including rest between sets
pub fn estimate_exercise_minutes(exercise: &WorkoutExercise) -> u32 {
    let sets = exercise.sets.filter(|s| *s > 0).unwrap_or(1);
    let rest_gaps = f64::from(sets - 1);

    let total_seconds = if let Some(duration) = exercise.duration.filter(|d| *d > 0) {
        let rest = f64::from(exercise.rest_time.unwrap_or(DEFAULT_TIMED_REST_SECONDS));
        // Values above 300 are already seconds
        let duration_seconds = if duration > 300 {
            f64::from(duration)
        } else {
            f64::from(duration) * 60.0
        };
        duration_seconds * f64::from(sets) + rest * rest_gaps
    } else if let Some(reps) = exercise.reps.filter(|r| *r > 0) {
        let rest = f64::from(exercise.rest_time.unwrap_or(DEFAULT_REP_REST_SECONDS));
        f64::from(reps) * seconds_per_rep(exercise) * f64::from(sets) + rest * rest_gaps
    } else {
        FALLBACK_EXERCISE_SECONDS
    };

    (total_seconds / 60.0).ceil() as u32
}

fn seconds_per_rep(exercise: &WorkoutExercise) -> f64 {
    let name = exercise.name.to_lowercase();

    if exercise.target_muscles.iter().any(|m| m == "cardiovascular") {
        1.0
    } else if exercise.difficulty == Difficulty::Advanced || name.contains("slow") {
        3.0
    } else if name.contains("explosive") || name.contains("jump") {
        1.5
    } else {
        2.0
    }
}

/// Minutes for a whole session: exercises, warm-up, cool-down and transitions,
/// rounded up to the next multiple of five
pub fn estimate_workout_minutes(exercises: &[WorkoutExercise]) -> u32 {
    if exercises.is_empty() {
        return EMPTY_WORKOUT_MINUTES;
    }

    let mut total: u32 = exercises.iter().map(estimate_exercise_minutes).sum();

    total += WARM_UP_MINUTES;

    let cool_down = if total > 30 { 5 } else { 3 };
    total += cool_down;

    // 30 seconds between consecutive exercises
    total += (exercises.len() as u32 - 1).div_ceil(2);

    total.div_ceil(5) * 5
}

/// Session length fed into exercise selection (not the estimate stamped on the workout)
pub fn target_session_minutes(sessions_per_week: u32, pillar_count: usize) -> u32 {
    let mut target = if sessions_per_week <= 2 {
        45
    } else if sessions_per_week >= 5 {
        25
    } else {
        30
    };

    if pillar_count >= 3 {
        target += 10;
    }

    target.min(60)
}
