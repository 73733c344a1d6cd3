use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{
    ExerciseProgress, ExerciseSession, ExerciseUpdate, ManualActivity, NewManualActivity,
    PersonalBest, SetData, TrainingPlan, UserProfile, WeeklyProgress, WorkoutExercise,
};

const PERFECT_WEEK: &str = "Perfect week";

/// Mark a workout done, fold its completed exercises into progress history and
/// refresh weekly summaries. Unknown workout ids return the plan unchanged.
pub fn complete_workout(
    plan: &TrainingPlan,
    workout_id: &str,
    notes: Option<String>,
    now: DateTime<Utc>,
) -> TrainingPlan {
    let Some(index) = plan.daily_workouts.iter().position(|w| w.id == workout_id) else {
        warn!("Cannot complete unknown workout {}", workout_id);
        return plan.clone();
    };

    let mut updated = plan.clone();
    let today = now.date_naive();

    for exercise in plan.daily_workouts[index].exercises.iter().filter(|e| e.completed) {
        record_session(&mut updated.exercise_progress, exercise, today);
    }

    let workout = &mut updated.daily_workouts[index];
    workout.completed = true;
    workout.completed_at = Some(now);
    workout.notes = notes;

    debug!("Completed workout {} on {}", workout_id, today);

    updated.weekly_progress = weekly_summaries(&updated);
    updated.current_week = updated
        .week_number_of(today)
        .min(total_weeks(&updated))
        .max(1);

    updated
}

/// Patch one placed exercise. Unknown workout or exercise ids return the plan unchanged.
pub fn update_exercise(
    plan: &TrainingPlan,
    workout_id: &str,
    exercise_id: &str,
    update: &ExerciseUpdate,
) -> TrainingPlan {
    let mut updated = plan.clone();

    let exercise = updated
        .daily_workouts
        .iter_mut()
        .find(|w| w.id == workout_id)
        .and_then(|w| w.exercises.iter_mut().find(|e| e.id == exercise_id));

    match exercise {
        Some(exercise) => exercise.apply(update),
        None => warn!(
            "Cannot update exercise {} in workout {}: not found",
            exercise_id, workout_id
        ),
    }

    updated
}

/// Append a timestamped manual activity to the profile
pub fn log_manual_activity(
    profile: &UserProfile,
    activity: NewManualActivity,
    id: Uuid,
    now: DateTime<Utc>,
) -> UserProfile {
    let mut updated = profile.clone();
    updated.manual_activities.push(ManualActivity {
        id,
        name: activity.name,
        activity_type: activity.activity_type,
        duration: activity.duration,
        intensity: activity.intensity,
        notes: activity.notes,
        date: activity.date,
        logged_at: now,
    });
    updated
}

// Zero reads as "not recorded", same as absent
fn actual_or_nominal<T: PartialOrd + Default + Copy>(actual: Option<T>, nominal: Option<T>) -> Option<T> {
    let positive = |value: &T| *value > T::default();
    actual.filter(positive).or(nominal.filter(positive))
}

fn record_session(progress: &mut Vec<ExerciseProgress>, exercise: &WorkoutExercise, date: NaiveDate) {
    let entry_index = match progress
        .iter()
        .position(|p| p.exercise_id == exercise.template_id)
    {
        Some(index) => index,
        None => {
            progress.push(ExerciseProgress::new(&exercise.template_id, &exercise.name));
            progress.len() - 1
        }
    };
    let entry = &mut progress[entry_index];

    let reps = actual_or_nominal(exercise.actual_reps, exercise.reps);
    let weight = actual_or_nominal(exercise.actual_weight, exercise.weight);
    let duration = exercise.duration.filter(|d| *d > 0);
    let set_count = actual_or_nominal(exercise.actual_sets, exercise.sets).unwrap_or(1);

    let sets = (0..set_count)
        .map(|_| SetData {
            reps,
            weight,
            duration,
            completed: true,
            rest_time: exercise.rest_time,
        })
        .collect();

    entry.sessions.push(ExerciseSession {
        date,
        sets,
        notes: exercise.notes.clone(),
        rpe: None,
    });

    entry.personal_best = update_personal_best(entry.personal_best.take(), weight, reps, duration, date);
}

/// Each metric only moves when strictly exceeded; the date follows any movement
pub fn update_personal_best(
    current: Option<PersonalBest>,
    weight: Option<f64>,
    reps: Option<u32>,
    duration: Option<u32>,
    date: NaiveDate,
) -> Option<PersonalBest> {
    let Some(mut best) = current else {
        if weight.is_none() && reps.is_none() && duration.is_none() {
            return None;
        }
        return Some(PersonalBest {
            weight,
            reps,
            duration,
            date,
        });
    };

    let mut improved = false;

    if let Some(weight) = weight {
        if best.weight.map_or(true, |w| weight > w) {
            best.weight = Some(weight);
            improved = true;
        }
    }
    if let Some(reps) = reps {
        if best.reps.map_or(true, |r| reps > r) {
            best.reps = Some(reps);
            improved = true;
        }
    }
    if let Some(duration) = duration {
        if best.duration.map_or(true, |d| duration > d) {
            best.duration = Some(duration);
            improved = true;
        }
    }

    if improved {
        best.date = date;
    }

    Some(best)
}

fn total_weeks(plan: &TrainingPlan) -> u32 {
    plan.week_number_of(plan.end_date)
}

/// Per-week completion counts, minutes and average intensity of completed work
pub fn weekly_summaries(plan: &TrainingPlan) -> Vec<WeeklyProgress> {
    (1..=total_weeks(plan))
        .map(|week| summarize_week(plan, week))
        .collect()
}

pub fn summarize_week(plan: &TrainingPlan, week_number: u32) -> WeeklyProgress {
    let start_date = plan.start_date + Duration::weeks(i64::from(week_number.max(1) - 1));
    let end_date = (start_date + Duration::days(6)).min(plan.end_date.max(start_date));

    let workouts: Vec<_> = plan
        .daily_workouts
        .iter()
        .filter(|w| w.date >= start_date && w.date <= end_date)
        .collect();
    let completed: Vec<_> = workouts.iter().filter(|w| w.completed).collect();

    let total_minutes = completed.iter().map(|w| w.duration).sum();
    let average_intensity = if completed.is_empty() {
        0.0
    } else {
        completed.iter().map(|w| w.intensity.score()).sum::<f64>() / completed.len() as f64
    };

    let mut achievements = Vec::new();
    if !workouts.is_empty() && completed.len() == workouts.len() {
        achievements.push(PERFECT_WEEK.to_string());
    }

    WeeklyProgress {
        week_number,
        start_date,
        end_date,
        completed_workouts: completed.len() as u32,
        total_workouts: workouts.len() as u32,
        total_minutes,
        average_intensity,
        achievements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityCategory, DailyWorkout, Difficulty, ExerciseTemplate, Intensity, TimePreference,
    };
    use chrono::TimeZone;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn exercise(template_id: &str, weight: Option<f64>) -> WorkoutExercise {
        let mut exercise = ExerciseTemplate {
            id: template_id.to_string(),
            name: "Goblet Squat".to_string(),
            instructions: String::new(),
            difficulty: Difficulty::Intermediate,
            target_muscles: vec!["quadriceps".to_string()],
            reps: Some(10),
            sets: Some(3),
            duration: None,
            rest_time: Some(60),
            weight,
            required_equipment: Vec::new(),
        }
        .instantiate(format!("{}_0_0", template_id));
        exercise.completed = true;
        exercise
    }

    fn plan_with(exercises: Vec<WorkoutExercise>) -> TrainingPlan {
        TrainingPlan {
            id: Uuid::nil(),
            name: "Test".to_string(),
            start_date: date(4),
            end_date: date(18),
            goals: Vec::new(),
            time_preference: TimePreference::default(),
            available_days: vec![1, 3, 5],
            daily_workouts: vec![DailyWorkout {
                id: "workout_2024-03-04".to_string(),
                date: date(4),
                title: "Strength Builder".to_string(),
                workout_type: "Strength Focus".to_string(),
                duration: 30,
                intensity: Intensity::Medium,
                exercises,
                completed: false,
                completed_at: None,
                notes: None,
            }],
            weekly_progress: Vec::new(),
            current_week: 1,
            exercise_progress: Vec::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_completion_records_sessions_by_template() {
        let plan = plan_with(vec![exercise("goblet-squat", Some(20.0))]);
        let done = complete_workout(&plan, "workout_2024-03-04", Some("felt good".into()), now());

        let workout = &done.daily_workouts[0];
        assert!(workout.completed);
        assert_eq!(workout.completed_at, Some(now()));
        assert_eq!(workout.notes.as_deref(), Some("felt good"));

        let progress = done.progress_for("goblet-squat").unwrap();
        assert_eq!(progress.sessions.len(), 1);
        assert_eq!(progress.sessions[0].sets.len(), 3);
        assert_eq!(progress.sessions[0].sets[0].reps, Some(10));
        assert_eq!(progress.personal_best.as_ref().unwrap().weight, Some(20.0));
    }

    #[test]
    fn test_incomplete_exercises_are_not_recorded() {
        let mut skipped = exercise("goblet-squat", None);
        skipped.completed = false;
        let done = complete_workout(&plan_with(vec![skipped]), "workout_2024-03-04", None, now());
        assert!(done.exercise_progress.is_empty());
        assert!(done.daily_workouts[0].completed);
    }

    #[test]
    fn test_unknown_workout_is_a_no_op() {
        let plan = plan_with(vec![exercise("goblet-squat", None)]);
        assert_eq!(complete_workout(&plan, "missing", None, now()), plan);
        assert_eq!(
            update_exercise(&plan, "workout_2024-03-04", "missing", &ExerciseUpdate::default()),
            plan
        );
    }

    #[test]
    fn test_personal_best_tracks_each_metric() {
        let first = update_personal_best(None, Some(20.0), Some(10), None, date(4)).unwrap();

        // Heavier but fewer reps: weight moves, reps stay
        let second = update_personal_best(Some(first), Some(25.0), Some(8), None, date(6)).unwrap();
        assert_eq!(second.weight, Some(25.0));
        assert_eq!(second.reps, Some(10));
        assert_eq!(second.date, date(6));

        // Nothing exceeded: date stays
        let third = update_personal_best(Some(second.clone()), Some(22.0), Some(9), None, date(8)).unwrap();
        assert_eq!(third, second);
    }

    #[test]
    fn test_actuals_override_nominal_values() {
        let mut ex = exercise("goblet-squat", Some(20.0));
        ex.actual_sets = Some(2);
        ex.actual_weight = Some(24.0);
        ex.actual_reps = Some(0);

        let done = complete_workout(&plan_with(vec![ex]), "workout_2024-03-04", None, now());
        let session = &done.progress_for("goblet-squat").unwrap().sessions[0];
        assert_eq!(session.sets.len(), 2);
        assert_eq!(session.sets[0].weight, Some(24.0));
        assert_eq!(session.sets[0].reps, Some(10));
    }

    #[test]
    fn test_weekly_summary_after_completion() {
        let plan = plan_with(vec![exercise("goblet-squat", None)]);
        let done = complete_workout(&plan, "workout_2024-03-04", None, now());

        assert_eq!(done.weekly_progress.len(), 3);
        let week = &done.weekly_progress[0];
        assert_eq!(week.completed_workouts, 1);
        assert_eq!(week.total_workouts, 1);
        assert_eq!(week.total_minutes, 30);
        assert!((week.average_intensity - 2.0).abs() < f64::EPSILON);
        assert_eq!(week.achievements, vec![PERFECT_WEEK.to_string()]);
        assert!(done.weekly_progress[1].achievements.is_empty());
    }

    #[test]
    fn test_manual_activity_gets_id_and_timestamp() {
        let profile = UserProfile::default();
        let activity = NewManualActivity {
            name: "Evening hike".to_string(),
            activity_type: ActivityCategory::Cardio,
            duration: 90,
            intensity: Intensity::Medium,
            notes: String::new(),
            date: date(5),
        };
        let id = Uuid::from_u128(7);

        let updated = log_manual_activity(&profile, activity, id, now());
        assert_eq!(updated.manual_activities.len(), 1);
        assert_eq!(updated.manual_activities[0].id, id);
        assert_eq!(updated.manual_activities[0].logged_at, now());
        assert!(profile.manual_activities.is_empty());
    }
}
