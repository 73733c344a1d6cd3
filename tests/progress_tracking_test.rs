mod common;

use chrono::NaiveDate;
use common::{engine, engine_on, plan_start, profile};
use fitplan::models::{
    ActivityCategory, ExerciseUpdate, Intensity, NewManualActivity, TrainingPlan,
};
use fitplan::RegenerationPolicy;
use pretty_assertions::assert_eq;

fn log_lift(plan: &TrainingPlan, today: NaiveDate, weight: f64, reps: u32) -> TrainingPlan {
    let engine = engine_on(today, 1, RegenerationPolicy::FutureOnly);
    let workout = &plan.daily_workouts[0];
    let exercise = &workout.exercises[0];

    let plan = engine.update_exercise(
        plan,
        &workout.id,
        &exercise.id,
        &ExerciseUpdate {
            completed: Some(true),
            actual_weight: Some(weight),
            actual_reps: Some(reps),
            actual_sets: Some(3),
            ..Default::default()
        },
    );
    engine.complete_workout(&plan, &workout.id)
}

fn strength_plan() -> TrainingPlan {
    engine(42).generate_plan(&profile(&[1, 3, 5], 3, 2))
}

#[test]
fn test_personal_best_only_moves_up() {
    let plan = strength_plan();
    let template_id = plan.daily_workouts[0].exercises[0].template_id.clone();

    let day1 = plan_start();
    let day2 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    let day3 = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

    let plan = log_lift(&plan, day1, 20.0, 10);
    let plan = log_lift(&plan, day2, 25.0, 8);
    let plan = log_lift(&plan, day3, 22.5, 8);

    let progress = plan.progress_for(&template_id).unwrap();
    assert_eq!(progress.sessions.len(), 3);
    assert!(progress.sessions.iter().all(|s| s.sets.len() == 3));

    let best = progress.personal_best.as_ref().unwrap();
    assert_eq!(best.weight, Some(25.0));
    assert_eq!(best.reps, Some(10));
    // The third session improved nothing
    assert_eq!(best.date, day2);
}

#[test]
fn test_only_completed_exercises_are_recorded() {
    let plan = strength_plan();
    let workout = plan.daily_workouts[0].clone();

    let completed = engine(1).complete_workout_with_notes(&plan, &workout.id, "Felt strong");
    let done = completed.workout(&workout.id).unwrap();

    assert!(done.completed);
    assert!(done.completed_at.is_some());
    assert_eq!(done.notes.as_deref(), Some("Felt strong"));
    assert!(completed.exercise_progress.is_empty());
}

#[test]
fn test_unknown_ids_leave_plan_untouched() {
    let plan = strength_plan();
    let engine = engine(1);

    assert_eq!(engine.complete_workout(&plan, "workout_1999-01-01"), plan);

    let workout_id = plan.daily_workouts[0].id.clone();
    let update = ExerciseUpdate {
        completed: Some(true),
        ..Default::default()
    };
    assert_eq!(engine.update_exercise(&plan, &workout_id, "missing", &update), plan);
    assert_eq!(engine.update_exercise(&plan, "missing", "missing", &update), plan);
}

#[test]
fn test_weekly_progress_tracks_completion() {
    let plan = strength_plan();
    let engine = engine(1);

    let first_week: Vec<String> = plan
        .daily_workouts
        .iter()
        .filter(|w| plan.week_number_of(w.date) == 1)
        .map(|w| w.id.clone())
        .collect();
    assert!(!first_week.is_empty());

    let mut updated = plan.clone();
    for id in &first_week {
        updated = engine.complete_workout(&updated, id);
    }

    // The end date is inclusive, so a two-week plan spills one day into a third week
    assert_eq!(updated.weekly_progress.len(), 3);
    assert_eq!(updated.current_week, 1);

    let week1 = &updated.weekly_progress[0];
    assert_eq!(week1.completed_workouts as usize, first_week.len());
    assert_eq!(week1.total_workouts as usize, first_week.len());
    assert!(week1.total_minutes > 0);
    assert!(week1.average_intensity > 0.0);
    assert_eq!(week1.achievements, vec!["Perfect week".to_string()]);

    let week2 = &updated.weekly_progress[1];
    assert_eq!(week2.completed_workouts, 0);
    assert!(week2.achievements.is_empty());

    assert_eq!(engine.weekly_summary(&updated, 1), *week1);
}

#[test]
fn test_manual_activity_is_appended() {
    let mut engine = engine(5);
    let profile = profile(&[1, 3, 5], 3, 2);

    let activity = NewManualActivity {
        name: "Evening swim".to_string(),
        activity_type: ActivityCategory::Cardio,
        duration: 40,
        intensity: Intensity::Medium,
        notes: String::new(),
        date: NaiveDate::from_ymd_opt(2023, 12, 30).unwrap(),
    };

    let updated = engine.log_manual_activity(&profile, activity.clone());
    let updated = engine.log_manual_activity(&updated, activity);

    assert_eq!(updated.manual_activities.len(), 2);
    let first = &updated.manual_activities[0];
    assert_eq!(first.name, "Evening swim");
    assert_eq!(first.logged_at.date_naive(), plan_start());
    assert_ne!(first.id, updated.manual_activities[1].id);
    assert!(profile.manual_activities.is_empty());
}
