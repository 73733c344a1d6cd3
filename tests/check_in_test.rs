mod common;

use chrono::{Duration, NaiveDate};
use common::{engine, engine_on, plan_start, profile, weekday_id};
use fitplan::models::{
    CheckInResponses, CheckInSubmission, ExerciseUpdate, FocusAdjustment,
    SessionDurationPreference, TimeCommitment, TrainingPlan, UserProfile,
};
use fitplan::RegenerationPolicy;
use pretty_assertions::assert_eq;

fn submission(preference: SessionDurationPreference, adjustments_made: bool) -> CheckInSubmission {
    CheckInSubmission {
        responses: CheckInResponses {
            satisfaction: 3,
            difficulty_level: 4,
            time_commitment: TimeCommitment::TooShort,
            focus_adjustments: vec![FocusAdjustment {
                pillar_id: "mobility".to_string(),
                new_importance: 5,
            }],
            session_duration_preference: preference,
            additional_feedback: Some("More stretching please".to_string()),
        },
        adjustments_made,
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

/// Four sessions a week on weekdays, with the first workout fully completed
fn plan_with_history(profile: &UserProfile) -> TrainingPlan {
    let mut engine = engine(42);
    let mut plan = engine.generate_plan(profile);

    let first = plan.daily_workouts[0].clone();
    for exercise in &first.exercises {
        plan = engine.update_exercise(
            &plan,
            &first.id,
            &exercise.id,
            &ExerciseUpdate {
                completed: Some(true),
                ..Default::default()
            },
        );
    }
    engine.complete_workout(&plan, &first.id)
}

#[test]
fn test_longer_sessions_lower_frequency_and_regenerate() {
    let profile = profile(&[1, 2, 3, 4, 5], 4, 4);
    let plan = plan_with_history(&profile);
    assert!(!plan.exercise_progress.is_empty());

    let mut engine = engine_on(day(10), 7, RegenerationPolicy::FutureOnly);
    let outcome = engine.submit_check_in(
        &profile,
        &plan,
        &submission(SessionDurationPreference::Longer, true),
    );

    assert!(outcome.regenerated);
    assert_eq!(outcome.profile.time_preference.sessions_per_week, 3);
    let mobility = outcome
        .profile
        .fitness_pillars
        .iter()
        .find(|p| p.id == "mobility")
        .unwrap();
    assert_eq!(mobility.importance, Some(5));

    let check_in = &outcome.profile.weekly_check_ins[0];
    assert_eq!(check_in.week_number, 2);
    assert_eq!(check_in.date, day(10));
    assert!(check_in.adjustments_made);
    assert!(outcome.profile.last_check_in_prompt.is_some());
}

#[test]
fn test_future_only_preserves_history() {
    let profile = profile(&[1, 2, 3, 4, 5], 4, 4);
    let plan = plan_with_history(&profile);

    let mut engine = engine_on(day(10), 7, RegenerationPolicy::FutureOnly);
    let outcome = engine.submit_check_in(
        &profile,
        &plan,
        &submission(SessionDurationPreference::Longer, true),
    );
    let merged = outcome.plan;

    assert_eq!(merged.start_date, plan_start());
    assert_eq!(merged.end_date, day(10) + Duration::weeks(4));
    assert_eq!(merged.exercise_progress, plan.exercise_progress);
    assert!(merged.daily_workouts[0].completed);

    let past: Vec<_> = merged.daily_workouts.iter().filter(|w| w.date < day(10)).collect();
    let old_past: Vec<_> = plan.daily_workouts.iter().filter(|w| w.date < day(10)).collect();
    assert_eq!(past, old_past);

    // Future dates follow the new three-session schedule: [1, 3, 5]
    let future_days: std::collections::HashSet<u8> = merged
        .daily_workouts
        .iter()
        .filter(|w| w.date >= day(10))
        .map(|w| weekday_id(w.date))
        .collect();
    assert_eq!(future_days, [1, 3, 5].into_iter().collect());
    assert!(merged.daily_workouts.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn test_full_replace_discards_history() {
    let profile = profile(&[1, 2, 3, 4, 5], 4, 4);
    let plan = plan_with_history(&profile);

    let mut engine = engine_on(day(10), 7, RegenerationPolicy::FullReplace);
    let outcome = engine.submit_check_in(
        &profile,
        &plan,
        &submission(SessionDurationPreference::Longer, true),
    );

    assert_eq!(outcome.plan.start_date, day(10));
    assert!(outcome.plan.exercise_progress.is_empty());
    assert!(outcome.plan.daily_workouts.iter().all(|w| !w.completed));
}

#[test]
fn test_check_in_without_adjustments_only_records() {
    let profile = profile(&[1, 2, 3, 4, 5], 4, 4);
    let plan = plan_with_history(&profile);

    let mut engine = engine_on(day(10), 7, RegenerationPolicy::FutureOnly);
    let outcome = engine.submit_check_in(
        &profile,
        &plan,
        &submission(SessionDurationPreference::Longer, false),
    );

    assert!(!outcome.regenerated);
    assert_eq!(outcome.plan, plan);
    assert_eq!(outcome.profile.time_preference.sessions_per_week, 4);
    assert_eq!(outcome.profile.weekly_check_ins.len(), 1);
}

#[test]
fn test_prompt_schedule() {
    let profile = profile(&[1, 3, 5], 3, 4);
    let plan = engine(1).generate_plan(&profile);

    let too_early = engine_on(day(5), 1, RegenerationPolicy::FutureOnly);
    assert!(!too_early.should_prompt_check_in(&profile, &plan));

    let one_week_in = engine_on(day(8), 1, RegenerationPolicy::FutureOnly);
    assert!(one_week_in.should_prompt_check_in(&profile, &plan));

    let prompted = one_week_in.mark_check_in_prompt_shown(&profile);
    let few_days_later = engine_on(day(12), 1, RegenerationPolicy::FutureOnly);
    assert!(!few_days_later.should_prompt_check_in(&prompted, &plan));

    let next_week = engine_on(day(15), 1, RegenerationPolicy::FutureOnly);
    assert!(next_week.should_prompt_check_in(&prompted, &plan));
}

#[test]
fn test_same_day_check_in_keeps_completed_workout() {
    let profile = profile(&[0, 1, 2, 3, 4, 5, 6], 7, 2);
    let mut engine = engine(11);
    let plan = engine.generate_plan(&profile);
    let plan = engine.complete_workout(&plan, "workout_2024-01-01");

    let outcome = engine.submit_check_in(
        &profile,
        &plan,
        &submission(SessionDurationPreference::Longer, true),
    );
    assert!(outcome.regenerated);

    // Six sessions over the full week leave Monday out of the new schedule
    let today: Vec<_> = outcome.plan.workouts_on(plan_start());
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].id, "workout_2024-01-01");
    assert!(today[0].completed);
    assert!(outcome
        .plan
        .daily_workouts
        .windows(2)
        .all(|pair| pair[0].date <= pair[1].date));
}
