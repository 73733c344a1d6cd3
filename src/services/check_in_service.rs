use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

use crate::config::RegenerationPolicy;
use crate::models::{
    CheckInSubmission, FocusAdjustment, SessionDurationPreference, TrainingPlan, UserProfile,
    WeeklyCheckIn,
};

use super::progress_tracking_service::weekly_summaries;

const MIN_IMPORTANCE: u8 = 1;
const MAX_IMPORTANCE: u8 = 5;
const MIN_SESSIONS_AFTER_NUDGE: u32 = 2;
const MAX_SESSIONS_AFTER_NUDGE: u32 = 7;

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// 1-based plan week that `now` falls in
pub fn check_in_week_number(plan: &TrainingPlan, now: DateTime<Utc>) -> u32 {
    let elapsed = days_between(plan.start_date, now.date_naive()).max(0);
    (elapsed / 7) as u32 + 1
}

/// Prompt once the plan is a week old, and at most once a week after that
pub fn should_prompt(profile: &UserProfile, plan: &TrainingPlan, now: DateTime<Utc>) -> bool {
    let weeks_since_start = days_between(plan.start_date, now.date_naive()).div_euclid(7);
    if weeks_since_start < 1 {
        return false;
    }

    match profile.last_check_in_prompt {
        Some(last_prompt) => (now - last_prompt).num_weeks() >= 1,
        None => true,
    }
}

pub fn mark_prompt_shown(profile: &UserProfile, now: DateTime<Utc>) -> UserProfile {
    let mut updated = profile.clone();
    updated.last_check_in_prompt = Some(now);
    updated
}

/// Record the check-in on the profile and stamp the prompt time
pub fn record_check_in(
    profile: &UserProfile,
    plan: &TrainingPlan,
    submission: &CheckInSubmission,
    id: Uuid,
    now: DateTime<Utc>,
) -> UserProfile {
    let mut updated = profile.clone();
    updated.weekly_check_ins.push(WeeklyCheckIn {
        id,
        date: now.date_naive(),
        week_number: check_in_week_number(plan, now),
        responses: submission.responses.clone(),
        adjustments_made: submission.adjustments_made,
    });
    updated.last_check_in_prompt = Some(now);
    updated
}

/// Apply importance overrides and the session-frequency nudge to a profile
pub fn apply_adjustments(profile: &mut UserProfile, submission: &CheckInSubmission) {
    apply_focus_adjustments(profile, &submission.responses.focus_adjustments);

    let sessions = profile.time_preference.sessions_per_week;
    // Shorter sessions means more of them, longer means fewer
    profile.time_preference.sessions_per_week =
        match submission.responses.session_duration_preference {
            SessionDurationPreference::Shorter => (sessions + 1).min(MAX_SESSIONS_AFTER_NUDGE),
            SessionDurationPreference::Longer => {
                sessions.saturating_sub(1).max(MIN_SESSIONS_AFTER_NUDGE)
            }
            SessionDurationPreference::Same => sessions,
        };

    info!(
        "Check-in adjusted sessions per week {} -> {}",
        sessions, profile.time_preference.sessions_per_week
    );
}

fn apply_focus_adjustments(profile: &mut UserProfile, adjustments: &[FocusAdjustment]) {
    for pillar in profile.fitness_pillars.iter_mut() {
        if let Some(adjustment) = adjustments.iter().find(|a| a.pillar_id == pillar.id) {
            pillar.importance = Some(adjustment.new_importance.clamp(MIN_IMPORTANCE, MAX_IMPORTANCE));
        }
    }
}

/// Combine the previous plan with a freshly generated one under `policy`
pub fn merge_regenerated(
    previous: &TrainingPlan,
    regenerated: TrainingPlan,
    policy: RegenerationPolicy,
    today: NaiveDate,
) -> TrainingPlan {
    match policy {
        RegenerationPolicy::FullReplace => regenerated,
        RegenerationPolicy::FutureOnly => {
            // Past days and anything already completed survive untouched
            let mut daily_workouts: Vec<_> = previous
                .daily_workouts
                .iter()
                .filter(|w| w.date < today || w.completed)
                .cloned()
                .collect();
            let kept = daily_workouts.len();
            let completed_dates: HashSet<NaiveDate> = daily_workouts
                .iter()
                .filter(|w| w.date >= today)
                .map(|w| w.date)
                .collect();

            daily_workouts.extend(
                regenerated
                    .daily_workouts
                    .into_iter()
                    .filter(|w| w.date >= today && !completed_dates.contains(&w.date)),
            );
            daily_workouts.sort_by_key(|w| w.date);

            info!(
                "Regenerated plan from {}: kept {} existing workouts, {} total",
                today,
                kept,
                daily_workouts.len()
            );

            let mut merged = TrainingPlan {
                id: regenerated.id,
                name: regenerated.name,
                start_date: previous.start_date,
                end_date: previous.end_date.max(regenerated.end_date),
                goals: regenerated.goals,
                time_preference: regenerated.time_preference,
                available_days: regenerated.available_days,
                daily_workouts,
                weekly_progress: previous.weekly_progress.clone(),
                current_week: previous.current_week,
                exercise_progress: previous.exercise_progress.clone(),
            };
            if !merged.weekly_progress.is_empty() {
                merged.weekly_progress = weekly_summaries(&merged);
            }
            merged
        }
    }
}
