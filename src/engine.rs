// Single entry point for callers; every operation takes the current
// snapshot by reference and returns a new one

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::catalog::ExerciseCatalog;
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::models::{
    CheckInSubmission, ExerciseUpdate, NewManualActivity, TrainingPlan, UserProfile,
    WeeklyProgress,
};
use crate::services::plan_generation_service::random_uuid;
use crate::services::{check_in_service, progress_tracking_service, PlanGenerationService};

/// Result of submitting a weekly check-in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInOutcome {
    pub profile: UserProfile,
    pub plan: TrainingPlan,
    /// True when the adjustments triggered a new calendar
    pub regenerated: bool,
}

pub struct TrainingEngine {
    catalog: ExerciseCatalog,
    config: EngineConfig,
    clock: Box<dyn Clock>,
    rng: StdRng,
}

impl TrainingEngine {
    /// Engine on the system clock; seeded from `config.random_seed` when set
    pub fn new(catalog: ExerciseCatalog, config: EngineConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            catalog,
            config,
            clock: Box::new(SystemClock),
            rng,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.config.random_seed = Some(seed);
        self
    }

    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Build a fresh plan starting today
    pub fn generate_plan(&mut self, profile: &UserProfile) -> TrainingPlan {
        let mut profile = profile.clone();
        profile.backfill_defaults();

        let today = self.clock.today();
        PlanGenerationService::new(&self.catalog, &self.config).generate(&mut self.rng, &profile, today)
    }

    pub fn complete_workout(&self, plan: &TrainingPlan, workout_id: &str) -> TrainingPlan {
        progress_tracking_service::complete_workout(plan, workout_id, None, self.clock.now())
    }

    pub fn complete_workout_with_notes(
        &self,
        plan: &TrainingPlan,
        workout_id: &str,
        notes: impl Into<String>,
    ) -> TrainingPlan {
        progress_tracking_service::complete_workout(
            plan,
            workout_id,
            Some(notes.into()),
            self.clock.now(),
        )
    }

    pub fn update_exercise(
        &self,
        plan: &TrainingPlan,
        workout_id: &str,
        exercise_id: &str,
        update: &ExerciseUpdate,
    ) -> TrainingPlan {
        progress_tracking_service::update_exercise(plan, workout_id, exercise_id, update)
    }

    pub fn log_manual_activity(
        &mut self,
        profile: &UserProfile,
        activity: NewManualActivity,
    ) -> UserProfile {
        let id = random_uuid(&mut self.rng);
        progress_tracking_service::log_manual_activity(profile, activity, id, self.clock.now())
    }

    /// Record a check-in; when it carries adjustments, apply them and rebuild
    /// the calendar under the configured regeneration policy
    pub fn submit_check_in(
        &mut self,
        profile: &UserProfile,
        plan: &TrainingPlan,
        submission: &CheckInSubmission,
    ) -> CheckInOutcome {
        let now = self.clock.now();
        let id = random_uuid(&mut self.rng);
        let mut updated_profile = check_in_service::record_check_in(profile, plan, submission, id, now);

        if !submission.adjustments_made {
            return CheckInOutcome {
                profile: updated_profile,
                plan: plan.clone(),
                regenerated: false,
            };
        }

        check_in_service::apply_adjustments(&mut updated_profile, submission);

        let regenerated = self.generate_plan(&updated_profile);
        let merged = check_in_service::merge_regenerated(
            plan,
            regenerated,
            self.config.regeneration_policy,
            now.date_naive(),
        );

        info!(
            "Check-in regenerated plan under {} policy ({} workouts)",
            self.config.regeneration_policy,
            merged.daily_workouts.len()
        );

        CheckInOutcome {
            profile: updated_profile,
            plan: merged,
            regenerated: true,
        }
    }

    pub fn should_prompt_check_in(&self, profile: &UserProfile, plan: &TrainingPlan) -> bool {
        check_in_service::should_prompt(profile, plan, self.clock.now())
    }

    pub fn mark_check_in_prompt_shown(&self, profile: &UserProfile) -> UserProfile {
        check_in_service::mark_prompt_shown(profile, self.clock.now())
    }

    /// Summary for one plan week (1-based), recomputed from the workouts
    pub fn weekly_summary(&self, plan: &TrainingPlan, week_number: u32) -> WeeklyProgress {
        progress_tracking_service::summarize_week(plan, week_number)
    }

    pub fn weekly_summaries(&self, plan: &TrainingPlan) -> Vec<WeeklyProgress> {
        progress_tracking_service::weekly_summaries(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{FitnessPillar, TimePreference, WeekDay};

    fn engine(seed: u64) -> TrainingEngine {
        TrainingEngine::new(ExerciseCatalog::builtin(), EngineConfig::default().with_seed(seed))
            .with_clock(FixedClock::on(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()))
    }

    fn profile() -> UserProfile {
        UserProfile {
            fitness_pillars: vec![FitnessPillar::new("mobility", "Mobility", 4)],
            time_preference: TimePreference {
                plan_duration: 1,
                sessions_per_week: 2,
            },
            available_days: WeekDay::week(&[2, 4]),
            ..Default::default()
        }
    }

    #[test]
    fn test_seeded_engines_agree() {
        let a = engine(99).generate_plan(&profile());
        let b = engine(99).generate_plan(&profile());
        assert_eq!(a, b);
        assert_eq!(a.start_date, NaiveDate::from_ymd_opt(2024, 2, 5).unwrap());
    }

    #[test]
    fn test_check_in_without_adjustments_keeps_plan() {
        let mut engine = engine(1);
        let plan = engine.generate_plan(&profile());
        let submission: CheckInSubmission = serde_json::from_str(
            r#"{
                "responses": {
                    "satisfaction": 5,
                    "difficultyLevel": 3,
                    "timeCommitment": "just-right",
                    "sessionDurationPreference": "same"
                },
                "adjustmentsMade": false
            }"#,
        )
        .unwrap();

        let outcome = engine.submit_check_in(&profile(), &plan, &submission);
        assert!(!outcome.regenerated);
        assert_eq!(outcome.plan, plan);
        assert_eq!(outcome.profile.weekly_check_ins.len(), 1);
    }
}
