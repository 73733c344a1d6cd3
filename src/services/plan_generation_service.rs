use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::ExerciseCatalog;
use crate::config::EngineConfig;
use crate::models::{
    ActivityCategory, DailyWorkout, Difficulty, ExistingSport, FitnessPillar, Intensity,
    SportFlexibility, TrainingPlan, UserProfile, WorkoutExercise,
};

use super::duration_estimator::{estimate_workout_minutes, target_session_minutes};
use super::exercise_selection_service::{
    available_equipment_ids, complementary_exercise_count, exercise_count_for,
    ExerciseSelectionService,
};
use super::schedule_balancer::balance_weekly_schedule;
use super::workout_focus_service::{
    intensity_for_readiness, select_focus, should_combine, sort_by_importance, workout_title,
    workout_type_label,
};

pub const COMPLEMENTARY_WORKOUT_TYPE: &str = "Complementary Training";
const MIN_COMPLEMENTARY_MINUTES: u32 = 15;

/// Draw a v4 UUID from the plan's random source so seeded runs repeat exactly
pub fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Milliseconds of midnight UTC on `date`; stamped into exercise instance ids
fn day_stamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

fn weekday_id(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Per-plan inputs derived once from the profile
struct PlanContext {
    start_date: NaiveDate,
    sorted_pillars: Vec<FitnessPillar>,
    equipment: HashSet<String>,
    target_minutes: u32,
    intensity: Intensity,
}

impl PlanContext {
    fn elapsed_days(&self, date: NaiveDate) -> u32 {
        (date - self.start_date).num_days().max(0) as u32
    }
}

/// Turns a profile into a dated workout calendar
pub struct PlanGenerationService<'a> {
    catalog: &'a ExerciseCatalog,
    config: &'a EngineConfig,
}

impl<'a> PlanGenerationService<'a> {
    pub fn new(catalog: &'a ExerciseCatalog, config: &'a EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Build a plan covering `start_date ..= start_date + plan_duration weeks`
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        profile: &UserProfile,
        start_date: NaiveDate,
    ) -> TrainingPlan {
        let time_preference = profile.time_preference;
        let end_date = start_date + Duration::weeks(i64::from(time_preference.plan_duration));
        let available_day_ids = profile.available_day_ids();

        let pillars = profile.selected_pillars();
        let context = PlanContext {
            start_date,
            target_minutes: target_session_minutes(time_preference.sessions_per_week, pillars.len()),
            sorted_pillars: sort_by_importance(&pillars),
            equipment: available_equipment_ids(&profile.available_equipment),
            intensity: intensity_for_readiness(profile.habit_level.change_readiness),
        };

        let weekly_schedule =
            balance_weekly_schedule(&available_day_ids, time_preference.sessions_per_week);

        info!(
            "Generating {}-week plan from {} with schedule {:?} (available days {:?}, target {} min)",
            time_preference.plan_duration,
            start_date,
            weekly_schedule,
            available_day_ids,
            context.target_minutes
        );

        let mut daily_workouts = Vec::new();

        // No sessions or no trainable days leaves an empty calendar
        if !weekly_schedule.is_empty() {
            let mut date = start_date;
            while date <= end_date {
                let weekday = weekday_id(date);
                let sports_today: Vec<&ExistingSport> = profile
                    .existing_sports
                    .iter()
                    .filter(|sport| sport.days.contains(&weekday))
                    .collect();

                let trains_today = profile.is_day_available(weekday)
                    && (weekly_schedule.contains(&weekday) || !sports_today.is_empty());

                if trains_today {
                    if sports_today.is_empty() {
                        daily_workouts.push(self.regular_workout(rng, &context, date));
                    } else {
                        daily_workouts.extend(self.existing_sport_day(rng, &context, date, &sports_today));
                    }
                }

                date += Duration::days(1);
            }
        }

        info!("Generated plan with {} workouts", daily_workouts.len());

        TrainingPlan {
            id: random_uuid(rng),
            name: self.config.plan_name.clone(),
            start_date,
            end_date,
            goals: profile.goals.clone(),
            time_preference,
            available_days: available_day_ids,
            daily_workouts,
            weekly_progress: Vec::new(),
            current_week: 1,
            exercise_progress: Vec::new(),
        }
    }

    fn regular_workout<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        context: &PlanContext,
        date: NaiveDate,
    ) -> DailyWorkout {
        let day_index = context.elapsed_days(date);
        let week_number = day_index / 7 + 1;
        let selector = ExerciseSelectionService::new(self.catalog);

        // One draw decides both the pool and the title
        let combined = should_combine(rng, context.sorted_pillars.len(), week_number, day_index);
        let focus = select_focus(rng, &context.sorted_pillars, week_number, day_index, combined);

        let pool = selector.build_pool(rng, &focus);
        let pool = selector.resolve_pool(pool, &context.equipment);
        let exercises = selector.select(
            rng,
            &pool,
            exercise_count_for(context.target_minutes),
            context.target_minutes,
            day_stamp(date),
        );

        debug!(
            "{} week {} day {}: {} with {} exercises",
            date,
            week_number,
            day_index,
            focus.describe(),
            exercises.len()
        );

        DailyWorkout {
            id: format!("workout_{}", date),
            date,
            title: workout_title(rng, &focus),
            workout_type: workout_type_label(&exercises, &focus),
            duration: estimate_workout_minutes(&exercises),
            intensity: context.intensity,
            exercises,
            completed: false,
            completed_at: None,
            notes: None,
        }
    }

    /// One workout per existing sport, plus a short complementary session when
    /// the sports leave room and at least one of them can move
    fn existing_sport_day<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        context: &PlanContext,
        date: NaiveDate,
        sports: &[&ExistingSport],
    ) -> Vec<DailyWorkout> {
        let mut workouts: Vec<DailyWorkout> = sports
            .iter()
            .enumerate()
            .map(|(index, sport)| existing_sport_workout(sport, date, index))
            .collect();

        let existing_minutes: u32 = sports.iter().map(|sport| sport.duration).sum();
        let has_flexible_sport = sports
            .iter()
            .any(|sport| sport.flexibility != SportFlexibility::Fixed);

        if existing_minutes < context.target_minutes && has_flexible_sport {
            let remaining = context.target_minutes - existing_minutes;
            if remaining >= MIN_COMPLEMENTARY_MINUTES {
                workouts.push(self.complementary_workout(rng, context, date, sports, remaining));
            }
        }

        workouts
    }

    fn complementary_workout<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        context: &PlanContext,
        date: NaiveDate,
        sports: &[&ExistingSport],
        remaining_minutes: u32,
    ) -> DailyWorkout {
        let selector = ExerciseSelectionService::new(self.catalog);
        let category = complement_category(sports);

        let pool = selector.complementary_pool(category);
        let pool = selector.resolve_pool(pool, &context.equipment);
        let exercises = selector.select_complementary(
            rng,
            &pool,
            complementary_exercise_count(remaining_minutes),
            remaining_minutes,
            day_stamp(date),
        );

        DailyWorkout {
            id: format!("complementary_{}", date),
            date,
            title: complementary_title(category).to_string(),
            workout_type: COMPLEMENTARY_WORKOUT_TYPE.to_string(),
            duration: estimate_workout_minutes(&exercises),
            intensity: Intensity::Low,
            exercises,
            completed: false,
            completed_at: None,
            notes: None,
        }
    }
}

/// Category that drives the complementary session: cardio, then strength, then flexibility
fn complement_category(sports: &[&ExistingSport]) -> ActivityCategory {
    [
        ActivityCategory::Cardio,
        ActivityCategory::Strength,
        ActivityCategory::Flexibility,
    ]
    .into_iter()
    .find(|category| sports.iter().any(|sport| sport.category == *category))
    .unwrap_or(ActivityCategory::Functional)
}

fn complementary_title(category: ActivityCategory) -> &'static str {
    match category {
        ActivityCategory::Cardio => "Recovery & Mobility",
        ActivityCategory::Strength => "Cardio Finisher",
        ActivityCategory::Flexibility => "Strength Activation",
        ActivityCategory::Sports | ActivityCategory::Functional => "Balanced Complement",
    }
}

fn existing_sport_workout(sport: &ExistingSport, date: NaiveDate, index: usize) -> DailyWorkout {
    DailyWorkout {
        id: format!("existing_sport_{}_{}", date, index),
        date,
        title: sport.name.clone(),
        workout_type: sport.category.as_str().to_string(),
        duration: sport.duration,
        intensity: sport.intensity,
        exercises: vec![existing_sport_exercise(sport, date)],
        completed: false,
        completed_at: None,
        notes: None,
    }
}

fn existing_sport_exercise(sport: &ExistingSport, date: NaiveDate) -> WorkoutExercise {
    let difficulty = match sport.intensity {
        Intensity::High => Difficulty::Advanced,
        Intensity::Medium => Difficulty::Intermediate,
        Intensity::Low => Difficulty::Beginner,
    };
    let template_id = format!("existing_{}", sport.id);

    WorkoutExercise {
        id: format!("{}_{}", template_id, day_stamp(date)),
        template_id,
        name: sport.name.clone(),
        instructions: format!(
            "Complete your {} session as planned. Track your performance and any notes.",
            sport.name
        ),
        difficulty,
        target_muscles: sport.category.muscle_tags(),
        reps: None,
        sets: None,
        duration: Some(sport.duration * 60), // seconds
        rest_time: None,
        weight: None,
        required_equipment: Vec::new(),
        completed: false,
        actual_reps: None,
        actual_sets: None,
        actual_weight: None,
        notes: None,
    }
}
