use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use fitplan::models::{
    ActivityCategory, ExerciseUpdate, Intensity, NewManualActivity, TrainingPlan, UserProfile,
};
use std::path::PathBuf;

use super::{parse_serde_value, read_json, CommandContext};

#[derive(Args)]
pub struct CompleteCommand {
    /// Plan JSON file
    #[arg(short, long)]
    plan: PathBuf,

    /// Workout ID (e.g. workout_2024-03-04)
    #[arg(short, long)]
    workout: String,

    /// Notes to attach to the workout
    #[arg(short, long)]
    notes: Option<String>,

    /// Write the updated plan here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl CompleteCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let plan: TrainingPlan = read_json(&self.plan)?;
        if plan.workout(&self.workout).is_none() {
            bail!("Workout {} not found in plan", self.workout);
        }

        let engine = context.engine()?;
        let updated = match self.notes {
            Some(notes) => engine.complete_workout_with_notes(&plan, &self.workout, notes),
            None => engine.complete_workout(&plan, &self.workout),
        };

        context.emit(&updated, self.out.as_deref())
    }
}

#[derive(Args)]
pub struct UpdateExerciseCommand {
    /// Plan JSON file
    #[arg(short, long)]
    plan: PathBuf,

    /// Workout ID
    #[arg(short, long)]
    workout: String,

    /// Exercise instance ID within the workout
    #[arg(short, long)]
    exercise: String,

    /// Mark the exercise completed (or not)
    #[arg(long)]
    completed: Option<bool>,

    /// Reps actually performed
    #[arg(long)]
    actual_reps: Option<u32>,

    /// Sets actually performed
    #[arg(long)]
    actual_sets: Option<u32>,

    /// Weight actually used
    #[arg(long)]
    actual_weight: Option<f64>,

    /// Change the prescribed reps
    #[arg(long)]
    reps: Option<u32>,

    /// Change the prescribed sets
    #[arg(long)]
    sets: Option<u32>,

    /// Change the prescribed weight
    #[arg(long)]
    weight: Option<f64>,

    #[arg(long)]
    notes: Option<String>,

    /// Write the updated plan here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl UpdateExerciseCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let plan: TrainingPlan = read_json(&self.plan)?;
        let found = plan
            .workout(&self.workout)
            .map(|w| w.exercises.iter().any(|e| e.id == self.exercise))
            .unwrap_or(false);
        if !found {
            bail!(
                "Exercise {} not found in workout {}",
                self.exercise,
                self.workout
            );
        }

        let update = ExerciseUpdate {
            reps: self.reps,
            sets: self.sets,
            weight: self.weight,
            completed: self.completed,
            actual_reps: self.actual_reps,
            actual_sets: self.actual_sets,
            actual_weight: self.actual_weight,
            notes: self.notes,
            ..Default::default()
        };

        let engine = context.engine()?;
        let updated = engine.update_exercise(&plan, &self.workout, &self.exercise, &update);

        context.emit(&updated, self.out.as_deref())
    }
}

#[derive(Args)]
pub struct LogActivityCommand {
    /// Profile JSON file
    #[arg(short, long)]
    profile: PathBuf,

    /// Activity name
    #[arg(short, long)]
    name: String,

    /// Activity type: cardio, strength, flexibility, sports or functional
    #[arg(short = 't', long = "type", value_parser = parse_serde_value::<ActivityCategory>)]
    activity_type: ActivityCategory,

    /// Duration in minutes
    #[arg(short, long)]
    duration: u32,

    /// Intensity: low, medium or high
    #[arg(short, long, default_value = "medium", value_parser = parse_serde_value::<Intensity>)]
    intensity: Intensity,

    /// Date of the activity (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(long, default_value = "")]
    notes: String,

    /// Write the updated profile here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl LogActivityCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let profile: UserProfile = read_json(&self.profile)?;
        let mut engine = context.engine()?;

        let date = self.date.unwrap_or_else(|| engine.today());
        let activity = NewManualActivity {
            name: self.name,
            activity_type: self.activity_type,
            duration: self.duration,
            intensity: self.intensity,
            notes: self.notes,
            date,
        };

        let updated = engine.log_manual_activity(&profile, activity);
        context.emit(&updated, self.out.as_deref())
    }
}
