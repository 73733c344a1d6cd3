use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fitplan::models::{CheckInSubmission, TrainingPlan, UserProfile};
use std::path::PathBuf;

use super::{read_json, CommandContext};

#[derive(Args)]
pub struct CheckInCommand {
    /// Profile JSON file
    #[arg(long)]
    profile: PathBuf,

    /// Plan JSON file
    #[arg(long)]
    plan: PathBuf,

    /// Check-in submission JSON file (responses + adjustmentsMade)
    #[arg(short, long)]
    submission: PathBuf,

    /// Write the updated profile here
    #[arg(long)]
    profile_out: Option<PathBuf>,

    /// Write the (possibly regenerated) plan here
    #[arg(long)]
    plan_out: Option<PathBuf>,
}

impl CheckInCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let profile: UserProfile = read_json(&self.profile)?;
        let plan: TrainingPlan = read_json(&self.plan)?;
        let submission: CheckInSubmission = read_json(&self.submission)?;

        let mut engine = context.engine()?;
        let outcome = engine.submit_check_in(&profile, &plan, &submission);

        if self.profile_out.is_none() && self.plan_out.is_none() {
            return context.emit(&outcome, None);
        }

        if let Some(path) = &self.profile_out {
            context.emit(&outcome.profile, Some(path))?;
        }
        if let Some(path) = &self.plan_out {
            context.emit(&outcome.plan, Some(path))?;
        }

        if outcome.regenerated {
            eprintln!(
                "{} Plan regenerated ({} sessions per week)",
                "✓".green(),
                outcome.profile.time_preference.sessions_per_week
            );
        } else {
            eprintln!("{} Check-in recorded", "✓".green());
        }

        Ok(())
    }
}

#[derive(Args)]
pub struct ShouldPromptCommand {
    /// Profile JSON file
    #[arg(long)]
    profile: PathBuf,

    /// Plan JSON file
    #[arg(long)]
    plan: PathBuf,

    /// When a check-in is due, stamp the prompt on the profile and write it here
    #[arg(long)]
    mark_shown: Option<PathBuf>,
}

impl ShouldPromptCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let profile: UserProfile = read_json(&self.profile)?;
        let plan: TrainingPlan = read_json(&self.plan)?;

        let engine = context.engine()?;
        let due = engine.should_prompt_check_in(&profile, &plan);
        println!("{}", due);

        if due {
            if let Some(path) = &self.mark_shown {
                let updated = engine.mark_check_in_prompt_shown(&profile);
                context.emit(&updated, Some(path))?;
            }
        }

        Ok(())
    }
}
