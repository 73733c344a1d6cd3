use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fitplan::models::{TrainingPlan, UserProfile, WeeklyProgress};
use std::path::PathBuf;

use super::{read_json, CommandContext};

#[derive(Args)]
pub struct GenerateCommand {
    /// Profile JSON file
    #[arg(short, long)]
    profile: PathBuf,

    /// Write the plan here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let profile: UserProfile = read_json(&self.profile)?;
        let mut engine = context.engine()?;

        let plan = engine.generate_plan(&profile);
        tracing::info!(
            "Plan {} runs {} to {} with {} workouts",
            plan.id,
            plan.start_date,
            plan.end_date,
            plan.daily_workouts.len()
        );

        context.emit(&plan, self.out.as_deref())
    }
}

#[derive(Args)]
pub struct SummaryCommand {
    /// Plan JSON file
    #[arg(short, long)]
    plan: PathBuf,

    /// Only show this week (1-based)
    #[arg(short, long)]
    week: Option<u32>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl SummaryCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let plan: TrainingPlan = read_json(&self.plan)?;
        let engine = context.engine()?;

        let weeks = match self.week {
            Some(week) => vec![engine.weekly_summary(&plan, week)],
            None => engine.weekly_summaries(&plan),
        };

        if self.json {
            return context.emit(&weeks, None);
        }

        println!("{}", plan.name.bold());
        println!(
            "{} to {}",
            plan.start_date.format(&context.config.output.date_format),
            plan.end_date.format(&context.config.output.date_format)
        );
        println!("────────────────────────────────");

        for week in &weeks {
            print_week(week, &plan, context);
        }

        Ok(())
    }
}

fn print_week(week: &WeeklyProgress, plan: &TrainingPlan, context: &CommandContext) {
    let header = format!(
        "Week {}: {}/{} workouts, {} min",
        week.week_number, week.completed_workouts, week.total_workouts, week.total_minutes
    );
    if week.achievements.is_empty() {
        println!("{}", header.cyan());
    } else {
        println!("{}  {}", header.cyan(), week.achievements.join(", ").green());
    }

    for workout in plan
        .daily_workouts
        .iter()
        .filter(|w| w.date >= week.start_date && w.date <= week.end_date)
    {
        let mark = if workout.completed { "✓".green() } else { "·".dimmed() };
        println!(
            "  {} {}  {} ({}, {} min)",
            mark,
            workout.date.format(&context.config.output.date_format),
            workout.title,
            workout.workout_type,
            workout.duration
        );
    }
    println!();
}

#[derive(Args)]
pub struct CatalogCommand {
    /// Only list this category key (e.g. `cardio`, `cardio-strength`)
    #[arg(short, long)]
    category: Option<String>,

    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
}

impl CatalogCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let catalog = context.config.load_catalog()?;

        if self.json {
            return context.emit(&catalog, None);
        }

        let keys: Vec<&str> = match &self.category {
            Some(category) => vec![category.as_str()],
            None => catalog.keys().collect(),
        };

        for key in keys {
            let templates = catalog.get(key);
            println!("{} ({})", key.bold(), templates.len());
            for template in templates {
                let equipment = if template.required_equipment.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", template.required_equipment.join(", "))
                };
                println!(
                    "  {:<28} {:?}{}",
                    template.name,
                    template.difficulty,
                    equipment.dimmed()
                );
            }
        }

        Ok(())
    }
}
