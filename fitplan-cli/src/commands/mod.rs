mod check_in;
mod config_cmd;
mod plan;
mod workout;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitplan::{FixedClock, TrainingEngine};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

pub use check_in::{CheckInCommand, ShouldPromptCommand};
pub use plan::{CatalogCommand, GenerateCommand, SummaryCommand};
pub use workout::{CompleteCommand, LogActivityCommand, UpdateExerciseCommand};

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Generate and adjust personalized training plans", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "FITPLAN_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for reproducible plans (overrides the config file)
    #[arg(long, global = true, env = "FITPLAN_SEED")]
    seed: Option<u64>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a training plan from a profile
    Generate(GenerateCommand),

    /// Mark a workout as completed
    Complete(CompleteCommand),

    /// Record what was actually done for one exercise
    UpdateExercise(UpdateExerciseCommand),

    /// Submit a weekly check-in
    CheckIn(CheckInCommand),

    /// Check whether a weekly check-in is due
    ShouldPrompt(ShouldPromptCommand),

    /// Log an activity outside the plan
    LogActivity(LogActivityCommand),

    /// Show weekly progress for a plan
    Summary(SummaryCommand),

    /// List the exercise catalog
    Catalog(CatalogCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Shared state every subcommand runs with
pub struct CommandContext {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    seed: Option<u64>,
    today: Option<NaiveDate>,
}

impl CommandContext {
    pub fn engine(&self) -> Result<TrainingEngine> {
        let catalog = self.config.load_catalog()?;
        let mut engine_config = self.config.engine_config();
        if let Some(seed) = self.seed {
            engine_config.random_seed = Some(seed);
        }

        let engine = TrainingEngine::new(catalog, engine_config);
        Ok(match self.today {
            Some(today) => engine.with_clock(FixedClock::on(today)),
            None => engine,
        })
    }

    /// Write JSON to `out`, or stdout when no path is given
    pub fn emit<T: Serialize>(&self, value: &T, out: Option<&Path>) -> Result<()> {
        let json = if self.config.output.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        match out {
            Some(path) => {
                fs::write(path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!("Wrote {}", path.display());
            }
            None => println!("{}", json),
        }

        Ok(())
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse a lowercase/kebab-case CLI value through the model's serde names
pub fn parse_serde_value<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("invalid value '{}'", value))
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let config = Config::load(self.config.as_deref())?;
        let context = CommandContext {
            config,
            config_path: self.config,
            seed: self.seed,
            today: self.today,
        };

        match self.command {
            Commands::Generate(cmd) => cmd.execute(&context),
            Commands::Complete(cmd) => cmd.execute(&context),
            Commands::UpdateExercise(cmd) => cmd.execute(&context),
            Commands::CheckIn(cmd) => cmd.execute(&context),
            Commands::ShouldPrompt(cmd) => cmd.execute(&context),
            Commands::LogActivity(cmd) => cmd.execute(&context),
            Commands::Summary(cmd) => cmd.execute(&context),
            Commands::Catalog(cmd) => cmd.execute(&context),
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&context),
                ConfigSubcommands::Init { force } => config_cmd::init_config(&context, force),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
