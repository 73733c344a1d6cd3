use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// What happens to already-scheduled workouts when a check-in triggers regeneration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RegenerationPolicy {
    /// Workouts dated before today keep their completion state; only the future is rebuilt
    #[default]
    FutureOnly,
    /// A brand-new plan replaces the old one, history included
    FullReplace,
}

impl fmt::Display for RegenerationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegenerationPolicy::FutureOnly => write!(f, "future-only"),
            RegenerationPolicy::FullReplace => write!(f, "full-replace"),
        }
    }
}

impl FromStr for RegenerationPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "future-only" => Ok(RegenerationPolicy::FutureOnly),
            "full-replace" => Ok(RegenerationPolicy::FullReplace),
            other => Err(EngineError::InvalidConfig(format!(
                "unknown regeneration policy '{}'",
                other
            ))),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Fixed seed for reproducible plans; `None` draws from OS entropy
    #[serde(default)]
    pub random_seed: Option<u64>,

    #[serde(default)]
    pub regeneration_policy: RegenerationPolicy,

    #[serde(default = "default_plan_name")]
    pub plan_name: String,
}

fn default_plan_name() -> String {
    "Your Personalized Plan".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            regeneration_policy: RegenerationPolicy::default(),
            plan_name: default_plan_name(),
        }
    }
}

impl EngineConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let random_seed = match env::var("FITPLAN_SEED") {
            Ok(value) => Some(value.parse()?),
            Err(_) => None,
        };
        let regeneration_policy = match env::var("FITPLAN_REGENERATION_POLICY") {
            Ok(value) => value.parse()?,
            Err(_) => RegenerationPolicy::default(),
        };
        let plan_name = env::var("FITPLAN_PLAN_NAME").unwrap_or_else(|_| default_plan_name());

        Ok(Self {
            random_seed,
            regeneration_policy,
            plan_name,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_policy(mut self, policy: RegenerationPolicy) -> Self {
        self.regeneration_policy = policy;
        self
    }
}
