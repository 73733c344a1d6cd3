use anyhow::{Context, Result};
use fitplan::{EngineConfig, ExerciseCatalog, RegenerationPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineSection,

    #[serde(default)]
    pub catalog: CatalogSection,

    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineSection {
    /// Fixed seed for reproducible plans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(default)]
    pub regeneration_policy: RegenerationPolicy,

    #[serde(default = "default_plan_name")]
    pub plan_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogSection {
    /// JSON exercise catalog; the built-in catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    #[serde(default = "default_true")]
    pub pretty: bool,

    #[serde(default = "default_date_format")]
    pub date_format: String,
}

// Default value functions
fn default_plan_name() -> String {
    EngineConfig::default().plan_name
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    "%a %Y-%m-%d".to_string()
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            seed: None,
            regeneration_policy: RegenerationPolicy::default(),
            plan_name: default_plan_name(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            pretty: default_true(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.fitplan/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".fitplan"))
    }

    /// Get config file path (~/.fitplan/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Explicit path if given, otherwise the default location
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, falling back to defaults when it does not exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_file = Self::resolve_path(path)?;

        if !config_file.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_file = Self::resolve_path(path)?;
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(config_file)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            random_seed: self.engine.seed,
            regeneration_policy: self.engine.regeneration_policy,
            plan_name: self.engine.plan_name.clone(),
        }
    }

    pub fn load_catalog(&self) -> Result<ExerciseCatalog> {
        match &self.catalog.path {
            Some(path) => ExerciseCatalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display())),
            None => Ok(ExerciseCatalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.engine.seed, None);
        assert_eq!(config.engine.regeneration_policy, RegenerationPolicy::FutureOnly);
        assert_eq!(config.engine.plan_name, "Your Personalized Plan");
        assert!(config.output.pretty);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.engine.seed = Some(42);
        config.engine.regeneration_policy = RegenerationPolicy::FullReplace;

        let serialized = toml::to_string(&config).unwrap();
        assert!(serialized.contains("regeneration_policy = \"full-replace\""));

        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[engine]\nseed = 7\n").unwrap();
        assert_eq!(config.engine.seed, Some(7));
        assert_eq!(config.engine.plan_name, "Your Personalized Plan");
        assert!(config.output.pretty);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.pretty = false;
        config.save(Some(&path)).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.engine_config().random_seed, None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let loaded = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(loaded, Config::default());
    }
}
