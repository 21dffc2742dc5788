use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::{Matcher, DEFAULT_TOP_N, MATCH_THRESHOLD};
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub roster: RosterSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            top_n: default_top_n(),
        }
    }
}

fn default_min_score() -> f64 { MATCH_THRESHOLD }
fn default_top_n() -> usize { DEFAULT_TOP_N }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_courses_weight")]
    pub courses: f64,
    #[serde(default = "default_goals_weight")]
    pub goals: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            courses: default_courses_weight(),
            goals: default_goals_weight(),
            availability: default_availability_weight(),
        }
    }
}

fn default_courses_weight() -> f64 { 40.0 }
fn default_goals_weight() -> f64 { 30.0 }
fn default_availability_weight() -> f64 { 30.0 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            courses: config.courses,
            goals: config.goals,
            availability: config.availability,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterSettings {
    /// JSON roster file; the built-in sample roster is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_format")]
    pub format: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

fn default_output_format() -> String { "text".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` style overrides on top of the file values
    pub fn with_overrides(&self, level: Option<String>, format: Option<String>) -> Self {
        Self {
            level: level.unwrap_or_else(|| self.level.clone()),
            format: format.unwrap_or_else(|| self.format.clone()),
        }
    }

    /// Logging settings after reading `LOG_LEVEL` and `LOG_FORMAT`
    pub fn with_env_overrides(&self) -> Self {
        self.with_overrides(std::env::var("LOG_LEVEL").ok(), std::env::var("LOG_FORMAT").ok())
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STUDY_MATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STUDY_MATCH__MATCHING__TOP_N -> matching.top_n
            .add_source(
                Environment::with_prefix("STUDY_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("STUDY_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject weights and thresholds that would push scores outside 0-100
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = ScoringWeights::from(&self.scoring.weights);

        if weights.courses < 0.0 || weights.goals < 0.0 || weights.availability < 0.0 {
            return Err(ConfigError::Message(format!(
                "scoring weights must be non-negative: {:?}",
                weights
            )));
        }
        if (weights.total() - 100.0).abs() > 1e-6 {
            return Err(ConfigError::Message(format!(
                "scoring weights must sum to 100, got {}",
                weights.total()
            )));
        }
        if !(0.0..=100.0).contains(&self.matching.min_score) {
            return Err(ConfigError::Message(format!(
                "matching.min_score must be within 0-100, got {}",
                self.matching.min_score
            )));
        }

        Ok(())
    }

    /// Matcher configured with these weights and threshold
    pub fn matcher(&self) -> Matcher {
        Matcher::new(ScoringWeights::from(&self.scoring.weights))
            .with_min_score(self.matching.min_score)
    }
}
