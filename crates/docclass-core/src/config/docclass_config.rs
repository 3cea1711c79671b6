//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassVoteConfig, EngineConfig, MarginConfig, PathsConfig, ProfileKind, VoteConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`DOCCLASS_*`)
/// 3. TOML config file
/// 4. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocclassConfig {
    pub engine: EngineConfig,
    pub margin: MarginConfig,
    pub vote: VoteConfig,
    pub class_vote: ClassVoteConfig,
    pub paths: PathsConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub profile: Option<ProfileKind>,
    pub separators: Option<String>,
    pub threshold: Option<f64>,
    pub delta: Option<f64>,
    pub k_min: Option<usize>,
    pub unknown_mode: Option<bool>,
    pub prefer_pubmed_epsilon: Option<f64>,
    pub terms_path: Option<String>,
    pub mesh_path: Option<String>,
}

impl DocclassConfig {
    /// Load configuration from an optional TOML file, then environment, then CLI flags.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file. Unspecified keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values. Called before any record is processed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.separators.is_empty() {
            return Err(invalid("engine.separators", "must contain at least one character"));
        }
        if self.engine.evidence_limit == 0 {
            return Err(invalid("engine.evidence_limit", "must be greater than 0"));
        }
        check_non_negative("margin.threshold", self.margin.threshold)?;
        check_non_negative("vote.delta", self.vote.delta)?;
        check_non_negative("vote.prefer_pubmed_epsilon", self.vote.prefer_pubmed_epsilon)?;
        if self.vote.k_min == 0 {
            return Err(invalid("vote.k_min", "must be greater than 0"));
        }
        if self.vote.top_terms == 0 {
            return Err(invalid("vote.top_terms", "must be greater than 0"));
        }
        check_non_negative("class_vote.min_review_score", self.class_vote.min_review_score)?;
        check_non_negative("class_vote.min_unknown_score", self.class_vote.min_unknown_score)?;
        check_non_negative(
            "class_vote.min_experimental_score",
            self.class_vote.min_experimental_score,
        )?;
        Ok(())
    }

    /// Apply `DOCCLASS_*` overrides read through `lookup`.
    ///
    /// Unparsable values are rejected rather than ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("DOCCLASS_PROFILE") {
            self.engine.profile = ProfileKind::parse(&val).ok_or(ConfigError::InvalidValue {
                field: "DOCCLASS_PROFILE".to_string(),
                value: val,
            })?;
        }
        if let Some(val) = lookup("DOCCLASS_SEPARATORS") {
            self.engine.separators = val;
        }
        if let Some(val) = lookup("DOCCLASS_THRESHOLD") {
            self.margin.threshold = parse_env("DOCCLASS_THRESHOLD", &val)?;
        }
        if let Some(val) = lookup("DOCCLASS_DELTA") {
            self.vote.delta = parse_env("DOCCLASS_DELTA", &val)?;
        }
        if let Some(val) = lookup("DOCCLASS_K_MIN") {
            self.vote.k_min = parse_env("DOCCLASS_K_MIN", &val)?;
        }
        if let Some(val) = lookup("DOCCLASS_UNKNOWN_MODE") {
            self.vote.unknown_mode = parse_env("DOCCLASS_UNKNOWN_MODE", &val)?;
        }
        if let Some(val) = lookup("DOCCLASS_PREFER_PUBMED_EPSILON") {
            self.vote.prefer_pubmed_epsilon = parse_env("DOCCLASS_PREFER_PUBMED_EPSILON", &val)?;
        }
        if let Some(val) = lookup("DOCCLASS_TERMS") {
            self.paths.terms = Some(val);
        }
        if let Some(val) = lookup("DOCCLASS_MESH") {
            self.paths.mesh = Some(val);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(v) = cli.profile {
            self.engine.profile = v;
        }
        if let Some(ref v) = cli.separators {
            self.engine.separators = v.clone();
        }
        if let Some(v) = cli.threshold {
            self.margin.threshold = v;
        }
        if let Some(v) = cli.delta {
            self.vote.delta = v;
        }
        if let Some(v) = cli.k_min {
            self.vote.k_min = v;
        }
        if let Some(v) = cli.unknown_mode {
            self.vote.unknown_mode = v;
        }
        if let Some(v) = cli.prefer_pubmed_epsilon {
            self.vote.prefer_pubmed_epsilon = v;
        }
        if let Some(ref v) = cli.terms_path {
            self.paths.terms = Some(v.clone());
        }
        if let Some(ref v) = cli.mesh_path {
            self.paths.mesh = Some(v.clone());
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, "must be a finite, non-negative number"));
    }
    Ok(())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field: key.to_string(),
        value: value.to_string(),
    })
}
