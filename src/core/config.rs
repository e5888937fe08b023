/*!
 * Engine Configuration
 *
 * Defaults come from `core::limits`. A JSON file named by `ENERGY_CONFIG` is
 * applied first, then individual `ENERGY_*` variables override it.
 */

use super::errors::EngineError;
use super::limits::{
    DEFAULT_ALLOW_NEGATIVE_ENERGY, DEFAULT_MAX_QUEUE_LEN, ENV_ALLOW_NEGATIVE, ENV_CONFIG_PATH,
    ENV_MAX_QUEUE, ENV_OUTPUT,
};
use super::types::EngineResult;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::str::FromStr;

/// Output format of the console front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Render {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document per result
    Json,
}

impl Render {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for Render {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(EngineError::Config(format!(
                "Invalid output '{}'. Valid: text, json",
                other
            ))),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Accept processes with negative energy consumption
    pub allow_negative_energy: bool,

    /// Maximum number of pending processes (default: 65536)
    pub max_queue_len: usize,

    /// Console output format
    pub render: Render,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            allow_negative_energy: DEFAULT_ALLOW_NEGATIVE_ENERGY,
            max_queue_len: DEFAULT_MAX_QUEUE_LEN,
            render: Render::Text,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON configuration document
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Load configuration from the process environment
    ///
    /// Environment variables:
    /// - ENERGY_CONFIG: Path to a JSON configuration file
    /// - ENERGY_ALLOW_NEGATIVE: Accept negative energy (1/true/0/false)
    /// - ENERGY_MAX_QUEUE: Queue capacity
    /// - ENERGY_OUTPUT: text or json
    pub fn from_env() -> EngineResult<Self> {
        Self::from_config_path(std::env::var(ENV_CONFIG_PATH))?
            .with_overrides(|key| std::env::var(key).ok())
    }

    /// Base configuration for the `ENERGY_CONFIG` lookup result
    fn from_config_path(path: Result<String, VarError>) -> EngineResult<Self> {
        match path {
            Ok(path) => {
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    EngineError::Config(format!("Cannot read config file '{}': {}", path, e))
                })?;
                Self::from_json_str(&contents)
            }
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(path)) => Err(EngineError::Config(format!(
                "{} is not valid unicode: {:?}",
                ENV_CONFIG_PATH, path
            ))),
        }
    }

    /// Apply `ENERGY_*` overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_ALLOW_NEGATIVE) {
            self.allow_negative_energy = parse_flag(ENV_ALLOW_NEGATIVE, &value)?;
        }

        if let Some(value) = lookup(ENV_MAX_QUEUE) {
            self.max_queue_len = value.trim().parse().map_err(|_| {
                EngineError::Config(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_MAX_QUEUE, value
                ))
            })?;
        }

        if let Some(value) = lookup(ENV_OUTPUT) {
            self.render = value.parse()?;
        }

        self.validate()
    }

    fn validate(self) -> EngineResult<Self> {
        if self.max_queue_len == 0 {
            return Err(EngineError::Config(
                "max_queue_len must be greater than zero".into(),
            ));
        }
        Ok(self)
    }
}

fn parse_flag(key: &str, value: &str) -> EngineResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(EngineError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}
