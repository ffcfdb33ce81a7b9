//! Environment configuration — named environments with an active flag.
//!
//! The config file is a JSON document listing deployment environments
//! (dev/UAT/prod), exactly one of which is flagged `active`. Key spelling
//! matches the deployed config format (`base-path`, `early-build`).

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// One named deployment environment.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppEnvironment {
    #[serde(rename = "type")]
    pub env_type: String,
    pub name: String,
    pub active: bool,
    #[serde(rename = "base-path")]
    pub base_api_url: String,
    #[serde(rename = "apiKey")]
    pub api_key: String,
    #[serde(rename = "early-build", default)]
    pub early_release: bool,
}

impl AppEnvironment {
    pub fn is_dev(&self) -> bool {
        self.env_type.eq_ignore_ascii_case("dev")
    }

    pub fn is_prod(&self) -> bool {
        self.env_type.eq_ignore_ascii_case("prod")
    }
}

/// Root config: the environment list plus diagnostics switches.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigInfo {
    environments: Vec<AppEnvironment>,
    #[serde(rename = "enableLogs", default)]
    pub enable_logs: bool,
}

impl ConfigInfo {
    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and parse a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The single environment flagged `active`.
    ///
    /// Zero or multiple active environments is a config error, not a silent
    /// first-match.
    pub fn active_environment(&self) -> Result<&AppEnvironment, ConfigError> {
        let mut active = self.environments.iter().filter(|e| e.active);
        let first = active.next().ok_or(ConfigError::NoActiveEnvironment)?;
        let extras = active.count();
        if extras > 0 {
            return Err(ConfigError::MultipleActiveEnvironments(extras + 1));
        }
        Ok(first)
    }

    pub fn environments(&self) -> &[AppEnvironment] {
        &self.environments
    }
}
