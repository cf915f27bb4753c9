//! Configuration types and loading
//!
//! Defaults reproduce the constants the assistant has always run with; a
//! YAML file can override them. Lookup chain: explicit `--config` path,
//! `./.lmdesk.yml`, `~/.config/lmdesk/lmdesk.yml`, then defaults.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Completion backend configuration
    pub llm: LlmConfig,

    /// Workspace / persistence configuration
    pub workspace: WorkspaceConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR); CLI flag takes priority
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(".lmdesk.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("lmdesk").join("lmdesk.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Completion backend configuration
///
/// Sampling parameters and token budgets are enumerated here rather than
/// duplicated as literals at call sites: one temperature for all calls, one
/// budget for planning, one for replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Backend base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Sampling temperature for every completion call
    pub temperature: f64,

    /// Token budget for task-planning completions
    #[serde(rename = "plan-max-tokens")]
    pub plan_max_tokens: u32,

    /// Token budget for reply completions
    #[serde(rename = "reply-max-tokens")]
    pub reply_max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1234".to_string(),
            temperature: 0.7,
            plan_max_tokens: 200,
            reply_max_tokens: 100,
            timeout_ms: 120_000,
        }
    }
}

/// Workspace / persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Directory created on first run; holds the interaction history
    pub dir: PathBuf,

    /// History file name inside the workspace directory
    #[serde(rename = "history-file")]
    pub history_file: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assistant_workspace"),
            history_file: "interaction_history.txt".to_string(),
        }
    }
}
