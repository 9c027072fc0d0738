//! Shared runtime settings for netlint front-ends.
//!
//! Resolution is layered: built-in defaults, then the TOML file at the
//! platform config dir, then `NETLINT_*` environment variables. The
//! core crates never read configuration themselves -- callers resolve a
//! [`Settings`] here and pass the values down.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

/// Top-level runtime settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Parallel rule-evaluation workers; zero lets the engine pick its
    /// default.
    #[serde(default)]
    pub concurrency: usize,

    /// Treat warnings as failures for exit-code purposes.
    #[serde(default)]
    pub strict: bool,

    /// Drift percentage at or above which drift is significant.
    #[serde(default = "default_drift_threshold")]
    pub drift_threshold: f64,

    /// Default policy file evaluated when the caller names none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_path: Option<PathBuf>,

    /// Report output format label ("table", "json", "yaml", "html").
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            concurrency: 0,
            strict: false,
            drift_threshold: default_drift_threshold(),
            policy_path: None,
            output: default_output(),
        }
    }
}

fn default_drift_threshold() -> f64 {
    5.0
}
fn default_output() -> String {
    "table".into()
}

const SUPPORTED_OUTPUTS: [&str; 4] = ["table", "json", "yaml", "html"];

impl Settings {
    /// Reject values the downstream layers would choke on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_OUTPUTS.contains(&self.output.as_str()) {
            return Err(ConfigError::Validation {
                field: "output".into(),
                reason: format!(
                    "expected one of {SUPPORTED_OUTPUTS:?}, got '{}'",
                    self.output
                ),
            });
        }
        if !self.drift_threshold.is_finite() {
            return Err(ConfigError::Validation {
                field: "drift_threshold".into(),
                reason: "must be a finite number".into(),
            });
        }
        Ok(())
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "netlint", "netlint").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("netlint");
    p
}

// ── Loading / saving ────────────────────────────────────────────────

/// Load settings from defaults + config file + `NETLINT_*` env.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(&config_path())
}

/// Load settings with an explicit file path (used by tests and callers
/// with a `--config` flag).
pub fn load_settings_from(path: &std::path::Path) -> Result<Settings, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("NETLINT_"));

    let settings: Settings = figment.extract()?;
    settings.validate()?;
    Ok(settings)
}

/// Serialize settings to TOML at the canonical config path.
pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(settings)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}
