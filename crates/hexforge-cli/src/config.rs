//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  It
//! holds user preferences for the CLI itself; project layout lives in
//! `.hexforge.toml` and is read by the adapters.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `HEXFORGE_STRICT_PLACEHOLDERS` environment variable
//! 3. Config file (`$HEXFORGE_CONFIG`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const CONFIG_ENV: &str = "HEXFORGE_CONFIG";
pub const STRICT_ENV: &str = "HEXFORGE_STRICT_PLACEHOLDERS";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Generator settings.
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Fail instead of warn when a stub keeps an unknown `{{TOKEN}}`.
    pub strict_placeholders: bool,
    /// Log a warning when a resolved package still contains `{var}`.
    pub diagnostics: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            strict_placeholders: false,
            diagnostics: true,
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_path);

        let mut config = Self::load_from(&path)?;

        if let Ok(value) = std::env::var(STRICT_ENV) {
            config.generate.strict_placeholders = parse_bool(&value)
                .with_context(|| format!("{STRICT_ENV} must be true or false, got '{value}'"))?;
        }

        Ok(config)
    }

    /// Read `path`, or the defaults if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            debug!(path = %path.display(), "No app config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        debug!(path = %path.display(), "App config loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `hexforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "hexforge", "hexforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("hexforge.toml"))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
