//! `.hexforge.toml` project configuration.
//!
//! # Format
//!
//! ```toml
//! base-package = "com.example.app"
//!
//! [paths]                      # hexagonal overrides, keyed by semantic key
//! command = "app.commands.{aggregate}"
//!
//! [crud]                       # CRUD overrides
//! controller = "{name}.api"
//! ```
//!
//! Every section is optional. A missing file is the same as an empty one.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use hexforge_core::{
    domain::{PathConfig, PathMode, PatternTable},
    error::{HexforgeError, HexforgeResult},
};

pub const PROJECT_CONFIG_FILE: &str = ".hexforge.toml";

/// Reads and writes `.hexforge.toml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectConfigLoader;

impl ProjectConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Where the config for a project in `project_dir` lives.
    pub fn path_for(project_dir: &Path) -> PathBuf {
        project_dir.join(PROJECT_CONFIG_FILE)
    }

    /// Load `<project_dir>/.hexforge.toml`, or the empty config if absent.
    pub fn discover(&self, project_dir: &Path) -> HexforgeResult<PathConfig> {
        let path = Self::path_for(project_dir);
        if !path.is_file() {
            debug!(path = %path.display(), "No project config, using defaults");
            return Ok(PathConfig::default());
        }
        self.load(&path)
    }

    /// Load and validate an explicit config file.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> HexforgeResult<PathConfig> {
        let raw = fs::read_to_string(path).map_err(|e| HexforgeError::Configuration {
            message: format!("failed to read '{}': {e}", path.display()),
        })?;
        let config = self.parse(&raw).map_err(|e| match e {
            HexforgeError::Configuration { message } => HexforgeError::Configuration {
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })?;

        info!(
            path_overrides = config.paths.len(),
            crud_overrides = config.crud.len(),
            "Project config loaded"
        );
        Ok(config)
    }

    /// Parse config text.
    pub fn parse(&self, raw: &str) -> HexforgeResult<PathConfig> {
        let config: PathConfig = toml::from_str(raw).map_err(|e| HexforgeError::Configuration {
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Starter file for `init`: the base package plus every default pattern,
    /// commented out so only edited lines take effect.
    pub fn starter(&self, base_package: &str) -> String {
        let mut out = String::new();
        out.push_str("# hexforge project configuration\n");
        out.push_str(&format!(
            "base-package = {}\n",
            toml::Value::String(base_package.to_string())
        ));

        for mode in [PathMode::Hexagonal, PathMode::Crud] {
            out.push_str(&format!(
                "\n# Uncomment to override. Variables: {{{}}}{}\n[{}]\n",
                mode.primary_variable(),
                if mode == PathMode::Hexagonal {
                    ", {category} (adapter)"
                } else {
                    ""
                },
                mode.config_section()
            ));
            for (key, pattern) in PatternTable::defaults(mode).iter() {
                out.push_str(&format!(
                    "# {} = {}\n",
                    toml_key(key),
                    toml::Value::String(pattern.to_string())
                ));
            }
        }
        out
    }
}

/// Keys like `port-in` are valid bare TOML keys; anything else gets quoted.
fn toml_key(key: &str) -> String {
    if !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        key.to_string()
    } else {
        toml::Value::String(key.to_string()).to_string()
    }
}
