//! CLI errors: what went wrong, what to try next, and which exit code.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use hexforge_core::error::HexforgeError;

pub use hexforge_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// `init` found an existing config and `--force` was not given.
    #[error("Configuration already exists at {path}")]
    ConfigExists { path: PathBuf },

    /// The app config (not `.hexforge.toml`) is unreadable or invalid.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `hexforge-core` or the adapters.
    #[error("{0}")]
    Core(#[from] HexforgeError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The build tool could not be started.
    #[error("Failed to run: {command}")]
    ExternalCommandFailed {
        command: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The build tool ran and exited non-zero.
    #[error("Seed command exited with status {code}: {command}")]
    ChildExited { command: String, code: u8 },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::IoError {
            message: "writing output".into(),
            source,
        }
    }
}

impl CliError {
    /// Hints printed under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigExists { path } => vec![
                format!("'{}' already exists", path.display()),
                "Use --force to overwrite it".into(),
            ],

            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } => vec![
                "Check that the output directory is writable".into(),
            ],

            Self::ExternalCommandFailed { command, .. } => vec![
                format!("Could not start: {}", command),
                "Ensure Maven or Gradle is installed and in your PATH".into(),
                "Or add the mvnw / gradlew wrapper to the project".into(),
            ],

            Self::ChildExited { .. } => vec!["Check the build output above for details".into()],
        }
    }

    /// Which exit code and log level apply.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigExists { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::ExternalCommandFailed { .. } => ErrorCategory::Internal,
            Self::ChildExited { .. } => ErrorCategory::Internal,
        }
    }

    /// 2 user error, 3 not found, 4 configuration, 1 otherwise. A failed seed
    /// run passes the build tool's own status through.
    pub fn exit_code(&self) -> u8 {
        if let Self::ChildExited { code, .. } = self {
            return *code;
        }
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Text for stderr: the message, its causes when `verbose`, then
    /// suggestions.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let mut lines = vec![
            String::new(),
            format!(
                "{} {}",
                paint(color, "\u{2717} Error:", |t| t.red().bold().to_string()),
                paint(color, &self.to_string(), |t| t.red().to_string())
            ),
        ];

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                lines.push(format!(
                    "  {} {}",
                    paint(color, "caused by:", |t| t.dimmed().to_string()),
                    err
                ));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint(color, "Suggestions:", |t| t.yellow().bold().to_string()));
            lines.extend(suggestions.into_iter().map(|s| format!("  {s}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint(color, "Run with -v for more details.", |t| {
                t.dimmed().to_string()
            }));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// One tracing event; user mistakes log at warn, the rest at error.
    pub fn log(&self) {
        let category = self.category();
        let cause = self.source().map(|c| c.to_string());
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, cause = cause.as_deref(), "{}", self)
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, cause = cause.as_deref(), "{}", self)
            }
        }
    }
}

fn paint(color: bool, text: &str, style: fn(&str) -> String) -> String {
    if color {
        style(text)
    } else {
        text.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad names or arguments.
    UserError,
    /// No build tool, no stub.
    NotFound,
    Configuration,
    Internal,
}

/// Attach a description of what was being attempted to an I/O failure.
pub trait IoContext<T> {
    fn doing(self, what: impl FnOnce() -> String) -> CliResult<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn doing(self, what: impl FnOnce() -> String) -> CliResult<T> {
        self.map_err(|source| CliError::IoError {
            message: what(),
            source,
        })
    }
}
