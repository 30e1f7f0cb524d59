//! Unified error handling for hexforge-core.
//!
//! Wraps domain and application errors in one type with user-actionable
//! suggestions. Path resolution never produces any of these; they come from
//! validation, configuration and I/O at the edges.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for hexforge-core operations.
#[derive(Debug, Error, Clone)]
pub enum HexforgeError {
    /// Errors from the domain layer (invalid names, bad configuration values).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (stubs, filesystem, build tools).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl HexforgeError {
    /// Next steps to show under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { .. } => vec![
                "Check .hexforge.toml in the project directory".into(),
                "Keys are flat strings: command = \"app.commands.{aggregate}\"".into(),
            ],
        }
    }

    /// Drives the CLI exit code.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Coarse classification shared by every error layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

pub type HexforgeResult<T> = Result<T, HexforgeError>;
