//! Failures while running a use case. Bad input is a `DomainError` instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No stub with this name in any store.
    #[error("Stub not found: {name}")]
    StubNotFound { name: String },

    /// Strict mode found tokens no placeholder batch defines.
    #[error("Rendering stub '{stub}' failed: {reason}")]
    RenderingFailed { stub: String, reason: String },

    #[error("Could not write {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A poisoned lock inside an in-memory adapter.
    #[error("Stub store is unavailable")]
    StoreLockError,

    /// Neither Maven nor Gradle markers were found.
    #[error("No build tool detected in {dir}")]
    BuildToolNotFound { dir: PathBuf },
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StubNotFound { name } => vec![
                format!("No built-in or project stub named '{}'", name),
                "Project stubs live in .hexforge/stubs/<group>/<name>.stub".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Check that {} is writable", path.display()),
                "Pass the project root with --output".into(),
            ],
            Self::StoreLockError => vec!["Re-run the command".into()],
            Self::BuildToolNotFound { .. } => vec![
                "Run db:seed from the Spring project root, or pass --dir".into(),
                "Expected pom.xml, build.gradle or build.gradle.kts".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "Fix the stub, or drop --strict-placeholders to keep the tokens".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StubNotFound { .. } | Self::BuildToolNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError | Self::RenderingFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
