// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================
//
// Path resolution itself never fails. These errors come from the boundary:
// names typed on the command line and values read from project config.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid {kind} '{value}': {reason}")]
    InvalidIdentifier {
        kind: &'static str,
        value: String,
        reason: String,
    },

    #[error("no seeder given")]
    MissingSeedTarget,

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("invalid base package '{value}': {reason}")]
    InvalidBasePackage { value: String, reason: String },

    #[error("no base package configured")]
    MissingBasePackage,

    #[error("invalid pattern for key '{key}': {reason}")]
    InvalidPattern { key: String, reason: String },

    #[error("unknown path mode '{0}'")]
    UnknownPathMode(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { kind, .. } => vec![
                format!("A {kind} must be a Java identifier"),
                "Start with a letter, then use letters, digits or '_'".into(),
                "Examples: User, OrderLine, product".into(),
            ],
            Self::MissingSeedTarget => vec![
                "Specify a seeder name or use --all to run all seeders".into(),
                "Usage: hexforge db:seed <SeederName>".into(),
                "       hexforge db:seed --all".into(),
            ],
            Self::InvalidBasePackage { .. } => vec![
                "A base package is a dotted list of identifiers".into(),
                "Example: com.example.app".into(),
            ],
            Self::MissingBasePackage => vec![
                "Pass --base-package com.example.app".into(),
                "Or run 'hexforge init --base-package <pkg>' to create .hexforge.toml".into(),
            ],
            Self::InvalidPattern { key, .. } => vec![
                format!("Check the pattern for '{key}' in .hexforge.toml"),
                "Patterns look like: domain.{aggregate}.model".into(),
            ],
            Self::UnknownPathMode(_) => vec!["Known modes: hexagonal, crud".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } | Self::MissingSeedTarget => ErrorCategory::Validation,
            Self::InvalidBasePackage { .. }
            | Self::MissingBasePackage
            | Self::InvalidPattern { .. }
            | Self::UnknownPathMode(_) => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
