//! Domain value objects: BuildTool, SeedTarget.
//!
//! Plain `Copy`/`Clone` values with their string forms. Locating a build tool
//! on disk is an adapter concern; this file only knows names and arguments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── BuildTool ────────────────────────────────────────────────────────────────

/// A JVM build tool that can boot the application to run seeders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Maven,
    Gradle,
}

impl BuildTool {
    pub const ALL: [BuildTool; 2] = [Self::Maven, Self::Gradle];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maven => "maven",
            Self::Gradle => "gradle",
        }
    }

    /// Files whose presence marks a project as using this tool.
    pub const fn marker_files(&self) -> &'static [&'static str] {
        match self {
            Self::Maven => &["pom.xml"],
            Self::Gradle => &["build.gradle", "build.gradle.kts"],
        }
    }

    /// Project-local wrapper script, preferred when present.
    pub const fn wrapper_script(&self) -> &'static str {
        match self {
            Self::Maven => "mvnw",
            Self::Gradle => "gradlew",
        }
    }

    /// Executable looked up on `PATH` when there is no wrapper.
    pub const fn system_executable(&self) -> &'static str {
        match self {
            Self::Maven => "mvn",
            Self::Gradle => "gradle",
        }
    }

    /// Arguments that boot the app with `--seed=<target>`.
    pub fn seed_arguments(&self, target: &SeedTarget) -> Vec<String> {
        let seed = format!("--seed={}", target.as_arg());
        match self {
            Self::Maven => vec![
                "spring-boot:run".to_string(),
                format!("-Dspring-boot.run.arguments={seed}"),
            ],
            Self::Gradle => vec!["bootRun".to_string(), format!("--args={seed}")],
        }
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildTool {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "maven" | "mvn" => Ok(Self::Maven),
            "gradle" => Ok(Self::Gradle),
            other => Err(DomainError::InvalidIdentifier {
                kind: "build tool",
                value: other.to_string(),
                reason: "expected maven or gradle".into(),
            }),
        }
    }
}

// ── SeedTarget ───────────────────────────────────────────────────────────────

/// Which seeders `db:seed` runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeedTarget {
    All,
    Named(String),
}

impl SeedTarget {
    /// From the `db:seed` arguments. `--all` wins over a name.
    pub fn from_args(name: Option<&str>, all: bool) -> Result<Self, DomainError> {
        match (name, all) {
            (_, true) => Ok(Self::All),
            (Some(name), false) if !name.trim().is_empty() => Ok(Self::Named(name.to_string())),
            _ => Err(DomainError::MissingSeedTarget),
        }
    }

    pub fn as_arg(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for SeedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}
