//! Seed Service - plans the build-tool invocation behind `db:seed`.
//!
//! Running the command is left to the caller; this only decides what to run.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{
    application::{ApplicationError, ports::BuildToolLocator},
    domain::{BuildTool, SeedTarget},
    error::HexforgeResult,
};

/// A fully decided `db:seed` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    pub tool: BuildTool,
    pub program: PathBuf,
    pub args: Vec<String>,
    pub target: SeedTarget,
    pub working_dir: PathBuf,
}

impl SeedPlan {
    /// Shell-style rendering for display and `--dry-run`.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct SeedService {
    locator: Box<dyn BuildToolLocator>,
}

impl SeedService {
    pub fn new(locator: Box<dyn BuildToolLocator>) -> Self {
        Self { locator }
    }

    /// Decide how to run seeders for the project in `project_dir`.
    pub fn plan(&self, project_dir: &Path, target: SeedTarget) -> HexforgeResult<SeedPlan> {
        let tool = self.locator.detect(project_dir).ok_or_else(|| {
            ApplicationError::BuildToolNotFound {
                dir: project_dir.to_path_buf(),
            }
        })?;
        debug!(tool = %tool, dir = %project_dir.display(), "Build tool detected");

        let program = self.locator.executable(project_dir, tool);
        let args = tool.seed_arguments(&target);
        info!(tool = %tool, target = %target, "Seed command planned");

        Ok(SeedPlan {
            tool,
            program,
            args,
            target,
            working_dir: project_dir.to_path_buf(),
        })
    }
}
