//! Maven/Gradle detection on the local filesystem.

use std::path::{Path, PathBuf};

use hexforge_core::{application::ports::BuildToolLocator, domain::BuildTool};
use tracing::debug;

/// Looks for build files and wrapper scripts in the project directory.
///
/// Maven is checked before Gradle. A project with both reports Maven.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsBuildToolLocator;

impl FsBuildToolLocator {
    pub fn new() -> Self {
        Self
    }
}

impl BuildToolLocator for FsBuildToolLocator {
    fn detect(&self, project_dir: &Path) -> Option<BuildTool> {
        BuildTool::ALL.into_iter().find(|tool| {
            tool.marker_files()
                .iter()
                .any(|marker| project_dir.join(marker).is_file())
        })
    }

    fn executable(&self, project_dir: &Path, tool: BuildTool) -> PathBuf {
        let wrapper = project_dir.join(wrapper_file(tool));
        if wrapper.is_file() {
            debug!(path = %wrapper.display(), "Using build wrapper");
            return wrapper;
        }
        PathBuf::from(tool.system_executable())
    }
}

#[cfg(windows)]
fn wrapper_file(tool: BuildTool) -> String {
    format!("{}.cmd", tool.wrapper_script())
}

#[cfg(not(windows))]
fn wrapper_file(tool: BuildTool) -> String {
    tool.wrapper_script().to_string()
}
