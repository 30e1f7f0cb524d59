//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `hexforge-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{BuildTool, PlaceholderBatch};
use crate::error::HexforgeResult;

/// Port for writing generated files.
///
/// Implemented by:
/// - `hexforge_adapters::filesystem::LocalFilesystem` (production)
/// - `hexforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait FileWriter: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> HexforgeResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> HexforgeResult<()>;
}

/// Port for stub storage and retrieval.
///
/// Stub names are `<group>/<name>`, e.g. `mvc/controller` or `data/seeder`.
///
/// Implemented by:
/// - `hexforge_adapters::stub_store::InMemoryStubStore` (built-in stubs)
/// - `hexforge_adapters::stub_store::DirectoryStubStore` (project overrides)
#[cfg_attr(test, mockall::automock)]
pub trait StubStore: Send + Sync {
    /// Stub text for `name`.
    fn load(&self, name: &str) -> HexforgeResult<String>;

    /// All stub names this store can serve, sorted.
    fn names(&self) -> HexforgeResult<Vec<String>>;
}

/// Port for stub rendering.
///
/// Implementations must replace every exact `{{TOKEN}}` occurrence with its
/// batch value and leave unknown tokens untouched.
#[cfg_attr(test, mockall::automock)]
pub trait StubRenderer: Send + Sync {
    /// Render the stub called `name` whose text is `stub`.
    fn render(&self, name: &str, stub: &str, batch: &PlaceholderBatch) -> HexforgeResult<String>;
}

/// Port for finding the project's build tool.
#[cfg_attr(test, mockall::automock)]
pub trait BuildToolLocator: Send + Sync {
    /// Tool used by the project in `project_dir`, if any.
    fn detect(&self, project_dir: &Path) -> Option<BuildTool>;

    /// Program to run: the wrapper script if present, else the system tool.
    fn executable(&self, project_dir: &Path, tool: BuildTool) -> PathBuf;
}
