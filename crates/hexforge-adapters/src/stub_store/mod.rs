//! Stub stores.
//!
//! # Stub resolution order
//!
//! 1. **`$HEXFORGE_STUBS_DIR`**: environment variable override.
//! 2. **`<project>/.hexforge/stubs`**: per-project overrides.
//! 3. **Built-in**: compiled into the binary, always present.

mod builtin;
mod directory;
mod layered;
mod memory;

use std::path::{Path, PathBuf};

use tracing::debug;

pub use builtin::{BUILTIN_STUBS, builtin};
pub use directory::{DirectoryStubStore, STUB_EXTENSION};
pub use layered::LayeredStubStore;
pub use memory::InMemoryStubStore;

pub const STUBS_DIR_ENV: &str = "HEXFORGE_STUBS_DIR";

/// Project-relative override directory.
pub const PROJECT_STUBS_DIR: &str = ".hexforge/stubs";

/// Stores for a project rooted at `project_dir`, in resolution order.
pub fn for_project(project_dir: &Path) -> LayeredStubStore {
    candidate_dirs(project_dir)
        .into_iter()
        .fold(LayeredStubStore::new(), |store, dir| {
            debug!(path = %dir.display(), "Stub override directory");
            store.with_layer(DirectoryStubStore::new(dir))
        })
        .with_layer(InMemoryStubStore::with_builtin())
}

fn candidate_dirs(project_dir: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(2);
    if let Ok(env_dir) = std::env::var(STUBS_DIR_ENV) {
        if !env_dir.trim().is_empty() {
            dirs.push(PathBuf::from(env_dir));
        }
    }
    dirs.push(project_dir.join(PROJECT_STUBS_DIR));
    dirs
}
