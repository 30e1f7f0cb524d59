//! Project stub overrides read from disk.
//!
//! # Directory layout expected
//!
//! ```text
//! .hexforge/stubs/
//! ├── mvc/
//! │   └── controller.stub      ← overrides the built-in mvc/controller
//! └── data/
//!     └── seeder.stub
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use hexforge_core::{
    application::{ApplicationError, ports::StubStore},
    error::HexforgeResult,
};

pub const STUB_EXTENSION: &str = "stub";

/// Serves `<root>/<group>/<name>.stub` files.
///
/// A missing root is treated as an empty store.
#[derive(Debug, Clone)]
pub struct DirectoryStubStore {
    root: PathBuf,
}

impl DirectoryStubStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn stub_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{STUB_EXTENSION}"))
    }
}

impl StubStore for DirectoryStubStore {
    fn load(&self, name: &str) -> HexforgeResult<String> {
        let path = self.stub_path(name);
        if !path.is_file() {
            return Err(ApplicationError::StubNotFound {
                name: name.to_string(),
            }
            .into());
        }

        debug!(stub = name, path = %path.display(), "Using project stub");
        fs::read_to_string(&path).map_err(|e| {
            ApplicationError::FilesystemError {
                path,
                reason: format!("Failed to read stub: {e}"),
            }
            .into()
        })
    }

    #[instrument(skip(self), fields(dir = %self.root.display()))]
    fn names(&self) -> HexforgeResult<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable stub entry");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(STUB_EXTENSION)
            {
                continue;
            }
            let stem = path.with_extension("");
            if let Ok(relative) = stem.strip_prefix(&self.root) {
                names.push(stub_name(relative));
            }
        }

        names.sort();
        debug!(count = names.len(), "Discovered project stubs");
        Ok(names)
    }
}

/// `mvc\controller` and `mvc/controller` both become `mvc/controller`.
fn stub_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
