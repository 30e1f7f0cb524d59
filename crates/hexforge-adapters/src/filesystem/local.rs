//! Writes generated sources to disk.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use hexforge_core::{
    application::{ApplicationError, ports::FileWriter},
    error::{HexforgeError, HexforgeResult},
};

/// Files are opened with `create_new`, so an existing file is never
/// truncated even if it appeared after the service checked for it.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileWriter for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> HexforgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "creating directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> HexforgeResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "creating file"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "writing file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, doing: &str) -> HexforgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("{doing}: {e}"),
    }
    .into()
}
