//! Filesystem output for generated projects.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Persists directories and files produced by the generator.
pub trait FileSystemWriter {
    /// Creates `path` and any missing parents. Existing directories are not an error.
    fn ensure_directory(&self, path: &Path) -> Result<()>;

    /// Writes `content` to `path`, creating parent directories and replacing any
    /// previous file.
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}

/// [`FileSystemWriter`] that writes to the local disk.
#[derive(Debug, Default)]
pub struct DiskWriter;

impl DiskWriter {
    pub fn new() -> Self {
        Self
    }
}

fn write_error(path: &Path, source: std::io::Error) -> Error {
    Error::WriteError { path: path.display().to_string(), source }
}

impl FileSystemWriter for DiskWriter {
    fn ensure_directory(&self, path: &Path) -> Result<()> {
        debug!("Ensuring directory: {}", path.display());
        fs::create_dir_all(path).map_err(|e| write_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        debug!("Writing file: {}", path.display());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
        }
        fs::write(path, content).map_err(|e| write_error(path, e))
    }
}
