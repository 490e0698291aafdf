//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use treeform_core::{
    application::ports::{CreateOutcome, Filesystem},
    error::TreeResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> TreeResult<CreateOutcome> {
        match std::fs::create_dir(path) {
            Ok(()) => Ok(CreateOutcome::Created),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(CreateOutcome::AlreadyExists),
            Err(e) => Err(map_io_error(path, e, "create directory")),
        }
    }

    fn write_file(&self, path: &Path, contents: &str) -> TreeResult<()> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> treeform_core::error::TreeError {
    use treeform_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
