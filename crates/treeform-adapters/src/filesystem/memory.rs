//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use treeform_core::{
    application::ports::{CreateOutcome, Filesystem},
    error::TreeResult,
};

/// In-memory filesystem for testing and `--dry-run`.
///
/// Starts with the working directory (`.`) present, mirroring the real
/// filesystem a build runs in. Unlike `std::fs`, directory creation here
/// enforces that the parent exists, so tests catch any ordering bug where a
/// child would be created before its ancestors.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl Default for MemoryFilesystemInner {
    fn default() -> Self {
        let mut directories = HashSet::new();
        directories.insert(PathBuf::from("."));
        Self {
            files: HashMap::new(),
            directories,
        }
    }
}

impl MemoryFilesystem {
    /// Create a new memory filesystem containing only the working directory.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// List all directories, sorted. Includes the seeded `.`.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut dirs: Vec<_> = inner.directories.iter().cloned().collect();
        dirs.sort();
        dirs
    }

    /// Reset to the initial state.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        *inner = MemoryFilesystemInner::default();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> TreeResult<CreateOutcome> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if inner.directories.contains(path) {
            return Ok(CreateOutcome::AlreadyExists);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(treeform_core::application::ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.directories.insert(path.to_path_buf());
        Ok(CreateOutcome::Created)
    }

    fn write_file(&self, path: &Path, contents: &str) -> TreeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(treeform_core::application::ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

fn lock_error(path: &Path) -> treeform_core::error::TreeError {
    treeform_core::application::ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}
