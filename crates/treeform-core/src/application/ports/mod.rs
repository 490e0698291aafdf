//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `treeform-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::FolderRecord;
use crate::error::TreeResult;

/// Result of asking the filesystem for a new directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The directory was created.
    Created,
    /// The directory already existed. Non-fatal: re-running a build against
    /// a partially built tree is supported.
    AlreadyExists,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `treeform_adapters::filesystem::LocalFilesystem` (production)
/// - `treeform_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
///
/// ## Design Notes
///
/// - Paths are relative to the process working directory; the root folder
///   is `.`
/// - `create_dir` is deliberately non-recursive: the tree builder resolves
///   ancestors first, so a missing parent at this level is a bug, not a
///   condition to paper over
pub trait Filesystem: Send + Sync {
    /// Create a single directory whose parent already exists.
    fn create_dir(&self, path: &Path) -> TreeResult<CreateOutcome>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, contents: &str) -> TreeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for reading the template table.
///
/// Implemented by:
/// - `treeform_adapters::template::CsvTemplateLoader` (production)
pub trait TemplateSource {
    /// Produce the ordered record sequence the template describes.
    fn load(&self) -> TreeResult<Vec<FolderRecord>>;
}
