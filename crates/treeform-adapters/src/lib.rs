//! Infrastructure adapters for Treeform.
//!
//! This crate implements the ports defined in `treeform-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod template;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template::CsvTemplateLoader;
