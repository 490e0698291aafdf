//! Core domain layer for Treeform.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns (reading the template table, touching the filesystem) are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: A [`FolderNode`] never changes after construction

pub mod error;
pub mod folder;
pub mod record;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use folder::{FolderNode, RESERVED_CHARS, RESERVED_NAMES, ROOT_DIR_NAME, ROOT_KEY};
pub use record::FolderRecord;
