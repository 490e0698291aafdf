//! Application layer for Treeform.
//!
//! This layer contains:
//! - **TreeBuilder**: use case orchestration (template resolution, creation)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod tree_builder;

// Re-export the orchestrator
pub use tree_builder::TreeBuilder;

// Re-export port traits (for adapter implementation)
pub use ports::{CreateOutcome, Filesystem, TemplateSource};

pub use error::ApplicationError;
