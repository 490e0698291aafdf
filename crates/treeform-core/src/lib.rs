//! Treeform Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Treeform
//! folder scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          treeform-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            TreeBuilder                  │
//! │   Orchestrates template resolution      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, TemplateSource)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    treeform-adapters (Infrastructure)   │
//! │ (LocalFilesystem, CsvTemplateLoader, …) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │      (FolderRecord, FolderNode)         │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use treeform_core::application::TreeBuilder;
//!
//! // records come from a TemplateSource adapter (CSV in production);
//! // filesystem is any adapter implementing the Filesystem port.
//! let mut builder = TreeBuilder::new(records, filesystem);
//! builder.build_tree(false)?;
//! println!("{} folders", builder.count());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        TreeBuilder,
        ports::{CreateOutcome, Filesystem, TemplateSource},
    };
    pub use crate::domain::{FolderNode, FolderRecord, ROOT_DIR_NAME, ROOT_KEY};
    pub use crate::error::{TreeError, TreeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
