//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur while driving the build through the ports.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The backing template file does not exist.
    #[error("template file not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// The backing template file exists but could not be parsed.
    #[error("failed to parse template '{path}': {reason}")]
    TemplateParse { path: PathBuf, reason: String },

    /// A filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path } => vec![
                format!("No template file at: {}", path.display()),
                "Check the path, or run from the directory containing it".into(),
            ],
            Self::TemplateParse { .. } => vec![
                "The template must be a headered CSV table".into(),
                "Expected columns: folder_name, parent, readme_text, minimal".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions in the current directory".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateParse { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
