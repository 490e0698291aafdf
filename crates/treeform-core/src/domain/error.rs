//! Domain errors: violations of the tree-resolution business rules.

use thiserror::Error;

use crate::domain::folder::{RESERVED_CHARS, RESERVED_NAMES};

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may retain them after the build aborts)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Folder-name validation
    // ========================================================================
    #[error("folder name '{name}' contains the reserved character '{character}'")]
    ReservedCharacter { name: String, character: char },

    #[error("folder name '{name}' contains the reserved device name '{device}'")]
    ReservedName {
        name: String,
        device: &'static str,
    },

    // ========================================================================
    // Parent-chain resolution
    // ========================================================================
    #[error("parent folder '{parent}' is not defined in the template")]
    MissingParent { parent: String },

    #[error("the parent chain of '{folder}' refers back to a folder already explored")]
    CircularReference { folder: String },

    #[error("minimal tree requires parent '{parent}', which is excluded from the minimal set")]
    MinimalExclusion { parent: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ReservedCharacter { name, .. } => vec![
                format!("Rename '{}' in the template", name),
                format!(
                    "Reserved characters: {}",
                    RESERVED_CHARS
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                ),
            ],
            Self::ReservedName { name, .. } => vec![
                format!("Rename '{}' in the template", name),
                format!("Reserved device names: {}", RESERVED_NAMES.join(", ")),
                "The check is a substring match, so 'CONfig' is also rejected".into(),
            ],
            Self::MissingParent { parent } => vec![
                format!("Add a row defining '{}' to the template", parent),
                "Or point the child at an existing parent (e.g. 'root')".into(),
            ],
            Self::CircularReference { folder } => vec![
                format!("Folder '{}' appears in its own ancestor chain", folder),
                "Break the cycle by reparenting one of the folders involved".into(),
            ],
            Self::MinimalExclusion { parent } => vec![
                format!("Mark '{}' as minimal in the template", parent),
                "Or exclude its children from the minimal set as well".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ReservedCharacter { .. } | Self::ReservedName { .. } => {
                ErrorCategory::Validation
            }
            Self::MissingParent { .. } => ErrorCategory::NotFound,
            Self::CircularReference { .. } | Self::MinimalExclusion { .. } => {
                ErrorCategory::Consistency
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Consistency,
    NotFound,
    Internal,
}
