//! One row of the tabular template.
//!
//! Records arrive through a [`TemplateSource`](crate::application::ports::TemplateSource)
//! adapter; this module only defines the shape and the serde plumbing needed
//! to read loosely-typed tabular cells (boolean-like flags, empty text cells).

use serde::{Deserialize, Deserializer};

/// One intended folder, as described by the template table.
///
/// Order within the record sequence carries no meaning: a record may
/// reference a parent that appears later in the table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FolderRecord {
    /// Name of the folder to create.
    pub folder_name: String,

    /// Name of the parent folder. `"root"` anchors a folder at the top level.
    pub parent: String,

    /// Optional README body. An empty cell means no README is generated.
    #[serde(default, deserialize_with = "de_optional_text")]
    pub readme_text: Option<String>,

    /// Whether this folder is part of the minimal project layout.
    #[serde(default, deserialize_with = "de_boolish")]
    pub minimal: bool,
}

impl FolderRecord {
    /// Convenience constructor used mainly by tests.
    pub fn new(folder_name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            folder_name: folder_name.into(),
            parent: parent.into(),
            readme_text: None,
            minimal: false,
        }
    }

    pub fn with_readme(mut self, text: impl Into<String>) -> Self {
        self.readme_text = Some(text.into());
        self
    }

    pub fn minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }
}

/// Empty or whitespace-only cells become `None`.
fn de_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// Tabular sources store booleans as text; accept the common spellings.
///
/// Empty cells default to `false` so a template may omit the column value for
/// folders outside the minimal set.
fn de_boolish<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "n" => Ok(false),
        "1" | "true" | "yes" | "y" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean-like value (true/false, 1/0, yes/no), got '{other}'"
        ))),
    }
}
