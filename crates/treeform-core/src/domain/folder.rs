//! The folder entity: one directory in the materialized hierarchy.

use std::rc::Rc;

use crate::domain::error::DomainError;

/// Registry key under which the root node is always present.
pub const ROOT_KEY: &str = "root";

/// On-disk name of the root node: the current working directory.
pub const ROOT_DIR_NAME: &str = ".";

/// Characters that may not appear anywhere in a folder name.
pub const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Device names that may not appear anywhere in a folder name.
///
/// Substring match, not exact match: `CONfig` is rejected because it
/// contains `CON`.
pub const RESERVED_NAMES: [&str; 21] = [
    "CON", "PRN", "AUX", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
    "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// One directory in the hierarchy.
///
/// Nodes are immutable after construction: the parent link never changes, so
/// [`folder_path`](Self::folder_path) is stable for the node's lifetime.
/// Parents are shared ownership handles (`Rc`) because every child holds a
/// reference to its ancestor chain while the registry holds one too.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderNode {
    folder_name: String,
    parent: Option<Rc<FolderNode>>,
    readme_text: Option<String>,
}

impl FolderNode {
    /// Validate `name` and construct a node.
    ///
    /// A `parent` of `None` designates the root: the caller-supplied name is
    /// ignored and forced to [`ROOT_DIR_NAME`], guaranteeing a single,
    /// predictable root regardless of template content.
    ///
    /// # Errors
    ///
    /// [`DomainError::ReservedCharacter`] or [`DomainError::ReservedName`]
    /// when the name violates the naming rules. No node exists on the error
    /// path, so no filesystem state can be produced for it.
    pub fn new(
        name: impl Into<String>,
        parent: Option<Rc<FolderNode>>,
        readme_text: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();

        if let Some(character) = name.chars().find(|c| RESERVED_CHARS.contains(c)) {
            return Err(DomainError::ReservedCharacter { name, character });
        }
        if let Some(device) = RESERVED_NAMES.iter().find(|device| name.contains(**device)) {
            return Err(DomainError::ReservedName { name, device });
        }

        let folder_name = if parent.is_none() {
            ROOT_DIR_NAME.to_string()
        } else {
            name
        };

        Ok(Self {
            folder_name,
            parent,
            readme_text,
        })
    }

    /// The root node seeded into every registry.
    pub fn root() -> Self {
        Self {
            folder_name: ROOT_DIR_NAME.to_string(),
            parent: None,
            readme_text: None,
        }
    }

    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    pub fn parent(&self) -> Option<&Rc<FolderNode>> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn readme_text(&self) -> Option<&str> {
        self.readme_text.as_deref()
    }

    /// Full path of this folder relative to the project root: the `/`-joined
    /// sequence of folder names from root to this node, root included.
    pub fn folder_path(&self) -> String {
        let mut names = vec![self.folder_name.as_str()];
        let mut ancestor = self.parent.as_deref();
        while let Some(node) = ancestor {
            names.push(node.folder_name.as_str());
            ancestor = node.parent.as_deref();
        }
        names.reverse();
        names.join("/")
    }

    /// File name of the README generated for this folder, when readme text
    /// is present. Pattern: `README_<CapitalizedFolderName>.md`.
    pub fn readme_file_name(&self) -> Option<String> {
        self.readme_text
            .as_ref()
            .map(|_| format!("README_{}.md", capitalize(&self.folder_name)))
    }

    /// Rendered README body: an emphasized heading, the folder path in
    /// inline-code style, a blank line, then the raw readme text.
    pub fn readme_contents(&self) -> Option<String> {
        self.readme_text.as_ref().map(|text| {
            format!(
                "##{}\n\nFolder path: {}\n\n{}",
                wrap(&capitalize(&self.folder_name), "**"),
                wrap(&self.folder_path(), "`"),
                text
            )
        })
    }
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

/// Surround `target` with `wrapping` on both sides, e.g. `**Title**`.
fn wrap(target: &str, wrapping: &str) -> String {
    format!("{wrapping}{target}{wrapping}")
}
