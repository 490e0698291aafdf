//! CSV-backed template loader.
//!
//! Reads a headered CSV table into [`FolderRecord`]s. Expected columns:
//!
//! ```text
//! folder_name,parent,readme_text,minimal
//! data,root,Raw and processed datasets,true
//! raw,data,,true
//! ```
//!
//! `readme_text` and `minimal` columns may be omitted entirely; individual
//! cells may be left empty. Row order is irrelevant to the build.

use std::{fs, io, path::PathBuf};

use tracing::{debug, instrument};

use treeform_core::{
    application::{ApplicationError, TemplateSource},
    domain::FolderRecord,
    error::TreeResult,
};

/// Loads the template table from a CSV file on disk.
pub struct CsvTemplateLoader {
    path: PathBuf,
}

impl CsvTemplateLoader {
    /// Create a loader pointed at `path`.
    ///
    /// The file does not need to exist yet; [`TemplateSource::load`] reports
    /// a missing file when called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TemplateSource for CsvTemplateLoader {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> TreeResult<Vec<FolderRecord>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ApplicationError::TemplateNotFound {
                    path: self.path.clone(),
                }
            } else {
                ApplicationError::TemplateParse {
                    path: self.path.clone(),
                    reason: format!("failed to read file: {e}"),
                }
            }
        })?;

        // Spreadsheet exports often carry a UTF-8 BOM; it must not end up
        // glued to the first header name.
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

        let mut reader = ::csv::ReaderBuilder::new()
            .trim(::csv::Trim::Headers)
            .from_reader(raw.as_bytes());

        let mut records = Vec::new();
        for result in reader.deserialize::<FolderRecord>() {
            let record = result.map_err(|e| ApplicationError::TemplateParse {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
            records.push(record);
        }

        debug!(count = records.len(), "template records loaded");
        Ok(records)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
