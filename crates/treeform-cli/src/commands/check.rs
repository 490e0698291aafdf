//! Implementation of the `treeform check` command.
//!
//! Runs the whole build against the in-memory filesystem, so every template
//! problem a real build would hit (missing parents, cycles, reserved names,
//! minimal-set violations) is reported without touching the disk.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use treeform_adapters::{CsvTemplateLoader, MemoryFilesystem};
use treeform_core::application::TreeBuilder;

use crate::{
    cli::{CheckArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Machine-readable `check` report for `--output-format json`.
#[derive(Debug, Serialize)]
struct CheckReport {
    template: PathBuf,
    minimal: bool,
    folders: usize,
    paths: Vec<String>,
}

/// Execute the `treeform check` command.
#[instrument(skip_all)]
pub fn execute(
    args: CheckArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let template = args
        .template
        .or_else(|| config.defaults.template.clone())
        .ok_or_else(|| CliError::InvalidInput {
            message: "no template file given; pass one or set defaults.template in the config"
                .into(),
            source: None,
        })?;
    let minimal = args.minimal || config.defaults.minimal;

    info!(template = %template.display(), minimal, "check started");

    let loader = CsvTemplateLoader::new(&template);
    let mut builder = TreeBuilder::from_source(&loader, Box::new(MemoryFilesystem::new()))
        .map_err(CliError::Core)?;
    builder.build_tree(minimal).map_err(CliError::Core)?;

    let paths: Vec<String> = builder
        .folder_paths()
        .into_iter()
        .filter(|p| p != ".")
        .collect();

    if output.format() == OutputFormat::Json {
        let report = CheckReport {
            template,
            minimal,
            folders: paths.len(),
            paths,
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| CliError::InvalidInput {
            message: format!("failed to serialize report: {e}"),
            source: None,
        })?;
        output.print(&json)?;
        return Ok(());
    }

    output.success(&format!(
        "Template '{}' is valid ({} folders)",
        template.display(),
        paths.len(),
    ))?;

    if !global.quiet {
        for path in &paths {
            output.print(&format!("  {path}"))?;
        }
    }

    Ok(())
}
