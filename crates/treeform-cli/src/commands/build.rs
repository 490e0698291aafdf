//! Implementation of the `treeform build` command.
//!
//! Responsibility: resolve the template path, drive the core tree builder
//! against the right filesystem adapter, and display results. No business
//! logic lives here.

use std::path::PathBuf;

use tracing::{info, instrument};

use treeform_adapters::{CsvTemplateLoader, LocalFilesystem, MemoryFilesystem};
use treeform_core::application::{Filesystem, TreeBuilder};

use crate::{
    cli::{BuildArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `treeform build` command.
///
/// Dispatch sequence:
/// 1. Resolve the template path (CLI argument, then config default)
/// 2. Load records through the CSV adapter
/// 3. Build the tree: in memory for `--dry-run`, on disk otherwise
/// 4. Report the outcome
#[instrument(skip_all)]
pub fn execute(
    args: BuildArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let template = resolve_template_path(args.template, &config)?;
    let minimal = args.minimal || config.defaults.minimal;

    info!(
        template = %template.display(),
        minimal,
        dry_run = args.dry_run,
        "build started"
    );

    let loader = CsvTemplateLoader::new(&template);

    if args.dry_run {
        let fs = MemoryFilesystem::new();
        let builder = run_build(&loader, Box::new(fs.clone()), minimal, &output)?;

        output.info(&format!(
            "Dry run: template '{}' resolves to {} folders",
            template.display(),
            builder.count(),
        ))?;
        for dir in fs.list_directories() {
            if dir != PathBuf::from(".") {
                output.print(&format!("  {}", dir.display()))?;
            }
        }
        return Ok(());
    }

    output.header(&format!("Building tree from '{}'...", template.display()))?;

    let builder = run_build(&loader, Box::new(LocalFilesystem::new()), minimal, &output)?;

    info!(folders = builder.count(), "build completed");
    // Reported count is the registry size, root included.
    output.success(&format!("Folder tree built ({} folders)", builder.count()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Run with --dry-run next time to preview changes first.")?;
    }

    Ok(())
}

/// Load the template and run the build, reporting a failure banner before
/// the detailed error goes out through the error path. The on-disk tree may
/// be partially built when this fails.
fn run_build(
    loader: &CsvTemplateLoader,
    filesystem: Box<dyn Filesystem>,
    minimal: bool,
    output: &OutputManager,
) -> CliResult<TreeBuilder> {
    let mut builder = TreeBuilder::from_source(loader, filesystem).map_err(CliError::Core)?;
    if let Err(e) = builder.build_tree(minimal) {
        let _ = output.error("Folder tree was not (fully) created");
        return Err(CliError::Core(e));
    }
    Ok(builder)
}

/// Pick the template file: explicit argument first, then the config default.
fn resolve_template_path(arg: Option<PathBuf>, config: &AppConfig) -> CliResult<PathBuf> {
    arg.or_else(|| config.defaults.template.clone())
        .ok_or_else(|| CliError::InvalidInput {
            message: "no template file given; pass one or set defaults.template in the config"
                .into(),
            source: None,
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
