//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "treeform",
    bin_name = "treeform",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f333} Folder trees from tabular templates",
    long_about = "Treeform materializes a directory hierarchy, with optional \
                  per-folder README files, from a CSV template table.",
    after_help = "EXAMPLES:\n\
        \x20 treeform build template.csv\n\
        \x20 treeform build template.csv --minimal\n\
        \x20 treeform check template.csv --output-format json\n\
        \x20 treeform completions bash > /usr/share/bash-completion/completions/treeform",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the folder tree a template describes.
    #[command(
        visible_alias = "b",
        about = "Build the folder tree from a template",
        after_help = "EXAMPLES:\n\
            \x20 treeform build template.csv\n\
            \x20 treeform build template.csv --minimal\n\
            \x20 treeform build template.csv --dry-run"
    )]
    Build(BuildArgs),

    /// Validate a template without creating anything.
    #[command(
        about = "Validate a template without touching the filesystem",
        after_help = "EXAMPLES:\n\
            \x20 treeform check template.csv\n\
            \x20 treeform check template.csv --minimal\n\
            \x20 treeform check template.csv --output-format json"
    )]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 treeform completions bash > ~/.local/share/bash-completion/completions/treeform\n\
            \x20 treeform completions zsh  > ~/.zfunc/_treeform\n\
            \x20 treeform completions fish > ~/.config/fish/completions/treeform.fish"
    )]
    Completions(CompletionsArgs),
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `treeform build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Path to the CSV template table. Falls back to the configured default.
    #[arg(value_name = "TEMPLATE", help = "Template file path")]
    pub template: Option<PathBuf>,

    /// Build only folders flagged as part of the minimal layout.
    #[arg(
        short = 'm',
        long = "minimal",
        help = "Create only the minimal folder set"
    )]
    pub minimal: bool,

    /// Resolve and report without writing anything to disk.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `treeform check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the CSV template table. Falls back to the configured default.
    #[arg(value_name = "TEMPLATE", help = "Template file path")]
    pub template: Option<PathBuf>,

    /// Validate the minimal subset instead of the full tree.
    #[arg(short = 'm', long = "minimal", help = "Validate the minimal folder set")]
    pub minimal: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `treeform completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
