//! Flags shared by every `treeform` subcommand.
//!
//! Flattened into [`super::Cli`] so `build`, `check`, and `completions` all
//! accept the same verbosity, color, and config switches.

use clap::Args;
use std::path::PathBuf;

/// Arguments accepted on any invocation, before or after the subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Logging verbosity, counted.
    ///
    /// Without the flag only warnings and errors are logged; each repetition
    /// lowers the threshold one level. Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase log detail (-v, -vv, -vvv)",
        long_help = "Control how much treeform logs while resolving and building:
    (none)  - warnings and errors only
    -v      - info (which folders get created)
    -vv     - debug (parent-chain resolution steps)
    -vvv    - trace (everything)"
    )]
    pub verbose: u8,

    /// Keep stdout clean; errors still go to stderr.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress status output"
    )]
    pub quiet: bool,

    /// Turn off ANSI colour.
    ///
    /// Also respected via the `NO_COLOR` environment variable
    /// (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Alternate config file; overrides the platform default location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Path to a treeform config file"
    )]
    pub config: Option<PathBuf>,

    /// Rendering mode for command output.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Rendering modes for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pick human or plain depending on whether stdout is a terminal.
    #[default]
    Auto,
    /// Colored, human-oriented text.
    Human,
    /// Uncolored text, stable for piping.
    Plain,
    /// Machine-readable JSON (supported by `check`).
    Json,
}
