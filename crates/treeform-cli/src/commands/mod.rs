//! Command handlers, one module per subcommand.

pub mod build;
pub mod check;
pub mod completions;
