//! Flags accepted before or after any `greeter` subcommand.
//!
//! None of these change what gets greeted. They only steer the diagnostics
//! on stderr and how status and error output are rendered.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Show more diagnostics on stderr; repeat for more detail.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Show more diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "Show more diagnostics on stderr. stdout only ever carries the greeting.
    -v    which name was accepted and whether the write succeeded
    -vv   validation and adapter details, caught panic reports
    -vvv  everything, including span enter/exit"
    )]
    pub verbose: u8,

    /// Only errors reach stderr. The greeting itself is still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Show only errors on stderr"
    )]
    pub quiet: bool,

    /// Plain text on stderr; also set by a non-empty `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Render errors and logs without colour"
    )]
    pub no_color: bool,

    /// TOML file replacing the per-user `config.toml`; must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How errors and config listings are rendered"
    )]
    pub output_format: OutputFormat,
}

/// Rendering for status and error output.
///
/// `Auto` picks `Human` on a terminal and `Plain` when piped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Coloured report with suggestions.
    Human,
    /// Same report, no ANSI escapes.
    Plain,
    /// One JSON object per error: `{"kind","message","exit_code"}`.
    Json,
}

impl OutputFormat {
    /// Map an `output.format` config value; unknown names yield `None`.
    pub fn from_config(value: &str) -> Option<Self> {
        Self::from_str(value, true).ok()
    }
}
