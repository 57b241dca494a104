//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "greeter",
    bin_name = "greeter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Greet someone, with every failure reported as a value",
    long_about = "Greeter validates a name, renders a greeting, and writes it \
                  to standard output. Invalid names and output failures are \
                  reported with distinct exit codes.",
    after_help = "EXAMPLES:\n\
        \x20 greeter greet Alice\n\
        \x20 greeter --output-format json greet \"\"\n\
        \x20 greeter completions bash > /usr/share/bash-completion/completions/greeter",
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
    /// Greet a person by name.
    #[command(
        visible_alias = "g",
        about = "Greet a person",
        after_help = "EXAMPLES:\n\
            \x20 greeter greet Alice\n\
            \x20 greeter greet \"世界\""
    )]
    Greet(GreetArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 greeter completions bash > ~/.local/share/bash-completion/completions/greeter\n\
            \x20 greeter completions zsh  > ~/.zfunc/_greeter\n\
            \x20 greeter completions fish > ~/.config/fish/completions/greeter.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Greeter configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 greeter config get output.format\n\
            \x20 greeter config list\n\
            \x20 greeter config path"
    )]
    Config(ConfigCommands),
}

// ── greet ─────────────────────────────────────────────────────────────────────

/// Arguments for `greeter greet`.
#[derive(Debug, Args)]
pub struct GreetArgs {
    /// Name of the person to greet.  Omitting it greets the empty name,
    /// which is rejected by validation.
    #[arg(value_name = "NAME", default_value = "", hide_default_value = true)]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `greeter completions`.
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
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `greeter config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}
