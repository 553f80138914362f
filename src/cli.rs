//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `shello`.
#[derive(Debug, Parser)]
#[command(name = "shello", version, about = "Run commands through the host shell")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a command and print what it wrote.
    Run(RunArgs),
    /// Run a command and print a report of its result.
    Output {
        /// Options shared with `run`.
        #[command(flatten)]
        args: RunArgs,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Options common to every subcommand.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Command text passed verbatim to the shell.
    pub command: String,
    /// Working directory for the command.
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Shell executable, invoked as `<SHELL> -c <COMMAND>`.
    #[arg(long, conflicts_with = "style")]
    pub shell: Option<String>,
    /// Invocation convention.
    #[arg(long, value_enum, default_value_t = Style::Auto)]
    pub style: Style,
    /// Keep surrounding whitespace in the output.
    #[arg(long)]
    pub no_trim: bool,
}

/// Which shell convention to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// Pick by host platform.
    Auto,
    /// `bash -c <COMMAND>`.
    Posix,
    /// `powershell.exe <COMMAND>`.
    Windows,
}
