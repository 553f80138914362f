//! Run command strings through the host shell and capture what they print.
//!
//! The free functions below use a live [`Shell`] with the default trim
//! policy. Build a [`Shell`] directly to change the policy, or to record and
//! replay interactions.
//!
//! ```no_run
//! let out = shello::run_shell_output("echo x")?;
//! assert_eq!(out.stdout, "x");
//! # Ok::<(), shello::ShellError>(())
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod platform;
pub mod ports;
pub mod report;
pub mod shell;

use std::path::Path;

use clap::error::ErrorKind;
use clap::Parser;

pub use error::ShellError;
pub use format::TrimPolicy;
pub use platform::{select_shell, select_shell_for, InvocationStyle, ShellSpec};
pub use ports::Invocation;
pub use shell::{Captured, Shell};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
/// Help and version requests are printed and count as success.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}

/// Runs `command` with `bash -c` in the current directory.
///
/// # Errors
///
/// See [`Shell::execute`].
pub fn run_shell_output(command: &str) -> Result<Captured, ShellError> {
    Shell::live().shell_output(command)
}

/// Runs `command` with `bash -c` in `dir`; an empty `dir` inherits the
/// current directory.
///
/// # Errors
///
/// See [`Shell::execute`].
pub fn run_shell_output_in_dir(
    command: &str,
    dir: impl AsRef<Path>,
) -> Result<Captured, ShellError> {
    Shell::live().shell_output_in_dir(command, dir)
}

/// Runs `command` with `bash -c` and prints the result; failures are logged.
pub fn run_shell_command(command: &str) {
    Shell::live().shell_command(command);
}

/// Runs `command` as the single argument of `powershell.exe`.
///
/// # Errors
///
/// See [`Shell::execute`].
pub fn run_platform_shell_output(command: &str) -> Result<Captured, ShellError> {
    Shell::live().platform_shell_output(command)
}

/// `powershell.exe` variant with a working directory override.
///
/// # Errors
///
/// See [`Shell::execute`].
pub fn run_platform_shell_output_in_dir(
    command: &str,
    dir: impl AsRef<Path>,
) -> Result<Captured, ShellError> {
    Shell::live().platform_shell_output_in_dir(command, dir)
}

/// Runs `command` with `powershell.exe` and prints the result.
pub fn run_platform_shell_command(command: &str) {
    Shell::live().platform_shell_command(command);
}

/// Runs `<shell> -c <command>` in `dir` (empty inherits the current directory).
///
/// # Errors
///
/// See [`Shell::execute`].
pub fn exec_with_shell(
    shell: &str,
    command: &str,
    dir: impl AsRef<Path>,
) -> Result<Captured, ShellError> {
    Shell::live().exec_with_shell(shell, command, dir)
}

/// Runs `command` with the host's default shell and prints the result.
pub fn run_os_default(command: &str) {
    Shell::live().os_default(command);
}

/// Host-default print variant with a working directory override.
pub fn run_os_default_in_dir(command: &str, dir: impl AsRef<Path>) {
    Shell::live().os_default_in_dir(command, dir);
}

/// Runs `command` with the host's default shell.
///
/// # Errors
///
/// See [`Shell::execute`].
pub fn run_os_default_output(command: &str) -> Result<Captured, ShellError> {
    Shell::live().os_default_output(command)
}

/// Host-default variant with a working directory override.
///
/// # Errors
///
/// See [`Shell::execute`].
pub fn run_os_default_output_in_dir(
    command: &str,
    dir: impl AsRef<Path>,
) -> Result<Captured, ShellError> {
    Shell::live().os_default_output_in_dir(command, dir)
}
