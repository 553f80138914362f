//! The executor facade: one execution primitive plus the named entry points.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::{LiveShellExecutor, RecordingShellExecutor, ReplayingShellExecutor};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::error::ShellError;
use crate::format::TrimPolicy;
use crate::platform::{select_shell, ShellSpec};
use crate::ports::{Invocation, ShellExecutor};
use crate::report;

/// Output of a command that exited with status zero, already formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    /// Formatted standard output.
    pub stdout: String,
    /// Formatted standard error.
    pub stderr: String,
}

impl Captured {
    /// Splits into `(stdout, stderr)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.stdout, self.stderr)
    }
}

/// Runs commands through a [`ShellExecutor`] and formats what they print.
///
/// The trim policy belongs to the instance. Changing it affects only calls
/// made afterwards; results already returned are never touched.
pub struct Shell {
    executor: Box<dyn ShellExecutor>,
    trim: TrimPolicy,
}

impl Shell {
    /// Spawns real processes, trimming output.
    #[must_use]
    pub fn live() -> Self {
        Self::with_executor(LiveShellExecutor)
    }

    /// Uses the given executor, trimming output.
    pub fn with_executor(executor: impl ShellExecutor + 'static) -> Self {
        Self { executor: Box::new(executor), trim: TrimPolicy::default() }
    }

    /// Spawns real processes and records every interaction into `session`.
    #[must_use]
    pub fn recording(session: &RecordingSession) -> Self {
        Self::with_executor(RecordingShellExecutor::new(
            Box::new(LiveShellExecutor),
            Arc::clone(&session.shell),
        ))
    }

    /// Serves results from a cassette file instead of spawning processes.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::from_path(path)?;
        Ok(Self::with_executor(ReplayingShellExecutor::new(replayer)))
    }

    /// Replaces the trim policy.
    #[must_use]
    pub fn with_trim(mut self, trim: TrimPolicy) -> Self {
        self.trim = trim;
        self
    }

    /// Changes the trim policy for subsequent calls.
    pub fn set_trim(&mut self, trim: TrimPolicy) {
        self.trim = trim;
    }

    /// The current trim policy.
    #[must_use]
    pub fn trim(&self) -> TrimPolicy {
        self.trim
    }

    /// Runs one invocation to completion using the instance's trim policy.
    ///
    /// # Errors
    ///
    /// Returns a spawn-class error if the process cannot start, or
    /// [`ShellError::ExitStatus`] (carrying the formatted output) if it exits
    /// non-zero.
    pub fn execute(&self, invocation: &Invocation) -> Result<Captured, ShellError> {
        self.execute_with(invocation, self.trim)
    }

    /// Runs one invocation with an explicit trim policy for this call only.
    ///
    /// # Errors
    ///
    /// Same as [`Shell::execute`].
    pub fn execute_with(
        &self,
        invocation: &Invocation,
        trim: TrimPolicy,
    ) -> Result<Captured, ShellError> {
        let raw = self.executor.run(invocation)?;
        let stdout = trim.apply(&raw.stdout);
        let stderr = trim.apply(&raw.stderr);
        if raw.success() {
            Ok(Captured { stdout, stderr })
        } else {
            Err(ShellError::ExitStatus {
                program: invocation.shell.program.clone(),
                code: raw.exit_code,
                stdout,
                stderr,
            })
        }
    }

    fn run_in(
        &self,
        shell: ShellSpec,
        command: &str,
        dir: impl AsRef<Path>,
    ) -> Result<Captured, ShellError> {
        self.execute(&Invocation::new(shell, command).in_dir(dir))
    }

    /// Runs `command` with `bash -c` in the current directory.
    ///
    /// # Errors
    ///
    /// See [`Shell::execute`].
    pub fn shell_output(&self, command: &str) -> Result<Captured, ShellError> {
        self.shell_output_in_dir(command, "")
    }

    /// Runs `command` with `bash -c` in `dir` (empty inherits the current one).
    ///
    /// # Errors
    ///
    /// See [`Shell::execute`].
    pub fn shell_output_in_dir(
        &self,
        command: &str,
        dir: impl AsRef<Path>,
    ) -> Result<Captured, ShellError> {
        self.run_in(ShellSpec::posix(), command, dir)
    }

    /// Runs `command` as the single argument of the Windows interpreter.
    ///
    /// # Errors
    ///
    /// See [`Shell::execute`].
    pub fn platform_shell_output(&self, command: &str) -> Result<Captured, ShellError> {
        self.platform_shell_output_in_dir(command, "")
    }

    /// Windows-interpreter variant with a working directory override.
    ///
    /// # Errors
    ///
    /// See [`Shell::execute`].
    pub fn platform_shell_output_in_dir(
        &self,
        command: &str,
        dir: impl AsRef<Path>,
    ) -> Result<Captured, ShellError> {
        self.run_in(ShellSpec::windows(), command, dir)
    }

    /// Runs `<shell> -c <command>` for an arbitrary shell executable.
    ///
    /// # Errors
    ///
    /// See [`Shell::execute`].
    pub fn exec_with_shell(
        &self,
        shell: &str,
        command: &str,
        dir: impl AsRef<Path>,
    ) -> Result<Captured, ShellError> {
        self.run_in(ShellSpec::dash_c(shell), command, dir)
    }

    /// Runs `command` with the host's default shell.
    ///
    /// # Errors
    ///
    /// See [`Shell::execute`].
    pub fn os_default_output(&self, command: &str) -> Result<Captured, ShellError> {
        self.os_default_output_in_dir(command, "")
    }

    /// Host-default variant with a working directory override.
    ///
    /// # Errors
    ///
    /// See [`Shell::execute`].
    pub fn os_default_output_in_dir(
        &self,
        command: &str,
        dir: impl AsRef<Path>,
    ) -> Result<Captured, ShellError> {
        self.run_in(select_shell(), command, dir)
    }

    /// Runs with `bash -c` and prints the result.
    pub fn shell_command(&self, command: &str) {
        report::print_result(&self.shell_output(command));
    }

    /// Runs with the Windows interpreter and prints the result.
    pub fn platform_shell_command(&self, command: &str) {
        report::print_result(&self.platform_shell_output(command));
    }

    /// Runs with the host's default shell and prints the result.
    pub fn os_default(&self, command: &str) {
        self.os_default_in_dir(command, "");
    }

    /// Host-default print variant with a working directory override.
    pub fn os_default_in_dir(&self, command: &str, dir: impl AsRef<Path>) {
        report::print_result(&self.os_default_output_in_dir(command, dir));
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::live()
    }
}
