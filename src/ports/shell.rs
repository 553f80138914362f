//! Shell executor port for running external commands.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ShellError;
use crate::platform::ShellSpec;

/// One command to run: which shell, what text, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Shell executable and argument convention.
    pub shell: ShellSpec,
    /// Script text passed verbatim to the shell.
    pub command: String,
    /// Working directory override; `None` inherits the caller's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Invocation {
    /// Creates an invocation that inherits the caller's working directory.
    pub fn new(shell: ShellSpec, command: impl Into<String>) -> Self {
        Self { shell, command: command.into(), dir: None }
    }

    /// Sets the working directory. An empty path means no override.
    #[must_use]
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.dir = if dir.as_os_str().is_empty() { None } else { Some(dir.to_path_buf()) };
        self
    }
}

/// Raw result of a process that started and ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// Exit code, or `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    /// The captured standard output, decoded lossily.
    pub stdout: String,
    /// The captured standard error, decoded lossily.
    pub stderr: String,
}

impl ShellOutput {
    /// Whether the child exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Executes shell invocations.
///
/// Abstracting process creation allows deterministic replay by recording
/// and replaying command outputs from a cassette.
pub trait ShellExecutor: Send + Sync {
    /// Runs the invocation to completion and returns its unformatted output.
    ///
    /// A non-zero exit is not an error at this level.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Spawn`] or [`ShellError::WorkingDirectory`] if
    /// the process cannot be started.
    fn run(&self, invocation: &Invocation) -> Result<ShellOutput, ShellError>;
}
