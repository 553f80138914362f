//! Error taxonomy for shell execution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while running a command through a shell.
///
/// Non-zero exits keep whatever the command wrote before failing, so callers
/// can always recover the `(stdout, stderr, error)` triple.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The shell executable could not be started.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        /// Shell executable that was requested.
        program: String,
        /// Underlying process-creation error.
        #[source]
        source: io::Error,
    },

    /// The requested working directory is missing or inaccessible.
    #[error("cannot run in working directory {}: {source}", .dir.display())]
    WorkingDirectory {
        /// Directory override that was requested.
        dir: PathBuf,
        /// Underlying process-creation error.
        #[source]
        source: io::Error,
    },

    /// The command ran but reported failure.
    #[error("`{program}` {}", describe_exit(.code))]
    ExitStatus {
        /// Shell executable that ran the command.
        program: String,
        /// Exit code, or `None` if the child was terminated by a signal.
        code: Option<i32>,
        /// Standard output captured before the failure.
        stdout: String,
        /// Standard error captured before the failure.
        stderr: String,
    },

    /// A recorded result could not be served for the invocation.
    #[error("replay failed: {0}")]
    Replay(String),
}

impl ShellError {
    /// Standard output captured before the failure (empty if nothing ran).
    #[must_use]
    pub fn stdout(&self) -> &str {
        match self {
            Self::ExitStatus { stdout, .. } => stdout,
            Self::Spawn { .. } | Self::WorkingDirectory { .. } | Self::Replay(_) => "",
        }
    }

    /// Standard error captured before the failure (empty if nothing ran).
    #[must_use]
    pub fn stderr(&self) -> &str {
        match self {
            Self::ExitStatus { stderr, .. } => stderr,
            Self::Spawn { .. } | Self::WorkingDirectory { .. } | Self::Replay(_) => "",
        }
    }

    /// Exit code of the child, when it ran and exited normally.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ExitStatus { code, .. } => *code,
            Self::Spawn { .. } | Self::WorkingDirectory { .. } | Self::Replay(_) => None,
        }
    }

    /// Splits into the `(stdout, stderr, error)` triple. The output is empty
    /// when nothing ran.
    #[must_use]
    pub fn into_parts(self) -> (String, String, Self) {
        (self.stdout().to_owned(), self.stderr().to_owned(), self)
    }

    /// Whether the process never started.
    #[must_use]
    pub fn is_spawn_failure(&self) -> bool {
        matches!(self, Self::Spawn { .. } | Self::WorkingDirectory { .. })
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}
