//! Live shell executor using `std::process::Command`.

use std::io;
use std::process::Command;

use crate::error::ShellError;
use crate::ports::shell::{Invocation, ShellExecutor, ShellOutput};

/// Live shell executor that spawns a real child process per invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, invocation: &Invocation) -> Result<ShellOutput, ShellError> {
        let shell = &invocation.shell;
        let mut cmd = Command::new(&shell.program);
        cmd.args(shell.style.args(&invocation.command));
        if let Some(dir) = &invocation.dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(shell = %shell, dir = ?invocation.dir, "spawning command");
        let output = cmd.output().map_err(|source| spawn_error(invocation, source))?;
        let exit_code = output.status.code();
        tracing::debug!(shell = %shell, ?exit_code, "command finished");

        Ok(ShellOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Process creation reports a bad cwd the same way as a bad executable, so
/// the directory is checked after the fact. An existing directory that
/// refuses entry surfaces as `PermissionDenied`.
fn spawn_error(invocation: &Invocation, source: io::Error) -> ShellError {
    match &invocation.dir {
        Some(dir) if !dir.is_dir() || source.kind() == io::ErrorKind::PermissionDenied => {
            ShellError::WorkingDirectory { dir: dir.clone(), source }
        }
        _ => ShellError::Spawn { program: invocation.shell.program.clone(), source },
    }
}
