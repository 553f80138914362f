//! `shello run` command.

use std::io;

use crate::format::TrimPolicy;
use crate::ports::Invocation;
use crate::report;
use crate::shell::Shell;

/// Execute the `run` command: print what the command wrote.
///
/// # Errors
///
/// Returns the execution error message when the command fails to start or
/// exits non-zero, after its captured output has been printed.
pub fn run(shell: &Shell, invocation: &Invocation, trim: TrimPolicy) -> Result<(), String> {
    let result = shell.execute_with(invocation, trim);
    report::write_result(&result, &mut io::stdout().lock())
        .map_err(|e| format!("Failed to print command output: {e}"))?;
    result.map(|_| ()).map_err(|e| e.to_string())
}
