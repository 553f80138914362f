//! Printing of execution results.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::ShellError;
use crate::shell::Captured;

/// Logs a failure, then prints captured stderr and stdout to stdout.
///
/// Best effort: write errors are logged and otherwise ignored.
pub fn print_result(result: &Result<Captured, ShellError>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
    }
    if let Err(e) = write_result(result, &mut io::stdout().lock()) {
        tracing::warn!(error = %e, "failed to print command output");
    }
}

/// Writes the captured text to `out` exactly as formatted. On failure the
/// captured stderr comes first, then stdout.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_result(result: &Result<Captured, ShellError>, out: &mut impl Write) -> io::Result<()> {
    match result {
        Ok(captured) => out.write_all(captured.stdout.as_bytes())?,
        Err(e) => {
            out.write_all(e.stderr().as_bytes())?;
            out.write_all(e.stdout().as_bytes())?;
        }
    }
    out.flush()
}

/// Serializable summary of one execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Formatted standard output.
    pub stdout: String,
    /// Formatted standard error.
    pub stderr: String,
    /// Exit code; `None` if the process never started or was signalled.
    pub exit_code: Option<i32>,
    /// Error message, if the command did not succeed.
    pub error: Option<String>,
}

impl Report {
    /// Summarizes a result without consuming it.
    #[must_use]
    pub fn from_result(result: &Result<Captured, ShellError>) -> Self {
        match result {
            Ok(c) => Self {
                stdout: c.stdout.clone(),
                stderr: c.stderr.clone(),
                exit_code: Some(0),
                error: None,
            },
            Err(e) => Self {
                stdout: e.stdout().to_string(),
                stderr: e.stderr().to_string(),
                exit_code: e.exit_code(),
                error: Some(e.to_string()),
            },
        }
    }

    /// Whether the command succeeded.
    #[must_use]
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed() -> Result<Captured, ShellError> {
        Err(ShellError::ExitStatus {
            program: "bash".into(),
            code: Some(127),
            stdout: "partial".into(),
            stderr: "bash: nope: command not found".into(),
        })
    }

    fn write(result: &Result<Captured, ShellError>) -> String {
        let mut out = Vec::new();
        write_result(result, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn success_prints_stdout_only() {
        let ok = Ok(Captured { stdout: "x".into(), stderr: "warn".into() });
        assert_eq!(write(&ok), "x");
    }

    #[test]
    fn text_is_written_unchanged() {
        let ok = Ok(Captured { stdout: "x\n".into(), stderr: String::new() });
        assert_eq!(write(&ok), "x\n");
    }

    #[test]
    fn empty_output_prints_nothing() {
        assert_eq!(write(&Ok(Captured::default())), "");
    }

    #[test]
    fn failure_prints_stderr_then_stdout() {
        assert_eq!(write(&failed()), "bash: nope: command not foundpartial");
    }

    #[test]
    fn report_from_failure() {
        let report = Report::from_result(&failed());
        assert!(!report.success());
        assert_eq!(report.exit_code, Some(127));
        assert_eq!(report.error.as_deref(), Some("`bash` exited with status 127"));
    }

    #[test]
    fn report_serializes_as_flat_object() {
        let captured = Captured { stdout: "x".into(), stderr: String::new() };
        let report = Report::from_result(&Ok(captured));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"stdout": "x", "stderr": "", "exit_code": 0, "error": null})
        );
    }
}
