//! `shello output` command.

use std::fmt::Write as _;

use crate::format::TrimPolicy;
use crate::ports::Invocation;
use crate::report::Report;
use crate::shell::Shell;

/// Execute the `output` command.
///
/// Prints a report whether or not the command succeeded; the report itself
/// carries the failure.
///
/// # Errors
///
/// Returns an error string if the JSON report cannot be encoded.
pub fn run(
    shell: &Shell,
    invocation: &Invocation,
    trim: TrimPolicy,
    json: bool,
) -> Result<(), String> {
    let report = Report::from_result(&shell.execute_with(invocation, trim));
    if json {
        let encoded = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to encode report: {e}"))?;
        println!("{encoded}");
    } else {
        print!("{}", render(&report));
    }
    Ok(())
}

/// Plain-text rendering of a report.
#[must_use]
pub fn render(report: &Report) -> String {
    let mut text = String::new();
    match report.exit_code {
        Some(code) => {
            let _ = writeln!(text, "exit code: {code}");
        }
        None => text.push_str("exit code: none\n"),
    }
    if let Some(error) = &report.error {
        let _ = writeln!(text, "error: {error}");
    }
    for (label, body) in [("stdout", &report.stdout), ("stderr", &report.stderr)] {
        let _ = writeln!(text, "--- {label} ---");
        text.push_str(body);
        if !body.is_empty() && !body.ends_with('\n') {
            text.push('\n');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_success() {
        let report = Report {
            stdout: "x".into(),
            stderr: String::new(),
            exit_code: Some(0),
            error: None,
        };
        assert_eq!(render(&report), "exit code: 0\n--- stdout ---\nx\n--- stderr ---\n");
    }

    #[test]
    fn renders_spawn_failure() {
        let report = Report {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
            error: Some("failed to start `nope`: not found".into()),
        };
        let text = render(&report);
        assert!(text.starts_with("exit code: none\nerror: failed to start `nope`"));
    }
}
