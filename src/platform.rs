//! Host-platform shell selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// POSIX shell used by the Unix-style entry points.
pub const POSIX_SHELL: &str = "bash";

/// Interpreter used by the Windows-style entry points.
pub const WINDOWS_SHELL: &str = "powershell.exe";

/// How command text is handed to the shell executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationStyle {
    /// `<shell> -c <command>`
    DashC,
    /// `<shell> <command>`
    SingleArgument,
}

impl InvocationStyle {
    /// Builds the argument list passed after the shell executable.
    #[must_use]
    pub fn args<'a>(self, command: &'a str) -> Vec<&'a str> {
        match self {
            Self::DashC => vec!["-c", command],
            Self::SingleArgument => vec![command],
        }
    }
}

/// A shell executable paired with its invocation convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSpec {
    /// Executable name, resolved through `PATH`.
    pub program: String,
    /// Argument convention for the command text.
    pub style: InvocationStyle,
}

impl ShellSpec {
    /// Any executable that accepts `-c <command>`.
    pub fn dash_c(program: impl Into<String>) -> Self {
        Self { program: program.into(), style: InvocationStyle::DashC }
    }

    /// The POSIX shell convention.
    #[must_use]
    pub fn posix() -> Self {
        Self::dash_c(POSIX_SHELL)
    }

    /// The Windows interpreter convention.
    #[must_use]
    pub fn windows() -> Self {
        Self { program: WINDOWS_SHELL.to_string(), style: InvocationStyle::SingleArgument }
    }
}

impl fmt::Display for ShellSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            InvocationStyle::DashC => write!(f, "{} -c", self.program),
            InvocationStyle::SingleArgument => f.write_str(&self.program),
        }
    }
}

/// Chooses the shell for the running host. The OS is read on every call.
#[must_use]
pub fn select_shell() -> ShellSpec {
    select_shell_for(std::env::consts::OS)
}

/// Chooses the shell for the given OS identifier (as in `std::env::consts::OS`).
#[must_use]
pub fn select_shell_for(os: &str) -> ShellSpec {
    if os == "windows" {
        ShellSpec::windows()
    } else {
        ShellSpec::posix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_uses_single_argument() {
        let spec = select_shell_for("windows");
        assert_eq!(spec.program, WINDOWS_SHELL);
        assert_eq!(spec.style, InvocationStyle::SingleArgument);
    }

    #[test]
    fn everything_else_uses_posix() {
        for os in ["linux", "macos", "freebsd", ""] {
            assert_eq!(select_shell_for(os), ShellSpec::posix(), "os={os:?}");
        }
    }

    #[test]
    fn host_selection_matches_consts() {
        assert_eq!(select_shell(), select_shell_for(std::env::consts::OS));
    }

    #[test]
    fn args_follow_style() {
        assert_eq!(InvocationStyle::DashC.args("echo x"), vec!["-c", "echo x"]);
        assert_eq!(InvocationStyle::SingleArgument.args("echo x"), vec!["echo x"]);
    }

    #[test]
    fn display_shows_convention() {
        assert_eq!(ShellSpec::posix().to_string(), "bash -c");
        assert_eq!(ShellSpec::windows().to_string(), "powershell.exe");
    }
}
