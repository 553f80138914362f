//! Command dispatch and handlers.

pub mod output;
pub mod run;

use crate::cassette::session::RecordingSession;
use crate::cli::{Command, RunArgs, Style};
use crate::config::Config;
use crate::format::TrimPolicy;
use crate::platform::{select_shell, ShellSpec};
use crate::ports::Invocation;
use crate::shell::Shell;

/// Dispatch a parsed command to its handler.
///
/// When `SHELLO_RECORD` is set to a directory path, the shell interactions are
/// recorded to a cassette in a timestamped directory beneath it. When
/// `SHELLO_REPLAY` names a cassette file, results are served from it.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = Config::from_env()?;
    dispatch_with_config(command, &config)
}

/// Dispatch a command with an already-loaded configuration.
///
/// # Errors
///
/// Returns an error string if the cassette cannot be set up or written, or
/// the handler fails.
pub fn dispatch_with_config(command: &Command, config: &Config) -> Result<(), String> {
    let (shell, session) = if let Some(dir) = &config.record_dir {
        let session = RecordingSession::new(dir)?;
        (Shell::recording(&session), Some(session))
    } else if let Some(path) = &config.replay {
        (Shell::replaying(path)?, None)
    } else {
        (Shell::live(), None)
    };

    let result = dispatch_with_shell(command, &shell, config);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop the shell first to release the recorder reference
        drop(shell);
        let output_dir = session.finish()?;
        eprintln!("Recording saved to: {}", output_dir.display());
    }

    result
}

fn dispatch_with_shell(command: &Command, shell: &Shell, config: &Config) -> Result<(), String> {
    match command {
        Command::Run(args) => run::run(shell, &invocation(args, config), trim(args, config)),
        Command::Output { args, json } => {
            output::run(shell, &invocation(args, config), trim(args, config), *json)
        }
    }
}

/// Resolves the shell: `--shell`, then an explicit `--style`, then
/// `SHELLO_SHELL`, then the host default.
fn invocation(args: &RunArgs, config: &Config) -> Invocation {
    let shell = match (&args.shell, args.style) {
        (Some(program), _) => ShellSpec::dash_c(program),
        (None, Style::Posix) => ShellSpec::posix(),
        (None, Style::Windows) => ShellSpec::windows(),
        (None, Style::Auto) => {
            config.shell.as_deref().map_or_else(select_shell, |program| ShellSpec::dash_c(program))
        }
    };
    let inv = Invocation::new(shell, args.command.as_str());
    match &args.dir {
        Some(dir) => inv.in_dir(dir),
        None => inv,
    }
}

fn trim(args: &RunArgs, config: &Config) -> TrimPolicy {
    if args.no_trim {
        TrimPolicy::Preserve
    } else {
        config.trim
    }
}
