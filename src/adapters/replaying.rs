//! Replaying adapter for the `ShellExecutor` port.

use std::io;
use std::sync::{Mutex, PoisonError};

use super::recording::{RUN_METHOD, SHELL_PORT};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::ShellError;
use crate::ports::shell::{Invocation, ShellExecutor, ShellOutput};

/// Replays recorded shell command results from a cassette.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(&self, invocation: &Invocation) -> Result<ShellOutput, ShellError> {
        let interaction = {
            let mut replayer = self.replayer.lock().unwrap_or_else(PoisonError::into_inner);
            replayer.next_interaction(SHELL_PORT, RUN_METHOD).map_err(ShellError::Replay)?
        };

        let recorded = interaction.input.get("command").and_then(serde_json::Value::as_str);
        if recorded != Some(invocation.command.as_str()) {
            return Err(ShellError::Replay(format!(
                "interaction seq={} was recorded for {:?}, not {:?}",
                interaction.seq,
                recorded.unwrap_or("<missing>"),
                invocation.command
            )));
        }

        let spawn_error = |source: io::Error| ShellError::Spawn {
            program: invocation.shell.program.clone(),
            source,
        };

        if let Some(err) = interaction.output.get("Err") {
            let msg = err.as_str().unwrap_or("unknown error").to_string();
            return Err(spawn_error(io::Error::other(msg)));
        }
        let value = interaction.output.get("Ok").cloned().unwrap_or(interaction.output);
        serde_json::from_value(value).map_err(|e| {
            ShellError::Replay(format!("malformed shell interaction seq={}: {e}", interaction.seq))
        })
    }
}
