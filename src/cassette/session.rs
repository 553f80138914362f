//! Recording session owning the shell cassette recorder.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;
use crate::adapters::live::LiveShellExecutor;
use crate::platform::select_shell;
use crate::ports::{Invocation, ShellExecutor};

/// File name of the shell cassette inside a session directory.
pub const SHELL_CASSETTE: &str = "shell.cassette.yaml";

/// A timestamped directory collecting the cassette of one run.
pub struct RecordingSession {
    /// Recorder for shell interactions.
    pub shell: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Creates `<base>/<timestamp>/` and a recorder writing into it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The session directory already exists
    /// - The directory cannot be created
    pub fn new(base: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let output_dir = base.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let recorder = CassetteRecorder::new(
            output_dir.join(SHELL_CASSETTE),
            format!("{timestamp}-shell"),
            commit_hash(),
        );
        Ok(Self { shell: Arc::new(Mutex::new(recorder)), output_dir })
    }

    /// Directory the cassette is written into.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes the cassette and returns the session directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a recording adapter still holds the recorder or
    /// the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.shell)
            .map_err(|_| "Recording adapter for shell still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for shell poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write shell cassette: {e}"))?;
        Ok(self.output_dir)
    }
}

/// HEAD of the enclosing git repository, or "unknown".
fn commit_hash() -> String {
    let inv = Invocation::new(select_shell(), "git rev-parse HEAD");
    match LiveShellExecutor.run(&inv) {
        Ok(out) if out.success() => out.stdout.trim().to_string(),
        Ok(out) => {
            tracing::warn!(
                stderr = %out.stderr.trim(),
                "could not read git commit, using 'unknown'"
            );
            "unknown".to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not read git commit, using 'unknown'");
            "unknown".to_string()
        }
    }
}
