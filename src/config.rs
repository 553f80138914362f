//! Environment-driven configuration.

use std::path::PathBuf;

use crate::format::TrimPolicy;

/// Disables trimming when set to a false value (`0`, `false`, `no`, `off`).
pub const TRIM_VAR: &str = "SHELLO_TRIM";
/// Shell executable to use with the `-c` convention instead of the host default.
pub const SHELL_VAR: &str = "SHELLO_SHELL";
/// Directory under which a cassette session is recorded.
pub const RECORD_VAR: &str = "SHELLO_RECORD";
/// Cassette file to replay instead of spawning processes.
pub const REPLAY_VAR: &str = "SHELLO_REPLAY";

/// Settings read from the environment (and an optional `.env` file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Default trim policy.
    pub trim: TrimPolicy,
    /// Explicit shell executable, if any.
    pub shell: Option<String>,
    /// Record interactions into a session under this directory.
    pub record_dir: Option<PathBuf>,
    /// Replay interactions from this cassette file.
    pub replay: Option<PathBuf>,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error string when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Empty values count
    /// as unset.
    ///
    /// # Errors
    ///
    /// Returns an error string when a variable holds an invalid value or
    /// recording and replay are both requested.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let trim = match get(TRIM_VAR) {
            Some(value) => TrimPolicy::from_flag(parse_flag(TRIM_VAR, &value)?),
            None => TrimPolicy::default(),
        };
        let config = Self {
            trim,
            shell: get(SHELL_VAR),
            record_dir: get(RECORD_VAR).map(PathBuf::from),
            replay: get(REPLAY_VAR).map(PathBuf::from),
        };

        if config.record_dir.is_some() && config.replay.is_some() {
            return Err(format!("{RECORD_VAR} and {REPLAY_VAR} cannot be set together"));
        }
        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("{key}: expected a boolean, got {other:?}")),
    }
}
