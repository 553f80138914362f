//! Recording adapter for the `ShellExecutor` port.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;
use crate::error::ShellError;
use crate::ports::{Invocation, ShellExecutor, ShellOutput};

/// Port name under which shell interactions are recorded.
pub const SHELL_PORT: &str = "shell";

/// Method name under which shell interactions are recorded.
pub const RUN_METHOD: &str = "run";

/// Records shell interactions while delegating to an inner implementation.
pub struct RecordingShellExecutor {
    inner: Box<dyn ShellExecutor>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingShellExecutor {
    /// Creates a new recording shell executor wrapping the given implementation.
    pub fn new(inner: Box<dyn ShellExecutor>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ShellExecutor for RecordingShellExecutor {
    fn run(&self, invocation: &Invocation) -> Result<ShellOutput, ShellError> {
        let result = self.inner.run(invocation);
        record_result(&self.recorder, SHELL_PORT, RUN_METHOD, invocation, &result);
        result
    }
}

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// - `Ok(v)` is serialized as `{"Ok": v}`
/// - `Err(e)` is serialized as `{"Err": e.to_string()}`
///
/// Values that fail to serialize are skipped with a warning; recording never
/// changes the result seen by the caller.
fn record_result<T, E, I>(
    recorder: &Mutex<CassetteRecorder>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(v) => serde_json::to_value(v).map(|inner| serde_json::json!({ "Ok": inner })),
        Err(e) => Ok(serde_json::json!({ "Err": e.to_string() })),
    };
    let (input_json, output_json) = match (serde_json::to_value(input), output) {
        (Ok(i), Ok(o)) => (i, o),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(port, method, error = %e, "skipping unserializable interaction");
            return;
        }
    };

    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    guard.record(port, method, input_json, output_json);
}
