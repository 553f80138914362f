//! Record-replay round trip through the `Shell` facade.
//!
//! 1. Record a session against the live shell.
//! 2. Replay the cassette with `Shell::replaying()`.
//! 3. Assert identical results, including failures, twice over.

#![cfg(unix)]

use shello::cassette::session::{RecordingSession, SHELL_CASSETTE};
use shello::{Captured, Shell, ShellError, TrimPolicy};

const COMMANDS: [&str; 3] = ["echo one; echo two >&2", "printf 'no newline'", "echo out; exit 4"];

fn exercise(shell: &Shell) -> Vec<Result<Captured, (Option<i32>, String, String)>> {
    COMMANDS
        .iter()
        .map(|command| {
            shell.shell_output(command).map_err(|e: ShellError| {
                (e.exit_code(), e.stdout().to_string(), e.stderr().to_string())
            })
        })
        .collect()
}

#[test]
fn record_then_replay_produces_identical_results() {
    let base = tempfile::tempdir().unwrap();

    // --- Phase 1: record against the real shell ---
    let session = RecordingSession::new(base.path()).unwrap();
    let recorded = {
        let shell = Shell::recording(&session);
        exercise(&shell)
    };
    let dir = session.finish().unwrap();
    let cassette = dir.join(SHELL_CASSETTE);

    assert_eq!(recorded[0], Ok(Captured { stdout: "one".into(), stderr: "two".into() }));
    assert_eq!(recorded[1].as_ref().unwrap().stdout, "no newline");
    assert_eq!(recorded[2], Err((Some(4), "out".into(), String::new())));

    // --- Phase 2: replay and compare ---
    let replayed = exercise(&Shell::replaying(&cassette).unwrap());
    assert_eq!(replayed, recorded);

    // --- Phase 3: replay again for determinism ---
    let again = exercise(&Shell::replaying(&cassette).unwrap());
    assert_eq!(again, recorded);
}

#[test]
fn replay_formats_with_the_replaying_policy() {
    let base = tempfile::tempdir().unwrap();

    let session = RecordingSession::new(base.path()).unwrap();
    {
        let shell = Shell::recording(&session);
        shell.shell_output("echo x").unwrap();
    }
    let cassette = session.finish().unwrap().join(SHELL_CASSETTE);

    // Raw output is recorded, so a different policy applies at replay time.
    let shell = Shell::replaying(&cassette).unwrap().with_trim(TrimPolicy::Preserve);
    assert_eq!(shell.shell_output("echo x").unwrap().stdout, "x\n");
}
