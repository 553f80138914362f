//! Binary entrypoint for the `shello` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    shello::logging::init();
    // Recording and replay are handled in commands::dispatch via SHELLO_RECORD / SHELLO_REPLAY.
    match shello::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
