//! Cassettes: recorded shell interactions for deterministic replay.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;

pub use format::{Cassette, Interaction};
pub use recorder::CassetteRecorder;
pub use replayer::CassetteReplayer;
pub use session::RecordingSession;
