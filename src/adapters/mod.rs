//! Adapters implementing the shell port.

pub mod live;
pub mod recording;
pub mod replaying;

pub use live::LiveShellExecutor;
pub use recording::RecordingShellExecutor;
pub use replaying::ReplayingShellExecutor;
