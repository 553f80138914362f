//! Port traits defining external boundaries.
//!
//! The shell is the only boundary: every process the crate creates goes
//! through [`ShellExecutor`]. Implementations live in `src/adapters/`.

pub mod shell;

pub use shell::{Invocation, ShellExecutor, ShellOutput};
