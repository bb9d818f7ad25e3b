//! Port traits defining external boundaries.
//!
//! The one boundary this crate has is process spawning: creating the external
//! executable's child process with redirected streams. Implementations live
//! in `src/adapters/`.

pub mod process;

pub use process::{ChildProcess, ProcessSpawner};
