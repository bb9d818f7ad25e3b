//! Process spawner port for launching the external executable.

use std::io::{Read, Write};
use std::path::Path;

/// One spawned child process with all three standard streams redirected.
///
/// Each stream endpoint can be taken exactly once; dropping the stdin handle
/// closes the stream and signals end-of-input to the child.
pub trait ChildProcess {
    /// Takes the child's standard input handle, if not already taken.
    fn take_stdin(&mut self) -> Option<Box<dyn Write + Send>>;

    /// Takes the child's standard output handle, if not already taken.
    fn take_stdout(&mut self) -> Option<Box<dyn Read + Send>>;

    /// Takes the child's standard error handle, if not already taken.
    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>>;

    /// Blocks until the child exits and returns its exit code.
    ///
    /// Yields `None` when the child was terminated by a signal.
    ///
    /// # Errors
    ///
    /// Returns an error if waiting on the child fails.
    fn wait(&mut self) -> Result<Option<i32>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Spawns child processes with redirected streams.
///
/// Abstracting spawning allows tests to substitute a scripted child for the
/// real executable and to observe every byte the runner writes to it.
pub trait ProcessSpawner: Send + Sync {
    /// Spawns `program` with `args`, with stdin, stdout, and stderr piped.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be created (missing binary,
    /// permission denied). No child exists in that case.
    fn spawn(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<Box<dyn ChildProcess>, Box<dyn std::error::Error + Send + Sync>>;
}
