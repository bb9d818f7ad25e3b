//! Batch execution against the process port.
//!
//! A run is one linear sequence: spawn the executable, write the optional
//! passphrase to its stdin, close stdin, drain stdout then stderr, wait for
//! exit. There is no retry, cancellation, or timeout.

use std::io::{Read, Write};

use serde::Serialize;
use tracing::debug;

use crate::invocation::Invocation;
use crate::ports::process::ProcessSpawner;

/// Captured result of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutput {
    /// Everything the child wrote to standard output.
    pub stdout: String,
    /// Everything the child wrote to standard error.
    pub stderr: String,
    /// The child's exit code; `None` when it was terminated by a signal.
    pub exit_code: Option<i32>,
}

/// Runs one batch invocation to completion.
///
/// Any spawned child yields `Ok`: the child's exit code is surfaced in the
/// output rather than folded into the result, and stderr content is relayed
/// as text. Callers that want a stricter policy can inspect `exit_code`.
///
/// When `passphrase` is non-empty, exactly its bytes (no trailing delimiter)
/// are written to the child's stdin; stdin is always closed before either
/// output stream is drained.
///
/// # Errors
///
/// Returns an error string only when the child process cannot be spawned. No
/// stream is touched in that case.
pub fn run_batch(
    spawner: &dyn ProcessSpawner,
    invocation: &Invocation,
    passphrase: Option<&str>,
) -> Result<BatchOutput, String> {
    debug!(command_line = %invocation.command_line(), "running batch");
    let args = invocation.args();
    let mut child = spawner
        .spawn(invocation.program(), &args)
        .map_err(|e| format!("Failed to spawn {}: {e}", invocation.program().display()))?;

    // Input is fully written and closed before output is drained; a
    // passphrase stays far below pipe-buffer capacity.
    if let Some(mut stdin) = child.take_stdin() {
        if let Some(secret) = passphrase.filter(|s| !s.is_empty()) {
            // The child may exit without reading the secret.
            if let Err(e) = stdin.write_all(secret.as_bytes()) {
                debug!("stdin write ignored: {e}");
            }
        }
    }

    let stdout = drain(child.take_stdout());
    let stderr = drain(child.take_stderr());

    let exit_code = match child.wait() {
        Ok(code) => code,
        Err(e) => {
            debug!("wait failed: {e}");
            None
        }
    };
    debug!(?exit_code, "batch finished");

    Ok(BatchOutput { stdout, stderr, exit_code })
}

fn drain(stream: Option<Box<dyn Read + Send>>) -> String {
    let Some(mut stream) = stream else {
        return String::new();
    };
    let mut bytes = Vec::new();
    if let Err(e) = stream.read_to_end(&mut bytes) {
        debug!("stream read failed: {e}");
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
